mod chat;
mod status;
