pub mod action_token;
