pub mod backend;
pub mod client;
pub mod key;
pub mod types;
