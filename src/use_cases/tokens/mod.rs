mod secret;

pub mod find_active;
pub mod issue;
pub mod redeem;
pub mod resolve_or_create;
