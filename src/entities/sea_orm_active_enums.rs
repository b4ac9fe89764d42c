use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TokenKind {
    #[sea_orm(string_value = "EMAIL_VERIFICATION")]
    #[serde(rename = "EMAIL_VERIFICATION")]
    EmailVerification,
    #[sea_orm(string_value = "PASSWORD_RESET")]
    #[serde(rename = "PASSWORD_RESET")]
    PasswordReset,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ContentKind {
    #[sea_orm(string_value = "READING")]
    #[serde(rename = "READING")]
    Reading,
    #[sea_orm(string_value = "LISTENING")]
    #[serde(rename = "LISTENING")]
    Listening,
    #[sea_orm(string_value = "WRITING")]
    #[serde(rename = "WRITING")]
    Writing,
    #[sea_orm(string_value = "SPEAKING")]
    #[serde(rename = "SPEAKING")]
    Speaking,
}
