use chrono::Duration;

use crate::sea_orm_active_enums::TokenKind;

pub trait TokenKindTrait {
    /// How long a freshly issued token of this kind stays redeemable.
    /// Verification links are low-risk and should survive a busy inbox;
    /// reset links are higher-risk and expire quickly.
    fn time_to_live(&self) -> Duration;
}

impl TokenKindTrait for TokenKind {
    fn time_to_live(&self) -> Duration {
        match self {
            TokenKind::EmailVerification => Duration::hours(24),
            TokenKind::PasswordReset => Duration::minutes(15),
        }
    }
}
