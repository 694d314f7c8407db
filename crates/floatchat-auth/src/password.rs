use crate::api::ResetToken;
use crate::error::AuthError;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Checks a new password and its confirmation before a reset is submitted.
pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    if password != confirmation {
        return Err(AuthError::PasswordMismatch);
    }
    Ok(())
}

/// Link handed to the user to complete a reset.
pub fn reset_link(origin: &str, token: &ResetToken) -> String {
    format!(
        "{}/reset-password?token={}",
        origin.trim_end_matches('/'),
        token
    )
}
