use std::fmt;

/// A stored record could not be encoded or decoded.
#[derive(Debug)]
pub struct StorageError {
    key: String,
    source: serde_json::Error,
}

impl StorageError {
    pub(crate) fn new(key: &str, source: serde_json::Error) -> Self {
        Self {
            key: key.to_owned(),
            source,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stored record `{}` is unreadable: {}", self.key, self.source)
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug)]
pub enum AuthError {
    InvalidCredentials,
    EmailNotFound,
    InvalidToken,
    TokenExpired,
    UserNotFound,
    PasswordTooShort { min: usize },
    PasswordMismatch,
    Storage(StorageError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "invalid credentials"),
            AuthError::EmailNotFound => write!(f, "email not found"),
            AuthError::InvalidToken => write!(f, "invalid reset token"),
            AuthError::TokenExpired => write!(f, "reset token expired"),
            AuthError::UserNotFound => write!(f, "user not found"),
            AuthError::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters long")
            }
            AuthError::PasswordMismatch => write!(f, "passwords do not match"),
            AuthError::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StorageError> for AuthError {
    fn from(err: StorageError) -> Self {
        AuthError::Storage(err)
    }
}
