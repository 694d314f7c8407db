//! Authentication collaborator for the floatchat widget.
//!
//! The widget itself only asks [`SessionIdentity`] whether somebody is
//! signed in. This crate supplies a demo implementation: an in-memory
//! key/value store with JSON records, a fake login backend seeded with a
//! demo user, and password-reset tokens with a fifteen minute lifetime.

pub mod api;
pub mod clock;
pub mod error;
pub mod password;
pub mod session;
pub mod storage;

pub use api::{
    FakeAuthApi, ResetToken, User, DEMO_EMAIL, DEMO_PASSWORD, RESET_TOKEN_TTL_MS,
};
pub use clock::{ManualWallClock, SystemWallClock, WallClock};
pub use error::{AuthError, StorageError};
pub use password::{reset_link, validate_new_password, MIN_PASSWORD_LEN};
pub use session::{AuthSession, SessionIdentity};
pub use storage::{KeyValueStorage, MemoryStorage};
