//! # crm-auth
//!
//! Demo session login. A logged-in user is a JSON record stored under one key
//! of a key/value session storage; presence of the key means authenticated.

pub mod login;
pub mod storage;

pub use login::{AuthError, Authenticator, DemoAccount, SessionUser, DEMO_ACCOUNTS};
pub use storage::{MemoryStorage, SessionStorage, StorageError};
