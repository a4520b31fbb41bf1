//! # Domain Layer
//!
//! Core types shared by every Tollgate layer. Nothing in here performs I/O;
//! storage and cryptography live behind ports implemented elsewhere.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | The full [`User`] record |
//! | [`value_objects`] | [`AuthUser`], [`AccessRole`], [`SessionRecord`] |
//! | [`ports`] | Contracts for external stores ([`KeyValueStore`]) |
//! | [`error`] | The shared [`Error`] type |
//! | [`utils`] | Identifier generation |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod utils;
pub mod value_objects;

pub use entities::User;
pub use error::{Error, Result, TokenRejection};
pub use ports::KeyValueStore;
pub use utils::IdGenerator;
pub use value_objects::{AccessRole, AuthUser, SessionRecord};
