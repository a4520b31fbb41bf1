//! Domain entities with identity and lifecycle

mod user;

pub use user::User;
