//! Domain Value Objects
//!
//! Immutable values compared by their attributes.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`AccessRole`] | Closed set of access levels |
//! | [`AuthUser`] | Identity snapshot attached to authenticated requests |
//! | [`SessionRecord`] | Envelope stored in the session backend |

mod auth_user;
mod role;
mod session;

pub use auth_user::AuthUser;
pub use role::AccessRole;
pub use session::SessionRecord;
