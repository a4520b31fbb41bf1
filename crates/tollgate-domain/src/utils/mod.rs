//! Small helpers with no infrastructure dependencies

mod id;

pub use id::IdGenerator;
