pub mod job;
pub mod user;

pub use job::{Job, JobInput, JobQuery};
pub use user::{User, UserRole};
