//! API trait definitions split by resource
//!
//! - [`UserApi`] - Account and profile operations
//! - [`TaskApi`] - Scheduled task operations

mod task;
mod user;

pub use task::TaskApi;
pub use user::UserApi;
