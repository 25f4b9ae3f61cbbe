//! fctask API data models
//!
//! Request payloads and response types, organized by resource.

mod envelope;
mod task;
mod user;

pub use envelope::ApiResponse;
pub(crate) use envelope::{ErrorBody, null_as_default};
pub use task::{Task, TaskFilter, TaskForm, TaskId, TaskList, TaskModification};
pub use user::{Credentials, LoginData, Profile, ProfileUpdate};
