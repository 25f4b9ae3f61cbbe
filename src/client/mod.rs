//! fctask service API client

pub mod api;
pub mod fctask;
pub mod form;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{TaskApi, UserApi};
pub use fctask::FcTaskClient;
#[cfg(test)]
pub use mock::MockFcTaskClient;
