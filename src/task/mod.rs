//! Task-polling client for the article conversion service.

mod types;

pub use types::{CreateTaskRequest, Task, TaskStatus};

#[cfg(feature = "client")]
mod client;

#[cfg(feature = "client")]
pub use client::{
    Delay, HttpTaskApi, PollOptions, TaskApi, TaskClient, TokioDelay, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_POLL_INTERVAL,
};
