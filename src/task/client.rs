//! Task submission and polling.
//!
//! The client creates a task on the conversion service, then polls its
//! status on a fixed interval until the task reaches a terminal state or
//! the attempt budget runs out. Polls are strictly sequential; there is
//! never more than one request in flight per task. Transport failures
//! abort immediately and are never retried — only server-reported
//! non-terminal states consume the attempt budget.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::Document;

use super::types::{CreateTaskRequest, Task, TaskStatus};

/// Fixed wait between polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Attempt budget; with the default interval the hard timeout is about
/// five minutes.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 150;

const GENERIC_FAILURE: &str = "conversion failed with no error detail";

/// Polling schedule.
#[derive(Debug, Clone)]
pub struct PollOptions {
    /// Wait between consecutive polls
    pub interval: Duration,

    /// Maximum number of polls before giving up
    pub max_attempts: u32,
}

impl PollOptions {
    /// Create options with the default schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the poll interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// The conversion service's task endpoints.
///
/// Implemented by [`HttpTaskApi`] for real use; tests substitute a
/// scripted implementation so no scheduler or network is involved.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// `POST /api/tasks`
    async fn create_task(&self, request: &CreateTaskRequest) -> Result<Task>;

    /// `GET /api/tasks/{id}`
    async fn get_task(&self, id: &str) -> Result<Task>;

    /// `POST /api/tasks/refresh` — force reconversion of a URL.
    async fn refresh_task(&self, url: &str, translate: bool) -> Result<Task>;

    /// `GET /api/tasks/url/{url}` — look up an existing task by source URL.
    async fn find_by_url(&self, url: &str) -> Result<Task>;
}

/// Sleeping strategy between polls.
#[async_trait]
pub trait Delay: Send + Sync {
    /// Wait for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Real wall-clock delay.
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// reqwest-backed [`TaskApi`] implementation.
pub struct HttpTaskApi {
    client: reqwest::Client,
    base: String,
}

impl HttpTaskApi {
    /// Create an API handle against a server origin such as
    /// `http://localhost:8000`.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn parse_task(response: reqwest::Response) -> Result<Task> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<Task>().await?);
        }
        let body: ErrorBody = response.json().await.unwrap_or_default();
        let detail = body
            .error
            .or(body.detail)
            .unwrap_or_else(|| "no error detail".to_string());
        Err(Error::Http(format!("{} ({})", detail, status)))
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    detail: Option<String>,
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn create_task(&self, request: &CreateTaskRequest) -> Result<Task> {
        let response = self
            .client
            .post(self.endpoint("/api/tasks"))
            .json(request)
            .send()
            .await?;
        Self::parse_task(response).await
    }

    async fn get_task(&self, id: &str) -> Result<Task> {
        let response = self
            .client
            .get(self.endpoint(&format!("/api/tasks/{}", id)))
            .send()
            .await?;
        Self::parse_task(response).await
    }

    async fn refresh_task(&self, url: &str, translate: bool) -> Result<Task> {
        let response = self
            .client
            .post(self.endpoint("/api/tasks/refresh"))
            .json(&serde_json::json!({
                "url": url,
                "translate_to_chinese": translate,
            }))
            .send()
            .await?;
        Self::parse_task(response).await
    }

    async fn find_by_url(&self, url: &str) -> Result<Task> {
        let response = self
            .client
            .get(self.endpoint(&format!("/api/tasks/url/{}", url)))
            .send()
            .await?;
        Self::parse_task(response).await
    }
}

/// Task-polling client.
///
/// Holds a generation counter so a newer submission supersedes any poll
/// loop still in flight: the stale loop bails out with
/// [`Error::Superseded`] before its next observable effect, and the
/// abandoned server task is simply never polled again — no cancellation
/// signal is sent.
pub struct TaskClient {
    api: Box<dyn TaskApi>,
    delay: Box<dyn Delay>,
    options: PollOptions,
    generation: AtomicU64,
}

impl TaskClient {
    /// Create a client against a server origin with the default schedule.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_api(
            Box::new(HttpTaskApi::new(base_url)),
            Box::new(TokioDelay),
            PollOptions::default(),
        )
    }

    /// Create a client over explicit transport, delay, and schedule.
    pub fn with_api(
        api: Box<dyn TaskApi>,
        delay: Box<dyn Delay>,
        options: PollOptions,
    ) -> Self {
        Self {
            api,
            delay,
            options,
            generation: AtomicU64::new(0),
        }
    }

    /// The polling schedule in use.
    pub fn options(&self) -> &PollOptions {
        &self.options
    }

    /// Invalidate every poll loop currently in flight without starting a
    /// new submission.
    pub fn supersede(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Submit a URL and poll until the task resolves to a document.
    pub async fn fetch(&self, request: CreateTaskRequest) -> Result<Document> {
        self.fetch_with_progress(request, |_, _| {}).await
    }

    /// Submit a URL and poll, reporting every observed snapshot.
    ///
    /// `progress` receives each snapshot together with the 0-based poll
    /// count (0 is the creation response).
    pub async fn fetch_with_progress<F>(
        &self,
        request: CreateTaskRequest,
        mut progress: F,
    ) -> Result<Document>
    where
        F: FnMut(&Task, u32),
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let task = self.api.create_task(&request).await?;
        self.poll(task, generation, &mut progress).await
    }

    /// Force reconversion of a URL, then poll as usual.
    pub async fn refresh<F>(
        &self,
        url: &str,
        translate: bool,
        mut progress: F,
    ) -> Result<Document>
    where
        F: FnMut(&Task, u32),
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let task = self.api.refresh_task(url, translate).await?;
        self.poll(task, generation, &mut progress).await
    }

    /// Look up the task snapshot for a previously submitted URL.
    pub async fn find_by_url(&self, url: &str) -> Result<Task> {
        self.api.find_by_url(url).await
    }

    async fn poll(
        &self,
        task: Task,
        generation: u64,
        progress: &mut dyn FnMut(&Task, u32),
    ) -> Result<Document> {
        self.check_current(generation)?;
        progress(&task, 0);
        if let Some(outcome) = Self::settle(&task) {
            return outcome;
        }

        let id = task.id;
        for attempt in 1..=self.options.max_attempts {
            self.delay.sleep(self.options.interval).await;
            let snapshot = self.api.get_task(&id).await?;
            // A newer submission owns the display slot now; stop before
            // this loop makes any further observable update.
            self.check_current(generation)?;
            progress(&snapshot, attempt);
            if let Some(outcome) = Self::settle(&snapshot) {
                return outcome;
            }
        }
        Err(Error::Timeout {
            attempts: self.options.max_attempts,
        })
    }

    /// Terminal-state outcome of a snapshot, or `None` to keep polling.
    fn settle(task: &Task) -> Option<Result<Document>> {
        match task.status {
            TaskStatus::Completed => Some(match task.result.clone() {
                Some(document) => Ok(document),
                None => Err(Error::TaskFailed(
                    "task completed without a result".to_string(),
                )),
            }),
            TaskStatus::Failed => Some(Err(Error::TaskFailed(
                task.error.clone().unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            ))),
            TaskStatus::Pending | TaskStatus::Processing => None,
        }
    }

    fn check_current(&self, generation: u64) -> Result<()> {
        if self.generation.load(Ordering::SeqCst) != generation {
            return Err(Error::Superseded);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_options_builder() {
        let options = PollOptions::new()
            .with_interval(Duration::from_millis(500))
            .with_max_attempts(10);
        assert_eq!(options.interval, Duration::from_millis(500));
        assert_eq!(options.max_attempts, 10);

        let defaults = PollOptions::default();
        assert_eq!(defaults.interval, Duration::from_secs(2));
        assert_eq!(defaults.max_attempts, 150);
    }

    #[test]
    fn test_http_api_trims_trailing_slash() {
        let api = HttpTaskApi::new("http://localhost:8000/");
        assert_eq!(api.endpoint("/api/tasks"), "http://localhost:8000/api/tasks");
    }
}
