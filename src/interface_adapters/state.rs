use crate::domain::instagram::InstagramSource;
use crate::domain::ports::Clock;
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // Shared secret for the bearer gate; None rejects every protected request.
    pub api_token: Option<Arc<str>>,
    // Live Graph client or offline mock, chosen at startup.
    pub instagram: Arc<dyn InstagramSource>,
    pub clock: Arc<dyn Clock>,
}

// System clock adapter used by the mock sources.
#[derive(Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
