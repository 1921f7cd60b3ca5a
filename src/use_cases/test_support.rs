use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::instagram::{InstagramError, InstagramSource, Post, Profile, ProfileFeed};
use crate::domain::ports::Clock;

// Shared fixed time source for deterministic use-case tests.
#[derive(Clone, Copy)]
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl FixedClock {
    pub(crate) fn at(rfc3339: &str) -> Self {
        let time = DateTime::parse_from_rfc3339(rfc3339)
            .expect("fixed clock needs an RFC 3339 timestamp")
            .with_timezone(&Utc);
        Self(time)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// What the recording source answers with.
#[derive(Clone)]
pub(crate) enum StubOutcome {
    Feed(ProfileFeed),
    CredentialsMissing,
    NotAccessible,
    Upstream(u16, Value),
}

// Instagram source double that records every lookup it receives.
#[derive(Clone)]
pub(crate) struct RecordingSource {
    calls: Arc<Mutex<Vec<(String, u32)>>>,
    outcome: StubOutcome,
}

impl RecordingSource {
    pub(crate) fn new(outcome: StubOutcome) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            outcome,
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl InstagramSource for RecordingSource {
    async fn fetch_profile(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<ProfileFeed, InstagramError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push((username.to_string(), limit));

        match &self.outcome {
            StubOutcome::Feed(feed) => Ok(feed.clone()),
            StubOutcome::CredentialsMissing => Err(InstagramError::CredentialsMissing),
            StubOutcome::NotAccessible => Err(InstagramError::ProfileNotAccessible),
            StubOutcome::Upstream(status, detail) => Err(InstagramError::Upstream {
                status: Some(*status),
                detail: detail.clone(),
            }),
        }
    }
}

pub(crate) fn sample_feed(username: &str) -> ProfileFeed {
    ProfileFeed {
        profile: Profile {
            username: username.to_string(),
            fullname: "Welton Comms".to_string(),
            profile_picture_url: "https://cdn.example.com/p.jpg".to_string(),
            followers_count: Some(1200),
        },
        posts: vec![Post {
            id: "1789".to_string(),
            timestamp: "2025-10-20T09:00:00+0000".to_string(),
            permalink: "https://www.instagram.com/p/abc/".to_string(),
            caption: "launch".to_string(),
            like_count: Some(10),
            comments_count: None,
        }],
    }
}
