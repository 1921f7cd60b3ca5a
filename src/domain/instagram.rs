use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

// Serializing straight from the domain keeps the handler free of copy-only DTOs.
// Public profile fields of a business discovery lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub username: String,
    pub fullname: String,
    pub profile_picture_url: String,
    pub followers_count: Option<u64>,
}

// One media item, flattened out of the nested upstream page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: String,
    // ISO-8601 timestamp as reported by the source.
    pub timestamp: String,
    pub permalink: String,
    pub caption: String,
    pub like_count: Option<u64>,
    pub comments_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileFeed {
    pub profile: Profile,
    pub posts: Vec<Post>,
}

#[derive(Debug)]
pub enum InstagramError {
    // Live mode without IG_USER_ID / IG_ACCESS_TOKEN.
    CredentialsMissing,
    // Upstream answered but returned no business_discovery object.
    ProfileNotAccessible,
    // Upstream call failed; `status` is None for transport or decode failures.
    Upstream { status: Option<u16>, detail: Value },
}

impl fmt::Display for InstagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstagramError::CredentialsMissing => write!(f, "instagram credentials are not configured"),
            InstagramError::ProfileNotAccessible => {
                write!(f, "profile is not accessible or has no media")
            }
            InstagramError::Upstream {
                status: Some(status),
                detail,
            } => write!(f, "graph api error {status}: {detail}"),
            InstagramError::Upstream {
                status: None,
                detail,
            } => write!(f, "graph api error: {detail}"),
        }
    }
}

impl std::error::Error for InstagramError {}

// The fetch use case depends on this trait; live and mock sources both implement it.
#[async_trait]
pub trait InstagramSource: Send + Sync {
    // `limit` is the caller's requested media count; each source applies its own ceiling.
    async fn fetch_profile(&self, username: &str, limit: u32)
    -> Result<ProfileFeed, InstagramError>;
}

// Lets handlers hand the shared `Arc<dyn InstagramSource>` from app state to a use case.
#[async_trait]
impl<T: InstagramSource + ?Sized> InstagramSource for std::sync::Arc<T> {
    async fn fetch_profile(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<ProfileFeed, InstagramError> {
        (**self).fetch_profile(username, limit).await
    }
}
