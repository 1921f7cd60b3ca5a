use crate::domain::instagram::{InstagramError, InstagramSource, Post, Profile, ProfileFeed};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use url::Url;

// Hard ceiling on the media page requested from the Graph API.
pub const GRAPH_MEDIA_CEILING: u32 = 50;

const MEDIA_SUBFIELDS: &str = "id,caption,permalink,timestamp,like_count,comments_count";

// Credentials of the business account the discovery lookups run as.
#[derive(Clone)]
pub struct GraphCredentials {
    pub ig_user_id: String,
    pub access_token: String,
}

impl fmt::Debug for GraphCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphCredentials")
            .field("ig_user_id", &self.ig_user_id)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

// Thin reqwest wrapper around the Instagram Graph API business discovery call.
#[derive(Clone)]
pub struct GraphInstagramClient {
    http: Client,
    base_url: String,
    api_version: String,
    // None when IG_USER_ID / IG_ACCESS_TOKEN are unset; reported per request.
    credentials: Option<GraphCredentials>,
}

// Envelope returned by GET /{ig-user-id}?fields=business_discovery...
#[derive(Debug, Deserialize)]
struct DiscoveryEnvelope {
    business_discovery: Option<BusinessDiscovery>,
}

#[derive(Debug, Deserialize)]
struct BusinessDiscovery {
    username: Option<String>,
    name: Option<String>,
    profile_picture_url: Option<String>,
    followers_count: Option<u64>,
    media: Option<MediaPage>,
}

#[derive(Debug, Deserialize)]
struct MediaPage {
    #[serde(default)]
    data: Vec<MediaItem>,
}

#[derive(Debug, Deserialize)]
struct MediaItem {
    id: Option<String>,
    timestamp: Option<String>,
    permalink: Option<String>,
    caption: Option<String>,
    like_count: Option<u64>,
    comments_count: Option<u64>,
}

impl GraphInstagramClient {
    pub fn new(
        base_url: impl Into<String>,
        api_version: impl Into<String>,
        credentials: Option<GraphCredentials>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.into(),
            api_version: api_version.into(),
            credentials,
        })
    }

    fn discovery_url(
        &self,
        credentials: &GraphCredentials,
        username: &str,
        limit: u32,
    ) -> Result<Url, InstagramError> {
        let endpoint = format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            credentials.ig_user_id
        );
        let fields = discovery_fields(username, limit);

        Url::parse_with_params(
            &endpoint,
            &[
                ("fields", fields.as_str()),
                ("access_token", credentials.access_token.as_str()),
            ],
        )
        .map_err(|err| InstagramError::Upstream {
            status: None,
            detail: Value::String(format!("invalid graph api url: {err}")),
        })
    }
}

// Field selection for one business discovery lookup, media count capped at the ceiling.
pub fn discovery_fields(username: &str, limit: u32) -> String {
    let media_limit = limit.min(GRAPH_MEDIA_CEILING);
    let fields = [
        "name".to_string(),
        "username".to_string(),
        "profile_picture_url".to_string(),
        "followers_count".to_string(),
        format!("media.limit({media_limit}){{{MEDIA_SUBFIELDS}}}"),
    ]
    .join(",");

    format!("business_discovery.username({username}){{{fields}}}")
}

fn map_discovery(discovery: BusinessDiscovery, requested_username: &str) -> ProfileFeed {
    let posts = discovery
        .media
        .map(|page| page.data)
        .unwrap_or_default()
        .into_iter()
        .map(|item| Post {
            id: item.id.unwrap_or_default(),
            timestamp: item.timestamp.unwrap_or_default(),
            permalink: item.permalink.unwrap_or_default(),
            caption: item.caption.unwrap_or_default(),
            like_count: item.like_count,
            comments_count: item.comments_count,
        })
        .collect();

    ProfileFeed {
        profile: Profile {
            username: discovery
                .username
                .unwrap_or_else(|| requested_username.to_string()),
            fullname: discovery.name.unwrap_or_default(),
            profile_picture_url: discovery.profile_picture_url.unwrap_or_default(),
            followers_count: discovery.followers_count,
        },
        posts,
    }
}

// Prefer the upstream JSON error object; fall back to raw text, then the status line.
fn upstream_detail(body: &str, status: reqwest::StatusCode) -> Value {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        return json;
    }
    if !body.trim().is_empty() {
        return Value::String(body.to_string());
    }
    Value::String(status.to_string())
}

#[async_trait]
impl InstagramSource for GraphInstagramClient {
    async fn fetch_profile(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<ProfileFeed, InstagramError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(InstagramError::CredentialsMissing)?;
        let url = self.discovery_url(credentials, username, limit)?;
        tracing::debug!(
            %username,
            media_limit = limit.min(GRAPH_MEDIA_CEILING),
            "graph business discovery request"
        );

        // Errors are stripped of their URL so the access token never reaches a response.
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| InstagramError::Upstream {
                status: None,
                detail: Value::String(err.without_url().to_string()),
            })?;
        let status = res.status();

        // Keep upstream status/body so the handler can forward them.
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(InstagramError::Upstream {
                status: Some(status.as_u16()),
                detail: upstream_detail(&body, status),
            });
        }

        let envelope = res
            .json::<DiscoveryEnvelope>()
            .await
            .map_err(|err| InstagramError::Upstream {
                status: None,
                detail: Value::String(err.without_url().to_string()),
            })?;
        let discovery = envelope
            .business_discovery
            .ok_or(InstagramError::ProfileNotAccessible)?;

        Ok(map_discovery(discovery, username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(credentials: Option<GraphCredentials>) -> GraphInstagramClient {
        GraphInstagramClient::new("http://127.0.0.1:9", "v19.0", credentials, None)
            .expect("expected client to build")
    }

    fn credentials() -> GraphCredentials {
        GraphCredentials {
            ig_user_id: "17841400000000000".to_string(),
            access_token: "secret-token".to_string(),
        }
    }

    #[test]
    fn when_limit_exceeds_ceiling_then_field_selection_is_capped_at_50() {
        let fields = discovery_fields("welton", 200);

        assert!(fields.contains("media.limit(50){"));
        assert!(!fields.contains("media.limit(200)"));
    }

    #[test]
    fn when_limit_is_below_ceiling_then_field_selection_keeps_it() {
        let fields = discovery_fields("welton", 7);

        assert_eq!(
            fields,
            "business_discovery.username(welton){name,username,profile_picture_url,\
             followers_count,media.limit(7){id,caption,permalink,timestamp,like_count,\
             comments_count}}"
        );
    }

    #[test]
    fn when_building_url_then_version_user_and_query_are_encoded() {
        let url = client(Some(credentials()))
            .discovery_url(&credentials(), "welton", 10)
            .expect("expected url to build");

        assert_eq!(url.path(), "/v19.0/17841400000000000");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs[0].0, "fields");
        assert_eq!(pairs[0].1, discovery_fields("welton", 10));
        assert_eq!(pairs[1], ("access_token".to_string(), "secret-token".to_string()));
    }

    #[test]
    fn when_media_fields_are_missing_then_defaults_are_substituted() {
        let discovery: BusinessDiscovery = serde_json::from_value(json!({
            "username": "welton",
            "media": {
                "data": [
                    {"id": "1", "timestamp": "2025-10-20T09:00:00+0000", "permalink": "https://i/p/1"},
                    {"id": "2", "caption": "second", "like_count": 4, "comments_count": 1}
                ]
            }
        }))
        .expect("expected discovery to deserialize");

        let feed = map_discovery(discovery, "welton");

        assert_eq!(feed.profile.fullname, "");
        assert_eq!(feed.profile.profile_picture_url, "");
        assert_eq!(feed.profile.followers_count, None);
        assert_eq!(feed.posts.len(), 2);
        assert_eq!(feed.posts[0].id, "1");
        assert_eq!(feed.posts[0].caption, "");
        assert_eq!(feed.posts[0].like_count, None);
        assert_eq!(feed.posts[0].comments_count, None);
        assert_eq!(feed.posts[1].caption, "second");
        assert_eq!(feed.posts[1].like_count, Some(4));
    }

    #[test]
    fn when_media_is_absent_then_posts_are_empty() {
        let discovery: BusinessDiscovery = serde_json::from_value(json!({
            "name": "Welton",
            "followers_count": 10
        }))
        .expect("expected discovery to deserialize");

        let feed = map_discovery(discovery, "welton");

        assert_eq!(feed.profile.username, "welton");
        assert_eq!(feed.profile.fullname, "Welton");
        assert_eq!(feed.profile.followers_count, Some(10));
        assert!(feed.posts.is_empty());
    }

    #[test]
    fn when_error_body_is_not_json_then_detail_falls_back_to_text_or_status() {
        let forbidden = reqwest::StatusCode::FORBIDDEN;

        assert_eq!(upstream_detail("{\"a\":1}", forbidden), json!({"a": 1}));
        assert_eq!(upstream_detail("nope", forbidden), json!("nope"));
        assert_eq!(upstream_detail("", forbidden), json!("403 Forbidden"));
    }

    #[tokio::test]
    async fn when_credentials_are_missing_then_returns_credentials_missing() {
        let result = client(None).fetch_profile("welton", 10).await;

        assert!(matches!(result, Err(InstagramError::CredentialsMissing)));
    }

    #[test]
    fn when_credentials_are_debug_printed_then_token_is_redacted() {
        let printed = format!("{:?}", credentials());

        assert!(!printed.contains("secret-token"));
    }
}
