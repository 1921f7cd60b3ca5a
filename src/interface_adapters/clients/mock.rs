use crate::domain::instagram::{InstagramError, InstagramSource, Post, Profile, ProfileFeed};
use crate::domain::ports::Clock;
use async_trait::async_trait;
use chrono::{Duration, SecondsFormat};

// The mock never returns more posts than this, whatever the caller asks for.
pub const MOCK_MEDIA_CEILING: u32 = 10;

// Offline stand-in for the Graph API; synthesizes one post per day going backwards.
pub struct MockInstagramSource<C> {
    clock: C,
}

impl<C: Clock> MockInstagramSource<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl<C: Clock> InstagramSource for MockInstagramSource<C> {
    async fn fetch_profile(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<ProfileFeed, InstagramError> {
        let now = self.clock.now();
        let count = limit.min(MOCK_MEDIA_CEILING);

        let posts = (0..count)
            .map(|index| {
                let n = index + 1;
                Post {
                    id: format!("mock-{username}-{n}"),
                    timestamp: (now - Duration::days(i64::from(index)))
                        .to_rfc3339_opts(SecondsFormat::Secs, true),
                    permalink: format!("https://www.instagram.com/p/mock{n}/"),
                    caption: format!("Mock post {n} from @{username}"),
                    like_count: Some(u64::from(100 + 7 * index)),
                    comments_count: Some(u64::from(3 + index)),
                }
            })
            .collect();

        Ok(ProfileFeed {
            profile: Profile {
                username: username.to_string(),
                fullname: format!("{username} (mock)"),
                profile_picture_url: format!("https://picsum.photos/seed/{username}/320"),
                followers_count: Some(12_345),
            },
            posts,
        })
    }
}
