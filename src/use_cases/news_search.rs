use chrono::SecondsFormat;
use std::borrow::Cow;
use url::Url;

use crate::domain::errors::ActionError;
use crate::domain::ports::Clock;
use crate::interface_adapters::protocol::{Article, NewsSearchRequest, NewsSearchResponse};
use crate::use_cases::present_text;

pub const DEFAULT_LANGUAGE: &str = "pt";
const SEARCH_BASE_URL: &str = "https://news.google.com/search";

// News search use case; returns one synthesized article stamped with the current time.
pub struct NewsSearchUseCase<C> {
    pub clock: C,
}

impl<C> NewsSearchUseCase<C>
where
    C: Clock,
{
    pub fn execute(&self, payload: NewsSearchRequest) -> Result<NewsSearchResponse, ActionError> {
        let query = present_text(&payload.query).ok_or(ActionError::MissingQuery)?;
        let language = present_text(&payload.language).unwrap_or(Cow::Borrowed(DEFAULT_LANGUAGE));

        tracing::debug!(
            %query,
            %language,
            from = ?payload.from,
            to = ?payload.to,
            "mock news search"
        );

        let article = Article {
            title: format!("Public mention: {query}"),
            source: "Portal X".to_string(),
            url: search_url(&query, &language),
            published_at: self.clock.now().to_rfc3339_opts(SecondsFormat::Secs, true),
            description: format!("Summary of a news item related to \"{query}\"."),
            language: language.to_string(),
        };

        Ok(NewsSearchResponse {
            articles: vec![article],
        })
    }
}

fn search_url(query: &str, language: &str) -> String {
    match Url::parse_with_params(SEARCH_BASE_URL, &[("q", query), ("hl", language)]) {
        Ok(url) => url.into(),
        Err(_) => SEARCH_BASE_URL.to_string(),
    }
}
