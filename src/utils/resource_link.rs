use serde::Serialize;
use url::Url;

/// Generated documents list resources as loose strings: a full URL, a
/// `YouTube: <title>` hint, or a bare topic. This resolves each one into
/// something a client can open directly.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ResourceLink {
    pub raw: String,
    pub label: String,
    pub url: String,
    pub kind: ResourceKind,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Direct,
    Video,
    Search,
}

const YOUTUBE_PREFIX: &str = "youtube:";
const YOUTUBE_SEARCH: &str = "https://www.youtube.com/results";
const WEB_SEARCH: &str = "https://www.google.com/search";

impl ResourceLink {
    /// `skill_name` scopes bare-topic searches so "Official documentation"
    /// searches for the skill, not for the word "documentation".
    pub fn parse(raw: &str, skill_name: &str) -> ResourceLink {
        let trimmed = raw.trim();

        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return ResourceLink {
                raw: raw.to_string(),
                label: Self::host_label(trimmed),
                url: trimmed.to_string(),
                kind: ResourceKind::Direct,
            };
        }

        if trimmed.len() >= YOUTUBE_PREFIX.len()
            && trimmed[..YOUTUBE_PREFIX.len()].eq_ignore_ascii_case(YOUTUBE_PREFIX)
        {
            let title = trimmed[YOUTUBE_PREFIX.len()..].trim();
            return ResourceLink {
                raw: raw.to_string(),
                label: title.to_string(),
                url: Self::search_url(YOUTUBE_SEARCH, "search_query", title),
                kind: ResourceKind::Video,
            };
        }

        let query = format!("{} {}", trimmed, skill_name);
        ResourceLink {
            raw: raw.to_string(),
            label: trimmed.to_string(),
            url: Self::search_url(WEB_SEARCH, "q", &query),
            kind: ResourceKind::Search,
        }
    }

    fn host_label(link: &str) -> String {
        Url::parse(link)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.trim_start_matches("www.").to_string()))
            .unwrap_or_else(|| "Documentation".to_string())
    }

    fn search_url(base: &str, param: &str, value: &str) -> String {
        match Url::parse_with_params(base, &[(param, value)]) {
            Ok(u) => u.to_string(),
            // Base URLs are compile-time constants; parsing cannot fail.
            Err(_) => base.to_string(),
        }
    }
}
