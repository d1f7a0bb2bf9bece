//! Operation table: (resource, operation) → endpoint descriptor
//!
//! Each resource module exposes a static `OPERATIONS` slice. Dispatch is a
//! table lookup followed by one generic request builder; no per-operation
//! code exists outside these tables.

mod instagram;
mod tiktok;
mod twitter;
mod youtube;

use clap::ValueEnum;
use std::fmt;

use crate::error::{Result, TikHubError};

use super::client::HttpMethod;

/// Social media platform served by TikHub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Resource {
    /// TikTok (app v3 endpoints)
    Tiktok,
    /// Instagram (web app endpoints)
    Instagram,
    /// YouTube (web endpoints)
    Youtube,
    /// Twitter / X (web endpoints)
    Twitter,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Tiktok,
        Resource::Instagram,
        Resource::Youtube,
        Resource::Twitter,
    ];

    /// Operations available for this resource
    pub fn operations(self) -> &'static [OperationSpec] {
        match self {
            Resource::Tiktok => tiktok::OPERATIONS,
            Resource::Instagram => instagram::OPERATIONS,
            Resource::Youtube => youtube::OPERATIONS,
            Resource::Twitter => twitter::OPERATIONS,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Tiktok => write!(f, "tiktok"),
            Resource::Instagram => write!(f, "instagram"),
            Resource::Youtube => write!(f, "youtube"),
            Resource::Twitter => write!(f, "twitter"),
        }
    }
}

/// Where a field is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Query,
    Body,
}

/// How a field is read from item parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Must be present and non-empty
    Required,
    /// Omitted when absent or empty
    Optional,
    /// Integer, falling back to a default
    Number { default: i64 },
    /// Comma-separated string or JSON array, sent as a JSON array
    List,
    /// The field names a selector; exactly one of `choices` is then read
    Identifier {
        default: &'static str,
        choices: &'static [&'static str],
    },
}

/// One parameter of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rule: FieldRule,
    pub location: Location,
}

impl FieldSpec {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            rule: FieldRule::Required,
            location: Location::Query,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            rule: FieldRule::Optional,
            location: Location::Query,
        }
    }

    pub const fn number(name: &'static str, default: i64) -> Self {
        Self {
            name,
            rule: FieldRule::Number { default },
            location: Location::Query,
        }
    }

    pub const fn body_list(name: &'static str) -> Self {
        Self {
            name,
            rule: FieldRule::List,
            location: Location::Body,
        }
    }

    pub const fn identifier(
        selector: &'static str,
        default: &'static str,
        choices: &'static [&'static str],
    ) -> Self {
        Self {
            name: selector,
            rule: FieldRule::Identifier { default, choices },
            location: Location::Query,
        }
    }

    /// Short usage string, e.g. `count=20` or `[end_cursor]`
    pub fn describe(&self) -> String {
        let base = match self.rule {
            FieldRule::Required => self.name.to_string(),
            FieldRule::Optional => format!("[{}]", self.name),
            FieldRule::Number { default } => format!("{}={}", self.name, default),
            FieldRule::List => format!("{} (list)", self.name),
            FieldRule::Identifier { default, choices } => format!(
                "{}={} ({})",
                self.name,
                default,
                choices.join("|")
            ),
        };
        match self.location {
            Location::Query => base,
            Location::Body => format!("body:{}", base),
        }
    }
}

/// Endpoint descriptor for one (resource, operation) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSpec {
    pub resource: Resource,
    pub name: &'static str,
    pub description: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub fields: &'static [FieldSpec],
    /// Query parameter that carries the pagination cursor, if any
    pub cursor_field: Option<&'static str>,
}

/// Iterate over every operation of every resource
pub fn all_operations() -> impl Iterator<Item = &'static OperationSpec> {
    Resource::ALL
        .into_iter()
        .flat_map(|resource| resource.operations().iter())
}

/// Find an operation by name
///
/// Names compare case-insensitively with `-` and `_` ignored, so
/// `get-video-by-share-url` and `getVideoByShareUrl` are the same operation.
pub fn find_operation(resource: Resource, name: &str) -> Result<&'static OperationSpec> {
    let wanted = normalize_name(name);
    resource
        .operations()
        .iter()
        .find(|op| normalize_name(op.name) == wanted)
        .ok_or_else(|| TikHubError::UnknownOperation {
            resource: resource.to_string(),
            operation: name.to_string(),
        })
}

/// Lowercase and drop everything that is not alphanumeric
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn endpoint(resource: Resource, name: &str) -> (HttpMethod, &'static str) {
        let op = find_operation(resource, name).unwrap();
        (op.method, op.path)
    }

    #[test]
    fn test_operation_counts() {
        assert_eq!(Resource::Tiktok.operations().len(), 6);
        assert_eq!(Resource::Instagram.operations().len(), 8);
        assert_eq!(Resource::Youtube.operations().len(), 6);
        assert_eq!(Resource::Twitter.operations().len(), 8);
        assert_eq!(all_operations().count(), 28);
    }

    #[test]
    fn test_operations_belong_to_their_resource() {
        for resource in Resource::ALL {
            for op in resource.operations() {
                assert_eq!(op.resource, resource, "{} {}", resource, op.name);
            }
        }
    }

    #[test]
    fn test_operation_names_unique_per_resource() {
        for resource in Resource::ALL {
            let names: HashSet<String> = resource
                .operations()
                .iter()
                .map(|op| normalize_name(op.name))
                .collect();
            assert_eq!(names.len(), resource.operations().len());
        }
    }

    #[test]
    fn test_cursor_field_is_a_declared_field() {
        for op in all_operations() {
            if let Some(cursor) = op.cursor_field {
                assert!(
                    op.fields.iter().any(|f| f.name == cursor),
                    "{} {} pages on undeclared '{}'",
                    op.resource,
                    op.name,
                    cursor
                );
            }
        }
    }

    #[test]
    fn test_tiktok_endpoints() {
        use HttpMethod::*;
        let t = Resource::Tiktok;
        assert_eq!(endpoint(t, "get-video"), (Get, "/api/v1/tiktok/app/v3/fetch_one_video"));
        assert_eq!(
            endpoint(t, "get-video-by-share-url"),
            (Get, "/api/v1/tiktok/app/v3/fetch_one_video_by_share_url")
        );
        assert_eq!(
            endpoint(t, "get-multiple-videos"),
            (Post, "/api/v1/tiktok/app/v3/fetch_multi_video")
        );
        assert_eq!(
            endpoint(t, "get-user-profile"),
            (Get, "/api/v1/tiktok/app/v3/handler_user_profile")
        );
        assert_eq!(
            endpoint(t, "get-user-posts"),
            (Get, "/api/v1/tiktok/app/v3/fetch_user_post_videos")
        );
        assert_eq!(
            endpoint(t, "get-video-comments"),
            (Get, "/api/v1/tiktok/app/v3/fetch_video_comments")
        );
    }

    #[test]
    fn test_instagram_endpoints() {
        let i = Resource::Instagram;
        let base = "/api/v1/instagram/web_app";
        let expected = [
            ("get-user-by-username", "fetch_user_info_by_username"),
            ("get-user-by-id", "fetch_user_info_by_user_id"),
            ("get-post-by-url", "fetch_post_info_by_url"),
            ("get-post-media", "fetch_post_media_by_url"),
            ("get-user-highlights", "fetch_user_highlights_by_username"),
            ("get-post-comments", "fetch_post_comments_by_post_id"),
            ("get-comment-replies", "fetch_comment_replies_by_comment_id"),
            ("get-user-posts", "fetch_user_posts_by_user_id"),
        ];
        for (name, suffix) in expected {
            let (method, path) = endpoint(i, name);
            assert_eq!(method, HttpMethod::Get);
            assert_eq!(path, format!("{}/{}", base, suffix));
        }
    }

    #[test]
    fn test_youtube_endpoints() {
        let y = Resource::Youtube;
        let base = "/api/v1/youtube/web";
        let expected = [
            ("get-video-info", "get_video_info"),
            ("get-video-comments", "get_video_comments"),
            ("get-channel-id", "get_channel_id_by_username"),
            ("get-channel-info", "get_channel_info"),
            ("get-channel-videos", "get_channel_videos"),
            ("get-channel-shorts", "get_channel_shorts"),
        ];
        for (name, suffix) in expected {
            let (method, path) = endpoint(y, name);
            assert_eq!(method, HttpMethod::Get);
            assert_eq!(path, format!("{}/{}", base, suffix));
        }
    }

    #[test]
    fn test_twitter_endpoints() {
        let t = Resource::Twitter;
        let base = "/api/v1/twitter/web";
        let expected = [
            ("get-tweet-detail", "fetch_tweet_detail"),
            ("get-user-profile", "get_user_profile"),
            ("get-user-tweets", "fetch_user_tweets"),
            ("get-tweet-comments", "fetch_post_comments"),
            ("get-latest-comments", "fetch_tweet_comments"),
            ("get-user-replies", "fetch_user_replies"),
            ("get-user-media", "fetch_user_media"),
            ("get-retweet-users", "fetch_retweet_users"),
        ];
        for (name, suffix) in expected {
            let (method, path) = endpoint(t, name);
            assert_eq!(method, HttpMethod::Get);
            assert_eq!(path, format!("{}/{}", base, suffix));
        }
    }

    #[test]
    fn test_find_operation_accepts_camel_case() {
        let op = find_operation(Resource::Tiktok, "getVideoByShareUrl").unwrap();
        assert_eq!(op.name, "get-video-by-share-url");
        let op = find_operation(Resource::Twitter, "GET_RETWEET_USERS").unwrap();
        assert_eq!(op.name, "get-retweet-users");
    }

    #[test]
    fn test_find_operation_unknown() {
        let err = find_operation(Resource::Youtube, "get-video").unwrap_err();
        assert!(matches!(err, TikHubError::UnknownOperation { .. }));
    }

    #[test]
    fn test_field_describe() {
        assert_eq!(FieldSpec::required("aweme_id").describe(), "aweme_id");
        assert_eq!(FieldSpec::optional("cursor").describe(), "[cursor]");
        assert_eq!(FieldSpec::number("count", 20).describe(), "count=20");
        assert_eq!(
            FieldSpec::body_list("aweme_ids").describe(),
            "body:aweme_ids (list)"
        );
        assert_eq!(
            FieldSpec::identifier("identifier_type", "unique_id", &["sec_user_id", "unique_id"])
                .describe(),
            "identifier_type=unique_id (sec_user_id|unique_id)"
        );
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("get-user-posts"), "getuserposts");
        assert_eq!(normalize_name("getUserPosts"), "getuserposts");
        assert_eq!(normalize_name("sec_user_id"), "secuserid");
    }

    #[test]
    fn test_resource_display() {
        assert_eq!(Resource::Tiktok.to_string(), "tiktok");
        assert_eq!(Resource::Instagram.to_string(), "instagram");
        assert_eq!(Resource::Youtube.to_string(), "youtube");
        assert_eq!(Resource::Twitter.to_string(), "twitter");
    }
}
