//! TikTok operations (app v3 API)

use super::{FieldSpec, OperationSpec, Resource};
use crate::tikhub::client::HttpMethod;

const USER_PROFILE_IDS: &[&str] = &["user_id", "sec_user_id", "unique_id"];
const USER_POSTS_IDS: &[&str] = &["sec_user_id", "unique_id"];

pub(super) const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        resource: Resource::Tiktok,
        name: "get-video",
        description: "Retrieve a single video by video ID",
        method: HttpMethod::Get,
        path: "/api/v1/tiktok/app/v3/fetch_one_video",
        fields: &[FieldSpec::required("aweme_id")],
        cursor_field: None,
    },
    OperationSpec {
        resource: Resource::Tiktok,
        name: "get-video-by-share-url",
        description: "Retrieve a video using its share URL",
        method: HttpMethod::Get,
        path: "/api/v1/tiktok/app/v3/fetch_one_video_by_share_url",
        fields: &[FieldSpec::required("share_url")],
        cursor_field: None,
    },
    OperationSpec {
        resource: Resource::Tiktok,
        name: "get-multiple-videos",
        description: "Retrieve multiple videos in a single request",
        method: HttpMethod::Post,
        path: "/api/v1/tiktok/app/v3/fetch_multi_video",
        fields: &[FieldSpec::body_list("aweme_ids")],
        cursor_field: None,
    },
    OperationSpec {
        resource: Resource::Tiktok,
        name: "get-user-profile",
        description: "Retrieve a user profile",
        method: HttpMethod::Get,
        path: "/api/v1/tiktok/app/v3/handler_user_profile",
        fields: &[FieldSpec::identifier(
            "identifier_type",
            "unique_id",
            USER_PROFILE_IDS,
        )],
        cursor_field: None,
    },
    OperationSpec {
        resource: Resource::Tiktok,
        name: "get-user-posts",
        description: "Retrieve video posts from a user",
        method: HttpMethod::Get,
        path: "/api/v1/tiktok/app/v3/fetch_user_post_videos",
        fields: &[
            FieldSpec::identifier("identifier_type", "unique_id", USER_POSTS_IDS),
            FieldSpec::number("max_cursor", 0),
            FieldSpec::number("count", 20),
        ],
        cursor_field: Some("max_cursor"),
    },
    OperationSpec {
        resource: Resource::Tiktok,
        name: "get-video-comments",
        description: "Retrieve comments from a video",
        method: HttpMethod::Get,
        path: "/api/v1/tiktok/app/v3/fetch_video_comments",
        fields: &[
            FieldSpec::required("aweme_id"),
            FieldSpec::number("cursor", 0),
            FieldSpec::number("count", 20),
        ],
        cursor_field: Some("cursor"),
    },
];
