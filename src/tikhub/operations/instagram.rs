//! Instagram operations (web app API)

use super::{FieldSpec, OperationSpec, Resource};
use crate::tikhub::client::HttpMethod;

pub(super) const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        resource: Resource::Instagram,
        name: "get-user-by-username",
        description: "Retrieve a user by username",
        method: HttpMethod::Get,
        path: "/api/v1/instagram/web_app/fetch_user_info_by_username",
        fields: &[FieldSpec::required("username")],
        cursor_field: None,
    },
    OperationSpec {
        resource: Resource::Instagram,
        name: "get-user-by-id",
        description: "Retrieve a user by user ID",
        method: HttpMethod::Get,
        path: "/api/v1/instagram/web_app/fetch_user_info_by_user_id",
        fields: &[FieldSpec::required("user_id")],
        cursor_field: None,
    },
    OperationSpec {
        resource: Resource::Instagram,
        name: "get-post-by-url",
        description: "Retrieve a post using its URL",
        method: HttpMethod::Get,
        path: "/api/v1/instagram/web_app/fetch_post_info_by_url",
        fields: &[FieldSpec::required("url")],
        cursor_field: None,
    },
    OperationSpec {
        resource: Resource::Instagram,
        name: "get-post-media",
        description: "Retrieve media files from a post",
        method: HttpMethod::Get,
        path: "/api/v1/instagram/web_app/fetch_post_media_by_url",
        fields: &[FieldSpec::required("url")],
        cursor_field: None,
    },
    OperationSpec {
        resource: Resource::Instagram,
        name: "get-user-highlights",
        description: "Retrieve story highlights from a user",
        method: HttpMethod::Get,
        path: "/api/v1/instagram/web_app/fetch_user_highlights_by_username",
        fields: &[FieldSpec::required("username")],
        cursor_field: None,
    },
    OperationSpec {
        resource: Resource::Instagram,
        name: "get-post-comments",
        description: "Retrieve comments from a post",
        method: HttpMethod::Get,
        path: "/api/v1/instagram/web_app/fetch_post_comments_by_post_id",
        fields: &[FieldSpec::required("post_id")],
        cursor_field: None,
    },
    OperationSpec {
        resource: Resource::Instagram,
        name: "get-comment-replies",
        description: "Retrieve replies to a comment",
        method: HttpMethod::Get,
        path: "/api/v1/instagram/web_app/fetch_comment_replies_by_comment_id",
        fields: &[FieldSpec::required("comment_id")],
        cursor_field: None,
    },
    OperationSpec {
        resource: Resource::Instagram,
        name: "get-user-posts",
        description: "Retrieve posts from a user",
        method: HttpMethod::Get,
        path: "/api/v1/instagram/web_app/fetch_user_posts_by_user_id",
        fields: &[
            FieldSpec::required("user_id"),
            FieldSpec::number("count", 12),
            FieldSpec::optional("end_cursor"),
        ],
        cursor_field: Some("end_cursor"),
    },
];
