//! YouTube operations (web API)

use super::{FieldSpec, OperationSpec, Resource};
use crate::tikhub::client::HttpMethod;

pub(super) const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        resource: Resource::Youtube,
        name: "get-video-info",
        description: "Retrieve video information",
        method: HttpMethod::Get,
        path: "/api/v1/youtube/web/get_video_info",
        fields: &[FieldSpec::required("video_id")],
        cursor_field: None,
    },
    OperationSpec {
        resource: Resource::Youtube,
        name: "get-video-comments",
        description: "Retrieve comments from a video",
        method: HttpMethod::Get,
        path: "/api/v1/youtube/web/get_video_comments",
        fields: &[
            FieldSpec::required("video_id"),
            FieldSpec::optional("continuation"),
        ],
        cursor_field: Some("continuation"),
    },
    OperationSpec {
        resource: Resource::Youtube,
        name: "get-channel-id",
        description: "Retrieve a channel ID by username",
        method: HttpMethod::Get,
        path: "/api/v1/youtube/web/get_channel_id_by_username",
        fields: &[FieldSpec::required("username")],
        cursor_field: None,
    },
    OperationSpec {
        resource: Resource::Youtube,
        name: "get-channel-info",
        description: "Retrieve channel information",
        method: HttpMethod::Get,
        path: "/api/v1/youtube/web/get_channel_info",
        fields: &[FieldSpec::required("channel_id")],
        cursor_field: None,
    },
    OperationSpec {
        resource: Resource::Youtube,
        name: "get-channel-videos",
        description: "Retrieve videos from a channel",
        method: HttpMethod::Get,
        path: "/api/v1/youtube/web/get_channel_videos",
        fields: &[
            FieldSpec::required("channel_id"),
            FieldSpec::optional("continuation"),
        ],
        cursor_field: Some("continuation"),
    },
    OperationSpec {
        resource: Resource::Youtube,
        name: "get-channel-shorts",
        description: "Retrieve Shorts from a channel",
        method: HttpMethod::Get,
        path: "/api/v1/youtube/web/get_channel_shorts",
        fields: &[
            FieldSpec::required("channel_id"),
            FieldSpec::optional("continuation"),
        ],
        cursor_field: Some("continuation"),
    },
];
