//! Twitter operations (web API)

use super::{FieldSpec, OperationSpec, Resource};
use crate::tikhub::client::HttpMethod;

const BY_TWEET: &[FieldSpec] = &[
    FieldSpec::required("tweet_id"),
    FieldSpec::optional("cursor"),
];

const BY_SCREEN_NAME: &[FieldSpec] = &[
    FieldSpec::required("screen_name"),
    FieldSpec::optional("cursor"),
];

pub(super) const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        resource: Resource::Twitter,
        name: "get-tweet-detail",
        description: "Retrieve details of a tweet",
        method: HttpMethod::Get,
        path: "/api/v1/twitter/web/fetch_tweet_detail",
        fields: &[FieldSpec::required("tweet_id")],
        cursor_field: None,
    },
    OperationSpec {
        resource: Resource::Twitter,
        name: "get-user-profile",
        description: "Retrieve a user profile",
        method: HttpMethod::Get,
        path: "/api/v1/twitter/web/get_user_profile",
        fields: &[FieldSpec::required("screen_name")],
        cursor_field: None,
    },
    OperationSpec {
        resource: Resource::Twitter,
        name: "get-user-tweets",
        description: "Retrieve tweets from a user",
        method: HttpMethod::Get,
        path: "/api/v1/twitter/web/fetch_user_tweets",
        fields: BY_SCREEN_NAME,
        cursor_field: Some("cursor"),
    },
    OperationSpec {
        resource: Resource::Twitter,
        name: "get-tweet-comments",
        description: "Retrieve comments from a tweet",
        method: HttpMethod::Get,
        path: "/api/v1/twitter/web/fetch_post_comments",
        fields: BY_TWEET,
        cursor_field: Some("cursor"),
    },
    OperationSpec {
        resource: Resource::Twitter,
        name: "get-latest-comments",
        description: "Retrieve the latest comments from a tweet",
        method: HttpMethod::Get,
        path: "/api/v1/twitter/web/fetch_tweet_comments",
        fields: BY_TWEET,
        cursor_field: Some("cursor"),
    },
    OperationSpec {
        resource: Resource::Twitter,
        name: "get-user-replies",
        description: "Retrieve replies from a user",
        method: HttpMethod::Get,
        path: "/api/v1/twitter/web/fetch_user_replies",
        fields: BY_SCREEN_NAME,
        cursor_field: Some("cursor"),
    },
    OperationSpec {
        resource: Resource::Twitter,
        name: "get-user-media",
        description: "Retrieve media posts from a user",
        method: HttpMethod::Get,
        path: "/api/v1/twitter/web/fetch_user_media",
        fields: BY_SCREEN_NAME,
        cursor_field: Some("cursor"),
    },
    OperationSpec {
        resource: Resource::Twitter,
        name: "get-retweet-users",
        description: "Retrieve users who retweeted a tweet",
        method: HttpMethod::Get,
        path: "/api/v1/twitter/web/fetch_retweet_users",
        fields: BY_TWEET,
        cursor_field: Some("cursor"),
    },
];
