//! Cursor-based pagination over heterogeneous TikHub response shapes
//!
//! TikHub endpoints do not share one envelope. Some wrap results in `data`
//! and report a continuation cursor next to it, some return a bare list,
//! and some return a single object. Every response is first classified into
//! a [`PageShape`]; the continuation decision is then made on that shape.

use log::{debug, warn};
use serde_json::Value;
use std::collections::HashSet;

use crate::config::api;
use crate::error::Result;

use super::client::{query_value_to_string, ApiRequest, TikHubClient};

/// Response fields checked, in order, for the next cursor
const CURSOR_KEYS: [&str; 3] = ["cursor", "next_cursor", "max_cursor"];

/// Classified shape of one response
#[derive(Debug, Clone, PartialEq)]
pub enum PageShape {
    /// Response carried a `data` field
    Page {
        items: Vec<Value>,
        next_cursor: Option<Value>,
        has_more: Option<bool>,
    },
    /// Response itself was a list
    RawList(Vec<Value>),
    /// Anything else, kept whole
    SingleValue(Value),
}

impl PageShape {
    /// Classify a raw response
    pub fn classify(response: Value) -> Self {
        let data = response.get("data").filter(|d| is_truthy(d)).cloned();

        if let Some(data) = data {
            let items = match data {
                Value::Array(items) => items,
                other => vec![other],
            };
            let next_cursor = CURSOR_KEYS
                .iter()
                .filter_map(|key| response.get(*key))
                .find(|v| is_truthy(v))
                .cloned();
            let has_more = response
                .get("has_more")
                .filter(|v| !v.is_null())
                .map(is_truthy);

            return PageShape::Page {
                items,
                next_cursor,
                has_more,
            };
        }

        match response {
            Value::Array(items) => PageShape::RawList(items),
            other => PageShape::SingleValue(other),
        }
    }

    /// Whether the server indicated another page follows this one
    ///
    /// An explicit `has_more` wins; without it, the presence of a cursor
    /// signals continuation.
    pub fn wants_more(&self) -> bool {
        match self {
            PageShape::Page {
                next_cursor,
                has_more,
                ..
            } => has_more.unwrap_or(next_cursor.is_some()),
            PageShape::RawList(_) | PageShape::SingleValue(_) => false,
        }
    }
}

/// JavaScript-style truthiness of a JSON value
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl TikHubClient {
    /// Fetch every page of a cursor-paginated endpoint
    ///
    /// The cursor from each page is sent back under `cursor_field` (default
    /// `cursor`). Pages are fetched one at a time and items are kept in
    /// server order. Any failed page aborts the whole run.
    ///
    /// The loop also stops, with a warning, when `max_pages` is reached, when
    /// the server hands back any cursor already sent, or when it reports
    /// more pages without supplying a cursor.
    pub async fn fetch_all(
        &self,
        request: &ApiRequest,
        cursor_field: Option<&str>,
        max_pages: Option<u32>,
    ) -> Result<Vec<Value>> {
        let cursor_field = cursor_field.unwrap_or(api::DEFAULT_CURSOR_FIELD);
        let mut query = request.query.clone();
        let mut cursor: Option<Value> = None;
        let mut sent_cursors: HashSet<String> = HashSet::new();
        let mut all_items: Vec<Value> = Vec::new();
        let mut page: u32 = 0;

        loop {
            if let Some(ref c) = cursor {
                sent_cursors.insert(query_value_to_string(c));
                query.insert(cursor_field.to_string(), c.clone());
            }
            page += 1;
            debug!("Fetching page {} of {} {}", page, request.method, request.path);

            let response = self
                .execute(
                    request.method,
                    &request.path,
                    request.body.as_ref(),
                    &query,
                )
                .await?;

            let shape = PageShape::classify(response);
            let more = shape.wants_more();

            match shape {
                PageShape::Page {
                    items, next_cursor, ..
                } => {
                    debug!("Page {} returned {} items", page, items.len());
                    all_items.extend(items);

                    if !more {
                        break;
                    }
                    let Some(next) = next_cursor else {
                        warn!(
                            "{} reported more pages but no cursor; stopping after page {}",
                            request.path, page
                        );
                        break;
                    };
                    if sent_cursors.contains(&query_value_to_string(&next)) {
                        warn!(
                            "{} returned cursor {} which was already requested; stopping after page {}",
                            request.path, next, page
                        );
                        break;
                    }
                    if max_pages.is_some_and(|max| page >= max) {
                        warn!(
                            "Reached page limit ({}) for {}; results are truncated",
                            page, request.path
                        );
                        break;
                    }
                    cursor = Some(next);
                }
                PageShape::RawList(items) => {
                    all_items.extend(items);
                    break;
                }
                PageShape::SingleValue(item) => {
                    all_items.push(item);
                    break;
                }
            }
        }

        debug!(
            "Fetched {} total items from {} in {} page(s)",
            all_items.len(),
            request.path,
            page
        );
        Ok(all_items)
    }
}


#[cfg(test)]
mod fetch_all_tests {
    use super::*;
    use crate::error::TikHubError;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn listing_request() -> ApiRequest {
        let mut request = ApiRequest::get("/items");
        request.query.insert("user".to_string(), json!("u1"));
        request
    }

    #[tokio::test]
    async fn test_three_pages_in_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("user", "u1"))
            .and(query_param_is_missing("cursor"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": ["a", "b"], "next_cursor": 5})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("user", "u1"))
            .and(query_param("cursor", "5"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": ["c"], "cursor": 9, "has_more": true})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("user", "u1"))
            .and(query_param("cursor", "9"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": ["d"], "has_more": false})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TikHubClient::test_client(&mock_server.uri());
        let items = client
            .fetch_all(&listing_request(), None, None)
            .await
            .unwrap();

        assert_eq!(items, vec![json!("a"), json!("b"), json!("c"), json!("d")]);
    }

    #[tokio::test]
    async fn test_single_object_without_cursor_is_one_call() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"x": 1}})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TikHubClient::test_client(&mock_server.uri());
        let items = client
            .fetch_all(&listing_request(), None, None)
            .await
            .unwrap();

        assert_eq!(items, vec![json!({"x": 1})]);
    }

    #[tokio::test]
    async fn test_raw_list_is_one_call() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TikHubClient::test_client(&mock_server.uri());
        let items = client
            .fetch_all(&listing_request(), None, None)
            .await
            .unwrap();

        assert_eq!(items, vec![json!(1), json!(2), json!(3)]);
    }

    #[tokio::test]
    async fn test_error_on_second_page_discards_everything() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param_is_missing("cursor"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": ["a"], "cursor": "p2"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("cursor", "p2"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"message": "upstream timeout"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("cursor", "p3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": ["c"]})))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = TikHubClient::test_client(&mock_server.uri());
        let result = client.fetch_all(&listing_request(), None, None).await;

        match result {
            Err(TikHubError::Api {
                status, message, ..
            }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "upstream timeout");
            }
            other => panic!("Expected TikHubError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_custom_cursor_field() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param_is_missing("max_cursor"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": [1], "max_cursor": 1700000000, "has_more": 1})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("max_cursor", "1700000000"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": [2], "has_more": 0})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TikHubClient::test_client(&mock_server.uri());
        let items = client
            .fetch_all(&listing_request(), Some("max_cursor"), None)
            .await
            .unwrap();

        assert_eq!(items, vec![json!(1), json!(2)]);
    }

    #[tokio::test]
    async fn test_max_pages_stops_endless_cursor() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param_is_missing("cursor"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": [1], "cursor": "c1"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("cursor", "c1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": [2], "cursor": "c2"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TikHubClient::test_client(&mock_server.uri());
        let items = client
            .fetch_all(&listing_request(), None, Some(2))
            .await
            .unwrap();

        assert_eq!(items, vec![json!(1), json!(2)]);
    }

    #[tokio::test]
    async fn test_repeated_cursor_stops() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": ["x"], "cursor": "same"})),
            )
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = TikHubClient::test_client(&mock_server.uri());
        let items = client
            .fetch_all(&listing_request(), None, None)
            .await
            .unwrap();

        assert_eq!(items, vec![json!("x"), json!("x")]);
    }

    #[tokio::test]
    async fn test_cursor_cycle_stops() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param_is_missing("cursor"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": [1], "cursor": "A"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("cursor", "A"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": [2], "cursor": "B"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("cursor", "B"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": [3], "cursor": "A"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TikHubClient::test_client(&mock_server.uri());
        let items = client
            .fetch_all(&listing_request(), None, Some(0))
            .await
            .unwrap();

        assert_eq!(items, vec![json!(1), json!(2), json!(3)]);
    }

    #[tokio::test]
    async fn test_numeric_and_string_cursor_count_as_same() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param_is_missing("cursor"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": ["a"], "cursor": 7})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("cursor", "7"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": ["b"], "cursor": "7"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TikHubClient::test_client(&mock_server.uri());
        let items = client
            .fetch_all(&listing_request(), None, None)
            .await
            .unwrap();

        assert_eq!(items, vec![json!("a"), json!("b")]);
    }

    #[tokio::test]
    async fn test_transport_failure_on_second_page_discards_everything() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param_is_missing("cursor"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": ["a"], "cursor": "p2"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        // Page 2 never answers within the client timeout
        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("cursor", "p2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": ["b"], "cursor": "p3"}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("cursor", "p3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": ["c"]})))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client =
            TikHubClient::test_client_with_timeout(&mock_server.uri(), Duration::from_millis(250));
        let result = client.fetch_all(&listing_request(), None, None).await;

        match result {
            Err(err @ TikHubError::Http(_)) => {
                assert!(err.to_string().starts_with("TikHub API request failed"));
            }
            other => panic!("Expected TikHubError::Http, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_has_more_without_cursor_stops() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": ["x"], "has_more": true})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TikHubClient::test_client(&mock_server.uri());
        let items = client
            .fetch_all(&listing_request(), None, None)
            .await
            .unwrap();

        assert_eq!(items, vec![json!("x")]);
    }
}
