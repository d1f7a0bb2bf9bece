//! Operation dispatch: item parameters → API request → per-item result

use indicatif::ProgressBar;
use log::{debug, warn};
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::{Result, TikHubError};

use super::client::{ApiRequest, TikHubClient};
use super::operations::{normalize_name, FieldRule, FieldSpec, Location, OperationSpec};
use super::params::ItemParams;

/// What to do when one item fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Abort the batch and return the error
    #[default]
    Strict,
    /// Record `{"error": ...}` for the item and keep going
    ContinueOnFail,
}

/// Per-batch settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchOptions {
    pub failure_mode: FailureMode,
    /// Follow cursors for operations that support it
    pub fetch_all: bool,
    /// Page cap for each aggregation run (`None` = unlimited)
    pub max_pages: Option<u32>,
}

/// Output envelope for one input item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResult {
    pub json: Value,
    pub item_index: usize,
    #[serde(skip)]
    pub failed: bool,
}

impl ItemResult {
    pub fn success(json: Value, item_index: usize) -> Self {
        Self {
            json,
            item_index,
            failed: false,
        }
    }

    pub fn failure(error: &TikHubError, item_index: usize) -> Self {
        Self {
            json: json!({ "error": error.to_string() }),
            item_index,
            failed: true,
        }
    }
}

/// Build the request for one item
///
/// Only the fields the operation declares are read. For identifier fields
/// only the selected identifier is read; the others are ignored even when
/// present.
pub fn build_request(op: &OperationSpec, params: &ItemParams) -> Result<ApiRequest> {
    let mut query = Map::new();
    let mut body = Map::new();

    for field in op.fields {
        let target = match field.location {
            Location::Query => &mut query,
            Location::Body => &mut body,
        };
        if let Some((name, value)) = read_field(op, field, params)? {
            target.insert(name, value);
        }
    }

    Ok(ApiRequest {
        method: op.method,
        path: op.path.to_string(),
        body: (!body.is_empty()).then_some(Value::Object(body)),
        query,
    })
}

fn read_field(
    op: &OperationSpec,
    field: &FieldSpec,
    params: &ItemParams,
) -> Result<Option<(String, Value)>> {
    let missing = |name: &str| {
        TikHubError::Validation(format!(
            "missing required parameter '{}' for {} {}",
            name, op.resource, op.name
        ))
    };

    match field.rule {
        FieldRule::Required => {
            let value = params
                .get_non_empty(field.name)
                .ok_or_else(|| missing(field.name))?;
            Ok(Some((field.name.to_string(), Value::String(value))))
        }
        FieldRule::Optional => Ok(params
            .get_non_empty(field.name)
            .map(|v| (field.name.to_string(), Value::String(v)))),
        FieldRule::Number { default } => {
            let number = match params.get(field.name) {
                None | Some(Value::Null) => default,
                Some(Value::Number(n)) => n.as_i64().ok_or_else(|| not_an_integer(field, n))?,
                Some(Value::String(s)) if s.trim().is_empty() => default,
                Some(Value::String(s)) => s
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| not_an_integer(field, s))?,
                Some(other) => return Err(not_an_integer(field, other)),
            };
            Ok(Some((field.name.to_string(), Value::from(number))))
        }
        FieldRule::List => {
            let values: Vec<Value> = match params.get(field.name) {
                Some(Value::Array(items)) => items
                    .iter()
                    .map(|v| match v {
                        Value::String(s) => s.trim().to_string(),
                        other => other.to_string(),
                    })
                    .filter(|s| !s.is_empty())
                    .map(Value::String)
                    .collect(),
                _ => params
                    .get_text(field.name)
                    .unwrap_or_default()
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| Value::String(s.to_string()))
                    .collect(),
            };
            if values.is_empty() {
                return Err(missing(field.name));
            }
            Ok(Some((field.name.to_string(), Value::Array(values))))
        }
        FieldRule::Identifier { default, choices } => {
            let selector = params
                .get_non_empty(field.name)
                .unwrap_or_else(|| default.to_string());
            let wanted = normalize_name(&selector);
            let chosen = choices
                .iter()
                .find(|choice| normalize_name(choice) == wanted)
                .ok_or_else(|| {
                    TikHubError::Validation(format!(
                        "parameter '{}' must be one of {}, got '{}'",
                        field.name,
                        choices.join(", "),
                        selector
                    ))
                })?;
            let value = params.get_non_empty(chosen).ok_or_else(|| missing(chosen))?;
            Ok(Some((chosen.to_string(), Value::String(value))))
        }
    }
}

fn not_an_integer(field: &FieldSpec, got: impl std::fmt::Display) -> TikHubError {
    TikHubError::Validation(format!(
        "parameter '{}' must be an integer, got '{}'",
        field.name, got
    ))
}

impl TikHubClient {
    /// Run one operation for one item
    ///
    /// With `fetch_all` set and a cursor-capable operation, every page is
    /// collected and the result is a JSON array of all items.
    pub async fn execute_item(
        &self,
        op: &OperationSpec,
        params: &ItemParams,
        options: &BatchOptions,
    ) -> Result<Value> {
        let request = build_request(op, params)?;

        match (options.fetch_all, op.cursor_field) {
            (true, Some(cursor_field)) => {
                let items = self
                    .fetch_all(&request, Some(cursor_field), options.max_pages)
                    .await?;
                Ok(Value::Array(items))
            }
            (true, None) => {
                debug!(
                    "{} {} has no cursor parameter, issuing a single request",
                    op.resource, op.name
                );
                self.send(&request).await
            }
            (false, _) => self.send(&request).await,
        }
    }

    /// Run one operation for every item, strictly in order
    ///
    /// In [`FailureMode::Strict`] the first failure is returned and later
    /// items are never dispatched. In [`FailureMode::ContinueOnFail`] a
    /// failed item yields an error entry and the batch continues.
    pub async fn execute_batch(
        &self,
        op: &OperationSpec,
        items: &[ItemParams],
        options: &BatchOptions,
        spinner: &Option<ProgressBar>,
    ) -> Result<Vec<ItemResult>> {
        let mut results = Vec::with_capacity(items.len());

        for (index, params) in items.iter().enumerate() {
            if let Some(s) = spinner {
                s.set_message(format!(
                    "{} {}: item {}/{}",
                    op.resource,
                    op.name,
                    index + 1,
                    items.len()
                ));
            }
            debug!("Dispatching item {} to {} {}", index, op.method, op.path);

            match self.execute_item(op, params, options).await {
                Ok(json) => results.push(ItemResult::success(json, index)),
                Err(e) => match options.failure_mode {
                    FailureMode::Strict => return Err(e),
                    FailureMode::ContinueOnFail => {
                        warn!("Item {} failed: {}", index, e);
                        results.push(ItemResult::failure(&e, index));
                    }
                },
            }
        }

        Ok(results)
    }
}
