//! Per-item parameters and item input parsing

use log::debug;
use serde_json::{Map, Value};
use std::io::Read;

use crate::error::{Result, TikHubError};

/// Named parameter values for one input item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemParams(Map<String, Value>);

impl ItemParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn insert(&mut self, name: &str, value: Value) {
        self.0.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Read a scalar parameter as text; `null` counts as absent
    pub fn get_text(&self, name: &str) -> Option<String> {
        match self.0.get(name)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Read a parameter as text, treating an empty string as absent
    pub fn get_non_empty(&self, name: &str) -> Option<String> {
        self.get_text(name).filter(|s| !s.trim().is_empty())
    }

    /// Layer these parameters over `defaults`; own values win
    pub fn merged_over(mut self, defaults: &ItemParams) -> ItemParams {
        for (key, value) in &defaults.0 {
            self.0.entry(key.clone()).or_insert_with(|| value.clone());
        }
        self
    }

    /// Build parameters from `key=value` assignments
    pub fn from_assignments<S: AsRef<str>>(assignments: &[S]) -> Result<Self> {
        let mut params = Self::new();
        for assignment in assignments {
            let (key, value) = parse_assignment(assignment.as_ref())?;
            params.insert(&key, Value::String(value));
        }
        Ok(params)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Split a `key=value` assignment; the value may itself contain `=`
pub fn parse_assignment(s: &str) -> Result<(String, String)> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(TikHubError::Input(format!(
            "invalid parameter '{}', expected KEY=VALUE",
            s
        ))),
    }
}

/// Parse item input: a JSON array of objects, one object, or JSON Lines
pub fn parse_items(content: &str) -> Result<Vec<ItemParams>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return match value {
            Value::Array(values) => values
                .into_iter()
                .enumerate()
                .map(|(index, v)| into_item(v, index))
                .collect(),
            Value::Object(map) => Ok(vec![ItemParams(map)]),
            _ => Err(TikHubError::Input(
                "item input must be a JSON object, an array of objects, or JSON Lines".to_string(),
            )),
        };
    }

    debug!("Input is not a single JSON document, reading as JSON Lines");
    trimmed
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_no, line)| {
            let value: Value = serde_json::from_str(line).map_err(|e| {
                TikHubError::Input(format!("line {}: {}", line_no + 1, e))
            })?;
            into_item(value, line_no)
        })
        .collect()
}

/// Read items from a file path, or stdin when `source` is `-`
pub fn read_items(source: &str) -> Result<Vec<ItemParams>> {
    let content = if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(source).map_err(|e| {
            TikHubError::Input(format!("could not read '{}': {}", source, e))
        })?
    };

    let items = parse_items(&content)?;
    debug!("Read {} item(s) from {}", items.len(), source);
    Ok(items)
}

fn into_item(value: Value, index: usize) -> Result<ItemParams> {
    match value {
        Value::Object(map) => Ok(ItemParams(map)),
        other => Err(TikHubError::Input(format!(
            "item {} is not a JSON object: {}",
            index, other
        ))),
    }
}
