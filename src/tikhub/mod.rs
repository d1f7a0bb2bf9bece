//! TikHub API integration
//!
//! - [`client`]: authenticated request executor
//! - [`pagination`]: cursor-following page aggregation
//! - [`operations`]: static (resource, operation) → endpoint tables
//! - [`dispatch`]: per-item request building and batch execution

pub mod client;
mod commands;
mod credentials;
pub mod dispatch;
pub mod operations;
pub mod pagination;
pub mod params;

pub use client::{ApiRequest, Credential, HttpMethod, TikHubClient};
pub use commands::{run_check_command, run_ops_command, run_run_command};
pub use credentials::CredentialResolver;
pub use dispatch::{build_request, BatchOptions, FailureMode, ItemResult};
pub use operations::{
    all_operations, find_operation, FieldRule, FieldSpec, Location, OperationSpec, Resource,
};
pub use pagination::{is_truthy, PageShape};
pub use params::{parse_items, read_items, ItemParams};
