//! Command handlers for `check`, `ops` and `run`

use log::{debug, info, warn};

use crate::cli::RunArgs;
use crate::output::{operations_table, output_results};
use crate::ui::{create_spinner, finish_spinner, finish_spinner_with_status};

use super::client::TikHubClient;
use super::operations::{all_operations, find_operation, Resource};
use super::params::{read_items, ItemParams};

/// Validate the credential against the health-check endpoint
pub async fn run_check_command(
    client: &TikHubClient,
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Checking API key...", batch);
    let result = client.health_check().await;
    finish_spinner(spinner);

    let body = result?;
    println!("✓ API key accepted by {}", client.base_url());
    debug!("Health check response: {}", body);
    Ok(())
}

/// Print the operation table, optionally for one resource
pub fn run_ops_command(resource: Option<Resource>) -> Result<(), Box<dyn std::error::Error>> {
    let table = match resource {
        Some(resource) => operations_table(resource.operations()),
        None => operations_table(all_operations()),
    };
    println!("{table}");
    Ok(())
}

/// Run one operation over every input item and print the results
pub async fn run_run_command(
    client: &TikHubClient,
    args: &RunArgs,
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let op = find_operation(args.resource, &args.operation)?;
    let defaults = ItemParams::from_assignments(&args.params)?;

    let items: Vec<ItemParams> = match &args.input {
        Some(source) => read_items(source)?
            .into_iter()
            .map(|item| item.merged_over(&defaults))
            .collect(),
        None => vec![defaults],
    };

    if items.is_empty() {
        warn!("No input items, nothing to run");
    }
    info!(
        "Running {} {} for {} item(s)",
        op.resource,
        op.name,
        items.len()
    );

    let options = args.batch_options();
    let spinner = create_spinner(&format!("{} {}...", op.resource, op.name), batch);
    let results = match client.execute_batch(op, &items, &options, &spinner).await {
        Ok(results) => results,
        Err(e) => {
            finish_spinner(spinner);
            return Err(e.into());
        }
    };

    let failed = results.iter().filter(|r| r.failed).count();
    finish_spinner_with_status(spinner, results.len(), failed);
    if failed > 0 {
        info!("{} of {} item(s) failed", failed, results.len());
    }

    output_results(&results, args.output)?;
    Ok(())
}
