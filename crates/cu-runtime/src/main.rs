//! # CU Runtime
//!
//! Startup sequence:
//!
//! 1. Initialize logging (`CU_LOG_LEVEL`, `CU_JSON_LOGS`)
//! 2. Load and validate configuration from the environment
//! 3. Build the subsystem container and open the cache (fatal on failure)
//! 4. If `CU_PROCESS_ID` is set, load the process, its module and its
//!    hydrated message stream, and report what was found

use anyhow::{Context, Result};
use futures::StreamExt;
use tracing::{error, info, warn};

use cu_runtime::{CuConfig, ProcessLoader, SubsystemContainer};
use cu_telemetry::{init_telemetry, TelemetryConfig};

async fn load_process(loader: &ProcessLoader, process_id: &str) -> Result<()> {
    let process = loader
        .load_process(process_id)
        .await
        .with_context(|| format!("Failed to load process {process_id}"))?;

    match process.module_id() {
        Some(module_id) => {
            let module = loader
                .load_module(module_id)
                .await
                .with_context(|| format!("Failed to load module {module_id}"))?;
            info!(module_id = %module.id, tags = module.tags.len(), "Module ready");
        }
        None => warn!(process_id, "Process has no Module tag"),
    }

    let mut messages = loader
        .load_messages(process_id, None, None)
        .await
        .with_context(|| format!("Failed to load messages for {process_id}"))?;

    let (mut hydrated, mut failed) = (0usize, 0usize);
    while let Some(item) = messages.next().await {
        match item {
            Ok(_) => hydrated += 1,
            Err(e) => {
                failed += 1;
                error!(error = %e, "Message hydration failed");
            }
        }
    }

    info!(process_id, hydrated, failed, "Message stream drained");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry(&TelemetryConfig::from_env()).context("Failed to initialize logging")?;

    let config = CuConfig::from_env().context("Invalid configuration")?;
    let process_id = config.process_id.clone();

    let container = SubsystemContainer::new(config).context("Failed to build subsystems")?;
    let loader = container
        .process_loader()
        .await
        .context("Failed to open process cache")?;

    info!("Compute-unit data layer ready");

    if let Some(process_id) = process_id {
        load_process(&loader, &process_id).await?;
    }

    Ok(())
}
