//! Background Report Task
//!
//! Fire-and-forget report runs triggered from the HTTP API.

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::client::SwapiClient;
use crate::report::{run_report_logged, ReportSummary};

/// Spawns one report run in the background.
///
/// The run's own failures are logged by `run_report_logged`; a panic inside
/// the run is caught by a supervising task and logged as well. Callers may
/// drop the returned handle without awaiting it.
///
/// # Example
/// ```ignore
/// let handle = spawn_report_task(client.clone(), 1, true);
/// // Handlers just drop it; tests can await the summary:
/// let summary = handle.await.unwrap();
/// ```
pub fn spawn_report_task(
    client: SwapiClient,
    character_id: u32,
    debug_mode: bool,
) -> JoinHandle<Option<ReportSummary>> {
    let run = tokio::spawn(async move {
        info!("Report run started for character {}", character_id);
        run_report_logged(&client, character_id, debug_mode).await
    });

    tokio::spawn(async move {
        match run.await {
            Ok(summary) => summary,
            Err(join_err) => {
                error!("Report run aborted: {}", join_err);
                None
            }
        }
    })
}
