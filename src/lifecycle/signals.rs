//! OS signal handling.

use crate::lifecycle::Shutdown;

/// Spawn a task that translates Ctrl+C into a shutdown trigger.
pub fn spawn_ctrl_c_handler(shutdown: Shutdown) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Ctrl+C received, shutting down");
            shutdown.trigger();
        }
    });
}
