use tokio::signal;
use tracing::{error, warn};

/// 等待退出信号（Ctrl+C，Unix 下还包括 SIGTERM）
pub async fn listen_for_shutdown() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal as unix_signal};

        match unix_signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    res = signal::ctrl_c() => {
                        if let Err(e) = res {
                            error!("Failed to listen for Ctrl+C: {}", e);
                        }
                    }
                    _ = sigterm.recv() => {}
                }
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                if let Err(e) = signal::ctrl_c().await {
                    error!("Failed to listen for Ctrl+C: {}", e);
                }
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
        }
    }

    warn!("Shutdown signal received, initiating graceful shutdown...");
}
