use std::{future::Future, net::SocketAddr, time::Duration};

use axum::Router;
use thiserror::Error;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{error, info, instrument};

use crate::{service::Service, storage::StorageError};

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Failed to disconnect from store")]
    Disconnect(#[from] StorageError),

    #[error("In-flight requests did not finish within {0:?}")]
    GracePeriodElapsed(Duration),

    #[error("Server error")]
    Server(#[from] std::io::Error),

    #[error("Failed joining server task")]
    JoinTask(#[from] tokio::task::JoinError),
}

/// Serves `app` until `shutdown_signal` resolves, then shuts down in order:
/// disconnect the store, stop accepting connections, wait for in-flight
/// requests for at most `grace`.
#[instrument(name = "serve", skip_all, fields(grace = ?grace))]
pub async fn serve(
    listener: TcpListener,
    app: Router,
    service: Service,
    shutdown_signal: impl Future<Output = ()>,
    grace: Duration,
) -> Result<(), ShutdownError> {
    info!(addr = ?listener.local_addr()?, "Server started");

    let (drain_tx, drain_rx) = oneshot::channel::<()>();

    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        drain_rx.await.ok();
    });

    let mut server_task = tokio::spawn(async move { server.await });

    tokio::select! {
        _ = shutdown_signal => {
            info!("shutdown signal received");
        },
        joined = &mut server_task => {
            error!("server stopped before shutdown signal");
            joined??;
            return Ok(());
        },
    }

    if let Err(e) = service.disconnect().await {
        error!(error = %e, "failed to disconnect from store");
        server_task.abort();
        return Err(e.into());
    }

    // the receiver only goes away with the server task
    let _ = drain_tx.send(());

    match tokio::time::timeout(grace, &mut server_task).await {
        Ok(joined) => {
            joined??;
            info!("Server shutdown");
            Ok(())
        }
        Err(_) => {
            error!(?grace, "in-flight requests did not finish in time");
            server_task.abort();
            Err(ShutdownError::GracePeriodElapsed(grace))
        }
    }
}
