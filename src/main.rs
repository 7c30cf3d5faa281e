use todo_service::{Settings, ShutdownError, StartupError};

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

#[derive(Debug, Error)]
enum TodoServiceError {
    #[error("Startup error")]
    Startup(#[from] StartupError),

    #[error("Shutdown error")]
    Shutdown(#[from] ShutdownError),

    #[error("Io error")]
    Io(#[from] std::io::Error),
}

fn main() -> Result<(), TodoServiceError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .max_blocking_threads(num_cpus::get() * 2)
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

#[cfg(unix)]
async fn shutdown_signal() {
    let mut sigterm = signal(SignalKind::terminate()).expect("failed to bind to SIGTERM");

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("SIGINT received.");
        },
        _ = sigterm.recv() => {
            tracing::info!("SIGTERM received.");
        },
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        tracing::info!("Ctrl-C received.");
    }
}

async fn async_main() -> Result<(), TodoServiceError> {
    let settings = Settings::new()?;

    todo_service::init_tracing(&settings)?;

    let server_addr = settings.server_addr();
    let grace = settings.shutdown_grace();
    let (app, service) = todo_service::init_app(settings).await?;

    let listener = TcpListener::bind(&server_addr).await?;

    todo_service::serve(listener, app, service, shutdown_signal(), grace).await?;

    Ok(())
}
