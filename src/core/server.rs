use std::future::Future;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::adapters::http::{app_router, AppState};
use crate::core::converter::RomanConverter;
use crate::core::ConfigProvider;
use crate::utils::error::Result;

pub struct NumeralServer<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> NumeralServer<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn router(&self) -> Router {
        let state = AppState::new(Arc::new(RomanConverter::new()), self.config.max_range_size());
        app_router(state)
    }

    /// 綁定設定中的位址，直到收到 Ctrl-C / SIGTERM 才結束
    pub async fn run(&self) -> Result<()> {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        self.run_with_listener(listener, shutdown_signal()).await
    }

    pub async fn run_with_listener<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?;
        tracing::info!("🚀 roman-numeral server listening on {}", local_addr);
        tracing::info!("Endpoints:");
        tracing::info!("  GET /romannumeral?query=N        single conversion");
        tracing::info!("  GET /romannumeral?min=A&max=B    range conversion");
        tracing::info!("  GET /health                      liveness probe");
        tracing::debug!("Max range size: {}", self.config.max_range_size());

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("✅ Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("🛑 Shutdown signal received");
}
