use anyhow::{ensure, Context, Result};
use axum::{middleware, Router};

use super::calculator::CalculatorService;
use super::config::{ServerConfig, ServiceKind};
use super::cors::cors;
use super::http_service::HttpService;
use super::matrix::MatrixService;

pub struct ServiceBuilder {
    kind: ServiceKind,
    config: ServerConfig,
}

impl ServiceBuilder {
    pub fn new(kind: ServiceKind, config: ServerConfig) -> Self {
        Self { kind, config }
    }

    fn appropriate_service(&self) -> Box<dyn HttpService> {
        match self.kind {
            ServiceKind::Calculator => Box::new(CalculatorService),
            ServiceKind::Matrix => Box::new(MatrixService),
        }
    }

    pub fn build_router(&self) -> Router {
        let router = self.appropriate_service().router();
        if self.config.cors {
            router.layer(middleware::from_fn(cors))
        } else {
            router
        }
    }

    pub fn run_appropriate_service(self) -> Result<()> {
        ensure!(
            !self.config.host.is_empty(),
            "no host to bind the {} service to",
            self.kind
        );
        let service = self.appropriate_service();
        let app = self.build_router();
        let bind_addr = self.config.bind_addr();
        let runtime = tokio::runtime::Runtime::new().context("creating tokio runtime")?;
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind(&bind_addr)
                .await
                .with_context(|| format!("binding {bind_addr}"))?;
            log::info!("{} service listening on http://{bind_addr}", service.name());
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await
                .context("serving requests")?;
            log::info!("{} service stopped", service.name());
            Ok(())
        })
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::warn!("could not install Ctrl+C handler: {err}");
        std::future::pending::<()>().await;
    }
}
