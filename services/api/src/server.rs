use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryDirectory};
use crate::routes::router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use school_search::config::AppConfig;
use school_search::error::AppError;
use school_search::telemetry;
use school_search::upstream::DirectoryClient;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let directory: Arc<dyn DirectoryClient> = match &config.directory.export_path {
        Some(path) => Arc::new(InMemoryDirectory::from_export_path(path)?),
        None => Arc::new(InMemoryDirectory::sample()),
    };

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        directory,
    };

    let app = router()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "school directory search ready");

    axum::serve(listener, app).await?;
    Ok(())
}
