use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAdmissionRepository};
use crate::routes::with_admission_routes;
use admission_score::admission::AdmissionScoringService;
use admission_score::config::AppConfig;
use admission_score::error::AppError;
use admission_score::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = if config.seed_demo_data {
        InMemoryAdmissionRepository::seeded()
    } else {
        InMemoryAdmissionRepository::default()
    };
    let scoring_service = Arc::new(AdmissionScoringService::new(Arc::new(repository)));

    let app = with_admission_routes(scoring_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        seeded = config.seed_demo_data,
        "admission scoring service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
