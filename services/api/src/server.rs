use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_rating_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use review_rating::config::AppConfig;
use review_rating::error::AppError;
use review_rating::rating::{RatingEngine, RatingService};
use review_rating::telemetry;
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

    let engine = RatingEngine::shared();
    engine.audit_weight_sums(config.rating.weight_sum_tolerance);
    let rating_service = Arc::new(RatingService::new(engine, &config.rating));

    let app = with_rating_routes(rating_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        default_profile = %config.rating.default_profile,
        "review rating service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
