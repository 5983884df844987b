use metrics_exporter_prometheus::PrometheusHandle;
use review_rating::rating::domain::CriterionId;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parse a `criterion=score` pair from the command line.
pub(crate) fn parse_score_assignment(raw: &str) -> Result<(CriterionId, f64), String> {
    let (criterion, score) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CRITERION=SCORE, got '{raw}'"))?;

    let criterion = criterion.trim();
    if criterion.is_empty() {
        return Err(format!("missing criterion name in '{raw}'"));
    }

    let score = score
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse score in '{raw}' ({err})"))?;

    Ok((CriterionId::new(criterion), score))
}
