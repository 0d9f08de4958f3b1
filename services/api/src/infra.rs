use metrics_exporter_prometheus::PrometheusHandle;
use registration_docs::workflows::registration::PolicyConfig;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) policy: Arc<PolicyConfig>,
}
