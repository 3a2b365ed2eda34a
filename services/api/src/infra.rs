use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use carepath::config::QuizConfig;
use carepath::workflows::diagnosis::{DiagnosisEngine, DiagnosisService, ModelVersion};
use carepath::workflows::leads::{LeadAlert, LeadError, LeadPublisher, TracingLeadPublisher};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the quiz service from deploy-time configuration. Lead delivery is a
/// log-only publisher here; real transports hang off the same trait.
pub(crate) fn build_diagnosis_service(
    quiz: &QuizConfig,
) -> DiagnosisService<TracingLeadPublisher> {
    DiagnosisService::new(
        DiagnosisEngine::standard(),
        Arc::new(TracingLeadPublisher::new(quiz.lead_alerts)),
        quiz.default_model,
    )
}

pub(crate) fn parse_model(raw: &str) -> Result<ModelVersion, String> {
    ModelVersion::parse(raw)
        .ok_or_else(|| format!("'{raw}' is not a scoring model (expected archetype or legacy)"))
}

/// Publisher that keeps alerts in memory so tests can assert on dispatch.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadPublisher {
    events: Arc<Mutex<Vec<LeadAlert>>>,
}

impl InMemoryLeadPublisher {
    pub(crate) fn events(&self) -> Vec<LeadAlert> {
        self.events.lock().expect("lead mutex poisoned").clone()
    }
}

impl LeadPublisher for InMemoryLeadPublisher {
    fn publish(&self, alert: LeadAlert) -> Result<(), LeadError> {
        self.events
            .lock()
            .expect("lead mutex poisoned")
            .push(alert);
        Ok(())
    }
}
