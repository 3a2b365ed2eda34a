use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::diagnosis::{
    diagnosis_router, AnswerSet, DiagnosisEngine, DiagnosisService, LeadDetails, ModelVersion,
    QuestionId, RawAnswer,
};
use crate::workflows::leads::{LeadAlert, LeadError, LeadPublisher};

pub(super) fn engine() -> DiagnosisEngine {
    DiagnosisEngine::standard()
}

pub(super) fn lead() -> LeadDetails {
    LeadDetails {
        profession: Some("ICU nurse".to_string()),
        postal_code: Some("50309".to_string()),
    }
}

/// Every current-model scaled question answered +3 and every choice question
/// answered with its first option; legacy questions all +3 as well. The two
/// catalogs use disjoint id ranges, so one set serves both models.
pub(super) fn all_max_answers() -> AnswerSet {
    let mut answers = AnswerSet::new();
    for id in 1..=18u16 {
        answers.record(QuestionId(id), RawAnswer::Number(3));
    }
    for id in 19..=26u16 {
        answers.record(QuestionId(id), RawAnswer::Number(0));
    }
    for id in 101..=116u16 {
        answers.record(QuestionId(id), RawAnswer::Number(3));
    }
    answers
}

pub(super) fn answers_of(entries: &[(u16, RawAnswer)]) -> AnswerSet {
    entries
        .iter()
        .map(|(id, answer)| (QuestionId(*id), answer.clone()))
        .collect()
}

#[derive(Default, Clone)]
pub(super) struct MemoryLeads {
    events: Arc<Mutex<Vec<LeadAlert>>>,
}

impl MemoryLeads {
    pub(super) fn events(&self) -> Vec<LeadAlert> {
        self.events.lock().expect("lead mutex poisoned").clone()
    }
}

impl LeadPublisher for MemoryLeads {
    fn publish(&self, alert: LeadAlert) -> Result<(), LeadError> {
        self.events
            .lock()
            .expect("lead mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct FailingLeads;

impl LeadPublisher for FailingLeads {
    fn publish(&self, _alert: LeadAlert) -> Result<(), LeadError> {
        Err(LeadError::Transport("webhook offline".to_string()))
    }
}

pub(super) fn build_service() -> (DiagnosisService<MemoryLeads>, Arc<MemoryLeads>) {
    let leads = Arc::new(MemoryLeads::default());
    let service = DiagnosisService::new(engine(), leads.clone(), ModelVersion::Archetype);
    (service, leads)
}

pub(super) fn router_with_service(
    service: DiagnosisService<MemoryLeads>,
) -> axum::Router {
    diagnosis_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
