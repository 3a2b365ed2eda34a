use std::sync::Arc;

use tracing::info;

use super::domain::{AnswerSet, LeadDetails, ModelVersion};
use super::result::DiagnosisRecord;
use super::DiagnosisEngine;
use crate::workflows::leads::{LeadAlert, LeadError, LeadPublisher};

/// One completed quiz submission as handed over by the UI layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagnosisSubmission {
    pub answers: AnswerSet,
    pub model: Option<ModelVersion>,
    pub lead: LeadDetails,
}

/// Service composing the scoring engine with the outbound lead publisher.
/// The engine itself never fails; only lead dispatch can.
pub struct DiagnosisService<N> {
    engine: DiagnosisEngine,
    leads: Arc<N>,
    default_model: ModelVersion,
}

impl<N> DiagnosisService<N>
where
    N: LeadPublisher + 'static,
{
    pub fn new(engine: DiagnosisEngine, leads: Arc<N>, default_model: ModelVersion) -> Self {
        Self {
            engine,
            leads,
            default_model,
        }
    }

    pub fn engine(&self) -> &DiagnosisEngine {
        &self.engine
    }

    /// Score a submission, forward the lead, and return the composed record.
    pub fn submit(
        &self,
        submission: DiagnosisSubmission,
    ) -> Result<DiagnosisRecord, DiagnosisServiceError> {
        let model = submission.model.unwrap_or(self.default_model);
        let record = self
            .engine
            .diagnose(model, &submission.answers, submission.lead);

        self.leads.publish(LeadAlert {
            type_key: record.type_key.clone(),
            model: record.model,
            profession: record.lead.profession.clone(),
            region: record.lead.postal_code.clone(),
        })?;

        info!(
            model = record.model.label(),
            type_key = %record.type_key,
            "diagnosis completed"
        );

        Ok(record)
    }
}

/// Error raised by the diagnosis service.
#[derive(Debug, thiserror::Error)]
pub enum DiagnosisServiceError {
    #[error(transparent)]
    Lead(#[from] LeadError),
}
