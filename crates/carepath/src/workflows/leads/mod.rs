//! Outbound lead notification seam.
//!
//! Delivery itself (webhook, CRM, messaging) lives outside this crate; the
//! trait keeps the service testable and the payload fixes what may leave the
//! process: the resolved type plus routing metadata, never raw answers.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::workflows::diagnosis::ModelVersion;

/// Diagnostic lead payload forwarded after a completed submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadAlert {
    pub type_key: String,
    pub model: ModelVersion,
    pub profession: Option<String>,
    pub region: Option<String>,
}

/// Lead dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    #[error("lead transport unavailable: {0}")]
    Transport(String),
}

/// Trait describing outbound lead hooks (e.g., chat webhook or CRM adapters).
pub trait LeadPublisher: Send + Sync {
    fn publish(&self, alert: LeadAlert) -> Result<(), LeadError>;
}

/// Publisher that records leads on the application log. Stands in for real
/// delivery in the demo binary; can be disabled wholesale via configuration.
#[derive(Debug, Clone)]
pub struct TracingLeadPublisher {
    enabled: bool,
}

impl TracingLeadPublisher {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Default for TracingLeadPublisher {
    fn default() -> Self {
        Self::new(true)
    }
}

impl LeadPublisher for TracingLeadPublisher {
    fn publish(&self, alert: LeadAlert) -> Result<(), LeadError> {
        if !self.enabled {
            return Ok(());
        }

        info!(
            type_key = %alert.type_key,
            model = alert.model.label(),
            profession = alert.profession.as_deref().unwrap_or("-"),
            region = alert.region.as_deref().unwrap_or("-"),
            "lead captured"
        );
        Ok(())
    }
}
