//! Registration submission backends
//!
//! Submitting a registration goes through [`RegistrationSink`]. The page ships with a
//! single implementation, [`SimulatedSink`], which waits a fixed delay to stand in for
//! network latency and then accepts the record. Nothing leaves the browser.

use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;

use crate::console_info;
use crate::registration::RegistrationRecord;
use crate::services::errors::RegistrationResult;
use crate::utils::sleep_ms;

/// Acknowledgement for an accepted registration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionReceipt {
    pub employee_name: String,
    pub has_photo: bool,
}

#[async_trait(?Send)]
pub trait RegistrationSink {
    /// Deliver a registration record
    async fn submit(&self, record: RegistrationRecord) -> RegistrationResult<SubmissionReceipt>;

    /// Get the sink name
    fn name(&self) -> &'static str;
}

/// Client-side stand-in for a registration endpoint
#[derive(Debug, Clone)]
pub struct SimulatedSink {
    pub delay_ms: u64,
}

impl SimulatedSink {
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    pub fn shared(delay_ms: u64) -> Rc<dyn RegistrationSink> {
        Rc::new(Self::new(delay_ms))
    }
}

#[async_trait(?Send)]
impl RegistrationSink for SimulatedSink {
    async fn submit(&self, record: RegistrationRecord) -> RegistrationResult<SubmissionReceipt> {
        console_info!(
            "[{}] Submitting registration for {} ({} fields, photo: {})",
            self.name(),
            record.display_name(),
            record.values.len(),
            record.photo.is_some()
        );

        sleep_ms(self.delay_ms).await;

        Ok(SubmissionReceipt {
            employee_name: record.display_name(),
            has_photo: record.photo.is_some(),
        })
    }

    fn name(&self) -> &'static str {
        "SimulatedSink"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::{FieldId, RegistrationState};
    use std::time::{Duration, Instant};

    fn sample_record() -> RegistrationRecord {
        let mut state = RegistrationState::default();
        state.set_value(FieldId::LastName, "Dela Cruz");
        state.set_value(FieldId::FirstName, "Juan");
        state.record()
    }

    #[tokio::test]
    async fn test_simulated_sink_accepts() {
        let sink = SimulatedSink::new(0);
        let receipt = sink.submit(sample_record()).await.unwrap();

        assert_eq!(receipt.employee_name, "Juan Dela Cruz");
        assert!(!receipt.has_photo);
    }

    #[tokio::test]
    async fn test_simulated_sink_waits() {
        let sink = SimulatedSink::new(20);
        let started = Instant::now();
        sink.submit(sample_record()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
