use std::time::Instant;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Timing and outcome of a single SOAP exchange, reported once the call settles
#[derive(Debug)]
pub struct CallSpan {
    operation: &'static str,
    endpoint: String,
    created: Instant,
    created_at: OffsetDateTime,
    response_status: Option<u16>,
}

impl CallSpan {
    pub fn enter(operation: &'static str, endpoint: &str) -> Self {
        Self {
            operation,
            endpoint: endpoint.to_string(),
            created: Instant::now(),
            created_at: OffsetDateTime::now_utc(),
            response_status: None,
        }
    }

    pub fn set_response_status(&mut self, status: u16) {
        self.response_status = Some(status);
    }

    pub fn finish(self, succeeded: bool) {
        let started = self.created_at.format(&Rfc3339).unwrap_or_default();
        let duration = self.created.elapsed().as_secs_f32();
        if succeeded {
            tracing::info!(
                operation = self.operation,
                endpoint = %self.endpoint,
                status = ?self.response_status,
                %started,
                duration,
                "SOAP call completed"
            );
        } else {
            tracing::warn!(
                operation = self.operation,
                endpoint = %self.endpoint,
                status = ?self.response_status,
                %started,
                duration,
                "SOAP call failed"
            );
        }
    }
}
