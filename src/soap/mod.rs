use crate::soap::{
    auth::{Credentials, authenticated_headers},
    envelope::SoapOperation,
    error::SoapError,
    span::CallSpan,
};

pub mod auth;
/// SOAP 1.1 envelope encoding and reply decoding
pub mod envelope;
pub mod error;
#[cfg(test)]
pub mod fixtures;
/// Payload masking for logs
pub mod mask;
/// `Payment` service: authorise
pub mod payment;
/// `Recurring` service: listRecurringDetails
pub mod recurring;
mod span;
pub mod xml;

pub type Result<T> = std::result::Result<T, SoapError>;

/// One endpoint of the provider's SOAP API, called with basic auth
#[derive(Debug, Clone)]
pub struct SoapClient {
    client: reqwest::Client,
    endpoint: String,
    credentials: Credentials,
}

impl SoapClient {
    pub fn new(client: reqwest::Client, endpoint: String, credentials: Credentials) -> Self {
        Self {
            client,
            endpoint,
            credentials,
        }
    }

    pub async fn call<O: SoapOperation>(&self, operation: &O) -> Result<O::Output> {
        let envelope = envelope::encode(operation)?;
        let mut span = CallSpan::enter(O::NAME, &self.endpoint);
        tracing::debug!(
            url = %self.endpoint,
            operation = O::NAME,
            data = %mask::secure_serializable(operation),
            "SOAP request"
        );

        let response = match self
            .client
            .post(&self.endpoint)
            .headers(authenticated_headers(&self.credentials))
            .body(envelope)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                span.finish(false);
                return Err(e.into());
            }
        };
        let status = response.status();
        span.set_response_status(status.as_u16());

        let outcome = match response.text().await {
            Ok(body) => envelope::decode::<O>(&body, status),
            Err(e) => Err(e.into()),
        };
        span.finish(outcome.is_ok());

        let output = outcome?;
        tracing::debug!(
            operation = O::NAME,
            data = %mask::secure_serializable(&output),
            "SOAP response"
        );
        Ok(output)
    }
}
