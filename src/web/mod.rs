use axum::{
    extract::FromRequest,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{soap::error::SoapError, state::AppState};

/// `/2.API/Soap/CreatePaymentCSE`
pub mod payment;
/// `/5.Recurring/Soap/RetrieveRecurringContract`
pub mod recurring;

pub type Result<T> = std::result::Result<T, HandlerError>;

#[derive(Debug)]
pub enum HandlerError {
    BadRequest(String),
    Remote(SoapError),
    Timestamp(time::error::Format),
}

impl From<SoapError> for HandlerError {
    fn from(value: SoapError) -> Self {
        Self::Remote(value)
    }
}

impl From<time::error::Format> for HandlerError {
    fn from(value: time::error::Format) -> Self {
        Self::Timestamp(value)
    }
}

impl std::error::Error for HandlerError {}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandlerError::BadRequest(reason) => write!(f, "bad request: {reason}"),
            HandlerError::Remote(e) => write!(f, "payment provider call failed: {e}"),
            HandlerError::Timestamp(e) => write!(f, "failed to format timestamp: {e}"),
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = match &self {
            HandlerError::BadRequest(_) => {
                tracing::warn!("Rejected request: {self}");
                StatusCode::BAD_REQUEST
            }
            HandlerError::Remote(_) | HandlerError::Timestamp(_) => {
                tracing::error!("Request handling failed: {self}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}

/// `Form` extractor wrapper that reports rejections as plain text
pub struct Form<T>(pub T);

impl<S, T> FromRequest<S> for Form<T>
where
    T: serde::de::DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HandlerError;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        match axum::Form::<T>::from_request(req, state).await {
            Ok(axum::Form(value)) => Ok(Self(value)),
            Err(e) => Err(HandlerError::BadRequest(e.body_text())),
        }
    }
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route(
            "/2.API/Soap/CreatePaymentCSE",
            get(payment::form).post(payment::create_payment),
        )
        .route(
            "/5.Recurring/Soap/RetrieveRecurringContract",
            get(recurring::retrieve_recurring_contract),
        )
}
