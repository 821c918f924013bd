use std::sync::Arc;

use crate::{
    config::Settings,
    soap::{SoapClient, payment::PaymentService, recurring::RecurringService},
};

#[derive(Debug, Clone, axum::extract::FromRef)]
pub struct AppState {
    pub payment: PaymentService,
    pub recurring: RecurringService,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()?;
        let credentials = settings.credentials();
        let payment = PaymentService::new(SoapClient::new(
            client.clone(),
            settings.payment_endpoint(),
            credentials.clone(),
        ));
        let recurring = RecurringService::new(SoapClient::new(
            client,
            settings.recurring_endpoint(),
            credentials,
        ));
        Ok(Self {
            payment,
            recurring,
            settings: Arc::new(settings),
        })
    }
}
