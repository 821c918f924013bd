use std::{fmt::Write, sync::Arc};

use axum::{extract::State, response::Html};
use quick_xml::escape::escape;
use serde::Deserialize;
use time::{OffsetDateTime, macros::format_description};
use tracing::instrument;

use crate::{
    config::Settings,
    soap::payment::{AdditionalData, Amount, ENCRYPTED_CARD_KEY, PaymentRequest, PaymentResult},
    state::AppState,
    web::{Form, HandlerError, Result},
};

const FORM_TEMPLATE: &str = include_str!("../../templates/create-payment-cse.html");

const CURRENCY: &str = "EUR";
const AMOUNT_MINOR_UNITS: i64 = 199;
const SHOPPER_IP: &str = "123.123.123.123";
const SHOPPER_EMAIL: &str = "test@example.com";
const SHOPPER_REFERENCE: &str = "YourReference";
const FRAUD_OFFSET: i32 = 0;

#[derive(Deserialize)]
pub struct CseForm {
    #[serde(rename = "adyen-encrypted-data")]
    encrypted_data: String,
}

/// ISO 8601 with the offset as `±hh:mm`, or `Z` when the offset is zero
fn generation_time(now: OffsetDateTime) -> Result<String> {
    let formatted = if now.offset().is_utc() {
        now.format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second]Z"
        ))?
    } else {
        now.format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
        ))?
    };
    Ok(formatted)
}

fn payment_reference(now: OffsetDateTime) -> Result<String> {
    let stamp = now.format(format_description!(
        "[year]-[month]-[day]-[hour]:[minute]:[second]"
    ))?;
    Ok(format!("TEST-PAYMENT-{stamp}"))
}

pub fn render_form(generation_time: &str, cse_library_url: &str) -> String {
    FORM_TEMPLATE
        .replace("{{CSE_LIBRARY_URL}}", &escape(cse_library_url))
        .replace("{{GENERATION_TIME}}", &escape(generation_time))
}

/// Serve the card form; the browser encrypts card fields before posting back
#[instrument(skip_all)]
pub async fn form(State(settings): State<Arc<Settings>>) -> Result<Html<String>> {
    let generation_time = generation_time(OffsetDateTime::now_utc())?;
    tracing::debug!(%generation_time, "Serving CSE form");
    Ok(Html(render_form(&generation_time, &settings.cse_library_url)))
}

pub fn build_request(
    merchant_account: &str,
    encrypted_card: String,
    now: OffsetDateTime,
) -> Result<PaymentRequest> {
    let mut additional_data = AdditionalData::default();
    additional_data.insert(ENCRYPTED_CARD_KEY, encrypted_card);
    Ok(PaymentRequest {
        merchant_account: merchant_account.to_string(),
        amount: Amount::new(CURRENCY, AMOUNT_MINOR_UNITS),
        reference: payment_reference(now)?,
        shopper_ip: Some(SHOPPER_IP.into()),
        shopper_email: Some(SHOPPER_EMAIL.into()),
        shopper_reference: Some(SHOPPER_REFERENCE.into()),
        fraud_offset: Some(FRAUD_OFFSET),
        additional_data,
    })
}

pub fn render_result(result: &PaymentResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Payment Result:");
    let _ = writeln!(out, "- pspReference: {}", or_null(&result.psp_reference));
    let _ = writeln!(out, "- resultCode: {}", or_null(&result.result_code));
    let _ = writeln!(out, "- authCode: {}", or_null(&result.auth_code));
    let _ = writeln!(out, "- refusalReason: {}", or_null(&result.refusal_reason));
    out
}

pub(super) fn or_null<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "null".to_string(),
    }
}

#[instrument(skip_all)]
pub async fn create_payment(
    State(AppState {
        payment, settings, ..
    }): State<AppState>,
    Form(form): Form<CseForm>,
) -> Result<String> {
    if form.encrypted_data.trim().is_empty() {
        return Err(HandlerError::BadRequest(
            "adyen-encrypted-data must not be empty".into(),
        ));
    }
    let request = build_request(
        &settings.merchant_account,
        form.encrypted_data,
        OffsetDateTime::now_utc(),
    )?;
    let result = payment.authorise(&request).await?;
    tracing::info!(
        reference = %request.reference,
        psp_reference = %or_null(&result.psp_reference),
        result_code = %or_null(&result.result_code),
        "Payment authorise completed"
    );
    Ok(render_result(&result))
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::{build_request, generation_time, render_form, render_result};
    use crate::soap::payment::{AdditionalData, ENCRYPTED_CARD_KEY, PaymentResult, ResultCode};

    #[test]
    fn timestamps() {
        let now = datetime!(2024-05-01 10:20:30 +02:00);
        assert_eq!(generation_time(now).unwrap(), "2024-05-01T10:20:30+02:00");
        let request = build_request("YourMerchantAccount", "blob".into(), now).unwrap();
        assert_eq!(request.reference, "TEST-PAYMENT-2024-05-01-10:20:30");
    }

    #[test]
    fn generation_time_writes_zulu_for_utc() {
        let now = datetime!(2024-05-01 10:20:30 UTC);
        assert_eq!(generation_time(now).unwrap(), "2024-05-01T10:20:30Z");
    }

    #[test]
    fn request_uses_example_values() {
        let request = build_request(
            "YourMerchantAccount",
            "adyenjs_0_1_4p1$abc".into(),
            datetime!(2024-05-01 10:20:30 UTC),
        )
        .unwrap();
        assert_eq!(request.merchant_account, "YourMerchantAccount");
        assert_eq!(request.amount.currency, "EUR");
        assert_eq!(request.amount.value, 199);
        assert_eq!(request.shopper_ip.as_deref(), Some("123.123.123.123"));
        assert_eq!(request.shopper_email.as_deref(), Some("test@example.com"));
        assert_eq!(request.shopper_reference.as_deref(), Some("YourReference"));
        assert_eq!(request.fraud_offset, Some(0));
        assert_eq!(
            request.additional_data.get(ENCRYPTED_CARD_KEY),
            Some("adyenjs_0_1_4p1$abc")
        );
    }

    #[test]
    fn render_prints_null_for_missing_fields() {
        let result = PaymentResult {
            psp_reference: Some("8513760397300202".into()),
            result_code: Some(ResultCode::Refused),
            auth_code: None,
            refusal_reason: Some("CVC Declined".into()),
            additional_data: AdditionalData::default(),
        };
        assert_eq!(
            render_result(&result),
            "Payment Result:\n\
             - pspReference: 8513760397300202\n\
             - resultCode: Refused\n\
             - authCode: null\n\
             - refusalReason: CVC Declined\n"
        );
    }

    #[test]
    fn form_embeds_generation_time_and_library() {
        let html = render_form(
            "2024-05-01T10:20:30Z",
            "https://test.adyen.com/hpp/cse/js/Token.shtml?a=1&b=2",
        );
        assert!(html.contains(r#"value="2024-05-01T10:20:30Z""#));
        assert!(html.contains("https://test.adyen.com/hpp/cse/js/Token.shtml?a=1&amp;b=2"));
        assert!(!html.contains("{{"));
    }
}
