use std::fmt::Write;

use axum::extract::State;
use tracing::instrument;

use crate::{
    soap::recurring::{Contract, Recurring, RecurringDetailsRequest, RecurringDetailsResult},
    state::AppState,
    web::{Result, payment::or_null},
};

const SHOPPER_REFERENCE: &str = "TheShopperReference";

pub fn build_request(merchant_account: &str) -> RecurringDetailsRequest {
    RecurringDetailsRequest {
        merchant_account: merchant_account.to_string(),
        shopper_reference: SHOPPER_REFERENCE.to_string(),
        recurring: Recurring {
            contract: Contract::Recurring,
        },
    }
}

pub fn render_result(result: &RecurringDetailsResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Recurring Details Result:");
    let _ = writeln!(out, "- creationDate: {}", or_null(&result.creation_date));
    let _ = writeln!(
        out,
        "- lastKnownShopperEmail: {}",
        or_null(&result.last_known_shopper_email)
    );
    let _ = writeln!(out, "- shopperReference: {}", or_null(&result.shopper_reference));
    let _ = writeln!(out, "- recurringDetail:");

    for detail in &result.details {
        let _ = writeln!(
            out,
            "  > * recurringDetailReference: {}",
            or_null(&detail.recurring_detail_reference)
        );
        let _ = writeln!(out, "    * variant: {}", or_null(&detail.variant));
        let _ = writeln!(out, "    * creationDate: {}", or_null(&detail.creation_date));
        let _ = writeln!(out, "    * bank: {}", or_null(&detail.bank));
        let _ = writeln!(out, "    * card: {}", or_null(&detail.card));
        let _ = writeln!(out, "    * elv: {}", or_null(&detail.elv));
        let _ = writeln!(out, "    * name: {}", or_null(&detail.name));
    }
    out
}

#[instrument(skip_all)]
pub async fn retrieve_recurring_contract(
    State(AppState {
        recurring, settings, ..
    }): State<AppState>,
) -> Result<String> {
    let request = build_request(&settings.merchant_account);
    let result = recurring.list_recurring_details(&request).await?;
    tracing::info!(
        shopper_reference = %request.shopper_reference,
        details = result.details.len(),
        "Retrieved recurring contracts"
    );
    Ok(render_result(&result))
}
