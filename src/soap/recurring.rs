use std::fmt::Display;

use serde::Serialize;

use crate::soap::{
    Result, SoapClient,
    envelope::SoapOperation,
    mask::{MaskPolicy, Masked},
    payment::PAYMENT_NS,
    xml::{FromXml, XmlNode, XmlResult, XmlWriter},
};

pub const RECURRING_NS: &str = "http://recurring.services.adyen.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Contract {
    #[serde(rename = "ONECLICK")]
    OneClick,
    #[serde(rename = "RECURRING")]
    Recurring,
    #[serde(rename = "ONECLICK,RECURRING")]
    OneClickRecurring,
    #[serde(rename = "PAYOUT")]
    Payout,
}

impl Display for Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OneClick => f.write_str("ONECLICK"),
            Self::Recurring => f.write_str("RECURRING"),
            Self::OneClickRecurring => f.write_str("ONECLICK,RECURRING"),
            Self::Payout => f.write_str("PAYOUT"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Recurring {
    pub contract: Contract,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringDetailsRequest {
    pub merchant_account: String,
    /// Must match the shopperReference of the payment that created the contract
    pub shopper_reference: String,
    pub recurring: Recurring,
}

impl SoapOperation for RecurringDetailsRequest {
    const NAME: &'static str = "listRecurringDetails";
    const RESULT: &'static str = "result";
    type Output = RecurringDetailsResult;

    fn write_body(&self, xml: &mut XmlWriter) -> XmlResult<()> {
        xml.start(
            "ns1:listRecurringDetails",
            &[("xmlns:ns1", RECURRING_NS), ("xmlns:ns2", PAYMENT_NS)],
        )?;
        xml.start("ns1:request", &[])?;
        xml.element("ns1:merchantAccount", &self.merchant_account)?;
        xml.start("ns1:recurring", &[])?;
        xml.element("ns2:contract", &self.recurring.contract.to_string())?;
        xml.end("ns1:recurring")?;
        xml.element("ns1:shopperReference", &self.shopper_reference)?;
        xml.end("ns1:request")?;
        xml.end("ns1:listRecurringDetails")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub holder_name: Option<String>,
    /// Only the last digits are ever returned
    pub number: Option<String>,
    pub expiry_month: Option<String>,
    pub expiry_year: Option<String>,
    pub cvc: Option<String>,
}

impl FromXml for Card {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            holder_name: node.value("holderName"),
            number: node.value("number"),
            expiry_month: node.value("expiryMonth"),
            expiry_year: node.value("expiryYear"),
            cvc: node.value("cvc"),
        })
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Card(holderName={}, number={}, expiry={}/{})",
            or_null(&self.holder_name),
            masked(&self.number),
            or_null(&self.expiry_month),
            or_null(&self.expiry_year),
        )
    }
}

/// German direct debit (Elektronisches Lastschriftverfahren) details
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Elv {
    pub account_holder_name: Option<String>,
    pub bank_account_number: Option<String>,
    pub bank_location: Option<String>,
    pub bank_location_id: Option<String>,
    pub bank_name: Option<String>,
}

impl FromXml for Elv {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            account_holder_name: node.value("accountHolderName"),
            bank_account_number: node.value("bankAccountNumber"),
            bank_location: node.value("bankLocation"),
            bank_location_id: node.value("bankLocationId"),
            bank_name: node.value("bankName"),
        })
    }
}

impl Display for Elv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Elv(accountHolderName={}, bankAccountNumber={}, bankLocationId={}, bankName={})",
            or_null(&self.account_holder_name),
            masked(&self.bank_account_number),
            or_null(&self.bank_location_id),
            or_null(&self.bank_name),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub bank_account_number: Option<String>,
    pub bank_city: Option<String>,
    pub bank_location_id: Option<String>,
    pub bank_name: Option<String>,
    pub bic: Option<String>,
    pub country_code: Option<String>,
    pub iban: Option<String>,
    pub owner_name: Option<String>,
}

impl FromXml for BankAccount {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            bank_account_number: node.value("bankAccountNumber"),
            bank_city: node.value("bankCity"),
            bank_location_id: node.value("bankLocationId"),
            bank_name: node.value("bankName"),
            bic: node.value("bic"),
            country_code: node.value("countryCode"),
            iban: node.value("iban"),
            owner_name: node.value("ownerName"),
        })
    }
}

impl Display for BankAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BankAccount(ownerName={}, iban={}, bic={}, countryCode={})",
            or_null(&self.owner_name),
            masked(&self.iban),
            or_null(&self.bic),
            or_null(&self.country_code),
        )
    }
}

fn or_null(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("null")
}

fn masked(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(Masked::mask)
        .unwrap_or_else(|| "null".to_string())
}

fn optional<T: FromXml>(node: &XmlNode, name: &str) -> Result<Option<T>> {
    node.child(name).map(T::from_xml).transpose()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringDetail {
    pub recurring_detail_reference: Option<String>,
    /// Payment method, e.g. mc, visa, idealrabobank
    pub variant: Option<String>,
    pub creation_date: Option<String>,
    pub name: Option<String>,
    pub card: Option<Card>,
    pub elv: Option<Elv>,
    pub bank: Option<BankAccount>,
}

impl FromXml for RecurringDetail {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            recurring_detail_reference: node.value("recurringDetailReference"),
            variant: node.value("variant"),
            creation_date: node.value("creationDate"),
            name: node.value("name"),
            card: optional(node, "card")?,
            elv: optional(node, "elv")?,
            bank: optional(node, "bank")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringDetailsResult {
    pub creation_date: Option<String>,
    pub last_known_shopper_email: Option<String>,
    pub shopper_reference: Option<String>,
    pub details: Vec<RecurringDetail>,
}

impl FromXml for RecurringDetailsResult {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        let details = match node.child("details") {
            Some(details) => details
                .children_named("RecurringDetail")
                .map(RecurringDetail::from_xml)
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };
        Ok(Self {
            creation_date: node.value("creationDate"),
            last_known_shopper_email: node.value("lastKnownShopperEmail"),
            shopper_reference: node.value("shopperReference"),
            details,
        })
    }
}

/// Binding of the `Recurring` SOAP service
#[derive(Debug, Clone)]
pub struct RecurringService {
    client: SoapClient,
}

impl RecurringService {
    pub fn new(client: SoapClient) -> Self {
        Self { client }
    }

    pub async fn list_recurring_details(
        &self,
        request: &RecurringDetailsRequest,
    ) -> Result<RecurringDetailsResult> {
        self.client.call(request).await
    }
}
