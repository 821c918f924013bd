use std::{collections::BTreeMap, convert::Infallible, fmt::Display, str::FromStr};

use serde::Serialize;

use crate::soap::{
    Result, SoapClient,
    envelope::SoapOperation,
    xml::{FromXml, XmlNode, XmlResult, XmlWriter},
};

pub const PAYMENT_NS: &str = "http://payment.services.adyen.com";
pub const COMMON_NS: &str = "http://common.services.adyen.com";

/// Additional data key carrying the client-side encrypted card blob
pub const ENCRYPTED_CARD_KEY: &str = "card.encrypted.json";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Amount {
    pub currency: String,
    /// Minor units, e.g. EUR 1,00 = 100
    pub value: i64,
}

impl Amount {
    pub fn new(currency: impl Into<String>, value: i64) -> Self {
        Self {
            currency: currency.into(),
            value,
        }
    }

    fn write(&self, xml: &mut XmlWriter) -> XmlResult<()> {
        xml.start("ns1:amount", &[])?;
        xml.element("ns2:currency", &self.currency)?;
        xml.element("ns2:value", &self.value.to_string())?;
        xml.end("ns1:amount")
    }
}

/// `AnyType2AnyTypeMap` restricted to string entries
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AdditionalData(BTreeMap<String, String>);

impl AdditionalData {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn write(&self, xml: &mut XmlWriter) -> XmlResult<()> {
        if self.is_empty() {
            return Ok(());
        }
        let string_type = [("xsi:type", "xsd:string")];
        xml.start("ns1:additionalData", &[])?;
        for (key, value) in &self.0 {
            xml.start("ns1:entry", &[])?;
            xml.element_with("ns1:key", &string_type, key)?;
            xml.element_with("ns1:value", &string_type, value)?;
            xml.end("ns1:entry")?;
        }
        xml.end("ns1:additionalData")
    }
}

impl FromXml for AdditionalData {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        let mut data = Self::default();
        for entry in node.children_named("entry") {
            if let (Some(key), Some(value)) = (entry.value("key"), entry.value("value")) {
                data.insert(key, value);
            }
        }
        Ok(data)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub merchant_account: String,
    pub amount: Amount,
    pub reference: String,
    #[serde(rename = "shopperIP", skip_serializing_if = "Option::is_none")]
    pub shopper_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraud_offset: Option<i32>,
    pub additional_data: AdditionalData,
}

impl SoapOperation for PaymentRequest {
    const NAME: &'static str = "authorise";
    const RESULT: &'static str = "paymentResult";
    type Output = PaymentResult;

    // Elements follow the schema's alphabetical sequence
    fn write_body(&self, xml: &mut XmlWriter) -> XmlResult<()> {
        xml.start(
            "ns1:authorise",
            &[("xmlns:ns1", PAYMENT_NS), ("xmlns:ns2", COMMON_NS)],
        )?;
        xml.start("ns1:paymentRequest", &[])?;
        self.additional_data.write(xml)?;
        self.amount.write(xml)?;
        if let Some(fraud_offset) = self.fraud_offset {
            xml.element("ns1:fraudOffset", &fraud_offset.to_string())?;
        }
        xml.element("ns1:merchantAccount", &self.merchant_account)?;
        xml.element("ns1:reference", &self.reference)?;
        xml.optional("ns1:shopperEmail", self.shopper_email.as_deref())?;
        xml.optional("ns1:shopperIP", self.shopper_ip.as_deref())?;
        xml.optional("ns1:shopperReference", self.shopper_reference.as_deref())?;
        xml.end("ns1:paymentRequest")?;
        xml.end("ns1:authorise")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultCode {
    Authorised,
    Refused,
    Error,
    Received,
    RedirectShopper,
    Pending,
    Cancelled,
    Other(String),
}

impl FromStr for ResultCode {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "Authorised" => Self::Authorised,
            "Refused" => Self::Refused,
            "Error" => Self::Error,
            "Received" => Self::Received,
            "RedirectShopper" => Self::RedirectShopper,
            "Pending" => Self::Pending,
            "Cancelled" => Self::Cancelled,
            other => Self::Other(other.to_string()),
        })
    }
}

impl Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Authorised => f.write_str("Authorised"),
            Self::Refused => f.write_str("Refused"),
            Self::Error => f.write_str("Error"),
            Self::Received => f.write_str("Received"),
            Self::RedirectShopper => f.write_str("RedirectShopper"),
            Self::Pending => f.write_str("Pending"),
            Self::Cancelled => f.write_str("Cancelled"),
            Self::Other(code) => f.write_str(code),
        }
    }
}

impl Serialize for ResultCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    pub psp_reference: Option<String>,
    pub result_code: Option<ResultCode>,
    pub auth_code: Option<String>,
    pub refusal_reason: Option<String>,
    pub additional_data: AdditionalData,
}

impl FromXml for PaymentResult {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        let additional_data = match node.child("additionalData") {
            Some(data) => AdditionalData::from_xml(data)?,
            None => AdditionalData::default(),
        };
        Ok(Self {
            psp_reference: node.value("pspReference"),
            result_code: node.parsed("resultCode")?,
            auth_code: node.value("authCode"),
            refusal_reason: node.value("refusalReason"),
            additional_data,
        })
    }
}

/// Binding of the `Payment` SOAP service
#[derive(Debug, Clone)]
pub struct PaymentService {
    client: SoapClient,
}

impl PaymentService {
    pub fn new(client: SoapClient) -> Self {
        Self { client }
    }

    pub async fn authorise(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        self.client.call(request).await
    }
}
