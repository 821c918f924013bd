use serde::Serialize;

use crate::soap::{
    Result,
    error::{SoapError, SoapFault},
    xml::{FromXml, XmlNode, XmlResult, XmlWriter},
};

pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// A remote operation: how to write its body and where its result lives in the reply
pub trait SoapOperation: Serialize {
    /// Operation element name, e.g. `authorise`
    const NAME: &'static str;
    /// Element inside `<{NAME}Response>` holding the result
    const RESULT: &'static str;
    type Output: FromXml + Serialize;

    fn write_body(&self, xml: &mut XmlWriter) -> XmlResult<()>;
}

pub fn encode<O: SoapOperation>(operation: &O) -> XmlResult<String> {
    let mut xml = XmlWriter::new();
    xml.declaration()?;
    xml.start(
        "soap:Envelope",
        &[
            ("xmlns:soap", SOAP_ENV_NS),
            ("xmlns:xsd", XSD_NS),
            ("xmlns:xsi", XSI_NS),
        ],
    )?;
    xml.start("soap:Body", &[])?;
    operation.write_body(&mut xml)?;
    xml.end("soap:Body")?;
    xml.end("soap:Envelope")?;
    Ok(xml.into_string())
}

/// Decode a provider reply. Faults win over the HTTP status since they arrive with 500.
pub fn decode<O: SoapOperation>(body: &str, status: reqwest::StatusCode) -> Result<O::Output> {
    let document = match XmlNode::parse(body) {
        Ok(document) => document,
        Err(_) if !status.is_success() => {
            return Err(SoapError::UnexpectedStatus(status.as_u16()));
        }
        Err(e) => return Err(e),
    };
    if document.name != "Envelope" {
        if !status.is_success() {
            return Err(SoapError::UnexpectedStatus(status.as_u16()));
        }
        return Err(SoapError::Malformed(format!(
            "expected Envelope, found {}",
            document.name
        )));
    }
    let payload = document
        .child("Body")
        .and_then(|body| body.children.first())
        .ok_or_else(|| {
            if status.is_success() {
                SoapError::Malformed("empty soap body".into())
            } else {
                SoapError::UnexpectedStatus(status.as_u16())
            }
        })?;

    if payload.name == "Fault" {
        return Err(SoapFault::from_node(payload).into());
    }
    if !status.is_success() {
        return Err(SoapError::UnexpectedStatus(status.as_u16()));
    }

    let expected = format!("{}Response", O::NAME);
    if payload.name != expected {
        return Err(SoapError::Malformed(format!(
            "expected {expected}, found {}",
            payload.name
        )));
    }
    let result = payload
        .child(O::RESULT)
        .ok_or_else(|| SoapError::Malformed(format!("{expected} has no {}", O::RESULT)))?;
    O::Output::from_xml(result)
}
