use std::fmt::Display;

use serde::Serialize;

use crate::soap::xml::XmlNode;

/// `<soap:Fault>` returned by the provider, usually with HTTP 500
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoapFault {
    pub code: String,
    pub message: String,
}

impl SoapFault {
    pub fn from_node(node: &XmlNode) -> Self {
        Self {
            code: node.value("faultcode").unwrap_or_default(),
            message: node.value("faultstring").unwrap_or_default(),
        }
    }
}

#[derive(Debug)]
pub enum SoapError {
    RequestError(reqwest::Error),
    Fault(SoapFault),
    UnexpectedStatus(u16),
    Xml(quick_xml::Error),
    Malformed(String),
}

impl From<reqwest::Error> for SoapError {
    fn from(value: reqwest::Error) -> Self {
        Self::RequestError(value)
    }
}

impl From<quick_xml::Error> for SoapError {
    fn from(value: quick_xml::Error) -> Self {
        Self::Xml(value)
    }
}

impl From<SoapFault> for SoapError {
    fn from(value: SoapFault) -> Self {
        Self::Fault(value)
    }
}

impl std::error::Error for SoapError {}

impl Display for SoapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoapError::RequestError(e) => write!(f, "http request error: {e}"),
            SoapError::Fault(fault) => write!(f, "soap fault ({}): {}", fault.code, fault.message),
            SoapError::UnexpectedStatus(status) => {
                write!(f, "unexpected http status {status} without soap fault")
            }
            SoapError::Xml(e) => write!(f, "xml error: {e}"),
            SoapError::Malformed(reason) => write!(f, "malformed soap response: {reason}"),
        }
    }
}
