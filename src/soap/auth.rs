use axum::http::{HeaderMap, HeaderName, HeaderValue, header};
use base64::{Engine, prelude::BASE64_STANDARD};

/// Web service user credentials sent as HTTP basic auth
#[derive(Clone)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

pub fn authenticated_headers(credentials: &Credentials) -> HeaderMap {
    let auth = BASE64_STANDARD.encode(format!("{}:{}", credentials.user, credentials.password));
    let mut map = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&format!("Basic {auth}")) {
        map.insert(header::AUTHORIZATION, value);
    }
    map.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/xml; charset=utf-8"),
    );
    map.insert(
        HeaderName::from_static("soapaction"),
        HeaderValue::from_static("\"\""),
    );
    map
}
