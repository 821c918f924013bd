//! Runtime settings.
//!
//! Every value has an example placeholder so the service starts out of the box; an
//! integrator replaces them through the environment or a `.env` file.

use std::{env, time::Duration};

use crate::soap::auth::Credentials;

fn get_env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_parsed_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, raw: &str, default: T) -> T {
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, value = raw, "Unparsable setting, falling back to default");
            default
        }
    }
}

#[derive(Clone)]
pub struct Settings {
    pub port: u16,
    /// Base of the SOAP servlet, services live at `{pal_url}/Payment` and `{pal_url}/Recurring`
    pub pal_url: String,
    pub ws_user: String,
    pub ws_password: String,
    pub merchant_account: String,
    /// Client-side encryption library served by the provider for this merchant
    pub cse_library_url: String,
    pub request_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: 3030,
            pal_url: "https://pal-test.adyen.com/pal/servlet/soap".into(),
            ws_user: "YourWSUser".into(),
            ws_password: "YourWSPassword".into(),
            merchant_account: "YourMerchantAccount".into(),
            cse_library_url: "https://test.adyen.com/hpp/cse/js/YourCSEToken.shtml".into(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: get_env_parsed_or("PORT", defaults.port),
            pal_url: get_env_or("ADYEN_PAL_URL", &defaults.pal_url)
                .trim_end_matches('/')
                .to_string(),
            ws_user: get_env_or("ADYEN_WS_USER", &defaults.ws_user),
            ws_password: get_env_or("ADYEN_WS_PASSWORD", &defaults.ws_password),
            merchant_account: get_env_or("ADYEN_MERCHANT_ACCOUNT", &defaults.merchant_account),
            cse_library_url: get_env_or("ADYEN_CSE_LIBRARY_URL", &defaults.cse_library_url),
            request_timeout: Duration::from_secs(get_env_parsed_or(
                "ADYEN_TIMEOUT_SECS",
                defaults.request_timeout.as_secs(),
            )),
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            user: self.ws_user.clone(),
            password: self.ws_password.clone(),
        }
    }

    pub fn payment_endpoint(&self) -> String {
        format!("{}/Payment", self.pal_url)
    }

    pub fn recurring_endpoint(&self) -> String {
        format!("{}/Recurring", self.pal_url)
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("port", &self.port)
            .field("pal_url", &self.pal_url)
            .field("ws_user", &self.ws_user)
            .field("ws_password", &"***")
            .field("merchant_account", &self.merchant_account)
            .field("cse_library_url", &self.cse_library_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
