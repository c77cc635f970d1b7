//! Client configuration consumed by request executors.
//!
//! # Design
//! Endpoint functions never see the configuration: they emit path templates
//! containing `{accountname}`. An executor holds a `ClientConfig` and calls
//! `url_for` to turn a built request into an absolute URL.

use crate::error::ApiError;
use crate::http::HttpRequest;

pub const DEFAULT_BASE_URL: &str = "https://apps.ticketmatic.com/api/1";

const BASE_URL_ENV: &str = "TICKETMATIC_BASE_URL";
const ACCOUNTNAME_ENV: &str = "TICKETMATIC_ACCOUNTNAME";

/// Where and for which account requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    accountname: String,
}

impl ClientConfig {
    pub fn new(base_url: &str, accountname: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            accountname: accountname.to_string(),
        }
    }

    /// Read `TICKETMATIC_BASE_URL` (optional) and `TICKETMATIC_ACCOUNTNAME`.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from `lookup`, which maps a variable name to
    /// its value. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let base_url = lookup(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let accountname = lookup(ACCOUNTNAME_ENV)
            .ok_or_else(|| ApiError::Config(format!("{ACCOUNTNAME_ENV} is not set")))?;
        if accountname.trim().is_empty() {
            return Err(ApiError::Config(format!("{ACCOUNTNAME_ENV} is empty")));
        }
        Ok(Self::new(&base_url, &accountname))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn accountname(&self) -> &str {
        &self.accountname
    }

    /// Absolute URL for `request`: base URL, path with `{accountname}` and
    /// the per-call parameters substituted, and the encoded query string.
    pub fn url_for(&self, request: &HttpRequest) -> Result<String, ApiError> {
        let path = request
            .resolved_path()
            .replace("{accountname}", &self.accountname);
        if request.query.is_empty() {
            return Ok(format!("{}{path}", self.base_url));
        }
        let query = serde_urlencoded::to_string(&request.query)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(format!("{}{path}?{query}", self.base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    fn config() -> ClientConfig {
        ClientConfig::new("http://localhost:3000/", "demo")
    }

    #[test]
    fn trailing_slash_is_stripped() {
        assert_eq!(config().base_url(), "http://localhost:3000");
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone())
    }

    #[test]
    fn lookup_defaults_base_url() {
        let config = ClientConfig::from_lookup(vars(&[("TICKETMATIC_ACCOUNTNAME", "demo")])).unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.accountname(), "demo");
    }

    #[test]
    fn lookup_honors_base_url_override() {
        let config = ClientConfig::from_lookup(vars(&[
            ("TICKETMATIC_BASE_URL", "http://localhost:8080/"),
            ("TICKETMATIC_ACCOUNTNAME", "demo"),
        ]))
        .unwrap();
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn lookup_requires_accountname() {
        let err = ClientConfig::from_lookup(vars(&[])).unwrap_err();
        assert!(matches!(err, ApiError::Config(ref m) if m.contains("not set")));

        let err = ClientConfig::from_lookup(vars(&[("TICKETMATIC_ACCOUNTNAME", "  ")])).unwrap_err();
        assert!(matches!(err, ApiError::Config(ref m) if m.contains("empty")));
    }

    #[test]
    fn url_for_substitutes_accountname_and_params() {
        let req = HttpRequest::new(HttpMethod::Get, "/{accountname}/settings/system/customfields/{id}")
            .param("id", 42);
        assert_eq!(
            config().url_for(&req).unwrap(),
            "http://localhost:3000/demo/settings/system/customfields/42"
        );
    }

    #[test]
    fn url_for_encodes_query() {
        let req = HttpRequest::new(HttpMethod::Get, "/{accountname}/settings/system/customfields")
            .query("filter", Some("a b&c"))
            .query("includearchived", Some(true));
        assert_eq!(
            config().url_for(&req).unwrap(),
            "http://localhost:3000/demo/settings/system/customfields?filter=a+b%26c&includearchived=true"
        );
    }
}
