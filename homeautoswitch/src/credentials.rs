use secrecy::SecretString;

use crate::error::{FritzError, Result};

/// Root url of the fritz box, always with a scheme and without trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Accepts a bare host (`fritz.box`, `192.168.178.1:8080`) or a full url.
    /// `http://` is only prepended when neither `http://` nor `https://` is given.
    pub fn new(host: &str) -> Result<Self> {
        let host = host.trim();
        let (scheme, rest) = if let Some(rest) = host.strip_prefix("http://") {
            ("http", rest)
        } else if let Some(rest) = host.strip_prefix("https://") {
            ("https", rest)
        } else {
            ("http", host)
        };
        let rest = rest.trim_end_matches('/');
        if rest.is_empty() {
            return Err(FritzError::InvalidBaseUrl(host.to_string()));
        }
        Ok(BaseUrl(format!("{}://{}", scheme, rest)))
    }

    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for BaseUrl {
    type Err = FritzError;

    fn from_str(input: &str) -> Result<Self> {
        BaseUrl::new(input)
    }
}

/// What is needed to log into the fritz box. The password is never printed.
#[derive(Debug)]
pub struct Credentials {
    pub user: String,
    pub password: SecretString,
    pub base_url: BaseUrl,
}

impl Credentials {
    pub fn new(user: impl ToString, password: impl Into<String>, base_url: BaseUrl) -> Self {
        Credentials {
            user: user.to_string(),
            password: SecretString::from(password.into()),
            base_url,
        }
    }
}
