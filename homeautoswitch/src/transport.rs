use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::debug;

use crate::error::{FritzError, Result};

/// Issues GET requests against the fritz box and hands back the response body.
pub trait Transport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        (**self).get(url, query)
    }
}

/// Blocking [`Transport`] backed by reqwest.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// The fritz box ships with a self-signed certificate, so `https://` base
    /// urls usually need `accept_invalid_certs`.
    pub fn new(accept_invalid_certs: bool) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        let response = self.client.get(url).query(query).send()?;
        let status = response.status();
        debug!(
            "[fritz api] GET {} status: {:?} {:?}",
            url,
            status,
            status.canonical_reason().unwrap_or_default()
        );
        if status == StatusCode::FORBIDDEN {
            return Err(FritzError::Forbidden);
        }
        Ok(response.error_for_status()?.text()?)
    }
}
