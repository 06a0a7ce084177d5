use super::http_request::request_common::RequestError;
use crate::config::{ClientConfig, Credentials};

/// A thin wrapper around `reqwest::Client` bound to the roster service.
///
/// Holds the parsed base URL and the optional basic-auth credentials that
/// `send_request` attaches to every call.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Root URL of the API, endpoint path segments are appended to it.
    base_url: reqwest::Url,
    /// Credentials for HTTP basic authentication.
    credentials: Option<Credentials>,
}

impl HTTPClient {
    /// Builds a client from the given configuration.
    ///
    /// # Errors
    /// Fails if the base URL does not parse or cannot carry path segments, or
    /// if the TLS/HTTP backend of `reqwest` fails to initialize.
    pub(crate) fn new(config: &ClientConfig) -> Result<HTTPClient, RequestError> {
        let base_url = reqwest::Url::parse(config.base_url())
            .map_err(|e| RequestError::InvalidUrl(format!("{}: {e}", config.base_url())))?;
        if base_url.cannot_be_a_base() {
            return Err(RequestError::InvalidUrl(config.base_url().to_string()));
        }
        let client = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(HTTPClient { client, base_url, credentials: config.credentials().cloned() })
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }

    /// Returns the base URL that the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }

    pub(super) fn credentials(&self) -> Option<&Credentials> { self.credentials.as_ref() }

    /// Appends `segments` to the base URL, percent-encoding each one.
    pub(super) fn endpoint_url(&self, segments: &[&str]) -> Result<reqwest::Url, RequestError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| RequestError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::HTTPClient;
    use crate::config::ClientConfig;

    #[test]
    fn test_endpoint_url_encodes_segments() {
        let client = HTTPClient::new(&ClientConfig::new("http://localhost:8080/api")).unwrap();
        let url = client.endpoint_url(&["roster", "candidates", "pilots", "Boeing 737-800"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/roster/candidates/pilots/Boeing%20737-800");
    }

    #[test]
    fn test_endpoint_url_trailing_slash() {
        let client = HTTPClient::new(&ClientConfig::new("http://localhost:8080/api/")).unwrap();
        let url = client.endpoint_url(&["roster", "flights"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/roster/flights");
    }

    #[test]
    fn test_rejects_invalid_base() {
        assert!(HTTPClient::new(&ClientConfig::new("not a url")).is_err());
        assert!(HTTPClient::new(&ClientConfig::new("mailto:ops@example.com")).is_err());
    }
}
