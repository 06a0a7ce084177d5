use super::super::common::HTTPError;
use super::super::http_client::HTTPClient;
use super::super::http_response::response_common::HTTPResponseType;
use std::fmt;

pub(crate) enum HTTPRequest<T>
where
    T: HTTPRequestType,
{
    Get(T),
    Post(T),
}

pub(crate) trait HTTPRequestType: Into<HTTPRequest<Self>> {
    type Response: HTTPResponseType;
    type Body: serde::Serialize;

    /// Path segments below the API root, unencoded.
    fn endpoint(&self) -> Vec<&str>;
    fn body(&self) -> &Self::Body;
    fn query_params(&self) -> Vec<(&'static str, String)> { Vec::new() }
    fn header_params(&self) -> reqwest::header::HeaderMap { reqwest::header::HeaderMap::new() }

    async fn send_request(
        self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let request: HTTPRequest<Self> = self.into();
        let builder = match &request {
            HTTPRequest::Get(req) => client
                .client()
                .get(client.endpoint_url(&req.endpoint())?)
                .headers(req.header_params())
                .query(&req.query_params()),
            HTTPRequest::Post(req) => client
                .client()
                .post(client.endpoint_url(&req.endpoint())?)
                .headers(req.header_params())
                .query(&req.query_params())
                .json(req.body()),
        };
        let builder = match client.credentials() {
            Some(creds) => builder.basic_auth(creds.username(), Some(creds.password())),
            None => builder,
        };
        let response = builder.send().await.map_err(RequestError::from)?;
        Ok(<Self::Response as HTTPResponseType>::read_response(response).await?)
    }
}

pub(crate) fn json_content_header() -> reqwest::header::HeaderMap {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::CONTENT_TYPE,
        reqwest::header::HeaderValue::from_static("application/json"),
    );
    headers
}

#[derive(Debug)]
pub enum RequestError {
    InvalidUrl(String),
    NoConnection,
    Timeout,
    Failed(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidUrl(url) => write!(f, "invalid service url {url}"),
            RequestError::NoConnection => write!(f, "could not connect to the roster service"),
            RequestError::Timeout => write!(f, "roster service did not answer in time"),
            RequestError::Failed(msg) => write!(f, "request failed: {msg}"),
        }
    }
}

impl std::error::Error for RequestError {}

impl From<reqwest::Error> for RequestError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_connect() {
            RequestError::NoConnection
        } else if value.is_timeout() {
            RequestError::Timeout
        } else {
            RequestError::Failed(value.to_string())
        }
    }
}
