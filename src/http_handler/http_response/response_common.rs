use std::fmt;

pub(crate) trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>
    where
        Self::ParsedResponseType: for<'de> serde::Deserialize<'de>,
    {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

pub(crate) trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status == reqwest::StatusCode::NOT_FOUND {
            Err(ResponseError::NotFound)
        } else if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            Err(ResponseError::Unauthorized)
        } else if status.is_server_error() {
            Err(ResponseError::InternalServer(response.text().await.unwrap_or_default()))
        } else if status.is_client_error() {
            Err(ResponseError::BadRequest(response.text().await.unwrap_or_default()))
        } else {
            Err(ResponseError::Unknown(status.as_u16()))
        }
    }
}

/// Reads a plain text body after the status check.
pub(crate) async fn read_text_body(response: reqwest::Response) -> Result<String, ResponseError> {
    Ok(response.text().await?)
}

#[derive(Debug)]
pub enum ResponseError {
    /// 5xx, carrying the text the service sent back.
    InternalServer(String),
    /// 4xx other than 401/403/404, carrying the text the service sent back.
    BadRequest(String),
    NotFound,
    Unauthorized,
    NoConnection,
    Malformed(String),
    Unknown(u16),
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseError::InternalServer(body) => write!(f, "roster service error: {body}"),
            ResponseError::BadRequest(body) => write!(f, "request rejected: {body}"),
            ResponseError::NotFound => write!(f, "not found"),
            ResponseError::Unauthorized => write!(f, "login failed, check credentials"),
            ResponseError::NoConnection => write!(f, "connection lost while reading response"),
            ResponseError::Malformed(msg) => write!(f, "unreadable response: {msg}"),
            ResponseError::Unknown(code) => write!(f, "unexpected status {code}"),
        }
    }
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            ResponseError::Malformed(value.to_string())
        } else if value.is_timeout() || value.is_connect() {
            ResponseError::NoConnection
        } else {
            ResponseError::Malformed(value.to_string())
        }
    }
}
