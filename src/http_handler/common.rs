use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use std::fmt;
use strum_macros::{Display, EnumString};

/// Backing store the roster service persists a saved roster into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RosterStore {
    #[default]
    Sql,
    Mongo,
}

#[derive(Debug)]
pub enum HTTPError {
    HTTPRequestError(RequestError),
    HTTPResponseError(ResponseError),
}

impl HTTPError {
    /// Whether the service could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            HTTPError::HTTPRequestError(RequestError::NoConnection | RequestError::Timeout)
                | HTTPError::HTTPResponseError(
                    ResponseError::NoConnection | ResponseError::InternalServer(_)
                )
        )
    }
}

impl fmt::Display for HTTPError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HTTPError::HTTPRequestError(e) => write!(f, "{e}"),
            HTTPError::HTTPResponseError(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for HTTPError {}

impl From<RequestError> for HTTPError {
    fn from(value: RequestError) -> Self { HTTPError::HTTPRequestError(value) }
}

impl From<ResponseError> for HTTPError {
    fn from(value: ResponseError) -> Self { HTTPError::HTTPResponseError(value) }
}

#[cfg(test)]
mod tests {
    use super::{HTTPError, RosterStore};
    use crate::http_handler::http_request::request_common::RequestError;
    use crate::http_handler::http_response::response_common::ResponseError;
    use std::str::FromStr;

    #[test]
    fn test_store_names() {
        assert_eq!(RosterStore::Sql.to_string(), "sql");
        assert_eq!(RosterStore::Mongo.to_string(), "mongo");
        assert_eq!(RosterStore::from_str("MONGO").unwrap(), RosterStore::Mongo);
        assert!(RosterStore::from_str("redis").is_err());
    }

    #[test]
    fn test_unavailable_classification() {
        assert!(HTTPError::from(RequestError::NoConnection).is_unavailable());
        assert!(HTTPError::from(ResponseError::InternalServer(String::new())).is_unavailable());
        assert!(!HTTPError::from(ResponseError::Unauthorized).is_unavailable());
        assert!(!HTTPError::from(RequestError::InvalidUrl(String::from("x"))).is_unavailable());
    }
}
