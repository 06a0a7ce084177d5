pub(crate) mod common;
pub(crate) mod http_client;
pub(crate) mod http_request;
pub(crate) mod http_response;

pub use common::{HTTPError, RosterStore};
pub use http_request::request_common::RequestError;
pub use http_response::response_common::ResponseError;
