use super::response_common::{HTTPResponseType, ResponseError};
use crate::model::Roster;

/// Latest saved roster of a flight; `None` when the service has none (404).
#[derive(Debug)]
pub(crate) struct GenerateRosterResponse {}

impl HTTPResponseType for GenerateRosterResponse {
    type ParsedResponseType = Option<Roster>;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        match Self::unwrap_return_code(response).await {
            Ok(resp) => Ok(Some(resp.json::<Roster>().await?)),
            Err(ResponseError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
