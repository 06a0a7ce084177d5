use super::response_common::{HTTPResponseType, ResponseError, read_text_body};

/// Plain text confirmation such as `Saved to sql`.
#[derive(Debug)]
pub(crate) struct SaveRosterResponse {}

impl HTTPResponseType for SaveRosterResponse {
    type ParsedResponseType = String;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        read_text_body(resp).await
    }
}
