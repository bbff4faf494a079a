use rocket::response::{Responder, Response};
use rocket::{
    http::{ContentType, Status},
    response,
    serde::json::Json,
    Request,
};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct ApiError {
    detail: String,
}

impl ApiError {
    pub(crate) fn new(detail: String) -> ApiError {
        ApiError { detail }
    }
}

#[derive(Debug)]
pub(crate) struct ErrorResponse<T = ApiError> {
    json: Json<T>,
    status: Status,
}

impl ErrorResponse<ApiError> {
    pub(crate) fn new(status: Status, detail: String) -> ErrorResponse<ApiError> {
        ErrorResponse {
            json: Json(ApiError { detail }),
            status,
        }
    }
}

impl<'r, T: serde::Serialize> Responder<'r, 'r> for ErrorResponse<T> {
    fn respond_to(self, req: &'r Request) -> response::Result<'r> {
        Response::build_from(self.json.respond_to(&req).unwrap())
            .status(self.status)
            .header(ContentType::JSON)
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_serializes_with_detail_field() {
        let err = ApiError::new("User not found".to_string());
        let body = serde_json::to_string(&err).unwrap();
        assert_eq!(body, r#"{"detail":"User not found"}"#);
    }
}
