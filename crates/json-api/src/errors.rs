//! API error rendering.

use std::collections::BTreeMap;

use jiff::Timestamp;
use salvo::{
    Scribe,
    catcher::Catcher,
    http::{ResBody, StatusCode},
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::{FlowCtrl, Json, Response, handler},
};
use serde::{Deserialize, Serialize};

/// Error Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorResponse {
    /// When the error was produced (RFC 3339)
    pub timestamp: String,

    /// Human-readable error message
    pub message: String,

    /// Per-field validation messages keyed by JSON field name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<BTreeMap<String, String>>,
}

/// Request failure rendered as an [`ErrorResponse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
    field_errors: Option<BTreeMap<String, String>>,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            field_errors: None,
        }
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }

    /// 400 carrying one message per rejected field.
    pub(crate) fn invalid_fields(field_errors: BTreeMap<String, String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Bad Request".to_string(),
            field_errors: Some(field_errors),
        }
    }

    #[cfg(test)]
    pub(crate) fn status(&self) -> StatusCode {
        self.status
    }

    #[cfg(test)]
    pub(crate) fn message(&self) -> &str {
        &self.message
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(ErrorResponse {
            timestamp: Timestamp::now().to_string(),
            message: self.message,
            field_errors: self.field_errors,
        }));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Bad Request"),
            (StatusCode::NOT_FOUND, "Not Found"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(description)
                    .add_content("application/json", ErrorResponse::to_schema(components)),
            );
        }
    }
}

/// Renders errors raised outside handlers as an [`ErrorResponse`].
///
/// Covers extractor failures (non-numeric path ids, malformed bodies) and
/// unmatched routes, which salvo otherwise renders in its own format.
#[handler]
async fn render_status_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);

    if !(status.is_client_error() || status.is_server_error()) {
        return;
    }

    if !(res.body.is_none() || res.body.is_error()) {
        return;
    }

    res.body = ResBody::None;

    ApiError::new(status, status.canonical_reason().unwrap_or("Error")).render(res);

    ctrl.skip_rest();
}

/// Catcher that keeps every error body in the [`ErrorResponse`] shape.
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(render_status_error)
}
