//! Request ID assignment and propagation.
//!
//! # Responsibilities
//! - Generate a UUID v4 request ID when the client sent none
//! - Keep a client-supplied `x-request-id` untouched
//! - Echo the ID back on the response
//!
//! # Design Decisions
//! - Request ID added as the outermost layer so traces carry it

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV4;

impl MakeRequestId for MakeRequestUuidV4 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Layer that stamps requests lacking an ID.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuidV4> {
    SetRequestIdLayer::x_request_id(MakeRequestUuidV4)
}

/// Layer that copies the request ID onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

/// Read the request ID header, if present and valid UTF-8.
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}
