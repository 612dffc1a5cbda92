//! Path parameter extraction.
//!
//! Captures are percent-decoded lossily: bytes that are not valid UTF-8
//! become U+FFFD instead of failing the request, so every route keeps its
//! JSON contract. Numeric routes then reject the replacement character as
//! an invalid number.

use axum::{
    extract::{FromRequestParts, MatchedPath},
    http::request::Parts,
};

use crate::http::error::ApiError;

/// The `N` captures of the matched route, in template order.
#[derive(Debug)]
pub struct LossyPath<const N: usize>(pub [String; N]);

/// Decode one raw path segment, replacing invalid UTF-8.
pub fn decode_segment(raw: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}

/// Values of the `{name}` segments of `template` within `path`.
pub fn captures(template: &str, path: &str) -> Vec<String> {
    template
        .split('/')
        .zip(path.split('/'))
        .filter(|(pattern, _)| pattern.starts_with('{'))
        .map(|(_, raw)| decode_segment(raw))
        .collect()
}

impl<S, const N: usize> FromRequestParts<S> for LossyPath<N>
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path();
        let template = parts
            .extensions
            .get::<MatchedPath>()
            .ok_or_else(|| ApiError::PathParams(path.to_string()))?;

        <[String; N]>::try_from(captures(template.as_str(), path))
            .map(LossyPath)
            .map_err(|_| ApiError::PathParams(path.to_string()))
    }
}
