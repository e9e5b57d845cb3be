//! Typed path parameters.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

use crate::http::response::route_not_found;

/// Integer `{id}` segment of the product detail route.
///
/// Only a non-empty run of ASCII digits is accepted; anything else (signs,
/// decimals, letters) is answered like an unknown path before the handler
/// runs. Digit runs of any length are accepted, so an id too large for
/// `u32` still reaches the handler and resolves to no product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductId {
    digits: String,
}

impl ProductId {
    /// Parse a path segment, returning `None` unless it is all ASCII digits.
    pub fn parse(segment: &str) -> Option<Self> {
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self {
                digits: segment.to_string(),
            })
        } else {
            None
        }
    }

    /// The numeric id, or `None` when it overflows `u32`.
    pub fn value(&self) -> Option<u32> {
        self.digits.parse().ok()
    }

    /// The id as written in the path.
    pub fn as_str(&self) -> &str {
        &self.digits
    }
}

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let segment = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(segment)) => segment,
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Missing product id segment");
                return Err(route_not_found().await.into_response());
            }
        };

        match ProductId::parse(&segment) {
            Some(id) => Ok(id),
            None => {
                tracing::debug!(
                    path = %parts.uri.path(),
                    segment = %segment,
                    "Rejected non-integer product id"
                );
                Err(route_not_found().await.into_response())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits_only() {
        assert_eq!(ProductId::parse("4").unwrap().value(), Some(4));
        assert_eq!(ProductId::parse("007").unwrap().value(), Some(7));

        for segment in ["", "+1", "-1", "1.5", "abc", "1a", " 1", "١"] {
            assert!(ProductId::parse(segment).is_none(), "{segment:?}");
        }
    }

    #[test]
    fn test_overflowing_id_is_accepted_without_value() {
        let id = ProductId::parse("4294967296").unwrap();
        assert_eq!(id.value(), None);
        assert_eq!(id.as_str(), "4294967296");

        let id = ProductId::parse("4294967295").unwrap();
        assert_eq!(id.value(), Some(u32::MAX));
    }
}
