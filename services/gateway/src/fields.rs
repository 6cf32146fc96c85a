//! Request field parsing and validation
//!
//! Raw form values arrive as strings; an absent field reads as `""`. Every
//! parser here is pure, so a rejected field never reaches the session cache.

use std::collections::HashMap;
use std::str::FromStr;

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, FromRequest, Query, Request};
use axum::http::Method;
use rust_decimal::Decimal;
use thiserror::Error;
use types::order::Side;

use crate::error::AppError;

#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("Side should be either 0 or 1")]
    InvalidSide,

    #[error("{0} can not be empty")]
    Empty(&'static str),

    #[error("Invalid {0}")]
    InvalidDecimal(&'static str),

    #[error("Missing {0}")]
    Missing(&'static str),

    #[error("Malformed form data: {0}")]
    MalformedForm(String),
}

/// Parse the side token: `"0"` is buy, `"1"` is sell
pub fn parse_side(raw: &str) -> Result<Side, FieldError> {
    match raw {
        "0" => Ok(Side::Buy),
        "1" => Ok(Side::Sell),
        _ => Err(FieldError::InvalidSide),
    }
}

/// Parse a decimal field; sign and range are not checked here
pub fn parse_decimal(field: &'static str, raw: &str) -> Result<Decimal, FieldError> {
    if raw.is_empty() {
        return Err(FieldError::Empty(field));
    }
    Decimal::from_str(raw).map_err(|_| FieldError::InvalidDecimal(field))
}

/// Reject an empty required field
pub fn require<'a>(field: &'static str, raw: &'a str) -> Result<&'a str, FieldError> {
    if raw.is_empty() {
        Err(FieldError::Missing(field))
    } else {
        Ok(raw)
    }
}

/// Form values of a request: URL query parameters overlaid with an
/// `application/x-www-form-urlencoded` body
#[derive(Debug, Default, Clone)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    /// Value of `key`, or `""` when absent
    pub fn value(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or_default()
    }
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut fields = Query::<HashMap<String, String>>::try_from_uri(req.uri())
            .map(|Query(query)| query)
            .map_err(|e| FieldError::MalformedForm(e.body_text()))?;

        // `Form` reads the query string again for GET/HEAD, so only look at bodies
        if req.method() != Method::GET && req.method() != Method::HEAD {
            match Form::<HashMap<String, String>>::from_request(req, state).await {
                Ok(Form(body)) => fields.extend(body),
                Err(FormRejection::InvalidFormContentType(_)) => {}
                Err(e) => return Err(FieldError::MalformedForm(e.body_text()).into()),
            }
        }

        Ok(Self(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{self, header::CONTENT_TYPE};
    use proptest::prelude::*;

    #[test]
    fn test_parse_side_valid() {
        assert_eq!(parse_side("0"), Ok(Side::Buy));
        assert_eq!(parse_side("1"), Ok(Side::Sell));
    }

    #[test]
    fn test_parse_side_invalid() {
        for raw in ["", "2", "10", "buy", " 0", "01"] {
            assert_eq!(parse_side(raw), Err(FieldError::InvalidSide), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_parse_decimal_valid() {
        assert_eq!(parse_decimal("price", "4.5"), Ok(Decimal::new(45, 1)));
        // Sign is deliberately left to the matching engine
        assert_eq!(parse_decimal("quantity", "-3"), Ok(Decimal::from(-3)));
    }

    #[test]
    fn test_parse_decimal_invalid() {
        assert_eq!(parse_decimal("price", ""), Err(FieldError::Empty("price")));
        assert_eq!(parse_decimal("price", "4.5a"), Err(FieldError::InvalidDecimal("price")));
        assert_eq!(parse_decimal("quantity", "abc"), Err(FieldError::InvalidDecimal("quantity")));
    }

    #[test]
    fn test_field_error_messages() {
        assert_eq!(FieldError::Empty("quantity").to_string(), "quantity can not be empty");
        assert_eq!(FieldError::InvalidDecimal("price").to_string(), "Invalid price");
        assert_eq!(FieldError::Missing("orderbook_id").to_string(), "Missing orderbook_id");
    }

    #[test]
    fn test_require() {
        assert_eq!(require("order_id", "abc"), Ok("abc"));
        assert_eq!(require("order_id", ""), Err(FieldError::Missing("order_id")));
    }

    proptest! {
        #[test]
        fn prop_parse_side_rejects_other_tokens(raw in "\\PC*") {
            prop_assume!(raw != "0" && raw != "1");
            prop_assert_eq!(parse_side(&raw), Err(FieldError::InvalidSide));
        }

        #[test]
        fn prop_parse_decimal_round_trips(mantissa in -1_000_000_000i64..1_000_000_000i64, scale in 0u32..8) {
            let value = Decimal::new(mantissa, scale);
            prop_assert_eq!(parse_decimal("quantity", &value.to_string()), Ok(value));
        }

        #[test]
        fn prop_parse_decimal_rejects_letters(raw in "[a-zA-Z]+") {
            prop_assert!(parse_decimal("quantity", &raw).is_err());
        }
    }

    #[tokio::test]
    async fn test_form_fields_merge_query_and_body() {
        let req = http::Request::builder()
            .method(Method::POST)
            .uri("/order/limit?side=1&price=7")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("side=0&quantity=2.5"))
            .unwrap();

        let fields = FormFields::from_request(req, &()).await.unwrap();
        assert_eq!(fields.value("side"), "0", "body wins over query");
        assert_eq!(fields.value("quantity"), "2.5");
        assert_eq!(fields.value("price"), "7");
        assert_eq!(fields.value("orderbook_id"), "");
    }

    #[tokio::test]
    async fn test_form_fields_without_form_body() {
        let req = http::Request::builder()
            .method(Method::POST)
            .uri("/order/cancel?order_id=abc")
            .body(Body::empty())
            .unwrap();

        let fields = FormFields::from_request(req, &()).await.unwrap();
        assert_eq!(fields.value("order_id"), "abc");
    }
}
