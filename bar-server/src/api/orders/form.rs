//! Order submission extractor
//!
//! Accepts the structured JSON body and the classic form post where every
//! drink of the form is a `qty_<drink_id>` field. Both end up as the same
//! [`OrderCreate`] before validation.

use axum::extract::{Form, FromRequest, Json, Request};
use shared::models::{OrderCreate, OrderLine};

use crate::utils::{AppError, AppResult};

const QTY_PREFIX: &str = "qty_";

/// Submitted order, decoded from JSON or urlencoded form
#[derive(Debug)]
pub struct OrderSubmission(pub OrderCreate);

impl<S> FromRequest<S> for OrderSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| AppError::invalid_request(e.body_text()))?;
            return Ok(Self(parse_form_pairs(pairs)?));
        }

        let Json(payload) = Json::<OrderCreate>::from_request(req, state)
            .await
            .map_err(|e| AppError::invalid_request(e.body_text()))?;
        Ok(Self(payload))
    }
}

/// `waiter_name` plus `qty_<id>` fields → [`OrderCreate`]
///
/// Blank quantity fields are skipped, unknown fields ignored.
pub fn parse_form_pairs(pairs: Vec<(String, String)>) -> AppResult<OrderCreate> {
    let mut payload = OrderCreate {
        waiter_name: String::new(),
        items: Vec::new(),
    };

    for (key, value) in pairs {
        if key == "waiter_name" {
            payload.waiter_name = value;
            continue;
        }
        let Some(raw_id) = key.strip_prefix(QTY_PREFIX) else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        let drink_id: i64 = raw_id
            .parse()
            .map_err(|_| AppError::validation(format!("Invalid drink id in field {key}")))?;
        let quantity: i64 = value.parse().map_err(|_| {
            AppError::validation(format!("Invalid quantity '{value}' for drink {drink_id}"))
                .with_detail("drink_id", drink_id)
        })?;

        payload.items.push(OrderLine { drink_id, quantity });
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ErrorCode;

    fn pairs(fields: &[(&str, &str)]) -> Vec<(String, String)> {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_form() {
        let payload = parse_form_pairs(pairs(&[
            ("waiter_name", "Anna"),
            ("qty_1", "2"),
            ("qty_2", ""),
            ("qty_3", " 1 "),
            ("submit", "Bestellen"),
        ]))
        .unwrap();

        assert_eq!(payload.waiter_name, "Anna");
        assert_eq!(
            payload.items,
            vec![
                OrderLine { drink_id: 1, quantity: 2 },
                OrderLine { drink_id: 3, quantity: 1 },
            ]
        );
    }

    #[test]
    fn test_parse_form_keeps_zero_lines() {
        let payload = parse_form_pairs(pairs(&[("waiter_name", "Anna"), ("qty_1", "0")])).unwrap();
        assert_eq!(payload.items, vec![OrderLine { drink_id: 1, quantity: 0 }]);
    }

    #[test]
    fn test_parse_form_rejects_garbage() {
        let err = parse_form_pairs(pairs(&[("qty_x", "1")])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let err = parse_form_pairs(pairs(&[("qty_1", "zwei")])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_parse_form_without_name() {
        let payload = parse_form_pairs(pairs(&[("qty_1", "1")])).unwrap();
        assert!(payload.waiter_name.is_empty());
    }
}
