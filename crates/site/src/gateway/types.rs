//! Wire types for the service gateway protocol.
//!
//! Requests are JSON objects discriminated by an `operation` field.
//! Responses arrive as an envelope carrying an HTTP-like status code and
//! a `body` field whose value is a JSON-encoded string that must be
//! parsed again.

use serde::{Deserialize, Serialize};

use crate::cart::CartLine;

/// Outbound request, discriminated by the `operation` field.
#[derive(Debug, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum GatewayRequest<'a> {
    /// Fetch details for a single catalog service.
    GetServiceDetails { service_name: &'a str },
    /// Submit the session cart as an order.
    ///
    /// Line items are forwarded exactly as they sit in the cart.
    AddOrder { user_id: i64, cart: &'a [CartLine] },
}

/// Response envelope returned by the gateway.
#[derive(Debug, Deserialize)]
pub struct GatewayEnvelope {
    /// HTTP-like status code carried inside the payload.
    #[serde(rename = "statusCode", alias = "status_code", default)]
    pub status_code: Option<u16>,
    /// JSON-encoded string holding the operation result.
    #[serde(default)]
    pub body: Option<String>,
}

impl GatewayEnvelope {
    /// Whether the embedded status code (if any) indicates success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status_code.is_none_or(|code| (200..300).contains(&code))
    }
}

/// Details for one catalog service, decoded from the envelope body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDetails {
    pub service_name: String,
    #[serde(default)]
    pub description: String,
    pub cost: i64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_service_details_shape() {
        let request = GatewayRequest::GetServiceDetails {
            service_name: "Flooring",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["operation"], "get_service_details");
        assert_eq!(json["service_name"], "Flooring");
    }

    #[test]
    fn test_add_order_forwards_raw_cart() {
        let cart = vec![
            CartLine {
                service_name: "Flooring".to_string(),
                cost: "100".to_string(),
            },
            CartLine {
                service_name: "Roofing".to_string(),
                cost: "50".to_string(),
            },
        ];
        let request = GatewayRequest::AddOrder {
            user_id: 7,
            cart: &cart,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["operation"], "add_order");
        assert_eq!(json["user_id"], 7);
        assert_eq!(json["cart"][0]["service_name"], "Flooring");
        // Costs travel untouched, exactly as the client submitted them.
        assert_eq!(json["cart"][1]["cost"], "50");
    }

    #[test]
    fn test_envelope_parses_camel_and_snake_status() {
        let camel: GatewayEnvelope =
            serde_json::from_str(r#"{"statusCode": 200, "body": "{}"}"#).unwrap();
        assert_eq!(camel.status_code, Some(200));
        assert!(camel.is_success());

        let snake: GatewayEnvelope =
            serde_json::from_str(r#"{"status_code": 502, "body": "{}"}"#).unwrap();
        assert_eq!(snake.status_code, Some(502));
        assert!(!snake.is_success());
    }

    #[test]
    fn test_envelope_without_status_is_success() {
        let envelope: GatewayEnvelope = serde_json::from_str(r#"{"body": "{}"}"#).unwrap();
        assert!(envelope.is_success());
    }

    #[test]
    fn test_service_details_from_nested_body() {
        let envelope: GatewayEnvelope = serde_json::from_str(
            r#"{"statusCode": 200,
                "body": "{\"service_name\": \"Flooring\", \"description\": \"Hardwood\", \"cost\": 100}"}"#,
        )
        .unwrap();
        let details: ServiceDetails = serde_json::from_str(&envelope.body.unwrap()).unwrap();
        assert_eq!(details.service_name, "Flooring");
        assert_eq!(details.cost, 100);
    }
}
