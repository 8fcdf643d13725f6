//! Typed interpretation of API envelopes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::models::{ChartPoint, DashboardSnapshot, Discount, Order, Product, User};
use crate::normalize::{
    normalize_chart, normalize_dashboard, normalize_discount, normalize_discounts,
    normalize_order, normalize_orders, normalize_product, normalize_products, normalize_user,
    normalize_users,
};

use super::types::ApiResponse;

const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Which normalizer an envelope's payload goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataKind {
    /// Keep the payload as-is.
    #[default]
    Generic,
    Products,
    Orders,
    Users,
    Discounts,
    Dashboard,
    Chart,
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generic => "generic",
            Self::Products => "products",
            Self::Orders => "orders",
            Self::Users => "users",
            Self::Discounts => "discounts",
            Self::Dashboard => "dashboard",
            Self::Chart => "chart",
        })
    }
}

/// Error returned when parsing an unknown data kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown data kind `{0}`")]
pub struct ParseDataKindError(String);

impl FromStr for DataKind {
    type Err = ParseDataKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" => Ok(Self::Generic),
            "products" => Ok(Self::Products),
            "orders" => Ok(Self::Orders),
            "users" => Ok(Self::Users),
            "discounts" => Ok(Self::Discounts),
            "dashboard" => Ok(Self::Dashboard),
            "chart" => Ok(Self::Chart),
            _ => Err(ParseDataKindError(s.to_string())),
        }
    }
}

/// A normalized payload.
///
/// List kinds accept either an array or a single record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedData {
    Raw(Value),
    Products(Vec<Product>),
    Product(Product),
    Orders(Vec<Order>),
    Order(Order),
    Users(Vec<User>),
    User(User),
    Discounts(Vec<Discount>),
    Discount(Discount),
    Dashboard(DashboardSnapshot),
    Chart(Vec<ChartPoint>),
}

/// The result of [`parse_api_response`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedResponse {
    pub success: bool,
    pub data: Option<ParsedData>,
    pub error: Option<String>,
}

impl ParsedResponse {
    fn failed(error: Option<&str>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.unwrap_or(UNKNOWN_ERROR).to_string()),
        }
    }
}

/// Normalize a successful envelope's payload according to `kind`.
///
/// A failed envelope yields `success: false` with its error, or
/// `"Unknown error occurred"` when it has none. A payload that normalizes
/// to nothing (a falsy single record) yields `data: None`.
#[must_use]
pub fn parse_api_response(response: &ApiResponse<Value>, kind: DataKind) -> ParsedResponse {
    if !response.success {
        return ParsedResponse::failed(response.error.as_deref());
    }

    let payload = response.data.as_ref().unwrap_or(&Value::Null);
    let data = match kind {
        DataKind::Generic => Some(ParsedData::Raw(payload.clone())),
        DataKind::Products if payload.is_array() => {
            Some(ParsedData::Products(normalize_products(payload)))
        }
        DataKind::Products => normalize_product(payload).map(ParsedData::Product),
        DataKind::Orders if payload.is_array() => Some(ParsedData::Orders(normalize_orders(payload))),
        DataKind::Orders => normalize_order(payload).map(ParsedData::Order),
        DataKind::Users if payload.is_array() => Some(ParsedData::Users(normalize_users(payload))),
        DataKind::Users => normalize_user(payload).map(ParsedData::User),
        DataKind::Discounts if payload.is_array() => {
            Some(ParsedData::Discounts(normalize_discounts(payload)))
        }
        DataKind::Discounts => normalize_discount(payload).map(ParsedData::Discount),
        DataKind::Dashboard => normalize_dashboard(payload).map(ParsedData::Dashboard),
        DataKind::Chart => Some(ParsedData::Chart(normalize_chart(payload))),
    };

    tracing::debug!(%kind, has_data = data.is_some(), "parsed API response");
    ParsedResponse {
        success: true,
        data,
        error: None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_failed_envelope_keeps_error() {
        let response = ApiResponse::failure("HTTP error! status: 404", 404);
        let parsed = parse_api_response(&response, DataKind::Products);
        assert!(!parsed.success);
        assert!(parsed.data.is_none());
        assert_eq!(parsed.error.as_deref(), Some("HTTP error! status: 404"));
    }

    #[test]
    fn test_failed_envelope_without_error() {
        let response = ApiResponse::<Value> {
            success: false,
            data: None,
            error: None,
            status: None,
        };
        let parsed = parse_api_response(&response, DataKind::Generic);
        assert_eq!(parsed.error.as_deref(), Some("Unknown error occurred"));
    }

    #[test]
    fn test_product_list_and_single() {
        let list = ApiResponse::ok(json!([{"name": "A"}, null, {"name": "B"}]), 200);
        match parse_api_response(&list, DataKind::Products).data.unwrap() {
            ParsedData::Products(products) => assert_eq!(products.len(), 2),
            other => panic!("unexpected payload: {other:?}"),
        }

        let single = ApiResponse::ok(json!({"name": "A", "price": "5"}), 200);
        match parse_api_response(&single, DataKind::Products).data.unwrap() {
            ParsedData::Product(product) => assert_eq!(product.formatted_price, "$5.00"),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_dashboard_and_chart() {
        let dashboard = ApiResponse::ok(json!({"orders": "12"}), 200);
        match parse_api_response(&dashboard, DataKind::Dashboard).data.unwrap() {
            ParsedData::Dashboard(snapshot) => assert_eq!(snapshot.orders, 12),
            other => panic!("unexpected payload: {other:?}"),
        }

        let chart = ApiResponse::ok(json!({"not": "a list"}), 200);
        assert_eq!(
            parse_api_response(&chart, DataKind::Chart).data,
            Some(ParsedData::Chart(vec![]))
        );
    }

    #[test]
    fn test_generic_keeps_payload() {
        let response = ApiResponse::ok(json!({"deleted": true}), 200);
        assert_eq!(
            parse_api_response(&response, DataKind::Generic).data,
            Some(ParsedData::Raw(json!({"deleted": true})))
        );
    }

    #[test]
    fn test_falsy_single_record() {
        let response = ApiResponse::ok(Value::Null, 204);
        let parsed = parse_api_response(&response, DataKind::Orders);
        assert!(parsed.success);
        assert!(parsed.data.is_none());
    }

    #[test]
    fn test_data_kind_from_str() {
        assert_eq!("Orders".parse::<DataKind>().unwrap(), DataKind::Orders);
        assert!("invoices".parse::<DataKind>().is_err());
    }
}
