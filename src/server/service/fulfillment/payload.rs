//! Decoding of Hotmart webhook deliveries.
//!
//! Hotmart has delivered purchases in more than one body layout over time. Each known
//! layout is a variant of [`HotmartPayload`], tried in order; a body matching none of
//! them is rejected rather than probed field by field.

use dioxus_logger::tracing;
use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value;

use crate::server::{
    error::fulfillment::FulfillmentError, service::account::normalize_email,
    util::token::constant_time_eq,
};

/// Display name given to buyers whose delivery carries no name
pub const DEFAULT_DISPLAY_NAME: &str = "Aluno";

/// A purchase extracted from an authenticated delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleEvent {
    /// Normalised buyer email
    pub email: String,
    /// Hotmart product ID, matched against `course.hotmart_id`
    pub product_id: String,
    pub display_name: String,
}

/// String that rejects empty or whitespace-only values during deserialization.
#[derive(Debug)]
struct NonEmptyString(String);

impl<'de> Deserialize<'de> for NonEmptyString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(D::Error::custom("expected a non-empty string"));
        }

        Ok(Self(trimmed.to_string()))
    }
}

/// Product IDs arrive as strings or as JSON numbers depending on the layout.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProductId {
    Text(NonEmptyString),
    Number(serde_json::Number),
}

impl ProductId {
    fn into_string(self) -> String {
        match self {
            Self::Text(NonEmptyString(id)) => id,
            Self::Number(id) => id.to_string(),
        }
    }
}

/// Keeps a value only when it is a non-empty string, anything else reads as absent.
fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string))
}

#[derive(Debug, Default, Deserialize)]
struct NamedBuyer {
    #[serde(default, deserialize_with = "optional_text")]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NestedBuyer {
    email: NonEmptyString,
    #[serde(default, deserialize_with = "optional_text")]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NestedProduct {
    id: ProductId,
}

#[derive(Debug, Deserialize)]
struct NestedData {
    buyer: NestedBuyer,
    product: NestedProduct,
}

#[derive(Debug, Deserialize)]
struct FlatBuyer {
    email: NonEmptyString,
    #[serde(default, deserialize_with = "optional_text")]
    name: Option<String>,
}

/// Known delivery layouts, in the order they are tried.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HotmartPayload {
    /// Webhook v2: `data.buyer.email` and `data.product.id`
    Nested {
        data: NestedData,
        #[serde(default, deserialize_with = "optional_text")]
        name: Option<String>,
        #[serde(default)]
        buyer: Option<NamedBuyer>,
    },
    /// Legacy form post: top level `email` and `prod`
    Flat {
        email: NonEmptyString,
        prod: ProductId,
        #[serde(default, deserialize_with = "optional_text")]
        name: Option<String>,
        #[serde(default)]
        buyer: Option<NamedBuyer>,
    },
    /// Legacy form post carrying the buyer as an object next to `prod`
    FlatWithBuyer {
        buyer: FlatBuyer,
        prod: ProductId,
        #[serde(default, deserialize_with = "optional_text")]
        name: Option<String>,
    },
}

impl HotmartPayload {
    fn into_sale_event(self) -> SaleEvent {
        // Name precedence: top level `name`, then `buyer.name`, then `data.buyer.name`
        let (email, product_id, display_name) = match self {
            Self::Nested { data, name, buyer } => (
                data.buyer.email,
                data.product.id,
                name.or(buyer.and_then(|b| b.name)).or(data.buyer.name),
            ),
            Self::Flat {
                email,
                prod,
                name,
                buyer,
            } => (email, prod, name.or(buyer.and_then(|b| b.name))),
            Self::FlatWithBuyer { buyer, prod, name } => (buyer.email, prod, name.or(buyer.name)),
        };

        SaleEvent {
            email: normalize_email(&email.0),
            product_id: product_id.into_string(),
            display_name: display_name.unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string()),
        }
    }
}

/// Token carried by a delivery, at the top level or under `data` for webhook v2
fn delivered_token(body: &Value) -> Option<&str> {
    [body.get("hottok"), body.pointer("/data/hottok")]
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|token| !token.is_empty())
}

/// Authenticates a webhook delivery and extracts the purchase it describes
///
/// # Returns
/// - `Ok(SaleEvent)`: The delivery carries the expected token and matches a known layout
/// - `Err(FulfillmentError::Unauthorized)`: The body is not JSON or the token is absent or wrong
/// - `Err(FulfillmentError::BadRequest)`: No known layout yields both an email and a product ID
pub fn decode_delivery(body: &[u8], secret: &str) -> Result<SaleEvent, FulfillmentError> {
    let Ok(body) = serde_json::from_slice::<Value>(body) else {
        return Err(FulfillmentError::Unauthorized);
    };

    match delivered_token(&body) {
        Some(token) if constant_time_eq(token, secret) => (),
        _ => return Err(FulfillmentError::Unauthorized),
    }

    let payload = HotmartPayload::deserialize(&body).map_err(|e| {
        tracing::debug!("Webhook payload rejected: {}", e);

        FulfillmentError::BadRequest
    })?;

    Ok(payload.into_sale_event())
}
