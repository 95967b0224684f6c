//! Wire DTOs exchanged with the lab service.
//!
//! DESIGN
//! ======
//! The service is a JSON REST API. Records carry more columns than the view
//! renders (`id`, `is_active`, timestamps); those are ignored on decode so
//! schema additions on the server never break the list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A bookable laboratory as returned by the lab service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    /// Short unique code, also the selection key (e.g. `"LAB01"`).
    pub nickname: String,
    /// Display name.
    pub name: String,
    /// Seat count.
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub capacity: u32,
    /// Free-form location (building, room).
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Confirmed bookings for this lab, when the service reports them.
    #[serde(default)]
    pub active_bookings: Option<u32>,
    #[serde(default)]
    pub available: Option<bool>,
}

impl Lab {
    /// Location text, if present and non-blank.
    pub fn location_label(&self) -> Option<&str> {
        self.location.as_deref().filter(|loc| !loc.trim().is_empty())
    }
}

/// Envelope of `GET /labs`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LabList {
    pub labs: Vec<Lab>,
    #[serde(default)]
    pub total: usize,
}

/// Body of `POST /labs`.
///
/// `capacity` is a float so a capacity that failed to parse travels as NaN,
/// which serializes to JSON `null` and leaves the rejection to the service.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateLabInput {
    pub name: String,
    pub nickname: String,
    #[serde(serialize_with = "serialize_capacity")]
    pub capacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Error payload returned by the service on non-2xx responses.
///
/// The service has used both `message` and `error` as the key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// The first non-blank message, preferring `message` over `error`.
    pub fn into_message(self) -> Option<String> {
        self.message
            .into_iter()
            .chain(self.error)
            .find(|msg| !msg.trim().is_empty())
    }
}

/// Identity supplied by the embedding application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn serialize_capacity<S>(capacity: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // `i64::MAX as f64` rounds up to 2^63, hence the strict upper bound.
    let fits_i64 = *capacity >= i64::MIN as f64 && *capacity < i64::MAX as f64;
    if capacity.is_finite() && capacity.fract() == 0.0 && fits_i64 {
        serializer.serialize_i64(*capacity as i64)
    } else if capacity.is_finite() {
        serializer.serialize_f64(*capacity)
    } else {
        serializer.serialize_none()
    }
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return u32::try_from(int).map_err(|_| D::Error::custom("capacity out of range"));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= f64::from(u32::MAX)
            {
                return Ok(float as u32);
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
