use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A visitor's interest, as posted by the landing page form.
///
/// The proxy performs no validation on these fields: whatever JSON value the
/// client sent is forwarded upstream as-is, `null` included. Keys other than
/// the three below are ignored; a missing key stays missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub phone: Option<Value>,
}

/// `None` only when the key is absent: an explicit `null` is kept.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl LeadSubmission {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            full_name: Some(Value::String(full_name.into())),
            email: Some(Value::String(email.into())),
            phone: Some(Value::String(phone.into())),
        }
    }

    /// Parses a raw request body. Only malformed JSON and bodies that are not
    /// a JSON object are rejected.
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("a lead submission must be a JSON object"));
        }
        serde_json::from_value(value)
    }

    /// The email as text, when the client sent a string.
    pub fn email_str(&self) -> Option<&str> {
        self.email.as_ref().and_then(Value::as_str)
    }

    pub fn full_name_str(&self) -> Option<&str> {
        self.full_name.as_ref().and_then(Value::as_str)
    }
}
