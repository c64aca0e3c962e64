use serde::{Deserialize, Serialize};

/// Identifies which front-end build a submission came from.
///
/// The upstream uses it for attribution. It is set per deployment and never
/// taken from request data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SourceTag(String);

impl SourceTag {
    pub fn parse(tag: String) -> Result<SourceTag, String> {
        if tag.trim().is_empty() {
            return Err("the source tag cannot be empty".into());
        }
        Ok(Self(tag))
    }
}

impl Default for SourceTag {
    fn default() -> Self {
        Self("demoapp".into())
    }
}

impl TryFrom<String> for SourceTag {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<SourceTag> for String {
    fn from(tag: SourceTag) -> Self {
        tag.0
    }
}

impl AsRef<str> for SourceTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
