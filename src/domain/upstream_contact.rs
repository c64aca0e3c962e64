use serde::Serialize;
use serde_json::Value;

use super::{LeadSubmission, SourceTag};

/// The body sent to the upstream CRM: the three lead fields, untouched, plus
/// the deployment's source tag.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamContact<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a Value>,
    pub source: &'a str,
}

impl<'a> UpstreamContact<'a> {
    pub fn new(lead: &'a LeadSubmission, source: &'a SourceTag) -> Self {
        Self {
            full_name: lead.full_name.as_ref(),
            email: lead.email.as_ref(),
            phone: lead.phone.as_ref(),
            source: source.as_ref(),
        }
    }
}
