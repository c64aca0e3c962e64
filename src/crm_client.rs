use reqwest::{Client, StatusCode, Url};

use crate::domain::{LeadSubmission, SourceTag, UpstreamContact};

const SEND_CONTACT_PATH: &str = "manage/api/contact/send-contact-from-landingpage";

/// Forwards lead submissions to the upstream CRM.
///
/// One instance is built at startup and shared by every request. Calls are
/// made once: no timeout, no retry.
#[derive(Debug, Clone)]
pub struct CrmClient {
    http_client: Client,
    send_contact_url: Url,
    source: SourceTag,
}

/// What the upstream answered, status untouched.
#[derive(Debug)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub payload: UpstreamPayload,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamPayload {
    Json(serde_json::Value),
    /// The body was not valid JSON; the raw text is relayed instead.
    Text(String),
}

impl UpstreamPayload {
    /// Tries JSON first and falls back to the raw text.
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text),
        }
    }

    pub fn into_json(self) -> serde_json::Value {
        match self {
            Self::Json(value) => value,
            Self::Text(text) => serde_json::Value::String(text),
        }
    }
}

impl CrmClient {
    pub fn new(base_url: &str, source: SourceTag) -> Result<Self, String> {
        // A trailing slash keeps `join` from dropping the last path segment
        // of a base url such as `https://host/prefix`.
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let send_contact_url = Url::parse(&base_url)
            .and_then(|url| url.join(SEND_CONTACT_PATH))
            .map_err(|e| format!("{} is not a valid upstream url: {}", base_url, e))?;
        Ok(Self {
            http_client: Client::new(),
            send_contact_url,
            source,
        })
    }

    #[tracing::instrument(
        name = "Forwarding a lead submission upstream",
        skip(self, lead),
        fields(upstream_status = tracing::field::Empty)
    )]
    pub async fn send_contact(&self, lead: &LeadSubmission) -> Result<UpstreamReply, reqwest::Error> {
        let body = UpstreamContact::new(lead, &self.source);

        let response = self.http_client
            .post(self.send_contact_url.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::Span::current().record("upstream_status", &tracing::field::display(status.as_u16()));

        let text = response.text().await?;
        Ok(UpstreamReply {
            status,
            payload: UpstreamPayload::from_text(text),
        })
    }
}
