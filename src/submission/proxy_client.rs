use reqwest::{Client, Url};

use super::{ContactForm, Navigation, SubmitError, SubmitOutcome};
use crate::domain::LeadSubmission;

/// Posts contact form submissions to the landing page's own `/api/contact`.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    http_client: Client,
    contact_url: Url,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct AcceptedBody {
    redirect_url: Option<String>,
}

impl ProxyClient {
    pub fn new(base_url: &str) -> Result<Self, String> {
        // Same trailing-slash rule as the CRM client, so a landing page
        // mounted under `https://host/landing` keeps its prefix.
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let contact_url = Url::parse(&base_url)
            .and_then(|url| url.join("api/contact"))
            .map_err(|e| format!("{} is not a valid url: {}", base_url, e))?;
        Ok(Self {
            http_client: Client::new(),
            contact_url,
        })
    }

    #[tracing::instrument(
        name = "Posting a lead to the contact proxy",
        skip(self, lead),
        fields(
            proxy_url = %self.contact_url,
            lead_email = tracing::field::Empty,
            proxy_status = tracing::field::Empty
        )
    )]
    pub async fn post_lead(&self, lead: &LeadSubmission) -> SubmitOutcome {
        let span = tracing::Span::current();
        if let Some(email) = lead.email_str() {
            span.record("lead_email", &tracing::field::display(email));
        }

        let response = match self
            .http_client
            .post(self.contact_url.clone())
            .json(lead)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error.message = %e, "The contact proxy could not be reached");
                return SubmitOutcome::Failed;
            }
        };

        let status = response.status();
        span.record("proxy_status", &tracing::field::display(status.as_u16()));
        if !status.is_success() {
            return SubmitOutcome::Rejected {
                status: status.as_u16(),
            };
        }
        // The body is informational; a 2xx is a success whatever it contains.
        let redirect_url = response
            .json::<AcceptedBody>()
            .await
            .ok()
            .and_then(|body| body.redirect_url);
        SubmitOutcome::Accepted { redirect_url }
    }

    /// Drives one full submission of `form`.
    pub async fn submit(&self, form: &mut ContactForm) -> Result<Option<Navigation>, SubmitError> {
        let lead = form.begin_submit()?;
        let outcome = self.post_lead(&lead).await;
        form.finish(outcome)
    }
}
