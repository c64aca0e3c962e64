use std::fmt::Debug;

use actix_web::{http::StatusCode, post, web, HttpResponse, ResponseError};
use anyhow::Context;

use crate::{
    configuration::LandingSettings,
    crm_client::CrmClient,
    domain::LeadSubmission,
    routes::error_chain_fmt,
};

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("Internal server error")]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Forwards a contact form submission upstream and relays the answer.
///
/// The upstream status is mirrored as-is. Every local failure, including an
/// unreachable upstream, becomes the same opaque 500.
#[tracing::instrument(
    name = "Relaying a contact form submission",
    skip(body, crm_client, landing),
    fields(lead_email = tracing::field::Empty, lead_name = tracing::field::Empty)
)]
#[post("/api/contact")]
pub async fn submit_contact(
    body: web::Bytes,
    crm_client: web::Data<CrmClient>,
    landing: web::Data<LandingSettings>,
) -> Result<HttpResponse, ContactError> {
    forward_submission(&body, &crm_client, &landing)
        .await
        .map_err(|e| {
            tracing::error!(error.cause_chain = ?e, "Error sending contact form");
            ContactError::from(e)
        })
}

async fn forward_submission(
    body: &[u8],
    crm_client: &CrmClient,
    landing: &LandingSettings,
) -> Result<HttpResponse, anyhow::Error> {
    let lead = LeadSubmission::parse(body)
        .context("The request body is not a valid lead submission")?;
    let span = tracing::Span::current();
    if let Some(email) = lead.email_str() {
        span.record("lead_email", &tracing::field::display(email));
    }
    if let Some(name) = lead.full_name_str() {
        span.record("lead_name", &tracing::field::display(name));
    }

    let reply = crm_client
        .send_contact(&lead)
        .await
        .context("Failed to forward the submission to the upstream CRM")?;
    let status = StatusCode::from_u16(reply.status.as_u16())
        .context("The upstream answered with an unsupported status code")?;

    let mut payload = reply.payload.into_json();
    if landing.decorate_success_redirect && status.is_success() {
        if let serde_json::Value::Object(fields) = &mut payload {
            fields.insert(
                "redirectUrl".into(),
                serde_json::Value::String(landing.redirect_url.clone()),
            );
        }
    }

    Ok(HttpResponse::build(status).json(payload))
}
