use std::time::Duration;

use crate::{
    configuration::LandingSettings,
    domain::LeadSubmission,
    theme::{ColorTokens, NavigationTarget, Theme},
};

const SUCCESS_MESSAGE: &str = "Gửi thành công! Đang chuyển hướng...";
const ERROR_MESSAGE: &str = "Có lỗi xảy ra, vui lòng thử lại.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    Phone,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

impl FormFields {
    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        }
    }
}

impl From<&FormFields> for LeadSubmission {
    fn from(fields: &FormFields) -> Self {
        LeadSubmission::new(&fields.full_name, &fields.email, &fields.phone)
    }
}

/// Presentation parameters of one landing page skin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormVariant {
    pub theme: Theme,
    pub open_in: NavigationTarget,
    pub redirect_url: String,
    pub redirect_delay: Duration,
}

impl From<&LandingSettings> for FormVariant {
    fn from(landing: &LandingSettings) -> Self {
        Self {
            theme: landing.theme,
            open_in: landing.open_in,
            redirect_url: landing.redirect_url.clone(),
            redirect_delay: landing.redirect_delay(),
        }
    }
}

/// How the proxy call ended, as seen by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx. The proxy may have supplied its own destination.
    Accepted { redirect_url: Option<String> },
    /// Any other status.
    Rejected { status: u16 },
    /// The proxy could not be reached.
    Failed,
}

/// Where to send the visitor after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub url: String,
    pub delay: Duration,
    pub target: NavigationTarget,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SubmitError {
    #[error("A submission is already in flight")]
    AlreadySubmitting,
    #[error("Fields cannot be edited while a submission is in flight")]
    FormLocked,
    #[error("There is no submission in flight")]
    NotSubmitting,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    variant: FormVariant,
    fields: FormFields,
    state: FormState,
}

impl ContactForm {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            fields: FormFields::default(),
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn variant(&self) -> &FormVariant {
        &self.variant
    }

    pub fn palette(&self) -> ColorTokens {
        self.variant.theme.palette()
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), SubmitError> {
        match self.state {
            FormState::Submitting => Err(SubmitError::FormLocked),
            FormState::Idle | FormState::Success | FormState::Error => {
                *self.fields.get_mut(field) = value.into();
                Ok(())
            }
        }
    }

    /// Locks the form and returns the lead to post.
    pub fn begin_submit(&mut self) -> Result<LeadSubmission, SubmitError> {
        match self.state {
            FormState::Submitting => Err(SubmitError::AlreadySubmitting),
            FormState::Idle | FormState::Success | FormState::Error => {
                self.state = FormState::Submitting;
                Ok(LeadSubmission::from(&self.fields))
            }
        }
    }

    /// Settles the in-flight submission.
    ///
    /// On success the fields are cleared and the visitor should be navigated
    /// to the returned destination once its delay has elapsed. On failure the
    /// fields are kept so the visitor can resubmit right away.
    pub fn finish(&mut self, outcome: SubmitOutcome) -> Result<Option<Navigation>, SubmitError> {
        if self.state != FormState::Submitting {
            return Err(SubmitError::NotSubmitting);
        }
        match outcome {
            SubmitOutcome::Accepted { redirect_url } => {
                self.state = FormState::Success;
                self.fields = FormFields::default();
                Ok(Some(Navigation {
                    url: redirect_url.unwrap_or_else(|| self.variant.redirect_url.clone()),
                    delay: self.variant.redirect_delay,
                    target: self.variant.open_in,
                }))
            }
            SubmitOutcome::Rejected { .. } | SubmitOutcome::Failed => {
                self.state = FormState::Error;
                Ok(None)
            }
        }
    }

    pub fn can_submit(&self) -> bool {
        self.state != FormState::Submitting
    }

    pub fn status_message(&self) -> Option<&'static str> {
        match self.state {
            FormState::Idle | FormState::Submitting => None,
            FormState::Success => Some(SUCCESS_MESSAGE),
            FormState::Error => Some(ERROR_MESSAGE),
        }
    }
}
