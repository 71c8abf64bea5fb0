use async_trait::async_trait;
use log::{debug, error, info};

use super::payload::Payload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Signup,
}

impl FormKind {
    pub fn form_id(self) -> &'static str {
        match self {
            FormKind::Contact => "contact-form",
            FormKind::Signup => "signup-form",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            FormKind::Contact => "sending...",
            FormKind::Signup => "subscribing...",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            FormKind::Contact => "Thank you! I'll respond within 2 business days.",
            FormKind::Signup => "You're subscribed! Check your inbox for a welcome email.",
        }
    }

    pub fn error_message(self) -> &'static str {
        match self {
            FormKind::Contact => {
                "Something went wrong. Please email hello@tolbertevents.com directly."
            }
            FormKind::Signup => {
                "Something went wrong. Please try again or email hello@tolbertevents.com."
            }
        }
    }

    fn log_label(self) -> &'static str {
        match self {
            FormKind::Contact => "Form",
            FormKind::Signup => "Signup",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    pub fn class_name(self) -> &'static str {
        match self {
            FeedbackKind::Success => "form-message form-message--success",
            FeedbackKind::Error => "form-message form-message--error",
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            FeedbackKind::Success => "padding: 1rem; background: #E8F5E9; color: #2E7D32; border-radius: 4px; margin-top: 1rem; text-align: center;",
            FeedbackKind::Error => "padding: 1rem; background: #FFEBEE; color: #C62828; border-radius: 4px; margin-top: 1rem; text-align: center;",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: &'static str,
}

impl Feedback {
    pub fn success(form: FormKind) -> Self {
        Self {
            kind: FeedbackKind::Success,
            text: form.success_message(),
        }
    }

    pub fn error(form: FormKind) -> Self {
        Self {
            kind: FeedbackKind::Error,
            text: form.error_message(),
        }
    }
}

/// What came back from the webhook. `no-cors` requests normally yield an
/// opaque response whose status reads as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Opaque,
    Status(u16),
}

impl Delivery {
    pub fn check(self) -> Result<(), SubmitError> {
        match self {
            Delivery::Opaque => Ok(()),
            Delivery::Status(status) if (200..300).contains(&status) => Ok(()),
            Delivery::Status(status) => Err(SubmitError::Rejected { status }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("could not encode form data: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("webhook responded with status {status}")]
    Rejected { status: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Posted to the webhook.
    Sent,
    /// No webhook configured; logged and reported as success without sending.
    Demo,
    Failed,
}

pub trait SubmitButton {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn set_disabled(&self, disabled: bool);
}

pub trait FormSurface {
    fn payload(&self) -> Payload;
    fn webhook(&self) -> Option<String>;
    /// Drops whatever message is currently shown, if any.
    fn clear_feedback(&self);
    fn append_feedback(&self, feedback: Feedback);
    fn reset(&self);
}

/// At most one message per form: a new one replaces the previous.
pub fn show_feedback<F: FormSurface>(form: &F, feedback: Feedback) {
    form.clear_feedback();
    form.append_feedback(feedback);
}

#[async_trait(?Send)]
pub trait Webhook {
    async fn post(&self, url: &str, body: String) -> Result<Delivery, SubmitError>;
}

/// Holds the submit button in its busy state; dropping it puts the original
/// label back and re-enables the button on every exit path.
struct BusyButton<'a, B: SubmitButton> {
    button: &'a B,
    original: String,
}

impl<'a, B: SubmitButton> BusyButton<'a, B> {
    fn engage(button: &'a B, busy_label: &str) -> Self {
        let original = button.label();
        button.set_label(busy_label);
        button.set_disabled(true);
        Self { button, original }
    }
}

impl<B: SubmitButton> Drop for BusyButton<'_, B> {
    fn drop(&mut self) {
        self.button.set_label(&self.original);
        self.button.set_disabled(false);
    }
}

pub async fn submit<F, B, W>(kind: FormKind, form: &F, button: Option<&B>, webhook: &W) -> Outcome
where
    F: FormSurface,
    B: SubmitButton,
    W: Webhook,
{
    let _busy = button.map(|button| BusyButton::engage(button, kind.busy_label()));
    let payload = form.payload();
    if payload.is_empty() {
        debug!("{} submitted with no fields", kind.log_label());
    } else {
        debug!("{} collected {} fields", kind.log_label(), payload.len());
    }

    match deliver(kind, form.webhook(), &payload, webhook).await {
        Ok(outcome) => {
            show_feedback(form, Feedback::success(kind));
            form.reset();
            outcome
        }
        Err(err) => {
            error!("{} error: {}", kind.log_label(), err);
            show_feedback(form, Feedback::error(kind));
            Outcome::Failed
        }
    }
}

async fn deliver<W: Webhook>(
    kind: FormKind,
    endpoint: Option<String>,
    payload: &Payload,
    webhook: &W,
) -> Result<Outcome, SubmitError> {
    let body = payload.to_json()?;
    let Some(url) = endpoint.filter(|url| !url.is_empty()) else {
        info!("{} data: {}", kind.log_label(), body);
        return Ok(Outcome::Demo);
    };

    webhook.post(&url, body).await?.check()?;
    Ok(Outcome::Sent)
}
