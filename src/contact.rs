use std::{sync::LazyLock, time::Duration};

use regex::Regex;
use thiserror::Error;

use crate::notify::Severity;

/// Time the submit button stays in its "Sending..." state before the mail
/// client is opened.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

pub const SENT_MESSAGE: &str = "Email client opened! Your message is ready to send.";
pub const SEND_FAILED_MESSAGE: &str = "Error preparing email. Please try again.";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Submit-time rule violations, in the order they are checked. The display
/// text is what the visitor sees.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Subject must be at least 3 characters long")]
    SubjectTooShort,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The form control's `name` (and `id`) attribute.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Subject => 2,
            Self::Message => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Pending,
    Valid,
    Invalid,
}

impl Validity {
    pub fn class(self) -> &'static str {
        match self {
            Self::Pending => "field-pending",
            Self::Valid => "field-valid",
            Self::Invalid => "field-invalid",
        }
    }
}

/// Focus-loss check. Deliberately looser than [`Submission::validate`]: it
/// only looks at presence and, for the email field, the address format.
pub fn check_on_blur(field: Field, value: &str) -> Validity {
    let value = value.trim();
    if value.is_empty() {
        // every field on the form is required
        Validity::Invalid
    } else if field == Field::Email && !is_valid_email(value) {
        Validity::Invalid
    } else {
        Validity::Valid
    }
}

/// Raw contents of the contact form plus the per-field feedback state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: [String; 4],
    validity: [Validity; 4],
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Typing clears any earlier feedback for the field.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
        self.validity[field.index()] = Validity::Pending;
    }

    pub fn validity(&self, field: Field) -> Validity {
        self.validity[field.index()]
    }

    pub fn blur(&mut self, field: Field) -> Validity {
        let v = check_on_blur(field, self.value(field));
        self.validity[field.index()] = v;
        v
    }

    pub fn submission(&self) -> Submission {
        Submission::new(
            self.value(Field::Name),
            self.value(Field::Email),
            self.value(Field::Subject),
            self.value(Field::Message),
        )
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// A trimmed contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Submission {
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Stops at the first broken rule. Minimum lengths count UTF-16 code
    /// units, the same unit the browser reports for an input's length.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .any(|s| s.is_empty())
        {
            return Err(ValidationError::MissingFields);
        }
        if utf16_len(&self.name) < 2 {
            return Err(ValidationError::NameTooShort);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if utf16_len(&self.subject) < 3 {
            return Err(ValidationError::SubjectTooShort);
        }
        if utf16_len(&self.message) < 10 {
            return Err(ValidationError::MessageTooShort);
        }
        Ok(())
    }

    pub fn body(&self, greeting_name: &str) -> String {
        format!(
            "Hi {greeting_name},\n\nName: {}\nEmail: {}\n\nMessage:\n{}\n\n---\nSent from your portfolio website contact form.",
            self.name, self.email, self.message
        )
    }

    pub fn mailto(&self, recipient: &str, greeting_name: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body(greeting_name))
        )
    }
}

/// Validates the form and, when every rule passes, returns the mail URI to
/// hand to the mail client.
pub fn prepare_mail(
    form: &ContactForm,
    recipient: &str,
    greeting_name: &str,
) -> Result<String, ValidationError> {
    let submission = form.submission();
    submission.validate()?;
    Ok(submission.mailto(recipient, greeting_name))
}

/// Toast to show once a submit step settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// First half of a submit: either the mail URI to open after the sending
/// delay, or the single error toast explaining why nothing was sent.
pub fn begin_submit(
    form: &ContactForm,
    recipient: &str,
    greeting_name: &str,
) -> Result<String, Notice> {
    prepare_mail(form, recipient, greeting_name).map_err(|e| Notice::error(e.to_string()))
}

/// Second half: records how handing the URI to the mail client went. The
/// form is cleared only when it succeeded.
pub fn finish_submit<E>(form: &mut ContactForm, opened: Result<(), E>) -> Notice {
    match opened {
        Ok(()) => {
            form.reset();
            Notice {
                message: SENT_MESSAGE.to_string(),
                severity: Severity::Success,
            }
        }
        Err(_) => Notice::error(SEND_FAILED_MESSAGE),
    }
}
