use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

// lengths are in UTF-16 code units, same as the browser's `value.length`
const MIN_NAME_LEN: usize = 2;
const MIN_MESSAGE_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn clear(&mut self, field: Field) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self
            .iter()
            .map(|(field, err)| format!("{field}: {err}"))
            .collect::<Vec<_>>();
        f.write_str(&parts.join("; "))
    }
}

fn check_name(name: &str) -> Option<FieldError> {
    let name = name.trim();
    if name.is_empty() {
        Some(FieldError::NameRequired)
    } else if name.encode_utf16().count() < MIN_NAME_LEN {
        Some(FieldError::NameTooShort)
    } else {
        None
    }
}

fn check_email(email: &str) -> Option<FieldError> {
    let email = email.trim();
    if email.is_empty() {
        Some(FieldError::EmailRequired)
    } else if !EMAIL_RE.is_match(email) {
        Some(FieldError::EmailInvalid)
    } else {
        None
    }
}

fn check_message(message: &str) -> Option<FieldError> {
    let message = message.trim();
    if message.is_empty() {
        Some(FieldError::MessageRequired)
    } else if message.encode_utf16().count() < MIN_MESSAGE_LEN {
        Some(FieldError::MessageTooShort)
    } else {
        None
    }
}

pub fn validate(input: &ContactInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    let checks = [
        (Field::Name, check_name(&input.name)),
        (Field::Email, check_email(&input.email)),
        (Field::Message, check_message(&input.message)),
    ];
    for (field, error) in checks {
        if let Some(error) = error {
            errors.insert(field, error);
        }
    }
    errors
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::Error)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("form has invalid fields: {0}")]
    Invalid(ValidationErrors),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("message was rejected")]
    Rejected,
    #[error("message service unavailable: {0}")]
    Unavailable(String),
}

/// Handed out by [`ContactForm::submit`]; must be given back to
/// [`ContactForm::resolve`] with the send result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    attempt: u64,
    pub input: ContactInput,
}

impl PendingSubmission {
    pub fn attempt(&self) -> u64 {
        self.attempt
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    input: ContactInput,
    errors: ValidationErrors,
    status: SubmissionStatus,
    attempts: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &ContactInput {
        &self.input
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn edit(&mut self, field: Field, value: String) {
        self.input.set(field, value);
        self.errors.clear(field);
    }

    pub fn submit(&mut self) -> Result<PendingSubmission, SubmitError> {
        if self.is_submitting() {
            log::debug!("contact form submit ignored: already submitting");
            return Err(SubmitError::InFlight);
        }
        self.errors = validate(&self.input);
        if !self.errors.is_empty() {
            log::debug!("contact form submit rejected: {}", self.errors);
            return Err(SubmitError::Invalid(self.errors.clone()));
        }
        self.attempts += 1;
        self.status = SubmissionStatus::Submitting;
        Ok(PendingSubmission {
            attempt: self.attempts,
            input: self.input.clone(),
        })
    }

    // stale tickets and resolutions with nothing in flight are ignored
    pub fn resolve(&mut self, pending: &PendingSubmission, outcome: Result<(), SendError>) -> bool {
        if !self.is_submitting() || pending.attempt != self.attempts {
            return false;
        }
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.input = ContactInput::default();
            }
            Err(e) => {
                log::debug!("contact form send failed: {e}");
                self.status = SubmissionStatus::Error;
            }
        }
        true
    }
}

pub trait MessageSender {
    fn send(&mut self, input: &ContactInput) -> Result<(), SendError>;
}

pub struct SimulatedSender<R: Rng> {
    rng: R,
    success_rate: f64,
}

impl<R: Rng> SimulatedSender<R> {
    pub fn new(rng: R, success_rate: f64) -> Self {
        Self {
            rng,
            success_rate: if success_rate.is_nan() {
                0.0
            } else {
                success_rate.clamp(0.0, 1.0)
            },
        }
    }
}

impl<R: Rng> MessageSender for SimulatedSender<R> {
    fn send(&mut self, input: &ContactInput) -> Result<(), SendError> {
        if self.rng.gen_bool(self.success_rate) {
            log::debug!("simulated send of message from {} succeeded", input.email);
            Ok(())
        } else {
            log::debug!("simulated send of message from {} failed", input.email);
            Err(SendError::Unavailable("simulated failure".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn input(name: &str, email: &str, message: &str) -> ContactInput {
        ContactInput {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn valid_input() -> ContactInput {
        input("Ada Lovelace", "ada@example.com", "Hello there, nice site!")
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        let valid = valid_input();
        for field in Field::ALL {
            form.edit(field, valid.get(field).to_string());
        }
        form
    }

    #[test]
    fn test_valid_input_has_no_errors() {
        assert!(validate(&valid_input()).is_empty());
        assert!(validate(&input("  Al  ", " a@b.co ", "  0123456789  ")).is_empty());
    }

    #[test]
    fn test_all_empty_is_all_required() {
        let errors = validate(&ContactInput::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.message(Field::Name).as_deref(), Some("Name is required"));
        assert_eq!(errors.message(Field::Email).as_deref(), Some("Email is required"));
        assert_eq!(
            errors.message(Field::Message).as_deref(),
            Some("Message is required")
        );
    }

    #[test]
    fn test_whitespace_only_is_required() {
        let errors = validate(&input("   ", "\t", "\n \n"));
        assert_eq!(errors.get(Field::Name), Some(FieldError::NameRequired));
        assert_eq!(errors.get(Field::Email), Some(FieldError::EmailRequired));
        assert_eq!(errors.get(Field::Message), Some(FieldError::MessageRequired));
    }

    #[test]
    fn test_short_name() {
        let mut short = valid_input();
        short.name = " A ".to_string();
        let errors = validate(&short);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message(Field::Name).as_deref(),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_lengths_count_utf16_units() {
        let mut astral = valid_input();
        // each emoji is a surrogate pair, so two units
        astral.name = "😀".to_string();
        astral.message = "😀😀😀😀😀".to_string();
        assert!(validate(&astral).is_empty());

        let mut bmp = valid_input();
        bmp.name = "Ŷ".to_string();
        bmp.message = "ééééééééé".to_string();
        let errors = validate(&bmp);
        assert_eq!(errors.get(Field::Name), Some(FieldError::NameTooShort));
        assert_eq!(errors.get(Field::Message), Some(FieldError::MessageTooShort));
    }

    #[test]
    fn test_short_message() {
        let mut short = valid_input();
        short.message = "  long enough ".to_string();
        assert!(validate(&short).is_empty());
        short.message = "123456789".to_string();
        assert_eq!(
            validate(&short).message(Field::Message).as_deref(),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_email_shapes() {
        let check = |email: &str| validate(&input("Al", email, "0123456789")).get(Field::Email);
        assert_eq!(check("a@b.c"), None);
        assert_eq!(check("first.last@sub.example.org"), None);
        assert_eq!(check("  a@b.c  "), None);
        assert_eq!(check("a@b.c.d"), None);
        assert_eq!(check("plainaddress"), Some(FieldError::EmailInvalid));
        assert_eq!(check("a@b"), Some(FieldError::EmailInvalid));
        assert_eq!(check("@b.c"), Some(FieldError::EmailInvalid));
        assert_eq!(check("a@.c"), Some(FieldError::EmailInvalid));
        assert_eq!(check("a@b."), Some(FieldError::EmailInvalid));
        assert_eq!(check("a@@b.c"), Some(FieldError::EmailInvalid));
        assert_eq!(check("a b@c.d"), Some(FieldError::EmailInvalid));
    }

    #[test]
    fn test_field_names() {
        let names = Field::ALL.map(|f| f.to_string());
        assert_eq!(names, ["name", "email", "message"]);
    }

    #[test]
    fn test_edit_clears_only_that_field() {
        let mut form = ContactForm::new();
        assert!(matches!(form.submit(), Err(SubmitError::Invalid(_))));
        assert_eq!(form.errors().len(), 3);
        assert_eq!(form.status(), SubmissionStatus::Idle);

        // a still-invalid value clears the error too; no revalidation on edit
        form.edit(Field::Name, "A".to_string());
        assert_eq!(form.errors().get(Field::Name), None);
        assert_eq!(form.errors().len(), 2);
        assert_eq!(form.input().name, "A");
    }

    #[test]
    fn test_invalid_submit_keeps_input() {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "Bob".to_string());
        let err = form.submit().unwrap_err();
        let SubmitError::Invalid(errors) = err else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.get(Field::Name), None);
        assert_eq!(errors.len(), 2);
        assert_eq!(form.input().name, "Bob");
    }

    #[test]
    fn test_double_submit_is_noop() {
        let mut form = filled_form();
        let pending = form.submit().expect("first submit should start");
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert_eq!(form.submit(), Err(SubmitError::InFlight));
        assert_eq!(form.status(), SubmissionStatus::Submitting);

        assert!(form.resolve(&pending, Ok(())));
        assert_eq!(form.status(), SubmissionStatus::Success);
        // only one terminal transition per attempt
        assert!(!form.resolve(&pending, Err(SendError::Rejected)));
        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[test]
    fn test_success_clears_input() {
        let mut form = filled_form();
        let pending = form.submit().unwrap();
        assert_eq!(pending.input, valid_input());
        form.resolve(&pending, Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert!(form.input().is_empty());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_error_keeps_input_and_allows_retry() {
        let mut form = filled_form();
        let first = form.submit().unwrap();
        form.resolve(&first, Err(SendError::Unavailable("down".to_string())));
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert!(form.status().is_terminal());
        assert_eq!(form.input(), &valid_input());

        let retry = form.submit().expect("retry after error should start");
        assert_ne!(retry.attempt(), first.attempt());
        // the old ticket cannot finish the new attempt
        assert!(!form.resolve(&first, Ok(())));
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert!(form.resolve(&retry, Ok(())));
        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[test]
    fn test_status_survives_edit() {
        let mut form = filled_form();
        let pending = form.submit().unwrap();
        form.resolve(&pending, Ok(()));
        form.edit(Field::Name, "New".to_string());
        assert_eq!(form.status(), SubmissionStatus::Success);

        let mut form = filled_form();
        let pending = form.submit().unwrap();
        form.resolve(&pending, Err(SendError::Rejected));
        form.edit(Field::Message, "changed my mind entirely".to_string());
        assert_eq!(form.status(), SubmissionStatus::Error);
    }

    #[test]
    fn test_resolve_without_submit_is_ignored() {
        let mut form = filled_form();
        let pending = form.submit().unwrap();
        let mut other = filled_form();
        assert!(!other.resolve(&pending, Ok(())));
        assert_eq!(other.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_simulated_sender_edges() {
        let rng = StdRng::seed_from_u64(7);
        let mut always = SimulatedSender::new(rng, 1.0);
        let mut never = SimulatedSender::new(StdRng::seed_from_u64(7), 0.0);
        for _ in 0..20 {
            assert_eq!(always.send(&valid_input()), Ok(()));
            assert!(never.send(&valid_input()).is_err());
        }
    }

    #[test]
    fn test_simulated_sender_rate() {
        let mut sender = SimulatedSender::new(StdRng::seed_from_u64(42), 0.8);
        let successes = (0..1000)
            .filter(|_| sender.send(&valid_input()).is_ok())
            .count();
        assert!((700..=900).contains(&successes), "got {successes} successes");
    }

    #[test]
    fn test_out_of_range_rate_is_clamped() {
        let mut sender = SimulatedSender::new(StdRng::seed_from_u64(1), 3.5);
        assert_eq!(sender.send(&valid_input()), Ok(()));
    }
}
