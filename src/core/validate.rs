/// A contact form submission, exactly as read from the form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionError {
    EmptyField,
    InvalidEmail,
}

impl SubmissionError {
    /// User-facing message for the notification toast.
    pub fn message(self) -> &'static str {
        match self {
            SubmissionError::EmptyField => "Please fill in all fields",
            SubmissionError::InvalidEmail => "Please enter a valid email address",
        }
    }
}

impl Submission {
    pub fn validate(&self) -> Result<(), SubmissionError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.subject.is_empty()
            || self.message.is_empty()
        {
            return Err(SubmissionError::EmptyField);
        }
        if !is_valid_email(&self.email) {
            return Err(SubmissionError::InvalidEmail);
        }
        Ok(())
    }
}

/// The shape the page accepts: a local part and a domain around a single
/// `@`, no whitespace anywhere, and a dot inside the domain with at least
/// one character before it and after it.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .bytes()
        .enumerate()
        .any(|(i, b)| b == b'.' && i > 0 && i + 1 < domain.len())
}
