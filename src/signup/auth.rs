//! Auth collaborator seam.

use crate::model::AuthError;

/// Handle for a sign-up waiting on its SMS code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingVerification {
    phone_number: String,
    verification_id: u64,
}

impl PendingVerification {
    /// Create a handle.
    pub fn new(phone_number: impl Into<String>, verification_id: u64) -> Self {
        Self {
            phone_number: phone_number.into(),
            verification_id,
        }
    }

    /// Number the code was sent to.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Backend reference for the verification.
    pub fn verification_id(&self) -> u64 {
        self.verification_id
    }
}

/// Remote sign-up backend.
pub trait AuthClient {
    /// Whether the client has finished initializing.
    fn is_loaded(&self) -> bool;

    /// Start a sign-up for `phone_number`.
    fn create(&mut self, phone_number: &str) -> Result<(), AuthError>;

    /// Send a verification code for the sign-up in progress.
    fn prepare_phone_verification(&mut self) -> Result<PendingVerification, AuthError>;
}

/// In-process stand-in used when no backend is configured.
///
/// Accepts a `+` followed by at least three digits and hands out
/// sequential verification ids.
#[derive(Debug, Default)]
pub struct LocalAuthClient {
    pending: Option<String>,
    next_id: u64,
}

impl LocalAuthClient {
    /// Create a client with no sign-up in progress.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuthClient for LocalAuthClient {
    fn is_loaded(&self) -> bool {
        true
    }

    fn create(&mut self, phone_number: &str) -> Result<(), AuthError> {
        let valid = phone_number
            .strip_prefix('+')
            .is_some_and(|digits| digits.len() >= 3 && digits.chars().all(|c| c.is_ascii_digit()));
        if !valid {
            return Err(AuthError::Rejected(phone_number.to_string()));
        }
        self.pending = Some(phone_number.to_string());
        Ok(())
    }

    fn prepare_phone_verification(&mut self) -> Result<PendingVerification, AuthError> {
        let phone_number = self.pending.take().ok_or(AuthError::NoSignUp)?;
        self.next_id += 1;
        Ok(PendingVerification::new(phone_number, self.next_id))
    }
}
