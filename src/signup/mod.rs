//! Phone-number sign-up flow.
//!
//! The form collects a country code and a local number, normalizes them into
//! one international number and hands it to an [`AuthClient`]. Any auth
//! failure is reported as a single generic [`SignUpError`].

pub mod auth;
pub mod form;

pub use auth::{AuthClient, LocalAuthClient, PendingVerification};
pub use form::{SignUpField, SignUpForm};

use crate::model::SignUpError;
use tracing::{info, warn};

/// Country code whose numbers are written with a leading trunk `0` locally.
pub const KOREA_COUNTRY_CODE: &str = "+82";

/// Combine country code and local number into the submitted number.
///
/// A single leading `0` is dropped for `+82` numbers only
/// (`+82`, `01012345678` → `+821012345678`). No other validation happens.
pub fn normalize_phone_number(country_code: &str, phone_number: &str) -> String {
    let local = if country_code == KOREA_COUNTRY_CODE {
        phone_number.strip_prefix('0').unwrap_or(phone_number)
    } else {
        phone_number
    };
    format!("{country_code}{local}")
}

/// Result of a sign-up attempt that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The auth client is not ready yet; nothing was submitted.
    NotReady,
    /// A verification code is on its way.
    VerificationSent(PendingVerification),
}

/// Submit `form` through `client`.
///
/// Creates the sign-up and requests phone verification. Either step failing
/// yields [`SignUpError::Failed`]; there is no retry.
pub fn submit(
    form: &SignUpForm,
    client: &mut dyn AuthClient,
) -> Result<SignUpOutcome, SignUpError> {
    if !client.is_loaded() {
        return Ok(SignUpOutcome::NotReady);
    }

    let full_number = form.full_phone_number();
    let result = client
        .create(&full_number)
        .and_then(|()| client.prepare_phone_verification());

    match result {
        Ok(pending) => {
            info!(phone = %pending.phone_number(), "Phone verification requested");
            Ok(SignUpOutcome::VerificationSent(pending))
        }
        Err(err) => {
            warn!(error = %err, "Sign-up failed");
            Err(SignUpError::Failed(err))
        }
    }
}
