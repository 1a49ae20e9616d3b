//! Integration tests for the phone-number sign-up flow through the public API.

use findeck::model::{AuthError, SignUpError};
use findeck::signup::{
    normalize_phone_number, submit, AuthClient, LocalAuthClient, PendingVerification,
    SignUpField, SignUpForm, SignUpOutcome,
};

fn typed_form(country_code: &str, phone: &str) -> SignUpForm {
    let mut form = SignUpForm::new(country_code);
    form.focus(SignUpField::PhoneNumber);
    for c in phone.chars() {
        form.push_char(c);
    }
    form
}

/// Backend that is still starting up.
struct LoadingClient;

impl AuthClient for LoadingClient {
    fn is_loaded(&self) -> bool {
        false
    }

    fn create(&mut self, _phone_number: &str) -> Result<(), AuthError> {
        panic!("create must not be called before the client loads");
    }

    fn prepare_phone_verification(&mut self) -> Result<PendingVerification, AuthError> {
        panic!("verification must not be requested before the client loads");
    }
}

#[test]
fn korean_number_is_normalized_and_verified() {
    let mut client = LocalAuthClient::new();
    let outcome = submit(&typed_form("+82", "01012345678"), &mut client).unwrap();

    let SignUpOutcome::VerificationSent(pending) = outcome else {
        panic!("expected a verification to be sent, got {outcome:?}");
    };
    assert_eq!(pending.phone_number(), "+821012345678");
}

#[test]
fn other_country_codes_keep_leading_zero() {
    assert_eq!(normalize_phone_number("+44", "07700900123"), "+4407700900123");

    let mut client = LocalAuthClient::new();
    let outcome = submit(&typed_form("+44", "07700900123"), &mut client).unwrap();
    let SignUpOutcome::VerificationSent(pending) = outcome else {
        panic!("expected a verification to be sent, got {outcome:?}");
    };
    assert_eq!(pending.phone_number(), "+4407700900123");
}

#[test]
fn unloaded_client_is_not_called() {
    let outcome = submit(&typed_form("+82", "010"), &mut LoadingClient).unwrap();
    assert_eq!(outcome, SignUpOutcome::NotReady);
}

#[test]
fn rejected_number_surfaces_generic_error() {
    let mut client = LocalAuthClient::new();
    let err = submit(&typed_form("+82", ""), &mut client).unwrap_err();

    assert!(matches!(err, SignUpError::Failed(AuthError::Rejected(_))));
    assert_eq!(err.to_string(), "There was an error signing up.");
}

#[test]
fn empty_number_is_submitted_anyway() {
    let form = typed_form("+1", "");
    assert!(!form.can_submit());
    assert_eq!(form.full_phone_number(), "+1");
}
