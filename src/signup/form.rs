//! Sign-up form state.

use super::normalize_phone_number;

/// Editable fields of the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignUpField {
    /// Country calling code, e.g. `+82`.
    CountryCode,
    /// Local phone number.
    #[default]
    PhoneNumber,
}

/// Text typed into the sign-up screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForm {
    country_code: String,
    phone_number: String,
    focus: SignUpField,
}

impl SignUpForm {
    /// Empty form with `country_code` pre-filled and the number focused.
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            phone_number: String::new(),
            focus: SignUpField::default(),
        }
    }

    /// Country code as typed.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Local number as typed.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Field receiving keystrokes.
    pub fn focused(&self) -> SignUpField {
        self.focus
    }

    /// Move keyboard focus to `field`.
    pub fn focus(&mut self, field: SignUpField) {
        self.focus = field;
    }

    /// Toggle focus between the two fields.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            SignUpField::CountryCode => SignUpField::PhoneNumber,
            SignUpField::PhoneNumber => SignUpField::CountryCode,
        };
    }

    /// Type a character into the focused field.
    ///
    /// Both fields use a numeric keypad: digits only, plus `+` in the
    /// country code. Returns whether the character was accepted.
    pub fn push_char(&mut self, c: char) -> bool {
        let accepted = c.is_ascii_digit() || (c == '+' && self.focus == SignUpField::CountryCode);
        if accepted {
            self.field_mut().push(c);
        }
        accepted
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.field_mut().pop();
    }

    /// Whether the submit button is shown as enabled.
    ///
    /// Submission itself is not blocked; an empty number is sent as-is and
    /// left for the backend to reject.
    pub fn can_submit(&self) -> bool {
        !self.phone_number.is_empty()
    }

    /// Normalized number that would be submitted.
    pub fn full_phone_number(&self) -> String {
        normalize_phone_number(&self.country_code, &self.phone_number)
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            SignUpField::CountryCode => &mut self.country_code,
            SignUpField::PhoneNumber => &mut self.phone_number,
        }
    }
}
