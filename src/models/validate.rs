//! Field constraints shared by create and update payloads.

use email_address::{EmailAddress, Options};

use crate::errors::AppError;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Payload constraints beyond what deserialization already enforces.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

pub fn rating(value: i32) -> Result<(), AppError> {
    if (MIN_RATING..=MAX_RATING).contains(&value) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "rating must be between {} and {}, got {}",
            MIN_RATING, MAX_RATING, value
        )))
    }
}

/// Bare `local@domain.tld` only: no display name, no domain literal.
pub fn email(value: &str) -> Result<(), AppError> {
    let options = Options::default()
        .with_required_tld()
        .without_display_text()
        .without_domain_literal();

    EmailAddress::parse_with_options(value, options)
        .map(|_| ())
        .map_err(|e| {
            AppError::Validation(format!("email is not a valid address: {:?} ({})", value, e))
        })
}
