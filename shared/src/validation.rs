use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::constants::{
    INAPPROPRIATE_PRIZE_TEXT_ERROR, INVALID_PRIZE_COLOR_ERROR, INVALID_PRIZE_TEXT_ERROR,
    MAX_PRIZE_TEXT_LENGTH,
};
use crate::profanity::ProfanityFilter;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").unwrap());

pub fn validate_prize_text(text: &str) -> Result<(), ValidationError> {
    let length = text.trim().chars().count() as u64;
    if length == 0 || length > MAX_PRIZE_TEXT_LENGTH {
        return Err(ValidationError::new("invalid_prize_text"));
    }
    if ProfanityFilter::contains_profanity(text) {
        return Err(ValidationError::new("inappropriate_prize_text"));
    }
    Ok(())
}

pub fn validate_prize_color(color: &str) -> Result<(), ValidationError> {
    if !HEX_COLOR.is_match(color) {
        return Err(ValidationError::new("invalid_prize_color"));
    }
    Ok(())
}

/// Operator input for a new or edited prize.
#[derive(Debug, Validate)]
pub struct PrizeInput {
    #[validate(custom = "validate_prize_text")]
    pub text: String,
    #[validate(custom = "validate_prize_color")]
    pub color: String,
}

impl PrizeInput {
    pub fn new(text: &str, color: &str) -> Self {
        Self {
            text: text.trim().to_string(),
            color: color.trim().to_string(),
        }
    }

    /// Validates and returns a user-facing message for the first failing field.
    pub fn check(&self) -> Result<(), String> {
        self.validate().map_err(|errors| error_message(&errors))
    }
}

fn error_message(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    let code = fields
        .get("text")
        .or_else(|| fields.get("color"))
        .and_then(|errors| errors.first())
        .map(|error| error.code.to_string())
        .unwrap_or_default();

    match code.as_str() {
        "inappropriate_prize_text" => INAPPROPRIATE_PRIZE_TEXT_ERROR,
        "invalid_prize_color" => INVALID_PRIZE_COLOR_ERROR,
        _ => INVALID_PRIZE_TEXT_ERROR,
    }
    .to_string()
}
