//! Custom validator functions shared by the payload models.
//!
//! Enum-valued fields are stored as plain strings; their allowed value sets
//! live here and are enforced at the validation layer only.

use validator::ValidationError;

pub const SPONSOR_CATEGORIES: &[&str] = &[
    "technology",
    "pharmaceutical",
    "equipment",
    "education",
    "research",
];
pub const ACTIVE_STATUSES: &[&str] = &["active", "inactive"];
pub const MEDIA_TYPES: &[&str] = &["video", "image", "podcast", "webinar"];
pub const MEDIA_CATEGORIES: &[&str] = &["education", "surgery", "research", "patient", "conference"];
pub const PUBLISH_STATUSES: &[&str] = &["published", "draft", "archived"];
pub const INNOVATION_TYPES: &[&str] = &["podcast", "video", "article", "research"];
pub const INNOVATION_CATEGORIES: &[&str] = &["support", "education", "research", "technology"];
pub const FAQ_CATEGORIES: &[&str] = &[
    "general",
    "treatment",
    "appointment",
    "surgery",
    "payment",
    "insurance",
];

/// Lowercase alphanumeric and hyphens only.
pub fn slug(value: &str) -> Result<(), ValidationError> {
    let valid = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(error(
            "slug",
            "slug may only contain lowercase letters, digits and hyphens",
        ))
    }
}

/// Turkish mobile number: ten national digits starting with 5, with an
/// optional +90 country code or leading zero, and the usual separator
/// characters tolerated.
pub fn turkish_phone(value: &str) -> Result<(), ValidationError> {
    let well_formed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+'));

    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    let national = digits.strip_prefix("90").unwrap_or(&digits);
    let national = national.strip_prefix('0').unwrap_or(national);

    if well_formed && national.len() == 10 && national.starts_with('5') {
        Ok(())
    } else {
        Err(error("phone", "enter a valid phone number"))
    }
}

pub fn sponsor_category(value: &str) -> Result<(), ValidationError> {
    one_of(value, SPONSOR_CATEGORIES, "category")
}

pub fn active_status(value: &str) -> Result<(), ValidationError> {
    one_of(value, ACTIVE_STATUSES, "status")
}

pub fn media_type(value: &str) -> Result<(), ValidationError> {
    one_of(value, MEDIA_TYPES, "type")
}

pub fn media_category(value: &str) -> Result<(), ValidationError> {
    one_of(value, MEDIA_CATEGORIES, "category")
}

pub fn publish_status(value: &str) -> Result<(), ValidationError> {
    one_of(value, PUBLISH_STATUSES, "status")
}

pub fn innovation_type(value: &str) -> Result<(), ValidationError> {
    one_of(value, INNOVATION_TYPES, "type")
}

pub fn innovation_category(value: &str) -> Result<(), ValidationError> {
    one_of(value, INNOVATION_CATEGORIES, "category")
}

pub fn faq_category(value: &str) -> Result<(), ValidationError> {
    one_of(value, FAQ_CATEGORIES, "category")
}

fn one_of(value: &str, allowed: &[&str], code: &'static str) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(error(code, "select a valid value"))
    }
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_slugs() {
        assert!(slug("spine-stabilization").is_ok());
        assert!(slug("disc-surgery-2").is_ok());
    }

    #[test]
    fn rejects_invalid_slugs() {
        assert!(slug("").is_err());
        assert!(slug("Spine Surgery").is_err());
        assert!(slug("omurga_cerrahisi").is_err());
        assert!(slug("tr/eatment").is_err());
    }

    #[test]
    fn accepts_turkish_mobile_numbers() {
        assert!(turkish_phone("+90 555 123 4567").is_ok());
        assert!(turkish_phone("05551234567").is_ok());
        assert!(turkish_phone("5551234567").is_ok());
        assert!(turkish_phone("0555-123-45-67").is_ok());
    }

    #[test]
    fn rejects_invalid_phone_numbers() {
        assert!(turkish_phone("12345").is_err());
        assert!(turkish_phone("+1 202 555 0147").is_err());
        assert!(turkish_phone("not a number").is_err());
        // Landline prefix, not a mobile number.
        assert!(turkish_phone("0212 123 45 67").is_err());
    }

    #[test]
    fn enum_sets_reject_unknown_values() {
        assert!(sponsor_category("technology").is_ok());
        assert!(sponsor_category("crypto").is_err());
        assert!(publish_status("draft").is_ok());
        assert!(publish_status("deleted").is_err());
        assert!(media_type("video").is_ok());
        assert!(media_type("hologram").is_err());
    }
}
