use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::server::util::validate;

/// Contact form payload.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormDto {
    #[validate(length(min = 2, max = 100, message = "name must be 2-100 characters"))]
    #[schema(example = "Ahmet Yilmaz")]
    pub name: String,
    #[validate(email(message = "enter a valid email address"))]
    #[schema(example = "ahmet@example.com")]
    pub email: String,
    #[validate(length(min = 3, max = 200, message = "subject must be 3-200 characters"))]
    pub subject: String,
    #[validate(length(min = 10, max = 2000, message = "message must be 10-2000 characters"))]
    pub message: String,
}

/// Appointment request payload.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentFormDto {
    #[validate(length(min = 2, max = 100, message = "name must be 2-100 characters"))]
    pub name: String,
    #[validate(email(message = "enter a valid email address"))]
    pub email: String,
    #[validate(custom(function = validate::turkish_phone))]
    #[schema(example = "+90 555 123 4567")]
    pub phone: String,
    #[validate(length(min = 1, message = "preferred date is required"))]
    #[schema(example = "2026-09-15 14:00")]
    pub preferred_date: String,
    pub preferred_time: Option<String>,
    pub department: Option<String>,
    #[validate(length(max = 2000, message = "message may be at most 2000 characters"))]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    fn contact() -> ContactFormDto {
        ContactFormDto {
            name: "Ahmet Yilmaz".to_string(),
            email: "ahmet@example.com".to_string(),
            subject: "Appointment".to_string(),
            message: "I would like to book an appointment.".to_string(),
        }
    }

    fn appointment() -> AppointmentFormDto {
        AppointmentFormDto {
            name: "Ayse Demir".to_string(),
            email: "ayse@example.com".to_string(),
            phone: "+90 555 123 4567".to_string(),
            preferred_date: "2026-09-15".to_string(),
            preferred_time: None,
            department: None,
            message: None,
        }
    }

    #[test]
    fn accepts_valid_contact_form() {
        assert!(contact().validate().is_ok());
    }

    #[test]
    fn rejects_short_contact_message() {
        let form = ContactFormDto {
            message: "too short".to_string(),
            ..contact()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("message"));
    }

    #[test]
    fn rejects_malformed_contact_email() {
        let form = ContactFormDto {
            email: "not-an-email".to_string(),
            ..contact()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn accepts_valid_appointment_form() {
        assert!(appointment().validate().is_ok());
    }

    #[test]
    fn rejects_foreign_phone_number() {
        let form = AppointmentFormDto {
            phone: "+1 202 555 0147".to_string(),
            ..appointment()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }

    #[test]
    fn rejects_empty_preferred_date() {
        let form = AppointmentFormDto {
            preferred_date: String::new(),
            ..appointment()
        };
        assert!(form.validate().is_err());
    }
}
