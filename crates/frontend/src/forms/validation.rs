//! Client-side validation for the enquiry and distributor forms.

use contracts::content::{DistributorApplication, EnquiryRequest};

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Loose email shape check: non-blank local part, an `@`, and a dotted
/// domain, with no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn email_errors(email: &str, errors: &mut Vec<FieldError>) {
    if email.trim().is_empty() {
        errors.push(FieldError {
            field: "email",
            message: "Email is required",
        });
    } else if !is_valid_email(email.trim()) {
        errors.push(FieldError {
            field: "email",
            message: "Email is invalid",
        });
    }
}

fn require(value: &str, field: &'static str, message: &'static str, errors: &mut Vec<FieldError>) {
    if value.trim().is_empty() {
        errors.push(FieldError { field, message });
    }
}

pub fn validate_enquiry(enquiry: &EnquiryRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require(
        &enquiry.full_name,
        "fullName",
        "Full name is required",
        &mut errors,
    );
    email_errors(&enquiry.email, &mut errors);
    require(&enquiry.company, "company", "Company is required", &mut errors);
    require(&enquiry.country, "country", "Country is required", &mut errors);
    require(
        &enquiry.comments,
        "comments",
        "Comments are required",
        &mut errors,
    );
    errors
}

pub fn validate_distributor(application: &DistributorApplication) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require(
        &application.company,
        "company",
        "Company is required",
        &mut errors,
    );
    require(
        &application.contact_name,
        "contactName",
        "Contact name is required",
        &mut errors,
    );
    email_errors(&application.email, &mut errors);
    require(&application.phone, "phone", "Phone is required", &mut errors);
    require(
        &application.channels,
        "channels",
        "Channels are required",
        &mut errors,
    );
    errors
}

/// Message for one field, if it failed validation.
pub fn error_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("jo@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.co"));
        assert!(!is_valid_email("jo@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jo example@x.com"));
        assert!(!is_valid_email("jo@"));
        assert!(!is_valid_email("jo@.com")); // empty host
    }

    #[test]
    fn test_empty_enquiry_reports_all_required_fields() {
        let errors = validate_enquiry(&EnquiryRequest::default());
        for field in ["fullName", "email", "company", "country", "comments"] {
            assert!(error_for(&errors, field).is_some(), "missing: {}", field);
        }
        // Phone is optional.
        assert!(error_for(&errors, "phone").is_none());
    }

    #[test]
    fn test_invalid_email_message_differs_from_missing() {
        let mut enquiry = EnquiryRequest::default();
        enquiry.email = "not-an-email".to_string();
        let errors = validate_enquiry(&enquiry);
        assert_eq!(error_for(&errors, "email"), Some("Email is invalid"));
    }

    #[test]
    fn test_complete_enquiry_passes() {
        let enquiry = EnquiryRequest {
            full_name: "Jo Field".to_string(),
            email: "jo@example.com".to_string(),
            company: "Acme".to_string(),
            country: "India".to_string(),
            comments: "Interested in the 511 series".to_string(),
            ..Default::default()
        };
        assert!(validate_enquiry(&enquiry).is_empty());
    }

    #[test]
    fn test_distributor_requires_phone_and_channels() {
        let errors = validate_distributor(&DistributorApplication::default());
        assert!(error_for(&errors, "phone").is_some());
        assert!(error_for(&errors, "channels").is_some());
        // Title is optional.
        assert!(error_for(&errors, "title").is_none());
    }
}
