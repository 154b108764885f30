use crate::domain::{ErrorSet, Field, FieldSet};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PAN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("pan pattern is valid"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

static AADHAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{12}$").expect("aadhar pattern is valid"));

/// Recomputes the full error set from scratch. Every rule is evaluated
/// independently; dialCode has no rule. City is only checked for
/// non-emptiness, never against the selected country's city list.
pub fn validate(fields: &FieldSet) -> ErrorSet {
    let mut errors = ErrorSet::new();

    if fields.first_name.trim().is_empty() {
        errors.insert(Field::FirstName, "First Name cannot be empty".to_string());
    }
    if fields.last_name.trim().is_empty() {
        errors.insert(Field::LastName, "Last Name cannot be empty".to_string());
    }
    if fields.username.trim().is_empty() {
        errors.insert(Field::Username, "Username cannot be blank".to_string());
    }
    if !EMAIL_PATTERN.is_match(&fields.email) {
        errors.insert(Field::Email, "Enter a valid email".to_string());
    }
    if fields.password.is_empty() {
        errors.insert(Field::Password, "Password is required".to_string());
    }
    if !PHONE_PATTERN.is_match(&fields.mobile) {
        errors.insert(Field::Mobile, "Enter 10 digit number".to_string());
    }
    if fields.country.is_empty() {
        errors.insert(Field::Country, "Select a country".to_string());
    }
    if fields.city.is_empty() {
        errors.insert(Field::City, "Select a city".to_string());
    }
    if !PAN_PATTERN.is_match(&fields.pan_card) {
        errors.insert(Field::PanCard, "Invalid PAN format".to_string());
    }
    if !AADHAR_PATTERN.is_match(&fields.aadhar_card) {
        errors.insert(Field::AadharCard, "Aadhar must be 12 digits".to_string());
    }

    errors
}

pub fn is_valid(fields: &FieldSet) -> bool {
    validate(fields).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_fields() -> FieldSet {
        FieldSet {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            username: "alee".to_string(),
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            dial_code: "+91".to_string(),
            mobile: "1234567890".to_string(),
            country: "India".to_string(),
            city: "Mumbai".to_string(),
            pan_card: "ABCDE1234F".to_string(),
            aadhar_card: "123456789012".to_string(),
        }
    }

    #[test]
    fn fully_valid_field_set_produces_no_errors() {
        let fields = filled_fields();
        assert!(validate(&fields).is_empty());
        assert!(is_valid(&fields));
    }

    #[test]
    fn empty_field_set_fails_every_rule_except_dial_code() {
        let errors = validate(&FieldSet::default());
        assert_eq!(errors.len(), 10);
        assert!(!errors.contains_key(&Field::DialCode));
    }

    #[test]
    fn each_required_field_reports_its_own_message() {
        let cases = [
            (Field::FirstName, "First Name cannot be empty"),
            (Field::LastName, "Last Name cannot be empty"),
            (Field::Username, "Username cannot be blank"),
            (Field::Email, "Enter a valid email"),
            (Field::Password, "Password is required"),
            (Field::Mobile, "Enter 10 digit number"),
            (Field::Country, "Select a country"),
            (Field::City, "Select a city"),
            (Field::PanCard, "Invalid PAN format"),
            (Field::AadharCard, "Aadhar must be 12 digits"),
        ];

        for (field, message) in cases {
            let mut fields = filled_fields();
            fields.set(field, "");
            let errors = validate(&fields);
            assert_eq!(errors.get(&field).map(String::as_str), Some(message));
            assert_eq!(errors.len(), 1, "only {field:?} should fail");
        }
    }

    #[test]
    fn whitespace_only_names_are_empty_but_password_is_not_trimmed() {
        let mut fields = filled_fields();
        fields.set(Field::FirstName, "   ");
        fields.set(Field::Password, "   ");

        let errors = validate(&fields);
        assert!(errors.contains_key(&Field::FirstName));
        assert!(!errors.contains_key(&Field::Password));
    }

    #[test]
    fn malformed_email_reports_only_the_email_error() {
        let mut fields = filled_fields();
        fields.set(Field::Email, "not-an-email");

        let errors = validate(&fields);
        assert_eq!(
            errors.get(&Field::Email).map(String::as_str),
            Some("Enter a valid email")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn email_rejects_embedded_whitespace_and_missing_dot() {
        for bad in ["a b@c.com", "a@b c.com", "a@b", "@b.com", "a@.x", "a@b."] {
            let mut fields = filled_fields();
            fields.set(Field::Email, bad);
            assert!(
                validate(&fields).contains_key(&Field::Email),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn mobile_must_be_exactly_ten_digits() {
        for bad in ["123456789", "12345678901", "12345abcde", "+1234567890"] {
            let mut fields = filled_fields();
            fields.set(Field::Mobile, bad);
            assert!(validate(&fields).contains_key(&Field::Mobile));
        }
    }

    #[test]
    fn pan_format_is_five_upper_four_digits_one_upper() {
        let mut fields = filled_fields();
        fields.set(Field::PanCard, "abcde1234f");
        assert!(validate(&fields).contains_key(&Field::PanCard));

        fields.set(Field::PanCard, "ABCDE1234FG");
        assert!(validate(&fields).contains_key(&Field::PanCard));

        fields.set(Field::PanCard, "ABCDE1234F");
        assert!(!validate(&fields).contains_key(&Field::PanCard));
    }

    #[test]
    fn short_aadhar_reports_twelve_digit_message() {
        let mut fields = filled_fields();
        fields.set(Field::AadharCard, "12345");

        let errors = validate(&fields);
        assert_eq!(
            errors.get(&Field::AadharCard).map(String::as_str),
            Some("Aadhar must be 12 digits")
        );
    }

    #[test]
    fn city_is_not_checked_against_the_country_list() {
        // The table never offers this pair, but the validator only looks
        // at non-emptiness.
        let mut fields = filled_fields();
        fields.set(Field::Country, "USA");
        fields.set(Field::City, "Mumbai");
        assert!(is_valid(&fields));
    }

    #[test]
    fn dial_code_is_freeform() {
        let mut fields = filled_fields();
        fields.set(Field::DialCode, "");
        assert!(is_valid(&fields));

        fields.set(Field::DialCode, "not a dial code");
        assert!(is_valid(&fields));
    }
}
