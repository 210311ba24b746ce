//! Property-based tests for the signup validation rules.

use medconnect::app::forms::signup::{email_has_valid_shape, SignupField, SignupForm};
use proptest::prelude::*;

fn valid_form() -> SignupForm {
    let mut form = SignupForm::new();
    form.first_name = "Jane".to_string();
    form.last_name = "Doe".to_string();
    form.username = "janedoe".to_string();
    form.email = "jane@clinic.org".to_string();
    form.password = "secret".to_string();
    form.confirm_password = "secret".to_string();
    form.address_line1 = "1 Clinic Way".to_string();
    form.city = "Springfield".to_string();
    form.state = "IL".to_string();
    form.pincode = "62704".to_string();
    form
}

proptest! {
    #[test]
    fn test_passwords_of_six_or_more_pass_the_length_rule(password in "[a-zA-Z0-9]{6,32}") {
        let mut form = valid_form();
        form.password = password.clone();
        form.confirm_password = password;
        prop_assert!(form.validate());
    }

    #[test]
    fn test_short_passwords_fail_the_length_rule(password in "[a-zA-Z0-9]{1,5}") {
        let mut form = valid_form();
        form.password = password.clone();
        form.confirm_password = password;
        prop_assert!(!form.validate());
        prop_assert_eq!(
            form.error(SignupField::Password),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_simple_addresses_match_the_email_shape(
        local in "[a-z0-9]{1,12}",
        domain in "[a-z0-9]{1,12}",
        tld in "[a-z]{1,6}",
    ) {
        let address = format!("{local}@{domain}.{tld}", local = local, domain = domain, tld = tld);
        prop_assert!(email_has_valid_shape(&address));
    }

    #[test]
    fn test_strings_without_an_at_sign_never_match(email in "[a-z0-9 .]{0,24}") {
        prop_assert!(!email_has_valid_shape(&email));
    }

    #[test]
    fn test_mismatched_confirmation_is_always_reported(
        password in "[a-zA-Z0-9]{6,16}",
        suffix in "[a-zA-Z0-9]{1,4}",
    ) {
        let mut form = valid_form();
        form.password = password.clone();
        form.confirm_password = format!("{password}{suffix}");
        prop_assert!(!form.validate());
        prop_assert_eq!(
            form.error(SignupField::ConfirmPassword),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_blank_required_fields_are_always_reported(spaces in " {0,8}") {
        let mut form = valid_form();
        form.first_name = spaces.clone();
        form.pincode = spaces;
        prop_assert!(!form.validate());
        prop_assert!(form.error(SignupField::FirstName).is_some());
        prop_assert!(form.error(SignupField::Pincode).is_some());
    }
}
