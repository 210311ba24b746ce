use std::collections::BTreeMap;
use std::fmt;

use crate::app::types::{Address, Role, UserProfile};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Fields of the signup form that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignupField {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    ConfirmPassword,
    AddressLine1,
    City,
    State,
    Pincode,
}

impl SignupField {
    /// Every field the validation pass can reject.
    pub const ALL: [SignupField; 10] = [
        SignupField::FirstName,
        SignupField::LastName,
        SignupField::Username,
        SignupField::Email,
        SignupField::Password,
        SignupField::ConfirmPassword,
        SignupField::AddressLine1,
        SignupField::City,
        SignupField::State,
        SignupField::Pincode,
    ];
}

impl fmt::Display for SignupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignupField::FirstName => "firstName",
            SignupField::LastName => "lastName",
            SignupField::Username => "username",
            SignupField::Email => "email",
            SignupField::Password => "password",
            SignupField::ConfirmPassword => "confirmPassword",
            SignupField::AddressLine1 => "addressLine1",
            SignupField::City => "city",
            SignupField::State => "state",
            SignupField::Pincode => "pincode",
        };
        write!(f, "{name}")
    }
}

/// Transient state of the signup form. All errors are collected in one
/// validation pass; submission proceeds only when the error map is
/// empty.
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    /// Data URI produced by the picture loader, absent until attached.
    pub profile_picture: Option<String>,
    /// Path input for the picture loader.
    pub picture_path: String,
    /// Inline error from a failed picture load.
    pub picture_error: Option<String>,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub address_line1: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub role: Role,
    pub submitting: bool,
    pub errors: BTreeMap<SignupField, String>,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            profile_picture: None,
            picture_path: String::new(),
            picture_error: None,
            username: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            address_line1: String::new(),
            city: String::new(),
            state: String::new(),
            pincode: String::new(),
            role: Role::Patient,
            submitting: false,
            errors: BTreeMap::new(),
        }
    }
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the role toggle from a navigation hint (the landing
    /// page's "Join as ..." buttons, the login page's signup link).
    pub fn with_role(role: Role) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    /// Run the full validation pass, collecting an error for every
    /// failing field rather than stopping at the first.
    pub fn validate(&mut self) -> bool {
        let mut errors = BTreeMap::new();

        if self.first_name.trim().is_empty() {
            errors.insert(SignupField::FirstName, "First name is required".to_string());
        }
        if self.last_name.trim().is_empty() {
            errors.insert(SignupField::LastName, "Last name is required".to_string());
        }
        if self.username.trim().is_empty() {
            errors.insert(SignupField::Username, "Username is required".to_string());
        }

        if self.email.trim().is_empty() {
            errors.insert(SignupField::Email, "Email is required".to_string());
        } else if !email_has_valid_shape(&self.email) {
            errors.insert(SignupField::Email, "Email is invalid".to_string());
        }

        if self.password.is_empty() {
            errors.insert(SignupField::Password, "Password is required".to_string());
        } else if self.password.len() < MIN_PASSWORD_LEN {
            errors.insert(
                SignupField::Password,
                "Password must be at least 6 characters".to_string(),
            );
        }

        // The mismatch check runs even when the password itself is
        // invalid; an untouched confirmation counts as missing rather
        // than trivially matching an empty password.
        if self.confirm_password.is_empty() {
            errors.insert(
                SignupField::ConfirmPassword,
                "Confirm password is required".to_string(),
            );
        } else if self.password != self.confirm_password {
            errors.insert(
                SignupField::ConfirmPassword,
                "Passwords do not match".to_string(),
            );
        }

        if self.address_line1.trim().is_empty() {
            errors.insert(SignupField::AddressLine1, "Address is required".to_string());
        }
        if self.city.trim().is_empty() {
            errors.insert(SignupField::City, "City is required".to_string());
        }
        if self.state.trim().is_empty() {
            errors.insert(SignupField::State, "State is required".to_string());
        }
        if self.pincode.trim().is_empty() {
            errors.insert(SignupField::Pincode, "Pincode is required".to_string());
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn error(&self, field: SignupField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Assemble the identity record from the validated fields.
    pub fn build_profile(&self) -> UserProfile {
        UserProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            profile_picture: self.profile_picture.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            address: Address {
                line1: self.address_line1.clone(),
                city: self.city.clone(),
                state: self.state.clone(),
                pincode: self.pincode.clone(),
            },
            role: self.role,
        }
    }

    /// Drop the secrets once a submission has committed.
    pub fn clear_passwords(&mut self) {
        self.password.clear();
        self.confirm_password.clear();
    }
}

/// Shape check for `local@domain.tld`: a contiguous run of at least one
/// non-whitespace character, an `@`, at least one more, a `.`, and at
/// least one more. Anything stricter is out of scope.
pub fn email_has_valid_shape(input: &str) -> bool {
    for (at, _) in input.match_indices('@') {
        let local_ok = input[..at]
            .chars()
            .next_back()
            .is_some_and(|c| !c.is_whitespace());
        if !local_ok {
            continue;
        }
        let rest = &input[at + 1..];
        let run_end = rest
            .find(char::is_whitespace)
            .unwrap_or(rest.len());
        let domain = &rest[..run_end];
        if domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
        {
            return true;
        }
    }
    false
}
