use crate::app::types::{Address, Role, UserProfile};

/// Transient state of the login form.
///
/// Login performs no lookup against stored accounts (none exist); a
/// successful submission fabricates a placeholder profile for the
/// chosen role. That mock substitution stands in for a real credential
/// check and is confined to [`LoginForm::build_profile`].
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: Role,
    /// Rendered but intentionally inert, as in the original product.
    pub remember_me: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            role: Role::Patient,
            remember_me: false,
            submitting: false,
            error: None,
        }
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both fields must be present; the email shape is not checked at
    /// login time.
    pub fn validate(&self) -> Result<(), String> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err("Please enter both email and password".to_string());
        }
        Ok(())
    }

    /// Synthesize the placeholder identity for the selected role. The
    /// username is derived from the email's local part.
    pub fn build_profile(&self) -> UserProfile {
        let first_name = match self.role {
            Role::Doctor => "Dr. Jane",
            Role::Patient => "John",
        };
        UserProfile {
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            profile_picture: None,
            username: self
                .email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string(),
            email: self.email.clone(),
            password: self.password.clone(),
            address: Address {
                line1: "123 Main St".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                pincode: "62704".to_string(),
            },
            role: self.role,
        }
    }

    /// Drop the secret once a submission has committed.
    pub fn clear_password(&mut self) {
        self.password.clear();
    }
}
