//! Form state and client-side validation for the login and register screens.
//!
//! Validation mirrors what the backend enforces so obviously bad input never
//! costs a round trip: emails must contain `@`, passwords must be at least
//! eight characters, registration requires a name and a matching
//! confirmation.

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Which login field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

/// Login form state.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
}

impl LoginForm {
    /// Move focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    /// Append a character to the focused field.
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            LoginField::Email => self.email.push(c),
            LoginField::Password => self.password.push(c),
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        match self.focus {
            LoginField::Email => {
                self.email.pop();
            }
            LoginField::Password => {
                self.password.pop();
            }
        }
    }

    /// Validate, storing per-field errors. Returns `true` when submittable.
    pub fn validate(&mut self) -> bool {
        self.email_error = validate_email(&self.email);
        self.password_error = validate_password(&self.password);
        self.email_error.is_none() && self.password_error.is_none()
    }

    /// Clear values and errors, keeping focus on the first field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Which register field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterField {
    #[default]
    Name,
    Email,
    Password,
    Confirm,
}

/// Registration form state.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub focus: RegisterField,
    pub name_error: Option<String>,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub confirm_error: Option<String>,
}

impl RegisterForm {
    /// Move focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            RegisterField::Name => RegisterField::Email,
            RegisterField::Email => RegisterField::Password,
            RegisterField::Password => RegisterField::Confirm,
            RegisterField::Confirm => RegisterField::Name,
        };
    }

    /// Append a character to the focused field.
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            RegisterField::Name => self.name.push(c),
            RegisterField::Email => self.email.push(c),
            RegisterField::Password => self.password.push(c),
            RegisterField::Confirm => self.confirm.push(c),
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        match self.focus {
            RegisterField::Name => {
                self.name.pop();
            }
            RegisterField::Email => {
                self.email.pop();
            }
            RegisterField::Password => {
                self.password.pop();
            }
            RegisterField::Confirm => {
                self.confirm.pop();
            }
        }
    }

    /// Validate, storing per-field errors. Returns `true` when submittable.
    pub fn validate(&mut self) -> bool {
        self.name_error = if self.name.trim().is_empty() {
            Some("Name is required".to_string())
        } else {
            None
        };
        self.email_error = validate_email(&self.email);
        self.password_error = validate_password(&self.password);
        self.confirm_error = if self.confirm != self.password {
            Some("Passwords do not match".to_string())
        } else {
            None
        };

        self.name_error.is_none()
            && self.email_error.is_none()
            && self.password_error.is_none()
            && self.confirm_error.is_none()
    }

    /// Clear values and errors, keeping focus on the first field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn validate_email(email: &str) -> Option<String> {
    if email.trim().is_empty() {
        Some("Email is required".to_string())
    } else if !email.contains('@') {
        Some("Enter a valid email address".to_string())
    } else {
        None
    }
}

fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        Some("Password is required".to_string())
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Some(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ))
    } else {
        None
    }
}
