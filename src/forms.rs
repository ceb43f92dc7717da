//! Client-side form validation, run before any request is sent.
//!
//! Each form is a plain value struct whose `validate()` produces a per-field
//! error record; components render the messages next to the inputs and only
//! submit when `ok()` holds.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Maximum length of a post's content, matching the server-side limit.
const CONTENT_MAX_CHARS: usize = 500;

const PASSWORD_MIN_CHARS: usize = 6;
const PHONE_MIN_DIGITS: usize = 10;

/// Loose e-mail shape check: `local@domain.tld`.
fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

/// Login form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Per-field validation messages for the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn ok(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl LoginForm {
    pub fn validate(&self) -> LoginErrors {
        LoginErrors {
            email: (!is_email(self.email.trim())).then_some("Enter a valid e-mail"),
            password: (self.password.chars().count() < PASSWORD_MIN_CHARS)
                .then_some("Password must have at least 6 characters"),
        }
    }
}

/// Registration form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

/// Per-field validation messages for the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl RegisterErrors {
    pub fn ok(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

impl RegisterForm {
    pub fn validate(&self) -> RegisterErrors {
        RegisterErrors {
            name: self.name.trim().is_empty().then_some("Name is required"),
            email: (!is_email(self.email.trim())).then_some("Enter a valid e-mail"),
            phone: (digit_count(&self.phone) < PHONE_MIN_DIGITS)
                .then_some("Phone must have at least 10 digits"),
            password: (self.password.chars().count() < PASSWORD_MIN_CHARS)
                .then_some("Password must have at least 6 characters"),
            confirm_password: (self.confirm_password != self.password)
                .then_some("Passwords do not match"),
        }
    }
}

/// Create/edit post form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub category: String,
}

/// Per-field validation messages for the post form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostErrors {
    pub title: Option<&'static str>,
    pub content: Option<&'static str>,
    pub category: Option<&'static str>,
}

impl PostErrors {
    pub fn ok(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.category.is_none()
    }
}

impl PostForm {
    pub fn validate(&self) -> PostErrors {
        let content = if self.content.trim().is_empty() {
            Some("Content is required")
        } else if self.content.chars().count() > CONTENT_MAX_CHARS {
            Some("Content must have at most 500 characters")
        } else {
            None
        };

        PostErrors {
            title: self.title.trim().is_empty().then_some("Title is required"),
            content,
            category: self.category.is_empty().then_some("Category is required"),
        }
    }
}
