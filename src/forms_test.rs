use super::*;

fn login(email: &str, password: &str) -> LoginForm {
    LoginForm {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

fn register_ok() -> RegisterForm {
    RegisterForm {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: "(11) 91234-5678".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
    }
}

fn post_ok() -> PostForm {
    PostForm {
        title: "Hello".to_owned(),
        content: "First post".to_owned(),
        category: "cat-1".to_owned(),
    }
}

// =============================================================
// LoginForm
// =============================================================

#[test]
fn login_valid_form_passes() {
    assert!(login("ana@example.com", "secret1").validate().ok());
}

#[test]
fn login_rejects_malformed_email() {
    for email in ["", "ana", "@example.com", "ana@nodot", "ana@.com"] {
        let errors = login(email, "secret1").validate();
        assert!(errors.email.is_some(), "accepted {email:?}");
    }
}

#[test]
fn login_rejects_short_password() {
    let errors = login("ana@example.com", "12345").validate();
    assert!(errors.password.is_some());
}

// =============================================================
// RegisterForm
// =============================================================

#[test]
fn register_valid_form_passes() {
    assert!(register_ok().validate().ok());
}

#[test]
fn register_requires_name() {
    let mut form = register_ok();
    form.name = "   ".to_owned();
    assert!(form.validate().name.is_some());
}

#[test]
fn register_counts_digits_in_phone() {
    let mut form = register_ok();
    form.phone = "(11) 1234-567".to_owned();
    assert!(form.validate().phone.is_some());

    form.phone = "11912345678".to_owned();
    assert!(form.validate().phone.is_none());
}

#[test]
fn register_requires_matching_passwords() {
    let mut form = register_ok();
    form.confirm_password = "secret2".to_owned();
    assert!(form.validate().confirm_password.is_some());
}

// =============================================================
// PostForm
// =============================================================

#[test]
fn post_valid_form_passes() {
    assert!(post_ok().validate().ok());
}

#[test]
fn post_requires_title_content_and_category() {
    let errors = PostForm::default().validate();
    assert!(errors.title.is_some());
    assert!(errors.content.is_some());
    assert!(errors.category.is_some());
}

#[test]
fn post_content_is_capped_at_500_chars() {
    let mut form = post_ok();
    form.content = "x".repeat(500);
    assert!(form.validate().content.is_none());

    form.content = "x".repeat(501);
    assert!(form.validate().content.is_some());
}
