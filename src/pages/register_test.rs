use super::*;

fn response(status: u16) -> ApiResponse {
    ApiResponse {
        status,
        body: String::new(),
    }
}

#[test]
fn register_201_succeeds() {
    assert_eq!(
        classify_register(Ok(response(201))),
        RegisterFeedback::Registered
    );
}

#[test]
fn register_unexpected_2xx_fails_generically() {
    assert!(matches!(
        classify_register(Ok(response(200))),
        RegisterFeedback::Failed(_)
    ));
}

#[test]
fn register_409_is_already_registered() {
    let feedback = classify_register(Err(ApiError::Status {
        status: 409,
        body: String::new(),
    }));
    assert_eq!(feedback, RegisterFeedback::AlreadyRegistered);
}

#[test]
fn register_network_errors_fail_generically() {
    let feedback = classify_register(Err(ApiError::Network("down".to_owned())));
    assert!(matches!(feedback, RegisterFeedback::Failed(_)));
}
