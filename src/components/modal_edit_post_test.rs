use super::*;

#[test]
fn updated_only_on_200() {
    let ok = Ok(ApiResponse {
        status: 200,
        body: String::new(),
    });
    assert!(updated(&ok));

    let other = Ok(ApiResponse {
        status: 204,
        body: String::new(),
    });
    assert!(!updated(&other));
}

#[test]
fn updated_is_false_on_errors() {
    let err: Result<ApiResponse, ApiError> = Err(ApiError::Network("down".to_owned()));
    assert!(!updated(&err));
}
