use super::*;

#[test]
fn deleted_only_on_200() {
    let ok = Ok(ApiResponse {
        status: 200,
        body: String::new(),
    });
    assert!(deleted(&ok));

    let other = Ok(ApiResponse {
        status: 202,
        body: String::new(),
    });
    assert!(!deleted(&other));
}

#[test]
fn deleted_is_false_on_errors() {
    let err: Result<ApiResponse, ApiError> = Err(ApiError::Status {
        status: 500,
        body: String::new(),
    });
    assert!(!deleted(&err));
}
