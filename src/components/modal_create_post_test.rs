use super::*;

#[test]
fn created_only_on_201() {
    let ok = Ok(ApiResponse {
        status: 201,
        body: String::new(),
    });
    assert!(created(&ok));

    let other = Ok(ApiResponse {
        status: 200,
        body: String::new(),
    });
    assert!(!created(&other));
}

#[test]
fn created_is_false_on_errors() {
    let err: Result<ApiResponse, ApiError> = Err(ApiError::Status {
        status: 500,
        body: String::new(),
    });
    assert!(!created(&err));
    assert!(!created(&Err(ApiError::Network("down".to_owned()))));
}
