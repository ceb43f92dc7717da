use super::*;

// =============================================================
// Header interception
// =============================================================

#[test]
fn headers_without_token_carry_no_authorization() {
    let headers = request_headers(None);
    assert!(headers.iter().all(|(name, _)| *name != "Authorization"));
}

#[test]
fn headers_always_carry_warning_bypass() {
    for token in [None, Some("tok")] {
        let headers = request_headers(token);
        assert!(
            headers
                .iter()
                .any(|(name, value)| *name == "ngrok-skip-browser-warning" && value == "true")
        );
    }
}

#[test]
fn headers_with_token_carry_exact_bearer() {
    let headers = request_headers(Some("tok-123"));
    let auth: Vec<_> = headers
        .iter()
        .filter(|(name, _)| *name == "Authorization")
        .collect();
    assert_eq!(auth.len(), 1);
    assert_eq!(auth.first().unwrap().1, "Bearer tok-123");
}

// =============================================================
// URL handling
// =============================================================

#[test]
fn gateway_trims_trailing_slash_from_base() {
    let gateway = Gateway::new("https://api.example.test/", NoTokens);
    assert_eq!(gateway.base_url(), "https://api.example.test");
}

#[test]
fn join_url_keeps_absolute_paths() {
    assert_eq!(
        join_url("https://api.example.test", "/posts"),
        "https://api.example.test/posts"
    );
}

#[test]
fn join_url_inserts_missing_slash() {
    assert_eq!(
        join_url("https://api.example.test", "posts"),
        "https://api.example.test/posts"
    );
}

#[test]
fn join_url_with_empty_base_is_relative() {
    assert_eq!(join_url("", "/sessions"), "/sessions");
}

// =============================================================
// Methods and errors
// =============================================================

#[test]
fn method_as_str_matches_http_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Put.as_str(), "PUT");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

#[test]
fn api_error_exposes_status_only_for_status_errors() {
    let conflict = ApiError::Status {
        status: 409,
        body: String::new(),
    };
    assert_eq!(conflict.status(), Some(409));
    assert_eq!(ApiError::Network("down".to_owned()).status(), None);
    assert_eq!(ApiError::Decode("bad json".to_owned()).status(), None);
}

#[test]
fn api_response_json_decodes_body() {
    let response = ApiResponse {
        status: 200,
        body: r#"{"token":"tok-9"}"#.to_owned(),
    };
    let value: serde_json::Value = response.json().unwrap();
    assert_eq!(value["token"], "tok-9");
}

#[test]
fn api_response_json_reports_decode_errors() {
    let response = ApiResponse {
        status: 200,
        body: "not json".to_owned(),
    };
    let result = response.json::<serde_json::Value>();
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn no_tokens_never_authorizes() {
    assert_eq!(NoTokens.token(), None);
}
