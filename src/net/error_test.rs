use super::*;

#[test]
fn status_message_includes_action_and_code() {
    let err = ApiError::status("Failed to fetch lists", 500);
    assert_eq!(err.to_string(), "Failed to fetch lists (HTTP 500)");
}

#[test]
fn transport_message_includes_detail() {
    let err = ApiError::transport("Failed to add item", "connection refused");
    assert_eq!(err.message(), "Failed to add item: connection refused");
}

#[test]
fn error_converts_into_its_message() {
    let message: String = ApiError::unavailable("Failed to delete list").into();
    assert_eq!(message, "Failed to delete list: not available outside the browser");
}
