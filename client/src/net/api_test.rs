use super::*;

#[test]
fn sign_in_url_encodes_callback() {
    assert_eq!(
        sign_in_url("https://dotcodeschool.test/courses?x=1"),
        "/api/auth/signin?callbackUrl=https%3A%2F%2Fdotcodeschool.test%2Fcourses%3Fx%3D1"
    );
}

#[test]
fn sign_out_body_carries_token_and_callback() {
    assert_eq!(
        sign_out_body("tok en", "/"),
        "csrfToken=tok+en&callbackUrl=%2F&json=true"
    );
}

#[test]
fn lesson_endpoint_formats_expected_path() {
    assert_eq!(lesson_endpoint("rust-101", "2"), "/api/courses/rust-101/lessons/2");
}

#[test]
fn progress_failed_message_formats_status() {
    assert_eq!(progress_failed_message(503), "progress sync failed: 503");
}
