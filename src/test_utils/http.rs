use axum::{body::Body, http::StatusCode, response::Response};
use axum_htmx::HX_REDIRECT;

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
}

/// Assert that htmx will be told to load `endpoint`.
#[track_caller]
pub(crate) fn assert_hx_redirect(response: &Response<Body>, endpoint: &str) {
    let location = response
        .headers()
        .get(HX_REDIRECT)
        .expect("expected response to have the header hx-redirect");

    assert_eq!(
        location, endpoint,
        "got redirect to {location:?}, want redirect to {endpoint}"
    );
}
