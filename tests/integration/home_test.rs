//! Integration tests for the homepage.

use actix_web::http::StatusCode;
use actix_web::test::{call_service, read_body, TestRequest};

/// The homepage loads for anonymous visitors and shows the welcome text.
#[actix_web::test]
async fn test_homepage_loads() {
    let (service, _db) = microblog::service!();

    let req = TestRequest::get().uri("/").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();

    assert!(
        body.contains("Welcome to Microblog"),
        "Homepage should contain the welcome text, got: {body}"
    );
    assert!(body.contains("<title>Home - Microblog</title>"));
}

/// Anonymous visitors get a login link, not a logout button.
#[actix_web::test]
async fn test_homepage_shows_login_link_when_anonymous() {
    let (service, _db) = microblog::service!();

    let req = TestRequest::get().uri("/").to_request();
    let resp = call_service(&service, req).await;

    let body = read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();

    assert!(body.contains(r#"<a href="/login">Login</a>"#));
    assert!(!body.contains("Logout"));
}

/// The homepage is served as HTML.
#[actix_web::test]
async fn test_homepage_is_html() {
    let (service, _db) = microblog::service!();

    let req = TestRequest::get().uri("/").to_request();
    let resp = call_service(&service, req).await;

    let content_type = resp.headers().get("content-type").unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
}

/// Unknown paths fall through to a 404.
#[actix_web::test]
async fn test_unknown_path_is_not_found() {
    let (service, _db) = microblog::service!();

    let req = TestRequest::get().uri("/no-such-page").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
