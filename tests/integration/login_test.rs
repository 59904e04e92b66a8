//! Integration tests for login and logout.
//!
//! The main scenario registers through the real form and then logs in,
//! following each redirect with the session cookie. Failure tests check the
//! generic bad-credentials flash and the re-rendered form for missing
//! fields.

use actix_web::http::{header, StatusCode};
use actix_web::test::{call_service, read_body, TestRequest};
use microblog::requests::auth::LoginForm;
use microblog::requests::user::RegisterForm;
use microblog::testing::setup;

use super::session_cookie;

/// Registration request for the `testuser` account used across these tests.
fn register_testuser() -> actix_web::test::TestRequest {
    TestRequest::post().uri("/register").set_form(RegisterForm {
        username: "testuser".to_string(),
        email: "testuser@example.com".to_string(),
        password: "password".to_string(),
        password2: "password".to_string(),
    })
}

// =============================================================================
// SUCCESS PATH
// =============================================================================

/// Register through the form, log in, follow the redirect and see both the
/// flash and the greeting.
#[actix_web::test]
async fn test_login_after_registration() {
    let (service, _db) = microblog::service!();

    let resp = call_service(&service, register_testuser().to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER, "Registration should succeed");

    // Step 1: log in with the registered credentials
    let form = LoginForm {
        username: "testuser".to_string(),
        password: "password".to_string(),
    };

    let req = TestRequest::post().uri("/login").set_form(form).to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER, "Login should redirect");
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");

    let cookie = session_cookie(&resp).expect("Login should update the session cookie");

    // Step 2: follow the redirect home
    let req = TestRequest::get()
        .uri("/")
        .insert_header((header::COOKIE, cookie))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();

    assert!(
        body.contains("You have been logged in!"),
        "Homepage should show the login flash, got: {body}"
    );
    assert!(body.contains("Hi, testuser!"), "Homepage should greet the user");
    assert!(body.contains("Logout"), "Navigation should offer logout");
}

/// Login works for rows created directly through the fixtures.
#[actix_web::test]
async fn test_login_with_seeded_user() {
    let (service, db) = microblog::service!();
    let hasher = setup::password_hasher().unwrap();
    let user = setup::create_test_user(&db, &hasher).await.unwrap();

    let form = LoginForm {
        username: user.username.clone(),
        password: "password".to_string(),
    };

    let req = TestRequest::post().uri("/login").set_form(form).to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

/// Usernames are matched case-insensitively; the form value is lowercased.
#[actix_web::test]
async fn test_login_lowercases_the_username() {
    let (service, _db) = microblog::service!();

    let resp = call_service(&service, register_testuser().to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER, "Registration should succeed");

    let form = LoginForm {
        username: "TestUser".to_string(),
        password: "password".to_string(),
    };

    let req = TestRequest::post().uri("/login").set_form(form).to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

/// The login form renders with a link to registration.
#[actix_web::test]
async fn test_login_form_renders() {
    let (service, _db) = microblog::service!();

    let req = TestRequest::get().uri("/login").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();

    assert!(body.contains("<title>Sign In - Microblog</title>"));
    assert!(body.contains(r#"<a href="/register">Click to Register!</a>"#));
}

// =============================================================================
// FAILURE PATHS
// =============================================================================

/// A wrong password flashes the generic message and never says which half
/// was wrong.
#[actix_web::test]
async fn test_wrong_password_is_rejected() {
    let (service, _db) = microblog::service!();

    let resp = call_service(&service, register_testuser().to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER, "Registration should succeed");

    let form = LoginForm {
        username: "testuser".to_string(),
        password: "wrong-password".to_string(),
    };

    let req = TestRequest::post().uri("/login").set_form(form).to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER, "Bad credentials redirect back");
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");

    let cookie = session_cookie(&resp).unwrap();

    let req = TestRequest::get()
        .uri("/login")
        .insert_header((header::COOKIE, cookie.clone()))
        .to_request();
    let resp = call_service(&service, req).await;

    let body = read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();

    assert!(body.contains("Invalid username or password"));

    // No session was established
    let req = TestRequest::get()
        .uri("/")
        .insert_header((header::COOKIE, cookie))
        .to_request();
    let resp = call_service(&service, req).await;

    let body = read_body(resp).await;
    assert!(!std::str::from_utf8(&body).unwrap().contains("Hi, testuser!"));
}

/// An unknown username produces the same generic message as a wrong
/// password.
#[actix_web::test]
async fn test_unknown_username_is_rejected() {
    let (service, _db) = microblog::service!();

    let form = LoginForm {
        username: "nobody".to_string(),
        password: "password".to_string(),
    };

    let req = TestRequest::post().uri("/login").set_form(form).to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");

    let cookie = session_cookie(&resp).unwrap();

    let req = TestRequest::get()
        .uri("/login")
        .insert_header((header::COOKIE, cookie))
        .to_request();
    let resp = call_service(&service, req).await;

    let body = read_body(resp).await;
    assert!(std::str::from_utf8(&body)
        .unwrap()
        .contains("Invalid username or password"));
}

/// Missing fields re-render the form instead of redirecting.
#[actix_web::test]
async fn test_empty_login_form_reports_required_fields() {
    let (service, _db) = microblog::service!();

    let req = TestRequest::post()
        .uri("/login")
        .set_form(LoginForm::default())
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();

    assert_eq!(body.matches("This field is required.").count(), 2);
}

/// A logged-in user asking for the login form is sent home.
#[actix_web::test]
async fn test_login_form_redirects_logged_in_users() {
    let (service, _db) = microblog::service!();

    let resp = call_service(&service, register_testuser().to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER, "Registration should succeed");

    let req = TestRequest::post()
        .uri("/login")
        .set_form(LoginForm {
            username: "testuser".to_string(),
            password: "password".to_string(),
        })
        .to_request();
    let resp = call_service(&service, req).await;
    let cookie = session_cookie(&resp).unwrap();

    let req = TestRequest::get()
        .uri("/login")
        .insert_header((header::COOKIE, cookie))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
}

// =============================================================================
// LOGOUT
// =============================================================================

/// Logging out drops the session user and flashes a confirmation.
#[actix_web::test]
async fn test_logout_clears_the_session() {
    let (service, _db) = microblog::service!();

    let resp = call_service(&service, register_testuser().to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER, "Registration should succeed");

    // Log in
    let req = TestRequest::post()
        .uri("/login")
        .set_form(LoginForm {
            username: "testuser".to_string(),
            password: "password".to_string(),
        })
        .to_request();
    let resp = call_service(&service, req).await;
    let cookie = session_cookie(&resp).unwrap();

    // Log out
    let req = TestRequest::post()
        .uri("/logout")
        .insert_header((header::COOKIE, cookie))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");

    let cookie = session_cookie(&resp).unwrap();

    // Follow home: flash is shown, user is anonymous again
    let req = TestRequest::get()
        .uri("/")
        .insert_header((header::COOKIE, cookie))
        .to_request();
    let resp = call_service(&service, req).await;

    let body = read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();

    assert!(body.contains("You have been logged out."));
    assert!(!body.contains("Hi, testuser!"));
    assert!(body.contains(r#"<a href="/login">Login</a>"#));
}
