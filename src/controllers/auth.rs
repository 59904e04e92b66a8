use actix_web::http::header;
use actix_web::web::{Data, Form};
use actix_web::{get, post, Either, HttpResponse, Responder};
use sea_orm::DatabaseConnection;

use crate::errors::{Error, Validation};
use crate::metrics::AppMetrics;
use crate::requests::auth::LoginForm;
use crate::requests::user::RegisterForm;
use crate::responses::{auth, Page};
use crate::security::PasswordHasher;
use crate::services;
use crate::session::SessionContext;

const REGISTERED_MESSAGE: &str = "Congratulations, you are now a registered user!";
const LOGGED_IN_MESSAGE: &str = "You have been logged in!";
const LOGGED_OUT_MESSAGE: &str = "You have been logged out.";

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn register_page(ctx: &SessionContext, form: &RegisterForm, errors: &Validation) -> Page {
    Page::new("Register")
        .flashes(ctx.take_flashes())
        .content(auth::register(form, errors))
}

fn login_page(ctx: &SessionContext, form: &LoginForm, errors: &Validation) -> Page {
    Page::new("Sign In")
        .flashes(ctx.take_flashes())
        .content(auth::login(form, errors))
}

/// Registration form. Logged-in users are sent back to the homepage.
#[get("/register")]
pub async fn register_form(ctx: SessionContext) -> impl Responder {
    if ctx.user_id().is_some() {
        return Either::Right(see_other("/"));
    }

    let form = RegisterForm::default();
    let errors = Validation::new();

    Either::Left(register_page(&ctx, &form, &errors))
}

/// Create the account, flash a confirmation and send the user to the
/// login page. Validation failures re-render the form with field errors.
#[post("/register")]
pub async fn register(
    ctx: SessionContext,
    db: Data<DatabaseConnection>,
    hasher: Data<PasswordHasher>,
    metrics: Data<AppMetrics>,
    Form(form): Form<RegisterForm>,
) -> Result<Either<Page, HttpResponse>, Error> {
    match services::user::register(&db, &hasher, &metrics, form.clone()).await {
        Ok(_) => {
            ctx.flash(REGISTERED_MESSAGE)?;

            Ok(Either::Right(see_other("/login")))
        }
        Err(Error::Validation(errors)) => Ok(Either::Left(register_page(&ctx, &form, &errors))),
        Err(e) => Err(e),
    }
}

/// Login form. Logged-in users are sent back to the homepage.
#[get("/login")]
pub async fn login_form(ctx: SessionContext) -> impl Responder {
    if ctx.user_id().is_some() {
        return Either::Right(see_other("/"));
    }

    let form = LoginForm::default();
    let errors = Validation::new();

    Either::Left(login_page(&ctx, &form, &errors))
}

/// Establish the session for valid credentials.
///
/// Bad credentials flash one generic message and redirect back here;
/// missing fields re-render the form with field errors.
#[post("/login")]
pub async fn login(
    ctx: SessionContext,
    db: Data<DatabaseConnection>,
    hasher: Data<PasswordHasher>,
    metrics: Data<AppMetrics>,
    Form(form): Form<LoginForm>,
) -> Result<Either<Page, HttpResponse>, Error> {
    match services::auth::login(&db, &hasher, &metrics, form.clone()).await {
        Ok(user) => {
            ctx.persist_user(user.id)?;
            ctx.flash(LOGGED_IN_MESSAGE)?;

            Ok(Either::Right(see_other("/")))
        }
        Err(Error::Validation(errors)) => {
            if let Some(message) = errors.messages(services::auth::CREDENTIALS_FIELD).first() {
                ctx.flash(message.clone())?;

                return Ok(Either::Right(see_other("/login")));
            }

            Ok(Either::Left(login_page(&ctx, &form, &errors)))
        }
        Err(e) => Err(e),
    }
}

/// Drop the logged-in user from the session.
#[post("/logout")]
pub async fn logout(ctx: SessionContext) -> Result<impl Responder, Error> {
    ctx.forget_user();
    ctx.flash(LOGGED_OUT_MESSAGE)?;

    Ok(see_other("/"))
}
