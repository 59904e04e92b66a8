use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::entities::users::Model;
use crate::errors::{Error, Validation};
use crate::metrics::AppMetrics;
use crate::models::now;
use crate::requests::user::RegisterForm;
use crate::security::{PasswordHasher, Validator};

/// Validate a registration form and create the account.
///
/// Every problem with the form is collected before returning, so the
/// re-rendered page shows all field errors at once. Uniqueness is only
/// checked for fields that already pass the format rules.
#[::tracing::instrument(skip(db, hasher, metrics, form), fields(username = %form.username, email = %form.email))]
pub async fn register(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    metrics: &AppMetrics,
    form: RegisterForm,
) -> Result<Model, Error> {
    let mut validation = Validation::new();
    let username = form.username.trim().to_lowercase();
    let email = form.email.trim().to_lowercase();
    let password = form.password;
    let password2 = form.password2;

    if username.is_empty() {
        validation.add("username", "This field is required.");
    } else if !Validator::validate_username(&username) {
        validation.add(
            "username",
            "Username must be 3 to 32 letters, numbers, underscores or hyphens.",
        );
    } else if Model::username_exists(db, &username).await {
        validation.add("username", "Please use a different username.");
    }

    if email.is_empty() {
        validation.add("email", "This field is required.");
    } else if !Validator::validate_email(&email) {
        validation.add("email", "Please enter a valid email address.");
    } else if Model::email_exists(db, &email).await {
        validation.add("email", "Please use a different email address.");
    }

    if password.is_empty() {
        validation.add("password", "This field is required.");
    } else if let Err(errors) = Validator::validate_password(&password) {
        for error in errors {
            validation.add("password", error);
        }
    }

    if password2.is_empty() {
        validation.add("password2", "This field is required.");
    } else if password2 != password {
        validation.add("password2", "Field must be equal to password.");
    }

    if !validation.is_empty() {
        return Err(validation.into());
    }

    let id = Uuid::new_v4();
    let password = hasher.hash(&password)?;

    let model = Model {
        id,
        username,
        email,
        password,
        created_at: now(),
        updated_at: now(),
    };

    let model = model.store(db).await?;

    metrics.set_users_total(Model::count(db).await);

    ::tracing::info!(user_id = %id, "User registered");

    Ok(model)
}
