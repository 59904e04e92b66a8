use crate::errors::Validation;
use crate::requests::auth::LoginForm;
use crate::requests::user::RegisterForm;

use super::page::escape;

/// Inline error spans for one form field.
fn field_errors(errors: &Validation, field: &str) -> String {
    errors
        .messages(field)
        .iter()
        .map(|message| format!(r#"<br><span class="error">[{}]</span>"#, escape(message)))
        .collect()
}

/// Registration form body, re-filled with the submitted text fields.
///
/// Password inputs are never re-filled.
pub fn register(form: &RegisterForm, errors: &Validation) -> String {
    format!(
        concat!(
            "<h1>Register</h1>\n",
            r#"<form action="/register" method="post">"#,
            "\n",
            r#"<p>Username:<br><input type="text" name="username" value="{username}" size="32">{username_errors}</p>"#,
            "\n",
            r#"<p>Email:<br><input type="text" name="email" value="{email}" size="64">{email_errors}</p>"#,
            "\n",
            r#"<p>Password:<br><input type="password" name="password" size="32">{password_errors}</p>"#,
            "\n",
            r#"<p>Repeat Password:<br><input type="password" name="password2" size="32">{password2_errors}</p>"#,
            "\n",
            r#"<p><input type="submit" value="Register"></p>"#,
            "\n",
            "</form>"
        ),
        username = escape(&form.username),
        username_errors = field_errors(errors, "username"),
        email = escape(&form.email),
        email_errors = field_errors(errors, "email"),
        password_errors = field_errors(errors, "password"),
        password2_errors = field_errors(errors, "password2"),
    )
}

/// Login form body with the registration link underneath.
pub fn login(form: &LoginForm, errors: &Validation) -> String {
    format!(
        concat!(
            "<h1>Sign In</h1>\n",
            r#"<form action="/login" method="post">"#,
            "\n",
            r#"<p>Username:<br><input type="text" name="username" value="{username}" size="32">{username_errors}</p>"#,
            "\n",
            r#"<p>Password:<br><input type="password" name="password" size="32">{password_errors}</p>"#,
            "\n",
            r#"<p><input type="submit" value="Sign In"></p>"#,
            "\n",
            "</form>\n",
            r#"<p>New User? <a href="/register">Click to Register!</a></p>"#
        ),
        username = escape(&form.username),
        username_errors = field_errors(errors, "username"),
        password_errors = field_errors(errors, "password"),
    )
}
