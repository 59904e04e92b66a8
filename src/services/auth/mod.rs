mod login;

pub use login::{login, BAD_CREDENTIALS, CREDENTIALS_FIELD};
