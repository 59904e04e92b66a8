use super::page::escape;

/// Homepage body, greeting the logged-in user when there is one.
pub fn index(user: Option<&str>) -> String {
    let mut body = String::from("<h1>Welcome to Microblog</h1>");

    if let Some(username) = user {
        body.push_str(&format!("\n<p>Hi, {}!</p>", escape(username)));
    }

    body
}
