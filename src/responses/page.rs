//! Server-rendered HTML pages.
//!
//! Every route responds with a [`Page`]: a shared layout carrying the
//! navigation bar and any pending flash messages around a per-route body.

use actix_web::body::BoxBody;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Responder};

/// Escape text for interpolation into HTML content or attribute values.
pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// An HTML page assembled from the shared layout and a route body.
#[derive(Clone, Debug, Default)]
pub struct Page {
    title: String,
    user: Option<String>,
    flashes: Vec<String>,
    content: String,
}

impl Page {
    pub fn new<T: Into<String>>(title: T) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Username shown in the navigation bar; `None` renders the login link.
    pub fn user(mut self, user: Option<String>) -> Self {
        self.user = user;
        self
    }

    pub fn flashes(mut self, flashes: Vec<String>) -> Self {
        self.flashes = flashes;
        self
    }

    pub fn content<C: Into<String>>(mut self, content: C) -> Self {
        self.content = content.into();
        self
    }

    fn nav(&self) -> String {
        match &self.user {
            Some(_) => concat!(
                r#"<a href="/">Home</a> "#,
                r#"<form class="logout" action="/logout" method="post">"#,
                r#"<button type="submit">Logout</button></form>"#
            )
            .to_string(),
            None => r#"<a href="/">Home</a> <a href="/login">Login</a>"#.to_string(),
        }
    }

    fn flash_list(&self) -> String {
        if self.flashes.is_empty() {
            return String::new();
        }

        let items: String = self
            .flashes
            .iter()
            .map(|message| format!("<li>{}</li>", escape(message)))
            .collect();

        format!(r#"<ul class="flashes">{items}</ul>"#)
    }

    fn render(&self) -> String {
        format!(
            concat!(
                "<!doctype html>\n",
                "<html>\n",
                "<head><title>{title} - Microblog</title></head>\n",
                "<body>\n",
                "<div>Microblog: {nav}</div>\n",
                "<hr>\n",
                "{flashes}",
                "{content}\n",
                "</body>\n",
                "</html>\n"
            ),
            title = escape(&self.title),
            nav = self.nav(),
            flashes = self.flash_list(),
            content = self.content,
        )
    }
}

impl Responder for Page {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(self.render())
    }
}
