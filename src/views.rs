//! HTML views.
//!
//! Each view returns a complete document as a `String`. Values that reach a
//! page are escaped with [`escape_html`] except where a route exists to
//! demonstrate the absence of escaping (see [`search`]).

use crate::services::session::SessionUser;
use crate::services::users::User;

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n\
         <nav><a href=\"/\">Home</a> | <a href=\"/search\">Search</a></nav>\n\
         {body}\n\
         </body>\n\
         </html>\n"
    )
}

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[must_use]
pub fn home(user: Option<&SessionUser>) -> String {
    let body = match user {
        Some(user) => format!(
            "<h1>Welcome, {name}</h1>\n\
             <p><a href=\"/note/{id}\">View my secret note</a></p>\n\
             <p><a href=\"/logout\">Logout</a></p>",
            name = escape_html(&user.username),
            id = user.user_id,
        ),
        None => "<h1>Welcome, guest</h1>\n<p><a href=\"/login\">Login</a></p>".to_owned(),
    };
    layout("Home", &body)
}

#[must_use]
pub fn login_form(error: Option<&str>) -> String {
    let error = error
        .map(|e| format!("<p class=\"error\">{}</p>\n", escape_html(e)))
        .unwrap_or_default();
    let body = format!(
        "<h1>Login</h1>\n\
         {error}\
         <form method=\"post\" action=\"/login\">\n\
         <label>Username <input name=\"username\"></label>\n\
         <label>Password <input name=\"password\" type=\"password\"></label>\n\
         <button type=\"submit\">Login</button>\n\
         </form>"
    );
    layout("Login", &body)
}

/// The owner's note is written into the page as stored.
#[must_use]
pub fn note(user: &User) -> String {
    let body = format!(
        "<h1>Secret note #{id}</h1>\n<p>{note}</p>",
        id = user.id,
        note = user.secret_note,
    );
    layout("Note", &body)
}

/// Reflects `query` into the page verbatim.
#[must_use]
pub fn search(query: &str) -> String {
    let body = format!(
        "<h1>Search</h1>\n\
         <form method=\"get\" action=\"/search\"><input name=\"q\"><button type=\"submit\">Go</button></form>\n\
         <p>Results for: {query}</p>"
    );
    layout("Search", &body)
}

#[cfg(test)]
#[path = "views_test.rs"]
mod tests;
