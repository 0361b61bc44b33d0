use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const FLASH_COOKIE: &str = "flash";
pub const ERROR: &str = "error";

/// One-request-lived notice carried across a redirect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub category: String,
    pub message: String,
}

fn pending(jar: &PrivateCookieJar) -> Vec<FlashMessage> {
    jar.get(FLASH_COOKIE)
        .and_then(|cookie| serde_json::from_str(cookie.value()).ok())
        .unwrap_or_default()
}

/// Queue a message for the next page render.
pub fn push(
    jar: PrivateCookieJar,
    category: &str,
    message: impl Into<String>,
) -> PrivateCookieJar {
    let mut messages = pending(&jar);
    messages.push(FlashMessage {
        category: category.to_string(),
        message: message.into(),
    });

    match serde_json::to_string(&messages) {
        Ok(value) => jar.add(
            Cookie::build((FLASH_COOKIE, value))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax),
        ),
        Err(e) => {
            warn!("Failed to encode flash messages: {}", e);
            jar
        }
    }
}

/// Drain queued messages; the returned jar clears the cookie when anything was pending.
pub fn take(jar: PrivateCookieJar) -> (PrivateCookieJar, Vec<FlashMessage>) {
    let messages = pending(&jar);
    if messages.is_empty() {
        return (jar, messages);
    }
    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), messages)
}
