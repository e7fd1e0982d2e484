// One-shot messages carried across a redirect in a `flash` cookie.
//
// Cookie value is `<level>:<urlencoded message>`. The page that shows a
// message also clears the cookie.

use axum::http::HeaderMap;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};

pub const COOKIE_NAME: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(FlashLevel::Success),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    /// `Set-Cookie` value storing this message for the next request.
    pub fn to_set_cookie(&self) -> String {
        format!(
            "{COOKIE_NAME}={}:{}; Path=/; HttpOnly; SameSite=Lax",
            self.level.as_str(),
            urlencoding::encode(&self.message)
        )
    }

    /// The pending message in the request's `Cookie` headers, if any.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == COOKIE_NAME)
            .and_then(|(_, value)| Self::parse(value))
    }

    fn parse(value: &str) -> Option<Self> {
        let (level, message) = value.split_once(':')?;
        let level = FlashLevel::parse(level)?;
        let message = urlencoding::decode(message).ok()?.into_owned();
        Some(Self { level, message })
    }
}

/// `Set-Cookie` value that removes a shown message.
pub fn clear_cookie() -> String {
    format!("{COOKIE_NAME}=; Path=/; Max-Age=0")
}

/// `303 See Other` to `to`, carrying `flash` to the next page.
pub fn redirect_with(to: &str, flash: &FlashMessage) -> Response {
    (
        AppendHeaders([(SET_COOKIE, flash.to_set_cookie())]),
        Redirect::to(to),
    )
        .into_response()
}

/// Serve `page`, dropping the cookie of the message it shows.
pub fn consume(flash: Option<&FlashMessage>, page: impl IntoResponse) -> Response {
    match flash {
        Some(_) => (AppendHeaders([(SET_COOKIE, clear_cookie())]), page).into_response(),
        None => page.into_response(),
    }
}
