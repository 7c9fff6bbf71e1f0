use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use axum::{RequestPartsExt, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

/// Cookie key holding the persisted theme preference.
pub const THEME_COOKIE: &str = "theme";

/// Active visual theme. One value holds for the whole page render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(UnknownTheme),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownTheme;

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown theme value")
    }
}

impl std::error::Error for UnknownTheme {}

/// Resolves the theme for a request: persisted cookie first, then the
/// browser's `Sec-CH-Prefers-Color-Scheme` hint, then light.
///
/// An unreadable cookie value is treated the same as an absent one, so a
/// client with broken storage silently falls back instead of erroring.
impl<S> FromRequestParts<S> for Theme
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = parts
            .extract::<CookieJar>()
            .await
            .unwrap_or_else(|never| match never {});

        if let Some(cookie) = jar.get(THEME_COOKIE)
            && let Ok(theme) = cookie.value().parse()
        {
            return Ok(theme);
        }

        let prefers_dark = parts
            .headers
            .get("sec-ch-prefers-color-scheme")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.eq_ignore_ascii_case("dark"));

        Ok(if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }
}
