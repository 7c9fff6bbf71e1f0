use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::theme::{THEME_COOKIE, Theme};

/// POST /theme/toggle - flips light/dark and persists the choice.
///
/// The new value is written back on every toggle; a client that refuses the
/// cookie simply falls back to its preference hint on the next request.
pub async fn toggle(theme: Theme, jar: CookieJar) -> impl IntoResponse {
    let next = theme.toggled();

    let cookie = Cookie::build((THEME_COOKIE, next.as_str()))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(365))
        .build();

    (jar.add(cookie), Redirect::to("/"))
}
