use std::convert::Infallible;

use axum::{
    RequestPartsExt,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};

use crate::theme::Theme;

/// Per-request rendering context. Carries the resolved theme and turns
/// template failures into a plain 500 instead of letting them escape.
pub struct Template {
    pub theme: Theme,
}

impl Template {
    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render template");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong, please retry later",
                )
                    .into_response()
            }
        }
    }
}

impl<S> FromRequestParts<S> for Template
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let theme = parts.extract_with_state::<Theme, _>(state).await?;

        Ok(Template { theme })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;
