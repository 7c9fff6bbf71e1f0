use std::sync::Arc;

use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};

use crate::relay::MessageRelay;
use crate::template::{NotFoundTemplate, Template};

mod contact;
mod health;
mod index;
mod theme;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub relay: Arc<dyn MessageRelay>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render(NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index::page))
        .route("/health", get(health::health))
        .route("/contact", post(contact::action))
        .route("/contact/form", get(contact::form))
        .route("/theme/toggle", post(theme::toggle))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
