pub mod assets;
pub mod config;
pub mod contact;
pub mod content;
pub mod observability;
pub mod relay;
pub mod routes;
pub mod template;
pub mod theme;

pub use config::Config;
pub use routes::AppState;

use std::sync::Arc;

use relay::MessageRelay;

/// Create the app router
///
/// Shared between the server binary and the integration tests, which drive
/// the router directly with a stub relay instead of starting the full server.
pub fn create_app(config: Config, relay: Arc<dyn MessageRelay>) -> axum::Router {
    routes::router(AppState { config, relay })
}
