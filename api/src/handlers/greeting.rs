//! Greeting handlers

use axum::extract::State;

use crate::app::DEFAULT_GREETING;
use crate::AppState;

/// GET /
pub async fn hello() -> &'static str {
    DEFAULT_GREETING
}

/// GET /greeting
///
/// Whatever the configured `GreetingService` says.
pub async fn greeting(State(state): State<AppState>) -> String {
    state.greeting_service.greet()
}
