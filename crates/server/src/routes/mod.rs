pub mod seo;
pub mod tools;

use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(tools::router())
        .merge(seo::router())
}
