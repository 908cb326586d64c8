pub mod error;
pub mod routes;

use std::sync::Arc;

use db::DBService;
use services::services::config::SeoConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: DBService,
    pub seo: Arc<SeoConfig>,
}
