/// Encantia Service Library
///
/// Serves every page of the Encantia community application as a resolved
/// view endpoint. Persistence, authentication and authorization live in the
/// hosted Supabase backend; this service resolves the caller's identity,
/// issues the page's table reads/writes through `supabase-client`, and
/// returns the assembled view model.
///
/// # Modules
///
/// - `handlers`: one module per route group (auth, home, notes, inbox, ...)
/// - `models`: remote table rows and the view models built from them
/// - `services`: pure helpers (countdowns, date display, stream links, nav)
/// - `middleware`: identity extraction and the maintenance gate
/// - `error`: error types and HTTP mapping
/// - `config`: environment configuration
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod services;

use std::sync::Arc;

use supabase_client::SupabaseClient;
use tokio::sync::OnceCell;

use models::status::SiteStatus;

pub use config::Config;
pub use error::{AppError, Result};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub supabase: SupabaseClient,
    pub config: Arc<Config>,
    /// Maintenance status row, fetched once per process.
    pub site_status: Arc<OnceCell<SiteStatus>>,
}

impl AppState {
    pub fn new(config: Config, supabase: SupabaseClient) -> Self {
        Self {
            supabase,
            config: Arc::new(config),
            site_status: Arc::new(OnceCell::new()),
        }
    }
}
