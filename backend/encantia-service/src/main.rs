use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use encantia_service::logging::init_tracing;
use encantia_service::middleware::MaintenanceGate;
use encantia_service::routes::configure_routes;
use encantia_service::{AppState, Config};
use supabase_client::{SupabaseClient, SupabaseConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;
    let supabase = SupabaseClient::new(SupabaseConfig {
        url: config.supabase.url.clone(),
        anon_key: config.supabase.anon_key.clone(),
    })?;

    let host = config.app.host.clone();
    let port = config.app.port;
    let state = AppState::new(config, supabase);

    tracing::info!(%host, port, "starting encantia-service");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(TracingLogger::default())
            .wrap(MaintenanceGate)
            .wrap(cors)
            .configure(configure_routes)
    })
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}
