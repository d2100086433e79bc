mod inference;
mod models;
mod routes;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpResponse, HttpServer};
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let workers = std::env::var("WORKERS")
        .map(|w| w.parse().unwrap_or(num_cpus::get()))
        .unwrap_or_else(|_| num_cpus::get());

    let bind_address = format!("{}:{}", host, port);

    info!("🚀 Démarrage du serveur de modèle");
    info!("🌐 Serveur démarré sur: http://{}", bind_address);
    info!("👷 Workers: {}", workers);
    info!("🔧 Endpoints:");
    info!("   GET  /  - Format d'entrée attendu");
    info!("   POST /  - Évaluation du modèle");

    HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .app_data(web::PayloadConfig::new(10 * 1024 * 1024))
            .service(routes::model_info)
            .service(routes::predict)
            .default_service(web::route().to(|| async { HttpResponse::NotFound().finish() }))
    })
    .workers(workers)
    .bind(&bind_address)?
    .run()
    .await
}
