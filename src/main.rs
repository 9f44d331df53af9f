mod db;
mod error;
mod models;
mod routes;
mod services;

use actix_web::{App, HttpServer, web};

use error::ApiError;
use services::python::PythonRunner;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    println!("🔌 Connecting to database...");
    let db = db::establish_connection()
        .await
        .expect("Failed to connect to database");
    println!("✅ Database connected!");

    let runner = PythonRunner::from_env();

    println!("🚀 Starting server on http://127.0.0.1:8080");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(runner.clone()))
            // paramètres malformés -> 400 JSON structuré, jamais de défaut silencieux
            .app_data(web::QueryConfig::default().error_handler(|err, _| {
                ApiError::Validation(err.to_string()).into()
            }))
            .app_data(web::PathConfig::default().error_handler(|err, _| {
                ApiError::Validation(err.to_string()).into()
            }))
            .configure(routes::configure_routes)
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
