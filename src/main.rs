use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use travel_assistant_api::routes;
use travel_assistant_api::services::completion::CompletionClient;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 5000;
const FRONTEND_ORIGIN: &str = "http://localhost:3000";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let completion_client = CompletionClient::new();

    HttpServer::new(move || {
        let frontend_origin =
            std::env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| FRONTEND_ORIGIN.to_string());

        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allowed_origin(&frontend_origin)
                    .allow_any_method()
                    .allow_any_header()
                    .supports_credentials()
                    .max_age(3600),
            )
            .route("/health", web::get().to(|| async { "OK" }))
            .app_data(web::Data::new(completion_client.clone()))
            .service(
                web::scope("/api").service(
                    web::scope("/itinerary")
                        .route("/test", web::get().to(routes::health::test))
                        .route("/sample", web::get().to(routes::itinerary::sample))
                        .route("/create", web::post().to(routes::itinerary::create))
                        .route(
                            "/replace-activity",
                            web::post().to(routes::itinerary::replace_activity),
                        ),
                ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
