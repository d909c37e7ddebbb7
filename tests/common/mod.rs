use actix_web::{web, App};

use travel_assistant_api::routes;
use travel_assistant_api::services::completion::CompletionClient;

/// Test harness bundling a mock completion server with an app factory.
/// Handlers talk to the mock instead of the real completion API.
pub struct TestApp {
    pub server: mockito::ServerGuard,
}

impl TestApp {
    pub async fn new() -> Self {
        std::env::set_var("OPENAI_API_KEY", "test-api-key");
        let server = mockito::Server::new_async().await;

        Self { server }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let client = CompletionClient::with_base_url(self.server.url());

        App::new().app_data(web::Data::new(client)).service(
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
    }

    /// A chat-completion response body whose completion text is `content`.
    pub fn completion_body(content: &str) -> String {
        serde_json::json!({
            "choices": [
                { "message": { "role": "assistant", "content": content } }
            ]
        })
        .to_string()
    }
}
