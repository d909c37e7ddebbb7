use actix_web::{HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct TestStatus {
    message: String,
    timestamp: DateTime<Utc>,
    status: String,
}

/*
    /api/itinerary/test
*/
pub async fn test() -> impl Responder {
    println!("Test endpoint was called");

    HttpResponse::Ok().json(TestStatus {
        message: "Backend is working!".to_string(),
        timestamp: Utc::now(),
        status: "Success".to_string(),
    })
}
