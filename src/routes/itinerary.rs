use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use chrono::NaiveDate;
use serde_json::json;

use crate::models::preferences::{ItineraryRequest, ReplaceActivityRequest, TravelDateRange};
use crate::models::sample::sample_itinerary;
use crate::services::bucketizer::partition_into_days;
use crate::services::completion::{CompletionClient, CompletionError};
use crate::services::normalizer::{parse_activity, parse_activity_list};
use crate::services::prompts::{build_itinerary_prompt, build_replacement_prompt};

const CREATE_TEMPERATURE: f32 = 0.7;
/// Replacement suggestions sample hotter so the model produces a materially
/// different activity instead of echoing the original.
const REPLACEMENT_TEMPERATURE: f32 = 0.9;
const REPLACEMENT_MAX_TOKENS: u32 = 500;

/*
    /api/itinerary/create
*/
pub async fn create(
    data: web::Data<CompletionClient>,
    input: web::Json<ItineraryRequest>,
) -> impl Responder {
    let request = input.into_inner();

    let prompt = match build_itinerary_prompt(&request) {
        Ok(prompt) => prompt,
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };

    // Presence was checked by the prompt builder; the range still has to be
    // two real dates for bucketing.
    let (start, end) = match parse_date_range(request.travel_dates.as_ref()) {
        Ok(range) => range,
        Err(message) => return HttpResponse::BadRequest().body(message),
    };

    let completion = match data
        .complete(&prompt.system, &prompt.user, Some(CREATE_TEMPERATURE), None)
        .await
    {
        Ok(text) => text,
        Err(err) => return completion_error_response(err),
    };

    let activities = match parse_activity_list(&completion) {
        Ok(activities) => activities,
        Err(err) => {
            eprintln!(
                "Failed to normalize itinerary completion: {}; raw response: {}",
                err, err.raw_text
            );
            return HttpResponse::InternalServerError().json(json!({
                "error": "An error occurred while generating the itinerary.",
                "details": err.to_string(),
            }));
        }
    };

    let days = partition_into_days(activities, start, end);
    HttpResponse::Ok().json(days)
}

/*
    /api/itinerary/replace-activity
*/
pub async fn replace_activity(
    data: web::Data<CompletionClient>,
    input: web::Json<ReplaceActivityRequest>,
) -> impl Responder {
    let request = input.into_inner();

    let prompt = match build_replacement_prompt(&request) {
        Ok(prompt) => prompt,
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };

    let completion = match data
        .complete(
            &prompt.system,
            &prompt.user,
            Some(REPLACEMENT_TEMPERATURE),
            Some(REPLACEMENT_MAX_TOKENS),
        )
        .await
    {
        Ok(text) => text,
        Err(CompletionError::Configuration(_)) => {
            return HttpResponse::BadRequest().body("OpenAI API key is not configured")
        }
        Err(err) => {
            eprintln!("Failed to replace activity: {}", err);
            return HttpResponse::InternalServerError()
                .body(format!("Failed to replace activity: {}", err));
        }
    };

    match parse_activity(&completion) {
        Ok(activity) => HttpResponse::Ok().json(activity),
        Err(err) => {
            eprintln!(
                "Failed to normalize replacement completion: {}; raw response: {}",
                err, err.raw_text
            );
            HttpResponse::InternalServerError().body(format!("Failed to replace activity: {}", err))
        }
    }
}

/*
    /api/itinerary/sample
*/
pub async fn sample() -> impl Responder {
    HttpResponse::Ok().json(sample_itinerary())
}

fn parse_date_range(range: Option<&TravelDateRange>) -> Result<(NaiveDate, NaiveDate), String> {
    let range = range.ok_or_else(|| "missing required field: travelDates".to_string())?;

    let start = NaiveDate::parse_from_str(range.start.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid travel date: {}", range.start))?;
    let end = NaiveDate::parse_from_str(range.end.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid travel date: {}", range.end))?;

    if end < start {
        return Err("Travel dates must end on or after the start date".to_string());
    }

    Ok((start, end))
}

fn completion_error_response(err: CompletionError) -> HttpResponse {
    match err {
        CompletionError::Configuration(_) => {
            HttpResponse::BadRequest().body("OpenAI API key is not configured")
        }
        CompletionError::Upstream { status, body } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(status).json(json!({
                "error": "Error calling OpenAI API",
                "details": body,
            }))
        }
        other => {
            eprintln!("Completion call failed: {}", other);
            let status = match other {
                CompletionError::DeadlineExceeded(_) => StatusCode::GATEWAY_TIMEOUT,
                _ => StatusCode::BAD_GATEWAY,
            };
            HttpResponse::build(status).json(json!({
                "error": "Error calling OpenAI API",
                "details": other.to_string(),
            }))
        }
    }
}
