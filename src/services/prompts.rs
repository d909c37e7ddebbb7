use std::error::Error;
use std::fmt;

use crate::models::preferences::{ItineraryRequest, ReplaceActivityRequest};

/// System + user instruction pair for one completion call.
#[derive(Debug)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// A required request field was absent or blank.
#[derive(Debug)]
pub struct ValidationError {
    field: &'static str,
}

impl ValidationError {
    fn new(field: &'static str) -> Self {
        Self { field }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required field: {}", self.field)
    }
}

impl Error for ValidationError {}

const NOT_SPECIFIED: &str = "Not specified";

const ITINERARY_SYSTEM_INSTRUCTION: &str = "You are a helpful travel assistant that creates \
    detailed travel itineraries. Respond only with valid JSON in the exact shape the user \
    describes. Do not include any text outside the JSON.";

const REPLACEMENT_SYSTEM_INSTRUCTION: &str = "You are a helpful travel assistant that suggests \
    replacement activities for a travel itinerary. Respond only with a single valid JSON object \
    in the exact shape the user describes. Do not include any text outside the JSON.";

/// Literal example embedded in both prompts so the model sees the exact
/// field names and types expected back.
const ACTIVITY_EXAMPLE: &str = r#"{
  "title": "Louvre Museum Tour",
  "time": "10:00 AM",
  "duration": "3 hours",
  "priceRange": "€17-25",
  "description": "Explore the world's largest art museum.",
  "location": "Rue de Rivoli, 75001 Paris, France",
  "notes": "Closed on Tuesdays.",
  "bookingUrl": "https://www.louvre.fr/en/online-tickets"
}"#;

pub fn build_itinerary_prompt(request: &ItineraryRequest) -> Result<Prompt, ValidationError> {
    let destination = match request.destination.as_deref() {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Err(ValidationError::new("destination")),
    };
    let dates = match &request.travel_dates {
        Some(range) if !range.start.trim().is_empty() && !range.end.trim().is_empty() => range,
        _ => return Err(ValidationError::new("travelDates")),
    };

    let budget = request
        .budget
        .map(|tier| tier.as_str())
        .unwrap_or(NOT_SPECIFIED);
    let travel_style = request
        .travel_style
        .map(|style| style.as_str())
        .unwrap_or(NOT_SPECIFIED);
    let accommodation = request
        .accommodation
        .map(|kind| kind.as_str())
        .unwrap_or(NOT_SPECIFIED);
    let interests = join_or_placeholder(&request.interests);

    let user = format!(
        "Create a detailed travel itinerary for {destination} from {start} to {end}. \
         The traveler's budget is {budget} and they're interested in {interests}. \
         Their travel style is {travel_style} and they prefer to stay in {accommodation}. \
         Respond with a JSON object containing an \"activities\" array. Every element of \
         the array must have exactly these fields:\n{example}\n\
         Include enough activities to fill each day of the trip, ordered from the first \
         day to the last.",
        destination = destination,
        start = dates.start,
        end = dates.end,
        budget = budget,
        interests = interests,
        travel_style = travel_style,
        accommodation = accommodation,
        example = ACTIVITY_EXAMPLE,
    );

    Ok(Prompt {
        system: ITINERARY_SYSTEM_INSTRUCTION.to_string(),
        user,
    })
}

pub fn build_replacement_prompt(
    request: &ReplaceActivityRequest,
) -> Result<Prompt, ValidationError> {
    let current = match &request.current_activity {
        Some(activity) if !activity.title.trim().is_empty() => activity,
        _ => return Err(ValidationError::new("currentActivity")),
    };
    let dates = match &request.travel_dates {
        Some(range) if !range.start.trim().is_empty() && !range.end.trim().is_empty() => range,
        _ => return Err(ValidationError::new("travelDates")),
    };

    let destination = request
        .destination
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(NOT_SPECIFIED);
    let travel_style = request
        .travel_style
        .map(|style| style.as_str())
        .unwrap_or(NOT_SPECIFIED);
    let interests = join_or_placeholder(&request.interests);
    let reason = request
        .reason
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or("the traveler asked for something different");
    let location = if current.location.trim().is_empty() {
        NOT_SPECIFIED
    } else {
        current.location.as_str()
    };

    let user = format!(
        "The traveler wants to replace one activity in their itinerary for {destination} \
         ({start} to {end}). The current activity is \"{title}\" at {location}: \
         {description}. Reason for replacing it: {reason}. Their travel style is \
         {travel_style} and they're interested in {interests}. Suggest one different \
         activity, not a minor variation of the original. Respond with a single JSON \
         object with exactly these fields:\n{example}",
        destination = destination,
        start = dates.start,
        end = dates.end,
        title = current.title,
        location = location,
        description = current.description,
        reason = reason,
        travel_style = travel_style,
        interests = interests,
        example = ACTIVITY_EXAMPLE,
    );

    Ok(Prompt {
        system: REPLACEMENT_SYSTEM_INSTRUCTION.to_string(),
        user,
    })
}

fn join_or_placeholder(items: &[String]) -> String {
    let kept: Vec<&str> = items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect();

    if kept.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        kept.join(", ")
    }
}
