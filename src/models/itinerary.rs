use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single itinerary entry as the completion model describes it. All
/// plain-string fields default to empty so a partially filled model reply
/// still deserializes; the normalizer decides what counts as unusable.
///
/// The lowercase aliases exist because the normalizer lowercases every key
/// before deserializing, which is how field matching stays case-insensitive.
/// The PascalCase aliases accept inbound request bodies from clients that
/// serialize with .NET-style property names.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default, alias = "Title")]
    pub title: String,
    #[serde(default, alias = "Time")]
    pub time: String,
    #[serde(default, alias = "Duration")]
    pub duration: String,
    #[serde(default, alias = "PriceRange", alias = "pricerange")]
    pub price_range: String,
    #[serde(default, alias = "Description")]
    pub description: String,
    #[serde(default, alias = "Location")]
    pub location: String,
    #[serde(default, alias = "Notes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(
        default,
        alias = "BookingUrl",
        alias = "bookingurl",
        skip_serializing_if = "Option::is_none"
    )]
    pub booking_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MealRecommendation {
    pub name: String,
    pub cuisine: String,
    pub price_range: String,
    pub description: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
}

/// Up to one recommendation per meal slot. Generated days carry the empty
/// record; only the sample-data path fills these in.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Meals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<MealRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<MealRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<MealRecommendation>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Transportation {
    pub from: String,
    pub to: String,
    pub method: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
}

/// One calendar day of the itinerary. Activities keep the order the model
/// returned them in, sliced contiguously from the flat list.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryDay {
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub meals: Meals,
    #[serde(default)]
    pub transportations: Vec<Transportation>,
}
