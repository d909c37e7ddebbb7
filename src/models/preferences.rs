use serde::{Deserialize, Serialize};

use super::itinerary::Activity;

/// Trip preferences submitted by the form. Everything beyond destination
/// and dates is optional; the prompt builder substitutes placeholders so
/// the instruction text never has blank holes.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRequest {
    #[serde(default, alias = "Destination")]
    pub destination: Option<String>,
    #[serde(default, alias = "TravelDates")]
    pub travel_dates: Option<TravelDateRange>,
    #[serde(default, alias = "Budget")]
    pub budget: Option<BudgetTier>,
    #[serde(default, alias = "TravelStyle")]
    pub travel_style: Option<TravelStyle>,
    #[serde(default, alias = "Interests")]
    pub interests: Vec<String>,
    #[serde(default, alias = "Accommodation")]
    pub accommodation: Option<Accommodation>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TravelDateRange {
    #[serde(default, alias = "Start")]
    pub start: String,
    #[serde(default, alias = "End")]
    pub end: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    #[serde(alias = "Low")]
    Low,
    #[serde(alias = "Medium")]
    Medium,
    #[serde(alias = "High")]
    High,
}

impl BudgetTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Low => "low",
            BudgetTier::Medium => "medium",
            BudgetTier::High => "high",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    #[serde(alias = "Sightseeing")]
    Sightseeing,
    #[serde(alias = "Adventure")]
    Adventure,
    #[serde(alias = "Relaxation")]
    Relaxation,
    #[serde(alias = "Food")]
    Food,
}

impl TravelStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelStyle::Sightseeing => "sightseeing",
            TravelStyle::Adventure => "adventure",
            TravelStyle::Relaxation => "relaxation",
            TravelStyle::Food => "food",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Accommodation {
    #[serde(alias = "Hotel")]
    Hotel,
    #[serde(alias = "Hostel")]
    Hostel,
    #[serde(alias = "Apartment")]
    Apartment,
    #[serde(alias = "Resort")]
    Resort,
}

impl Accommodation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accommodation::Hotel => "hotel",
            Accommodation::Hostel => "hostel",
            Accommodation::Apartment => "apartment",
            Accommodation::Resort => "resort",
        }
    }
}

/// Follow-up request to swap one activity for a fresh suggestion. The
/// caller keeps the activity's slot; this request carries no day index.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceActivityRequest {
    #[serde(default, alias = "CurrentActivity")]
    pub current_activity: Option<Activity>,
    #[serde(default, alias = "Reason")]
    pub reason: Option<String>,
    #[serde(default, alias = "Destination")]
    pub destination: Option<String>,
    #[serde(default, alias = "TravelDates")]
    pub travel_dates: Option<TravelDateRange>,
    #[serde(default, alias = "TravelStyle")]
    pub travel_style: Option<TravelStyle>,
    #[serde(default, alias = "Interests")]
    pub interests: Vec<String>,
}
