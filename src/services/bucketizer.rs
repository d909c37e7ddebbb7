use chrono::{Duration, NaiveDate};

use crate::models::itinerary::{Activity, ItineraryDay, Meals};

/// Split a flat, model-ordered activity list into consecutive calendar
/// days. Chunks are contiguous, so concatenating the days' activity lists
/// reproduces the input exactly. When the trip has more days than needed,
/// trailing days with no activities are omitted rather than emitted empty.
///
/// Generated days carry an empty meals record and no transport legs; this
/// pipeline never synthesizes that data.
///
/// Callers must have validated `end >= start`.
pub fn partition_into_days(
    activities: Vec<Activity>,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<ItineraryDay> {
    if activities.is_empty() {
        return Vec::new();
    }

    let total_days = (end - start).num_days().max(0) as usize + 1;
    let per_day = activities.len().div_ceil(total_days);

    activities
        .chunks(per_day)
        .enumerate()
        .map(|(offset, chunk)| ItineraryDay {
            date: start + Duration::days(offset as i64),
            activities: chunk.to_vec(),
            meals: Meals::default(),
            transportations: Vec::new(),
        })
        .collect()
}
