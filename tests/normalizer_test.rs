use travel_assistant_api::services::normalizer::{parse_activity, parse_activity_list};

const BARE_ACTIVITY: &str = r#"{"title":"Eiffel Tower Visit","time":"09:00 AM","duration":"2 hours","priceRange":"€25-50","description":"Iconic tower.","location":"Paris"}"#;

#[test]
fn fenced_and_bare_inputs_normalize_identically() {
    let fenced = format!("```json\n{}\n```", BARE_ACTIVITY);

    let from_fenced = parse_activity(&fenced).unwrap();
    let from_bare = parse_activity(BARE_ACTIVITY).unwrap();

    assert_eq!(from_fenced.title, from_bare.title);
    assert_eq!(from_fenced.price_range, from_bare.price_range);
    assert_eq!(from_fenced.location, from_bare.location);
}

#[test]
fn fence_without_language_tag_is_stripped() {
    let fenced = format!("```\n{}\n```", BARE_ACTIVITY);
    assert_eq!(parse_activity(&fenced).unwrap().title, "Eiffel Tower Visit");
}

#[test]
fn fence_language_tag_is_case_insensitive() {
    let fenced = format!("```JSON\n{}\n```", BARE_ACTIVITY);
    assert_eq!(parse_activity(&fenced).unwrap().title, "Eiffel Tower Visit");
}

#[test]
fn prose_around_the_fence_is_discarded() {
    let text = format!(
        "Here is your activity:\n```json\n{}\n```\nEnjoy your trip!",
        BARE_ACTIVITY
    );
    assert_eq!(parse_activity(&text).unwrap().title, "Eiffel Tower Visit");
}

#[test]
fn wrapped_object_and_bare_array_normalize_identically() {
    let bare = format!("[{a},{a}]", a = BARE_ACTIVITY);
    let wrapped = format!("{{\"activities\":[{a},{a}]}}", a = BARE_ACTIVITY);

    let from_bare = parse_activity_list(&bare).unwrap();
    let from_wrapped = parse_activity_list(&wrapped).unwrap();

    assert_eq!(from_bare.len(), 2);
    assert_eq!(from_wrapped.len(), 2);
    assert_eq!(from_bare[0].title, from_wrapped[0].title);
}

#[test]
fn tolerates_trailing_commas_and_comments() {
    let text = r#"```json
// suggested itinerary
[
  {
    "title": "Museum Visit", /* morning slot */
    "time": "10:00 AM",
    "duration": "2 hours",
    "priceRange": "€10",
    "description": "A museum.",
    "location": "Somewhere",
  },
]
```"#;

    let activities = parse_activity_list(text).unwrap();
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].title, "Museum Visit");
}

#[test]
fn field_names_match_case_insensitively() {
    let text = r#"{"Title":"X","TIME":"10:00 AM","Duration":"1 hour","PRICERANGE":"€5","Description":"d","LOCATION":"l","BookingURL":"https://example.com"}"#;

    let activity = parse_activity(text).unwrap();
    assert_eq!(activity.title, "X");
    assert_eq!(activity.time, "10:00 AM");
    assert_eq!(activity.price_range, "€5");
    assert_eq!(activity.booking_url.as_deref(), Some("https://example.com"));
}

#[test]
fn unknown_fields_are_ignored() {
    let text = r#"{"title":"X","rating":5,"weather":"sunny"}"#;
    assert_eq!(parse_activity(text).unwrap().title, "X");
}

#[test]
fn comment_and_comma_tokens_inside_strings_survive() {
    let text = r#"{"title":"Dinner // riverside, table for two","description":"a /* cozy */ spot"}"#;

    let activity = parse_activity(text).unwrap();
    assert_eq!(activity.title, "Dinner // riverside, table for two");
    assert_eq!(activity.description, "a /* cozy */ spot");
}

#[test]
fn malformed_text_error_carries_raw_text_verbatim() {
    let raw = "I am not JSON at all, sorry.";

    let err = parse_activity_list(raw).unwrap_err();
    assert_eq!(err.raw_text, raw);
    assert!(!err.parse_error.is_empty());
}

#[test]
fn empty_input_is_an_error() {
    assert!(parse_activity("").is_err());
    assert!(parse_activity("```json\n```").is_err());
}

#[test]
fn activity_without_title_is_an_error() {
    let err = parse_activity(r#"{"description":"no title here"}"#).unwrap_err();
    assert!(err.parse_error.contains("no title"));
}

#[test]
fn empty_activity_list_is_an_error() {
    assert!(parse_activity_list("[]").is_err());
    assert!(parse_activity_list(r#"{"activities":[]}"#).is_err());
}

#[test]
fn object_without_activities_field_is_an_error() {
    let err = parse_activity_list(r#"{"days":[]}"#).unwrap_err();
    assert_eq!(err.raw_text, r#"{"days":[]}"#);
}
