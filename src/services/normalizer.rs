use std::error::Error;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::models::itinerary::Activity;

/// Raised when completion text cannot be coerced into the expected shape.
/// Carries the verbatim model output so a bad response can be diagnosed
/// without re-issuing the call.
#[derive(Debug)]
pub struct MalformedResponseError {
    pub raw_text: String,
    pub parse_error: String,
}

impl MalformedResponseError {
    fn new(raw_text: &str, parse_error: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.to_string(),
            parse_error: parse_error.into(),
        }
    }
}

impl fmt::Display for MalformedResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed completion response: {}", self.parse_error)
    }
}

impl Error for MalformedResponseError {}

/// The two reply shapes the model is allowed to use, resolved once here so
/// everything downstream works with a plain `Vec<Activity>`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ItineraryPayload {
    Wrapped { activities: Vec<Activity> },
    Bare(Vec<Activity>),
}

/// Single-object mode, used by the replacement flow.
pub fn parse_activity(raw: &str) -> Result<Activity, MalformedResponseError> {
    let value = tolerant_parse(raw)?;
    let activity: Activity = serde_json::from_value(value)
        .map_err(|err| MalformedResponseError::new(raw, err.to_string()))?;

    if activity.title.trim().is_empty() {
        return Err(MalformedResponseError::new(raw, "activity has no title"));
    }

    Ok(activity)
}

/// Full-itinerary mode, used by the creation flow. An empty list is a
/// generation failure, not a valid zero-activity itinerary.
pub fn parse_activity_list(raw: &str) -> Result<Vec<Activity>, MalformedResponseError> {
    let value = tolerant_parse(raw)?;
    let payload: ItineraryPayload = serde_json::from_value(value)
        .map_err(|err| MalformedResponseError::new(raw, err.to_string()))?;

    let activities = match payload {
        ItineraryPayload::Wrapped { activities } => activities,
        ItineraryPayload::Bare(activities) => activities,
    };

    if activities.is_empty() {
        return Err(MalformedResponseError::new(
            raw,
            "completion contained no activities",
        ));
    }

    Ok(activities)
}

/// Fence stripping plus the laxities the model is granted: comments,
/// trailing commas, and arbitrary key casing.
fn tolerant_parse(raw: &str) -> Result<Value, MalformedResponseError> {
    let cleaned = strip_trailing_commas(&strip_comments(strip_code_fences(raw)));
    if cleaned.trim().is_empty() {
        return Err(MalformedResponseError::new(raw, "completion text is empty"));
    }

    let value: Value = serde_json::from_str(&cleaned)
        .map_err(|err| MalformedResponseError::new(raw, err.to_string()))?;

    Ok(lowercase_keys(value))
}

/// Extract the JSON body from a potentially markdown-fenced completion.
/// The language tag is matched case-insensitively and text around the
/// fence is discarded.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let lowered = trimmed.to_ascii_lowercase();

    if let Some(start) = lowered.find("```json") {
        let after = &trimmed[start + 7..];
        return match after.find("```") {
            Some(end) => after[..end].trim(),
            None => after.trim(),
        };
    }

    if let Some(start) = trimmed.find("```") {
        let after = &trimmed[start + 3..];
        return match after.find("```") {
            Some(end) => after[..end].trim(),
            None => after.trim(),
        };
    }

    trimmed
}

/// Drop `//` line comments and `/* */` block comments outside strings.
fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Drop commas that directly precede a closing brace or bracket.
fn strip_trailing_commas(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;

    for c in text.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '}' | ']' => {
                while out.ends_with(|last: char| last.is_ascii_whitespace()) {
                    out.pop();
                }
                if out.ends_with(',') {
                    out.pop();
                }
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    out
}

/// Lowercase every object key so field matching is case-insensitive. The
/// target structs carry lowercase aliases for their camelCase names.
fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, inner)| (key.to_ascii_lowercase(), lowercase_keys(inner)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}
