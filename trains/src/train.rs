use serde::{Deserialize, Serialize};
use serde_json::Number;

use std::cmp::Ordering;

/// A single departure.
///
/// Every field is optional so that a file written by hand (or by something else) can still be
/// shown; a field that is `None` is left out of the saved file.
///
/// `num` keeps whatever JSON number the file had: a schema `integer` also accepts `1.0` and
/// values that don't fit an `i64`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Train {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

impl Train {
    pub fn new(num: i64, destination: String, start_time: String) -> Self {
        Self {
            num: Some(num.into()),
            destination: Some(destination),
            start_time: Some(start_time),
        }
    }

    /// Compares two trains by their departure time, as plain strings.
    ///
    /// "9:00" comes after "10:00". A train without a time comes first.
    pub fn cmp_start_time(&self, other: &Self) -> Ordering {
        self.start_time.cmp(&other.start_time)
    }

    /// Whether the destination, with surrounding whitespace trimmed, is exactly `destination`.
    pub fn goes_to(&self, destination: &str) -> bool {
        match self.destination {
            Some(ref dest) => dest.trim() == destination,
            None => false,
        }
    }
}
