use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, TimeDelta, Utc};
use serde::{Serialize, Serializer};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// A submitted date range, normalized to whole days in UTC.
///
/// Serializes as `{"start": "...", "end": "..."}` with millisecond
/// timestamps, e.g. `2024-03-05T00:00:00.000Z`.
#[derive(Clone, Eq, PartialEq, Copy, Debug, Serialize)]
pub struct DateRange {
    #[serde(serialize_with = "serialize_timestamp")]
    pub start: DateTime<Utc>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Build a range from raw field values: `start` moves to the first
    /// millisecond of its day and `end` to the last one.
    pub fn normalized(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: start_of_day(start),
            end: end_of_day(end),
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.end >= self.start
    }

    /// Number of calendar days covered, both ends included.
    pub fn num_days(&self) -> i64 {
        (self.end.date_naive() - self.start.date_naive()).num_days() + 1
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// 00:00:00.000 UTC of `date`.
pub fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

pub fn start_of_day(value: DateTime<Utc>) -> DateTime<Utc> {
    midnight(value.date_naive())
}

pub fn end_of_day(value: DateTime<Utc>) -> DateTime<Utc> {
    midnight(value.date_naive()) + TimeDelta::milliseconds(MILLIS_PER_DAY - 1)
}

/// RFC 3339 with milliseconds and a `Z` suffix.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_timestamp<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(value))
}
