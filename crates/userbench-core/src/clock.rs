//! Wall-clock timestamps in the wire format (`2026-10-16T08:30:00.000Z`).

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Current time as an ISO-8601 UTC string with millisecond precision.
pub fn now_iso() -> String {
    to_iso(&Utc::now())
}

pub fn to_iso(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `serialize_with` helper for timestamp fields.
pub fn serialize_iso<S: Serializer>(t: &DateTime<Utc>, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(&to_iso(t))
}
