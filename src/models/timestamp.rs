//! Generation timestamp
//!
//! One captured instant feeds both the filename stamp and the
//! human-readable line in the report body, so the two always agree.

use chrono::{DateTime, FixedOffset, Local, Utc};
use chrono_tz::Tz;
use tracing::debug;

/// Filename-safe form, e.g. `2026-10-16_093015`
pub const FILE_STAMP_FORMAT: &str = "%Y-%m-%d_%H%M%S";

/// Report body form, e.g. `2026-10-16 09:30:15 CEST`.
/// Without a known zone the offset stands in, e.g. `+02:00`.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    instant: DateTime<FixedOffset>,
    zone: Option<Tz>,
}

impl Timestamp {
    /// Capture the current local time
    pub fn now() -> Self {
        let now = Utc::now();
        match local_zone() {
            Some(zone) => Self::in_zone(now, zone),
            None => Self::from_datetime(now.with_timezone(&Local).fixed_offset()),
        }
    }

    /// An instant as seen from a named zone
    pub fn in_zone(instant: DateTime<Utc>, zone: Tz) -> Self {
        Self {
            instant: instant.with_timezone(&zone).fixed_offset(),
            zone: Some(zone),
        }
    }

    /// An instant with only an offset known
    pub fn from_datetime(instant: DateTime<FixedOffset>) -> Self {
        Self {
            instant,
            zone: None,
        }
    }

    pub fn file_stamp(&self) -> String {
        self.instant.format(FILE_STAMP_FORMAT).to_string()
    }

    pub fn display(&self) -> String {
        match self.zone {
            Some(zone) => self
                .instant
                .with_timezone(&zone)
                .format(DISPLAY_FORMAT)
                .to_string(),
            None => self.instant.format(DISPLAY_FORMAT).to_string(),
        }
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        Self::from_datetime(instant)
    }
}

/// `TZ` first, then the system zone
fn local_zone() -> Option<Tz> {
    if let Some(zone) = std::env::var("TZ").ok().and_then(|name| parse_zone(&name)) {
        return Some(zone);
    }

    match iana_time_zone::get_timezone() {
        Ok(name) => parse_zone(&name),
        Err(e) => {
            debug!(error = %e, "local time zone lookup failed, using offset");
            None
        }
    }
}

fn parse_zone(name: &str) -> Option<Tz> {
    let name = name.strip_prefix(':').unwrap_or(name);
    match name.parse::<Tz>() {
        Ok(zone) => Some(zone),
        Err(_) => {
            debug!(zone = name, "unrecognised time zone name");
            None
        }
    }
}
