use std::{fmt, str::FromStr};

use chrono::{DateTime, FixedOffset, Offset, TimeZone as _, Utc};
use chrono_tz::Tz;

use crate::common::error::LedgerError;

/// Named IANA zone used to render stored UTC instants for display.
///
/// Storage is always UTC; a `TimeZone` only ever affects how an instant is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeZone {
    tz: Tz,
}

impl TimeZone {
    pub fn new(name: &str) -> Result<Self, LedgerError> {
        let tz: Tz = name
            .trim()
            .parse()
            .map_err(|_| LedgerError::invalid(format!("unknown time zone: {name:?}")))?;
        Ok(Self { tz })
    }

    pub fn utc() -> Self {
        Self { tz: Tz::UTC }
    }

    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    /// UTC offset in effect in this zone at `instant`.
    pub fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        self.tz.offset_from_utc_datetime(&instant.naive_utc()).fix()
    }

    pub fn convert(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.tz)
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl FromStr for TimeZone {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl serde::Serialize for TimeZone {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
