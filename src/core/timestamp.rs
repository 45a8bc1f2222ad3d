//! Timestamp formatting and the process-wide timestamp cache
//!
//! Rendering a timestamp is one of the more expensive steps of a log call, and
//! it happens on every call. [`TimeCache`] renders the text once per second and
//! serves every other call in that second from the cache, trading sub-second
//! precision for throughput.

use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

/// Timestamp layouts with one-second granularity
///
/// # Examples
///
/// ```
/// use pooled_logger::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::DateTime.format(&at), "2025-01-08 10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08 10:30:45`
    #[default]
    DateTime,

    /// RFC 3339 in UTC: `2025-01-08T10:30:45Z`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Custom strftime format
    ///
    /// Sub-second specifiers are accepted but only change once per cache quantum.
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::DateTime => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

#[derive(Debug)]
struct CachedStamp {
    second: i64,
    text: Arc<str>,
}

/// Rendered timestamp cached per one-second quantum
#[derive(Debug)]
pub struct TimeCache {
    format: TimestampFormat,
    slot: RwLock<Option<CachedStamp>>,
}

impl TimeCache {
    pub fn new(format: TimestampFormat) -> Self {
        Self {
            format,
            slot: RwLock::new(None),
        }
    }

    pub fn format(&self) -> &TimestampFormat {
        &self.format
    }

    /// Timestamp text for the current wall-clock second.
    pub fn stamp(&self) -> Arc<str> {
        self.stamp_at(Utc::now())
    }

    /// Timestamp text for `now`, served from the cache when `now` falls in the
    /// cached second.
    pub fn stamp_at(&self, now: DateTime<Utc>) -> Arc<str> {
        let second = now.timestamp();

        if let Some(cached) = self.slot.read().as_ref() {
            if cached.second == second {
                return Arc::clone(&cached.text);
            }
        }

        let mut slot = self.slot.write();
        // Another thread may have refreshed while we waited for the write lock.
        if let Some(cached) = slot.as_ref() {
            if cached.second == second {
                return Arc::clone(&cached.text);
            }
        }

        let text: Arc<str> = Arc::from(self.format.format(&now));
        *slot = Some(CachedStamp {
            second,
            text: Arc::clone(&text),
        });
        text
    }

    /// The unix second currently cached, if any.
    pub fn generation(&self) -> Option<i64> {
        self.slot.read().as_ref().map(|cached| cached.second)
    }
}

impl Default for TimeCache {
    fn default() -> Self {
        Self::new(TimestampFormat::default())
    }
}

static GLOBAL_TIME_CACHE: OnceLock<TimeCache> = OnceLock::new();

/// The time cache shared by every logger in the process.
pub fn global_time_cache() -> &'static TimeCache {
    GLOBAL_TIME_CACHE.get_or_init(TimeCache::default)
}

/// Current timestamp text from the process-wide cache.
#[inline]
pub fn cached_timestamp() -> Arc<str> {
    global_time_cache().stamp()
}
