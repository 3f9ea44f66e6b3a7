// Time-bucketed engagement over activity events.
//
// Three groupings of the same events:
//
//   hourly_engagement   hour start -> events, every hour from first to last
//   daily_trends        activity type -> day -> events, every day from first to last
//   weekly_correlation  activity type -> weekday name -> events
//
// Gaps inside the observed span are filled with zero, and every activity type
// carries the same set of days and weekdays. Keys are ordered maps so output
// is identical across runs. All times are UTC.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, DurationRound, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::AnalyticsEngine;
use crate::error::{AnalyticsError, Result};

/// One user action at a point in time ("post", "comment", "view", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub timestamp: DateTime<Utc>,
    pub activity_type: String,
}

impl Activity {
    pub fn new(timestamp: DateTime<Utc>, activity_type: impl Into<String>) -> Self {
        Self {
            timestamp,
            activity_type: activity_type.into(),
        }
    }

    /// Parse `"<RFC 3339 timestamp> <activity type>"`, e.g.
    /// `"2024-03-04T10:15:00Z comment"`. Offsets are converted to UTC.
    pub fn parse_line(line: &str) -> Result<Self> {
        let line = line.trim();
        let (raw_ts, kind) = line
            .split_once(char::is_whitespace)
            .map(|(ts, kind)| (ts, kind.trim()))
            .filter(|(_, kind)| !kind.is_empty())
            .ok_or_else(|| {
                AnalyticsError::invalid(
                    "activity",
                    format!("expected \"<timestamp> <type>\", got {line:?}"),
                )
            })?;

        let timestamp = DateTime::parse_from_rfc3339(raw_ts)
            .map_err(|e| AnalyticsError::invalid("timestamp", format!("{raw_ts:?}: {e}")))?
            .with_timezone(&Utc);

        Ok(Self::new(timestamp, kind))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngagementReport {
    /// Events per hour, keyed by the start of the hour
    pub hourly_engagement: BTreeMap<DateTime<Utc>, usize>,
    /// Events per calendar day, per activity type
    pub daily_trends: BTreeMap<String, BTreeMap<NaiveDate, usize>>,
    /// Events per weekday name ("Monday", ...), per activity type.
    /// Only weekdays that occur in the input appear.
    pub weekly_correlation: BTreeMap<String, BTreeMap<String, usize>>,
}

impl EngagementReport {
    pub fn is_empty(&self) -> bool {
        self.hourly_engagement.is_empty()
    }
}

/// Group `activities` by hour, by day and type, and by weekday and type.
/// No activities yields an empty report.
pub fn engagement_report(activities: &[Activity]) -> Result<EngagementReport> {
    let hour = TimeDelta::hours(1);
    let mut hourly: BTreeMap<DateTime<Utc>, usize> = BTreeMap::new();
    let mut daily: BTreeMap<String, BTreeMap<NaiveDate, usize>> = BTreeMap::new();
    let mut weekly: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
    let mut weekdays: BTreeSet<String> = BTreeSet::new();

    for activity in activities {
        let bucket = activity
            .timestamp
            .duration_trunc(hour)
            .map_err(|e| AnalyticsError::invalid("timestamp", e.to_string()))?;
        *hourly.entry(bucket).or_insert(0) += 1;

        *daily
            .entry(activity.activity_type.clone())
            .or_default()
            .entry(activity.timestamp.date_naive())
            .or_insert(0) += 1;

        let weekday = activity.timestamp.format("%A").to_string();
        weekdays.insert(weekday.clone());
        *weekly
            .entry(activity.activity_type.clone())
            .or_default()
            .entry(weekday)
            .or_insert(0) += 1;
    }

    let (Some((&first_hour, _)), Some((&last_hour, _))) =
        (hourly.first_key_value(), hourly.last_key_value())
    else {
        return Ok(EngagementReport::default());
    };

    let mut cursor = first_hour;
    while cursor < last_hour {
        let Some(next) = cursor.checked_add_signed(hour) else {
            break;
        };
        hourly.entry(next).or_insert(0);
        cursor = next;
    }

    let first_day = first_hour.date_naive();
    let last_day = last_hour.date_naive();
    for days in daily.values_mut() {
        for day in first_day.iter_days().take_while(|d| *d <= last_day) {
            days.entry(day).or_insert(0);
        }
    }

    for counts in weekly.values_mut() {
        for weekday in &weekdays {
            counts.entry(weekday.clone()).or_insert(0);
        }
    }

    debug!(
        activities = activities.len(),
        hours = hourly.len(),
        activity_types = daily.len(),
        "Built engagement report"
    );

    Ok(EngagementReport {
        hourly_engagement: hourly,
        daily_trends: daily,
        weekly_correlation: weekly,
    })
}

impl AnalyticsEngine {
    /// Hourly, daily and weekday engagement for a set of activity events.
    pub fn engagement(&self, activities: &[Activity]) -> Result<EngagementReport> {
        engagement_report(activities)
    }
}
