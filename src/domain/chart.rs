//! Time-series data behind the dashboard charts.
//!
//! Rendering (zoom, pan, image export) belongs to the charting library in the
//! browser; this module only owns the series and the range selection.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub timestamp: NaiveDate,
    pub value: u32,
    /// Axis label, e.g. `26 Apr`.
    pub label: String,
}

impl ChartPoint {
    pub fn new(timestamp: NaiveDate, value: u32) -> Self {
        Self {
            label: timestamp.format("%d %b").to_string(),
            timestamp,
            value,
        }
    }
}

/// Time-range tab above a chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "1m")]
    OneMonth,
    #[default]
    #[serde(rename = "all")]
    All,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Last7Days, TimeRange::OneMonth, TimeRange::All];

    pub fn slug(self) -> &'static str {
        match self {
            TimeRange::Last7Days => "7d",
            TimeRange::OneMonth => "1m",
            TimeRange::All => "all",
        }
    }

    fn span_days(self) -> Option<i64> {
        match self {
            TimeRange::Last7Days => Some(7),
            TimeRange::OneMonth => Some(30),
            TimeRange::All => None,
        }
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TimeRange::Last7Days => "Last 7 Days",
            TimeRange::OneMonth => "1M",
            TimeRange::All => "ALL",
        };
        write!(f, "{label}")
    }
}

impl FromStr for TimeRange {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "7d" | "last 7 days" => Ok(TimeRange::Last7Days),
            "1m" => Ok(TimeRange::OneMonth),
            "all" => Ok(TimeRange::All),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown time range {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    pub key: String,
    pub title: String,
    pub total_value: u64,
    pub value_label: String,
    /// Upper bound of the value axis.
    pub max_value: f64,
    /// Points in ascending timestamp order.
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Points that fall within `range` of the latest point.
    pub fn window(&self, range: TimeRange) -> Vec<&ChartPoint> {
        let Some(span) = range.span_days() else {
            return self.points.iter().collect();
        };
        let Some(latest) = self.points.iter().map(|point| point.timestamp).max() else {
            return Vec::new();
        };
        let cutoff = latest - Duration::days(span);

        self.points
            .iter()
            .filter(|point| point.timestamp > cutoff)
            .collect()
    }

    pub fn ticks(&self) -> Vec<f64> {
        y_axis_ticks(self.max_value)
    }
}

/// Value-axis ticks from `0` up to and including `max_value`.
///
/// Small ranges (`max_value <= 2`) step by `0.5`, larger ones by
/// `ceil(max_value / 6)`.
pub fn y_axis_ticks(max_value: f64) -> Vec<f64> {
    if max_value <= 0.0 || !max_value.is_finite() {
        return vec![0.0];
    }

    let step = if max_value <= 2.0 {
        0.5
    } else {
        (max_value / 6.0).ceil()
    };

    let mut ticks: Vec<f64> = (0..)
        .map(|i: u32| f64::from(i) * step)
        .take_while(|tick| *tick <= max_value)
        .collect();

    if ticks.last().is_some_and(|last| *last < max_value) {
        ticks.push(max_value);
    }

    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn series() -> ChartSeries {
        ChartSeries {
            key: "posts".to_string(),
            title: "Total Number of Posts".to_string(),
            total_value: 219,
            value_label: "Posts".to_string(),
            max_value: 35.0,
            points: vec![
                ChartPoint::new(date(4, 26), 3),
                ChartPoint::new(date(5, 11), 7),
                ChartPoint::new(date(5, 14), 30),
                ChartPoint::new(date(5, 17), 12),
                ChartPoint::new(date(5, 20), 27),
            ],
        }
    }

    #[test]
    fn ticks_for_large_range_end_at_max() {
        assert_eq!(
            y_axis_ticks(35.0),
            vec![0.0, 6.0, 12.0, 18.0, 24.0, 30.0, 35.0]
        );
        assert_eq!(y_axis_ticks(5.0), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn ticks_for_small_range_use_halves() {
        assert_eq!(y_axis_ticks(2.0), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(y_axis_ticks(0.0), vec![0.0]);
    }

    #[test]
    fn window_is_relative_to_latest_point() {
        let series = series();

        let week: Vec<u32> = series
            .window(TimeRange::Last7Days)
            .iter()
            .map(|p| p.value)
            .collect();
        let month: Vec<u32> = series
            .window(TimeRange::OneMonth)
            .iter()
            .map(|p| p.value)
            .collect();

        assert_eq!(week, vec![30, 12, 27]);
        assert_eq!(month, vec![3, 7, 30, 12, 27]);
        assert_eq!(series.window(TimeRange::All).len(), 5);
    }

    #[test]
    fn labels_use_day_and_month() {
        assert_eq!(ChartPoint::new(date(5, 2), 1).label, "02 May");
    }

    #[test]
    fn time_range_parses_slugs_and_labels() {
        assert_eq!("7d".parse::<TimeRange>(), Ok(TimeRange::Last7Days));
        assert_eq!("Last 7 Days".parse::<TimeRange>(), Ok(TimeRange::Last7Days));
        assert_eq!("1M".parse::<TimeRange>(), Ok(TimeRange::OneMonth));
        assert_eq!("ALL".parse::<TimeRange>(), Ok(TimeRange::All));
        assert!("year".parse::<TimeRange>().is_err());
    }
}
