//! Dashboard services: stat cards, chart windows and chart export.

use serde::Serialize;

use crate::domain::chart::{ChartSeries, TimeRange};
use crate::dto::main::{ChartView, DashboardPageData, RangeTab};
use crate::repository::DashboardReader;
use crate::services::{ServiceError, ServiceResult};

fn chart_view(series: &ChartSeries, range: TimeRange) -> ChartView {
    ChartView {
        key: series.key.clone(),
        title: series.title.clone(),
        total_value: series.total_value,
        value_label: series.value_label.clone(),
        max_value: series.max_value,
        range,
        ranges: TimeRange::ALL
            .iter()
            .map(|candidate| RangeTab {
                slug: candidate.slug(),
                label: candidate.to_string(),
                active: *candidate == range,
            })
            .collect(),
        ticks: series.ticks(),
        points: series.window(range).into_iter().cloned().collect(),
    }
}

fn parse_range(range: Option<&str>) -> ServiceResult<TimeRange> {
    Ok(range.map(str::parse::<TimeRange>).transpose()?.unwrap_or_default())
}

fn find_series<R>(repo: &R, key: &str) -> ServiceResult<ChartSeries>
where
    R: DashboardReader + ?Sized,
{
    repo.list_chart_series()
        .map_err(|err| {
            log::error!("Failed to load chart series: {err}");
            err
        })?
        .into_iter()
        .find(|series| series.key == key)
        .ok_or(ServiceError::NotFound)
}

/// Loads the stat cards and every chart over its full range.
pub fn load_dashboard<R>(repo: &R) -> ServiceResult<DashboardPageData>
where
    R: DashboardReader + ?Sized,
{
    let stats = repo.list_stat_cards().map_err(|err| {
        log::error!("Failed to load stat cards: {err}");
        err
    })?;
    let charts = repo
        .list_chart_series()?
        .iter()
        .map(|series| chart_view(series, TimeRange::default()))
        .collect();

    Ok(DashboardPageData { stats, charts })
}

/// Loads one chart limited to `range` (`7d`, `1m` or `all`).
pub fn load_chart<R>(repo: &R, key: &str, range: Option<&str>) -> ServiceResult<ChartView>
where
    R: DashboardReader + ?Sized,
{
    let range = parse_range(range)?;
    let series = find_series(repo, key)?;

    Ok(chart_view(&series, range))
}

#[derive(Serialize)]
struct ChartRow<'a> {
    date: String,
    label: &'a str,
    value: u32,
}

/// Chart window rendered as CSV, ready for download.
#[derive(Debug)]
pub struct ChartExport {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// Serializes the points of one chart window as CSV.
pub fn export_chart_csv<R>(repo: &R, key: &str, range: Option<&str>) -> ServiceResult<ChartExport>
where
    R: DashboardReader + ?Sized,
{
    let range = parse_range(range)?;
    let series = find_series(repo, key)?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    for point in series.window(range) {
        writer
            .serialize(ChartRow {
                date: point.timestamp.format("%Y-%m-%d").to_string(),
                label: &point.label,
                value: point.value,
            })
            .map_err(|err| {
                log::error!("Failed to write chart row: {err}");
                ServiceError::Export(err.to_string())
            })?;
    }

    let content = writer.into_inner().map_err(|err| {
        log::error!("Failed to flush chart export: {err}");
        ServiceError::Export(err.to_string())
    })?;

    Ok(ChartExport {
        file_name: format!("{}-{}.csv", series.key, range.slug()),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::SampleRepository;
    use crate::repository::mock::MockRepository;

    #[test]
    fn dashboard_lists_cards_and_charts() {
        let repo = SampleRepository::new().unwrap();

        let data = load_dashboard(&repo).unwrap();

        assert!(!data.stats.is_empty());
        assert_eq!(data.charts.len(), 4);
        assert!(data.charts.iter().all(|chart| chart.range == TimeRange::All));
    }

    #[test]
    fn chart_window_follows_range() {
        let repo = SampleRepository::new().unwrap();

        let chart = load_chart(&repo, "posts", Some("7d")).unwrap();

        let values: Vec<u32> = chart.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![30, 12, 27]);
        assert_eq!(chart.ticks.last(), Some(&35.0));
        assert!(chart.ranges.iter().any(|tab| tab.slug == "7d" && tab.active));
    }

    #[test]
    fn unknown_chart_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_list_chart_series().returning(|| Ok(Vec::new()));

        assert!(matches!(
            load_chart(&repo, "stories", None),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn unknown_range_is_rejected() {
        let repo = SampleRepository::new().unwrap();

        assert!(matches!(
            load_chart(&repo, "posts", Some("2y")),
            Err(ServiceError::TypeConstraint(_))
        ));
    }

    #[test]
    fn csv_export_contains_window_rows() {
        let repo = SampleRepository::new().unwrap();

        let export = export_chart_csv(&repo, "rooms", Some("7d")).unwrap();
        let text = String::from_utf8(export.content).unwrap();

        assert_eq!(export.file_name, "rooms-7d.csv");
        assert_eq!(
            text,
            "date,label,value\n2024-05-11,11 May,0\n2024-05-14,14 May,1\n2024-05-17,17 May,0\n"
        );
    }
}
