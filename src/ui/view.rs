//! Display model derived from the current snapshot.
//!
//! Everything here is plain strings and numbers so rendering stays dumb. When
//! no snapshot is available the placeholder values below are shown instead of
//! an explicit error state.

use crate::types::{DashboardResponse, LinkId};
use serde::Deserialize;

pub(crate) const PLACEHOLDER_TODAY_CLICKS: &str = "123";
pub(crate) const PLACEHOLDER_TOP_LOCATION: &str = "Ahamadhabad";
pub(crate) const PLACEHOLDER_TOP_SOURCE: &str = "Instagram";

/// Maximum bar width for the overview chart, in cells.
pub const CHART_WIDTH: usize = 24;

/// Which link list is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
pub enum LinkTab {
    #[default]
    #[serde(rename = "top", alias = "top_links")]
    #[value(name = "top")]
    TopLinks,
    #[serde(rename = "recent", alias = "recent_links")]
    #[value(name = "recent")]
    RecentLinks,
}

impl LinkTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::TopLinks => "Top Links",
            Self::RecentLinks => "Recent Links",
        }
    }

    pub fn all() -> [LinkTab; 2] {
        [Self::TopLinks, Self::RecentLinks]
    }
}

/// Semantic role of a summary tile, used to pick its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    TodayClicks,
    TopLocation,
    TopSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryItem {
    pub kind: SummaryKind,
    pub title: String,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRow {
    pub id: LinkId,
    pub title: String,
    pub age: String,
    pub clicks: String,
    pub web_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBar {
    pub label: String,
    pub value: i64,
    /// Bar length in cells, scaled against the largest value.
    pub width: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    /// False when built without a snapshot (placeholders are showing).
    pub loaded: bool,
    pub summary: Vec<SummaryItem>,
    pub tab: LinkTab,
    pub links: Vec<LinkRow>,
    pub chart: Vec<ChartBar>,
}

impl DashboardView {
    pub fn from_snapshot(snapshot: Option<&DashboardResponse>, tab: LinkTab) -> Self {
        let summary = vec![
            SummaryItem {
                kind: SummaryKind::TodayClicks,
                title: snapshot
                    .map(|s| s.data.today_clicks.to_string())
                    .unwrap_or_else(|| PLACEHOLDER_TODAY_CLICKS.to_string()),
                subtitle: "Today's clicks",
            },
            SummaryItem {
                kind: SummaryKind::TopLocation,
                title: snapshot
                    .map(|s| s.top_location.clone())
                    .unwrap_or_else(|| PLACEHOLDER_TOP_LOCATION.to_string()),
                subtitle: "Top Location",
            },
            SummaryItem {
                kind: SummaryKind::TopSource,
                title: snapshot
                    .map(|s| s.top_source.clone())
                    .unwrap_or_else(|| PLACEHOLDER_TOP_SOURCE.to_string()),
                subtitle: "Top source",
            },
        ];

        let links = snapshot
            .map(|s| match tab {
                LinkTab::TopLinks => &s.data.top_links,
                LinkTab::RecentLinks => &s.data.recent_links,
            })
            .map(|links| {
                links
                    .iter()
                    .map(|link| LinkRow {
                        id: link.id,
                        title: link.title.clone(),
                        age: link.times_ago.clone(),
                        clicks: format!("{} Clicks", link.total_clicks),
                        web_link: link.web_link.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let chart = snapshot.map(chart_bars).unwrap_or_default();

        Self {
            loaded: snapshot.is_some(),
            summary,
            tab,
            links,
            chart,
        }
    }
}

fn chart_bars(snapshot: &DashboardResponse) -> Vec<ChartBar> {
    let peak = snapshot.data.chart_peak();
    snapshot
        .data
        .overall_url_chart
        .iter()
        .map(|(label, value)| {
            let width = if peak > 0 && *value > 0 {
                ((*value as f64 / peak as f64) * CHART_WIDTH as f64).round() as usize
            } else {
                0
            };
            ChartBar {
                label: label.clone(),
                value: *value,
                width: width.min(CHART_WIDTH),
            }
        })
        .collect()
}
