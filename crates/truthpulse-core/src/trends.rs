//! Static datasets behind the Trends page.
//!
//! These are fixed literals, not measurements.

use serde::Serialize;

/// Stroke colour of the claims-over-time line.
pub const LINE_STROKE: &str = "#2563EB";

/// Fill colours of the category pie, in dataset order.
pub const CATEGORY_COLORS: [&str; 4] = ["#2563EB", "#10B981", "#F59E0B", "#14B8A6"];

/// Filled and remaining colours of the score gauge.
pub const GAUGE_COLORS: [&str; 2] = ["#10B981", "#E5E7EB"];

/// One day on the claims-over-time chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// Axis label, e.g. `"Jan 15"`.
    pub day: &'static str,
    /// Number of false claims recorded that day.
    pub claims: u32,
}

/// One slice of the category breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    /// Category name.
    pub name: &'static str,
    /// Share of claims (percent).
    pub value: u32,
}

/// Banner shown above the charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendAlert {
    /// Bold first line.
    pub headline: &'static str,
    /// Smaller second line.
    pub detail: &'static str,
}

/// False claims per day, Jan 15 to Jan 21.
pub const CLAIMS_OVER_TIME: [TrendPoint; 7] = [
    TrendPoint { day: "Jan 15", claims: 45 },
    TrendPoint { day: "Jan 16", claims: 52 },
    TrendPoint { day: "Jan 17", claims: 38 },
    TrendPoint { day: "Jan 18", claims: 67 },
    TrendPoint { day: "Jan 19", claims: 58 },
    TrendPoint { day: "Jan 20", claims: 74 },
    TrendPoint { day: "Jan 21", claims: 81 },
];

/// Breakdown of false claims by category.
pub const CATEGORY_BREAKDOWN: [CategoryShare; 4] = [
    CategoryShare { name: "Health", value: 35 },
    CategoryShare { name: "Politics", value: 30 },
    CategoryShare { name: "Finance", value: 20 },
    CategoryShare { name: "Technology", value: 15 },
];

/// The weekly alert.
pub const WEEKLY_ALERT: TrendAlert = TrendAlert {
    headline: "Health-related false claims +25% this week",
    detail: "Significant increase in vaccine misinformation across social platforms.",
};

/// Title of the line chart card.
pub const LINE_CHART_TITLE: &str = "False Claims Over Time";

/// Title of the pie chart card.
pub const PIE_CHART_TITLE: &str = "Category Breakdown";

/// Everything the Trends page renders, bundled for the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendsSnapshot {
    /// Banner text.
    pub alert: TrendAlert,
    /// Line chart data.
    pub timeline: &'static [TrendPoint],
    /// Pie chart data.
    pub categories: &'static [CategoryShare],
    /// Line stroke colour.
    pub line_stroke: &'static str,
    /// Pie slice colours, parallel to `categories`.
    pub category_colors: &'static [&'static str],
}

impl TrendsSnapshot {
    /// The fixed snapshot.
    pub const fn current() -> Self {
        Self {
            alert: WEEKLY_ALERT,
            timeline: &CLAIMS_OVER_TIME,
            categories: &CATEGORY_BREAKDOWN,
            line_stroke: LINE_STROKE,
            category_colors: &CATEGORY_COLORS,
        }
    }

    /// Sum of all category values.
    pub fn category_total(&self) -> u32 {
        self.categories.iter().map(|c| c.value).sum()
    }

    /// Largest daily count on the timeline.
    pub fn peak_claims(&self) -> u32 {
        self.timeline.iter().map(|p| p.claims).max().unwrap_or(0)
    }
}

impl Default for TrendsSnapshot {
    fn default() -> Self {
        Self::current()
    }
}
