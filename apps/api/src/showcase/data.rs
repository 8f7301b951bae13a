//! Fixed sample data behind the dashboard and saved-templates views.

use chrono::NaiveDate;
use serde::Serialize;

/// One headline card on the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

/// Monthly impressions split by channel.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelPerformance {
    pub month: &'static str,
    pub desktop: u32,
    pub mobile: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyConversions {
    pub date: NaiveDate,
    pub conversions: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub summary: Vec<SummaryCard>,
    pub channel_performance: Vec<ChannelPerformance>,
    pub conversions_over_time: Vec<DailyConversions>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TemplateStatus {
    Active,
    Draft,
    Archived,
}

/// A saved description template as listed in the templates view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTemplate {
    pub name: &'static str,
    pub product: &'static str,
    pub status: TemplateStatus,
    pub last_modified: NaiveDate,
}

const SUMMARY: [(&str, &str, &str); 4] = [
    ("Total Descriptions", "1,234", "+20.1% from last month"),
    ("Avg. Conversion Rate", "5.2%", "+1.5% from last month"),
    ("Click-Through Rate", "12.8%", "+3.2% from last month"),
    ("New A/B Tests", "+12", "in the last 7 days"),
];

const CHANNELS: [(&str, u32, u32); 6] = [
    ("January", 186, 80),
    ("February", 305, 200),
    ("March", 237, 120),
    ("April", 73, 190),
    ("May", 209, 130),
    ("June", 214, 140),
];

/// (day of January 2024, conversions)
const CONVERSIONS: [(u32, u32); 7] = [(1, 20), (2, 25), (3, 22), (4, 30), (5, 28), (6, 35), (7, 40)];

const TEMPLATES: [(&str, &str, TemplateStatus, (i32, u32, u32)); 5] = [
    ("Ergonomic Chair Launch", "Ergonomic Office Chair", TemplateStatus::Active, (2023, 6, 23)),
    ("Winter Headphone Sale", "Noise-Cancelling Headphones", TemplateStatus::Draft, (2023, 10, 15)),
    ("Smart Watch V2", "Smart Watch Series 2", TemplateStatus::Active, (2024, 1, 5)),
    ("Coffee Maker Social", "Artisan Coffee Maker", TemplateStatus::Archived, (2023, 3, 12)),
    ("Running Shoes - Summer", "Featherlight Runners", TemplateStatus::Active, (2024, 2, 28)),
];

pub fn dashboard_overview() -> DashboardOverview {
    DashboardOverview {
        summary: SUMMARY
            .iter()
            .map(|&(label, value, change)| SummaryCard { label, value, change })
            .collect(),
        channel_performance: CHANNELS
            .iter()
            .map(|&(month, desktop, mobile)| ChannelPerformance { month, desktop, mobile })
            .collect(),
        conversions_over_time: CONVERSIONS
            .iter()
            .filter_map(|&(day, conversions)| {
                NaiveDate::from_ymd_opt(2024, 1, day).map(|date| DailyConversions { date, conversions })
            })
            .collect(),
    }
}

pub fn saved_templates() -> Vec<SavedTemplate> {
    TEMPLATES
        .iter()
        .filter_map(|&(name, product, status, (y, m, d))| {
            NaiveDate::from_ymd_opt(y, m, d).map(|last_modified| SavedTemplate {
                name,
                product,
                status,
                last_modified,
            })
        })
        .collect()
}
