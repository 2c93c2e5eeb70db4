//! Category table, citation, and overview fixtures.

use crate::domain::analysis::{
    BaseRow, ChartSeries, CitationCount, CitationRow, OverviewDataset, SourceShare, TableKind,
};
use crate::domain::foundation::{Percentage, TrendDelta};

pub(super) fn category_rows(table: TableKind) -> Vec<BaseRow> {
    match table {
        TableKind::IntentMentions => vec![
            BaseRow::new("comparison", "Product Comparison", 45.0, TrendDelta::percent(5.2)),
            BaseRow::new("feature", "Feature Inquiry", 62.0, TrendDelta::percent(3.1)),
            BaseRow::new("pricing", "Pricing Questions", 28.0, TrendDelta::percent(-1.2)),
            BaseRow::new("support", "Technical Support", 73.0, TrendDelta::percent(8.4)),
            BaseRow::new("integration", "Integration Help", 38.0, TrendDelta::percent(2.6)),
        ],
        TableKind::GeographyMentions => vec![
            BaseRow::new("na", "North America", 52.0, TrendDelta::percent(2.8)),
            BaseRow::new("eu", "Europe", 38.0, TrendDelta::percent(1.5)),
            BaseRow::new("apac", "Asia Pacific", 34.0, TrendDelta::percent(-0.8)),
            BaseRow::new("latam", "Latin America", 28.0, TrendDelta::percent(3.2)),
            BaseRow::new("me", "Middle East", 25.0, TrendDelta::percent(1.1)),
            BaseRow::new("africa", "Africa", 22.0, TrendDelta::percent(2.4)),
        ],
        TableKind::IntentRank => vec![
            BaseRow::new("comparison", "Product Comparison", 2.3, TrendDelta::absolute(-0.4)),
            BaseRow::new("feature", "Feature Inquiry", 1.8, TrendDelta::absolute(-0.2)),
            BaseRow::new("pricing", "Pricing Questions", 3.2, TrendDelta::absolute(0.3)),
            BaseRow::new("support", "Technical Support", 1.4, TrendDelta::absolute(-0.6)),
            BaseRow::new("integration", "Integration Help", 2.7, TrendDelta::absolute(-0.1)),
        ],
        TableKind::GeographyRank => vec![
            BaseRow::new("na", "North America", 1.8, TrendDelta::absolute(-0.3)),
            BaseRow::new("eu", "Europe", 2.4, TrendDelta::absolute(-0.1)),
            BaseRow::new("apac", "Asia Pacific", 2.9, TrendDelta::absolute(0.2)),
            BaseRow::new("latam", "Latin America", 2.1, TrendDelta::absolute(-0.4)),
            BaseRow::new("me", "Middle East", 2.6, TrendDelta::absolute(-0.2)),
            BaseRow::new("africa", "Africa", 2.8, TrendDelta::absolute(-0.1)),
        ],
        TableKind::IntentPerception => vec![
            BaseRow::new("comparison", "Product Comparison", 78.0, TrendDelta::percent(2.1)),
            BaseRow::new("feature", "Feature Inquiry", 85.0, TrendDelta::percent(1.8)),
            BaseRow::new("pricing", "Pricing Questions", 62.0, TrendDelta::percent(-0.5)),
            BaseRow::new("support", "Technical Support", 91.0, TrendDelta::percent(3.2)),
            BaseRow::new("integration", "Integration Help", 74.0, TrendDelta::percent(0.9)),
        ],
        TableKind::GeographyPerception => vec![
            BaseRow::new("na", "North America", 79.0, TrendDelta::percent(1.2)),
            BaseRow::new("eu", "Europe", 73.0, TrendDelta::percent(0.8)),
            BaseRow::new("apac", "Asia Pacific", 68.0, TrendDelta::percent(-0.3)),
            BaseRow::new("latam", "Latin America", 81.0, TrendDelta::percent(2.1)),
            BaseRow::new("me", "Middle East", 71.0, TrendDelta::percent(0.5)),
            BaseRow::new("africa", "Africa", 76.0, TrendDelta::percent(1.8)),
        ],
    }
}

pub(super) fn mention_sources() -> Vec<SourceShare> {
    vec![
        SourceShare {
            source: "AI Model Responses".into(),
            mentions: 1247,
            percentage: Percentage::new(34),
        },
        SourceShare {
            source: "Industry Reports".into(),
            mentions: 892,
            percentage: Percentage::new(24),
        },
        SourceShare {
            source: "Tech Forums".into(),
            mentions: 567,
            percentage: Percentage::new(15),
        },
        SourceShare {
            source: "News Articles".into(),
            mentions: 445,
            percentage: Percentage::new(12),
        },
    ]
}

pub(super) fn citation_rows() -> Vec<CitationRow> {
    vec![
        CitationRow {
            source: "TechCrunch".into(),
            citation_frequency: 87,
            mention_percent: 23.4,
            avg_rank: 2.1,
            perception_score: 8.2,
        },
        CitationRow {
            source: "Forbes".into(),
            citation_frequency: 64,
            mention_percent: 18.7,
            avg_rank: 1.8,
            perception_score: 8.9,
        },
        CitationRow {
            source: "Wired".into(),
            citation_frequency: 52,
            mention_percent: 15.2,
            avg_rank: 2.4,
            perception_score: 7.8,
        },
        CitationRow {
            source: "VentureBeat".into(),
            citation_frequency: 41,
            mention_percent: 12.1,
            avg_rank: 2.9,
            perception_score: 7.5,
        },
    ]
}

pub(super) fn overview_dataset() -> OverviewDataset {
    OverviewDataset {
        share_of_voice: Percentage::new(70),
        competitor_labels: vec![
            "Your Brand".into(),
            "Comp A".into(),
            "Comp B".into(),
            "Comp C".into(),
        ],
        competitor_mentions: vec![100.0, 60.0, 40.0, 25.0],
        trend_categories: vec![
            "Jan".into(),
            "Feb".into(),
            "Mar".into(),
            "Apr".into(),
            "May".into(),
            "Jun".into(),
        ],
        ranking_trend: vec![8.0, 6.0, 7.0, 4.0, 5.0, 3.0],
        sentiment_series: vec![
            ChartSeries::new("positive", "Positive", vec![60.0, 65.0, 55.0, 70.0, 75.0, 68.0]),
            ChartSeries::new("neutral", "Neutral", vec![25.0, 20.0, 30.0, 15.0, 15.0, 20.0]),
            ChartSeries::new("negative", "Negative", vec![15.0, 15.0, 15.0, 15.0, 10.0, 12.0]),
        ],
        top_citations: vec![
            CitationCount {
                source: "Wikipedia".into(),
                count: 156,
            },
            CitationCount {
                source: "Company Website".into(),
                count: 142,
            },
            CitationCount {
                source: "TechCrunch".into(),
                count: 89,
            },
            CitationCount {
                source: "Forbes".into(),
                count: 67,
            },
        ],
    }
}
