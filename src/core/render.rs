//! Terminal dashboard for an `AnalysisResult`.
//!
//! Everything here is derived from the result; the only other input is the
//! copy state used for the "Copied!" labels.

use crate::core::copy_state::{clipboard_text, CopyState};
use crate::domain::model::{AnalysisResult, CopyItem, Sentiments};
use crate::utils::error::Result;
use std::fmt;

pub const MAX_THEMES: usize = 5;
pub const BAR_WIDTH: usize = 20;
pub const GENERIC_FAILURE_MESSAGE: &str = "The analysis service reported a failure";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRow {
    pub label: String,
    pub mentions: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentKind {
    Positive,
    Negative,
    Neutral,
}

impl SentimentKind {
    pub fn label(self) -> &'static str {
        match self {
            SentimentKind::Positive => "Positive",
            SentimentKind::Negative => "Negative",
            SentimentKind::Neutral => "Neutral",
        }
    }

    fn count(self, sentiments: &Sentiments) -> u64 {
        match self {
            SentimentKind::Positive => sentiments.positive,
            SentimentKind::Negative => sentiments.negative,
            SentimentKind::Neutral => sentiments.neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentBar {
    pub kind: SentimentKind,
    pub count: u64,
    /// `None` when all three counts are zero.
    pub share: Option<f64>,
}

impl SentimentBar {
    pub fn filled_cells(&self, width: usize) -> usize {
        self.share
            .map(|share| ((share * width as f64).round() as usize).min(width))
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordChip {
    pub keyword: String,
    pub frequency: u64,
}

impl fmt::Display for KeywordChip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.keyword, self.frequency)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyBlock {
    pub item: CopyItem,
    pub heading: &'static str,
    pub copy_label: &'static str,
    pub lines: Vec<String>,
    pub clipboard_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub themes: Vec<ThemeRow>,
    pub sentiments: Vec<SentimentBar>,
    pub keywords: Vec<KeywordChip>,
    pub copy_blocks: Vec<CopyBlock>,
}

pub fn theme_label(theme: &str) -> String {
    theme.replace('_', " ")
}

pub fn sentiment_share(count: u64, sentiments: &Sentiments) -> Option<f64> {
    let total = sentiments.total();
    if total == 0.0 {
        None
    } else {
        Some(count as f64 / total)
    }
}

pub fn sentiment_bars(sentiments: &Sentiments) -> Vec<SentimentBar> {
    [
        SentimentKind::Positive,
        SentimentKind::Negative,
        SentimentKind::Neutral,
    ]
    .into_iter()
    .map(|kind| {
        let count = kind.count(sentiments);
        SentimentBar {
            kind,
            count,
            share: sentiment_share(count, sentiments),
        }
    })
    .collect()
}

/// Message to show for a structurally valid `success: false` response.
pub fn failure_message(result: &AnalysisResult) -> String {
    result
        .server_message()
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}

/// What a finished request prints: `body` goes to stdout, `warning` to
/// stderr when the server answered `success: false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub body: Option<String>,
    pub warning: Option<String>,
}

/// With `as_json` the result is printed as received, whatever its `success`
/// flag says. Otherwise a successful result becomes the dashboard text.
pub fn render_report(
    result: &AnalysisResult,
    as_json: bool,
    copy_state: &CopyState,
) -> Result<Report> {
    let dashboard = Dashboard::from_result(result);
    let warning = match dashboard {
        Some(_) => None,
        None => Some(failure_message(result)),
    };

    let body = if as_json {
        Some(serde_json::to_string_pretty(result)?)
    } else {
        dashboard.map(|d| d.render_text(copy_state))
    };

    Ok(Report { body, warning })
}

impl Dashboard {
    /// Builds the dashboard, or `None` unless the result reports success.
    pub fn from_result(result: &AnalysisResult) -> Option<Self> {
        if !result.success {
            return None;
        }
        let analysis = result.analysis.as_ref()?;
        let seo = result.seo_content.as_ref()?;

        let themes = analysis
            .themes
            .iter()
            .take(MAX_THEMES)
            .map(|(theme, mentions)| ThemeRow {
                label: theme_label(theme),
                mentions: *mentions,
            })
            .collect();

        let keywords = analysis
            .top_keywords
            .iter()
            .map(|k| KeywordChip {
                keyword: k.keyword.clone(),
                frequency: k.frequency,
            })
            .collect();

        let copy_blocks = CopyItem::ALL
            .into_iter()
            .map(|item| {
                let (heading, copy_label, lines) = match item {
                    CopyItem::Title => ("Product Title", "Copy", vec![seo.title.clone()]),
                    CopyItem::Bullets => (
                        "Bullet Points",
                        "Copy All",
                        seo.bullets.iter().map(|b| format!("• {}", b)).collect::<Vec<_>>(),
                    ),
                    CopyItem::Description => (
                        "Product Description",
                        "Copy",
                        seo.description.split('\n').map(str::to_string).collect::<Vec<_>>(),
                    ),
                };
                CopyBlock {
                    item,
                    heading,
                    copy_label,
                    lines,
                    clipboard_text: clipboard_text(result, item).unwrap_or_default(),
                }
            })
            .collect();

        Some(Self {
            themes,
            sentiments: sentiment_bars(&analysis.sentiments),
            keywords,
            copy_blocks,
        })
    }

    pub fn display<'a>(&'a self, copy_state: &'a CopyState) -> DashboardDisplay<'a> {
        DashboardDisplay {
            dashboard: self,
            copy_state,
        }
    }

    pub fn render_text(&self, copy_state: &CopyState) -> String {
        self.display(copy_state).to_string()
    }
}

pub struct DashboardDisplay<'a> {
    dashboard: &'a Dashboard,
    copy_state: &'a CopyState,
}

impl fmt::Display for DashboardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dashboard = self.dashboard;

        writeln!(f, "📊 Review Analysis")?;
        writeln!(f)?;
        writeln!(f, "Top Themes")?;
        for theme in &dashboard.themes {
            writeln!(f, "  {:<28} {} mentions", theme.label, theme.mentions)?;
        }
        writeln!(f)?;

        writeln!(f, "Sentiment Analysis")?;
        for bar in &dashboard.sentiments {
            let filled = bar.filled_cells(BAR_WIDTH);
            let share = match bar.share {
                Some(share) => format!("{:.1}%", share * 100.0),
                None => "no data".to_string(),
            };
            writeln!(
                f,
                "  {:<9} [{}{}] {:>5}  {}",
                bar.kind.label(),
                "█".repeat(filled),
                " ".repeat(BAR_WIDTH - filled),
                bar.count,
                share
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Top Keywords")?;
        let chips: Vec<String> = dashboard.keywords.iter().map(|k| k.to_string()).collect();
        writeln!(f, "  {}", chips.join("  "))?;
        writeln!(f)?;

        writeln!(f, "✍️ Generated SEO Content")?;
        for block in &dashboard.copy_blocks {
            let action = if self.copy_state.is_copied(block.item) {
                "✅ Copied!"
            } else {
                block.copy_label
            };
            writeln!(f)?;
            writeln!(f, "{}  [{}]", block.heading, action)?;
            for line in &block.lines {
                writeln!(f, "  {}", line)?;
            }
        }

        Ok(())
    }
}
