//! Prompt quality metrics and their chart projection
//!
//! The metrics record is a fixed set of constants. [`chart_entries`] turns
//! it into the ordered, colored rows the metrics chart draws.

use serde::Serialize;

/// Quality scores attached to a generated prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromptMetrics {
    pub accuracy: u32,
    pub consistency: u32,
    pub safety: u32,
    pub hallucination: u32,
}

impl PromptMetrics {
    /// The scores every generation reports
    pub const FIXED: PromptMetrics = PromptMetrics {
        accuracy: 94,
        consistency: 88,
        safety: 99,
        hallucination: 12,
    };

    pub fn value(&self, kind: MetricKind) -> u32 {
        match kind {
            MetricKind::Accuracy => self.accuracy,
            MetricKind::Consistency => self.consistency,
            MetricKind::Safety => self.safety,
            MetricKind::Hallucination => self.hallucination,
        }
    }
}

/// One bar of the metrics chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Accuracy,
    Consistency,
    Safety,
    Hallucination,
}

impl MetricKind {
    /// Chart order, top to bottom
    pub const ORDER: [MetricKind; 4] = [
        MetricKind::Accuracy,
        MetricKind::Consistency,
        MetricKind::Safety,
        MetricKind::Hallucination,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Accuracy => "Accuracy",
            MetricKind::Consistency => "Consistency",
            MetricKind::Safety => "Safety",
            MetricKind::Hallucination => "Hallucination Risk",
        }
    }

    /// Bar color as a CSS hex string
    pub fn color_hex(&self) -> &'static str {
        match self {
            MetricKind::Accuracy => "#10b981",
            MetricKind::Consistency => "#3b82f6",
            MetricKind::Safety => "#8b5cf6",
            MetricKind::Hallucination => "#ef4444",
        }
    }

    /// Bar color as RGB components
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            MetricKind::Accuracy => (0x10, 0xb9, 0x81),
            MetricKind::Consistency => (0x3b, 0x82, 0xf6),
            MetricKind::Safety => (0x8b, 0x5c, 0xf6),
            MetricKind::Hallucination => (0xef, 0x44, 0x44),
        }
    }
}

/// A labelled, colored chart row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartEntry {
    pub kind: MetricKind,
    pub value: u32,
}

impl ChartEntry {
    pub fn name(&self) -> &'static str {
        self.kind.label()
    }

    pub fn color_hex(&self) -> &'static str {
        self.kind.color_hex()
    }

    /// Tooltip text shown for the hovered bar
    pub fn tooltip(&self) -> String {
        format!("{}: {}", self.name(), self.value)
    }
}

/// Project the metrics record onto chart rows.
///
/// Returns an empty list when there are no metrics so the chart is skipped.
pub fn chart_entries(metrics: Option<&PromptMetrics>) -> Vec<ChartEntry> {
    match metrics {
        Some(metrics) => MetricKind::ORDER
            .iter()
            .map(|&kind| ChartEntry {
                kind,
                value: metrics.value(kind),
            })
            .collect(),
        None => Vec::new(),
    }
}
