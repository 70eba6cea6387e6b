//! Metric display components.
//!
//! `MetricCard` shows one headline number with an optional delta line,
//! used for the three engagement-rate windows. `TotalsTable` renders a
//! window's raw running totals.

use maud::{html, Markup, Render};

use crate::insights::RunningTotals;

/// A headline metric card with label, value, and optional delta line.
#[derive(Debug, Clone)]
pub struct MetricCard<'a> {
    label: &'a str,
    value: String,
    delta: Option<String>,
}

impl<'a> MetricCard<'a> {
    /// Create a new metric card.
    #[must_use]
    pub fn new(label: &'a str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            delta: None,
        }
    }

    /// Add a small delta/context line under the value.
    #[must_use]
    pub fn with_delta(mut self, delta: impl Into<String>) -> Self {
        self.delta = Some(delta.into());
        self
    }
}

impl Render for MetricCard<'_> {
    fn render(&self) -> Markup {
        html! {
            article class="metric-card" {
                header { (self.label) }
                p class="metric-value" { strong { (self.value) } }
                @if let Some(delta) = &self.delta {
                    small class="metric-delta" { (delta) }
                }
            }
        }
    }
}

/// Table of a window's raw running totals.
#[derive(Debug, Clone)]
pub struct TotalsTable<'a> {
    totals: &'a RunningTotals,
}

impl<'a> TotalsTable<'a> {
    /// Create a totals table for one window.
    #[must_use]
    pub fn new(totals: &'a RunningTotals) -> Self {
        Self { totals }
    }

    fn rows(&self) -> [(&'static str, u64); 7] {
        [
            ("Likes", self.totals.likes),
            ("Comments", self.totals.comments),
            ("Shares", self.totals.shares),
            ("Saves", self.totals.saves),
            ("Reach", self.totals.reach),
            ("Total interactions", self.totals.total_interactions),
            ("Posts", self.totals.post_count),
        ]
    }
}

impl Render for TotalsTable<'_> {
    fn render(&self) -> Markup {
        html! {
            table class="totals-table" {
                thead {
                    tr {
                        th { "Metric" }
                        th { "Total" }
                    }
                }
                tbody {
                    @for (label, value) in self.rows() {
                        tr {
                            td { (label) }
                            td { (value) }
                        }
                    }
                }
            }
        }
    }
}
