//! Text and JSON rendering of sorting results.

use std::fmt::Write;

use serde::Serialize;
use sorter_core::{Package, PackageSorter, SortDecision, SortingThresholds};

use crate::catalog::CatalogEntry;

const TITLE: &str = "THOUGHTFUL ROBOTIC AUTOMATION - PACKAGE SORTING SYSTEM";
const BANNER_WIDTH: usize = 60;
const TABLE_WIDTH: usize = 110;

/// One serialized result.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    pub package: Package,
    pub decision: SortDecision,
}

impl<'a> ReportRow<'a> {
    /// Sorts a package and captures the decision.
    pub fn new(name: Option<&'a str>, package: Package, sorter: &PackageSorter) -> Self {
        Self {
            name,
            package,
            decision: sorter.decide(&package),
        }
    }
}

/// Formats a number rounded to an integer with `,` thousands separators.
///
/// Non-finite values are returned as Rust prints them.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3 + 1);
    for (i, ch) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0.0 && rounded.chars().any(|c| c != '0') {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Renders the full demonstration report: banner, table, rules.
pub fn render_demo(entries: &[CatalogEntry], sorter: &PackageSorter) -> String {
    let mut out = String::new();
    let rule = "=".repeat(BANNER_WIDTH);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out);

    out.push_str(&render_table(entries, sorter));
    let _ = writeln!(out);
    out.push_str(&render_rules(sorter.thresholds()));
    out
}

/// Renders the results table for the given packages.
pub fn render_table(entries: &[CatalogEntry], sorter: &PackageSorter) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<35} {:<8} {:<8} {:<8} {:<8} {:<15} {:<10}",
        "Package Description", "Width", "Height", "Length", "Mass", "Volume", "Result"
    );
    let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));

    for entry in entries {
        let package = &entry.package;
        let decision = sorter.decide(package);
        let _ = writeln!(
            out,
            "{:<35} {:<8.1} {:<8.1} {:<8.1} {:<8.1} {:<15} {:<10}",
            entry.name,
            package.width,
            package.height,
            package.length,
            package.mass,
            group_thousands(decision.volume),
            decision.stack
        );
    }

    out
}

/// Renders the rule summary for the active thresholds.
pub fn render_rules(thresholds: &SortingThresholds) -> String {
    let mut out = String::new();
    let rule = "=".repeat(BANNER_WIDTH);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "Classification Rules:");
    let _ = writeln!(
        out,
        "  • BULKY: Volume >= {} cm³ OR any dimension >= {} cm",
        group_thousands(thresholds.bulky_volume),
        thresholds.bulky_dimension
    );
    let _ = writeln!(out, "  • HEAVY: Mass >= {} kg", thresholds.heavy_mass);
    let _ = writeln!(out, "  • STANDARD: Neither bulky nor heavy");
    let _ = writeln!(out, "  • SPECIAL: Either bulky OR heavy (but not both)");
    let _ = writeln!(out, "  • REJECTED: Both bulky AND heavy");
    let _ = writeln!(out, "{}", rule);
    out
}

/// Renders the packages as a pretty-printed JSON array of [`ReportRow`]s.
pub fn render_json(
    entries: &[CatalogEntry],
    sorter: &PackageSorter,
) -> serde_json::Result<String> {
    let rows: Vec<ReportRow<'_>> = entries
        .iter()
        .map(|entry| ReportRow::new(Some(entry.name), entry.package, sorter))
        .collect();
    serde_json::to_string_pretty(&rows)
}
