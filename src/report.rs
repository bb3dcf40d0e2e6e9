/// Daily flood report.
///
/// Splits a cycle's readings into flooded streams (flood percentage over
/// 100) and streams above the high-water mark (high-water percentage over
/// 100), ranks every list by flood percentage, and renders the plain-text
/// report served on the console and over HTTP.

use std::fmt;

use chrono::{Local, NaiveDate};

use crate::model::Reading;

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Sorts by flood percentage, highest first. Equal percentages keep their
/// input order.
pub fn sort_by_flood_percent(readings: &mut [&Reading]) {
    readings.sort_by(|a, b| b.flood_percent.total_cmp(&a.flood_percent));
}

fn ranked<'a>(readings: impl Iterator<Item = &'a Reading>) -> Vec<&'a Reading> {
    let mut ranked: Vec<&Reading> = readings.collect();
    sort_by_flood_percent(&mut ranked);
    ranked
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// One cycle's readings, partitioned and ranked for a given report date.
#[derive(Debug)]
pub struct FloodReport<'a> {
    pub date: NaiveDate,
    pub flooded: Vec<&'a Reading>,
    pub high: Vec<&'a Reading>,
    pub all: Vec<&'a Reading>,
}

impl<'a> FloodReport<'a> {
    pub fn new(readings: &'a [Reading], date: NaiveDate) -> Self {
        FloodReport {
            date,
            flooded: ranked(readings.iter().filter(|r| r.is_flooded())),
            high: ranked(readings.iter().filter(|r| r.is_above_high_water())),
            all: ranked(readings.iter()),
        }
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, readings: &[&Reading]) -> fmt::Result {
    if readings.is_empty() {
        return Ok(());
    }
    writeln!(f, "  {}", title)?;
    writeln!(f, "  {}", "-".repeat(title.len()))?;
    for reading in readings {
        writeln!(f, "  {}", reading)?;
    }
    writeln!(f)
}

impl fmt::Display for FloodReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Flood Report for {}", self.date.format("%B %d, %Y"))?;
        writeln!(f)?;
        writeln!(
            f,
            "  There are {} flooded streams and {} streams above the high water mark today",
            self.flooded.len(),
            self.high.len()
        )?;
        writeln!(f)?;

        write_section(f, "Flooded Streams", &self.flooded)?;
        write_section(f, "Streams at or above the high water mark", &self.high)?;
        write_section(f, "All Streams", &self.all)
    }
}

/// Renders today's report for `readings`.
pub fn render_today(readings: &[Reading]) -> String {
    FloodReport::new(readings, Local::now().date_naive()).to_string()
}

/// Renders today's report, prints it to stdout, and returns the text.
pub fn flood_report(readings: &[Reading]) -> String {
    let text = render_today(readings);
    print!("{}", text);
    text
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
