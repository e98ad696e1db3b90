//! Report rendering.
//!
//! Turns a [`ProfileReport`] into either the human-readable console layout
//! (floats to two decimals) or pretty-printed JSON for machine consumers.

use std::fmt::Write as _;

use crate::{error::Result, profile::ProfileReport};

/// Renders the report as human-readable text.
///
/// Categorical columns come first, then numeric columns, each as a block of
/// label/value lines followed by a blank line.
pub fn render_text(report: &ProfileReport) -> String {
    let mut out = String::new();

    for s in &report.categorical {
        let _ = writeln!(out, "Column:       {}", s.name);
        let _ = writeln!(out, "Uniques:      {}", s.unique_count);
        let _ = writeln!(out, "Mode:         {}", s.mode);
        let _ = writeln!(out, "Top Frequent: {}", s.top_frequent.join(", "));
        out.push('\n');
    }

    for s in &report.numeric {
        let _ = writeln!(out, "Column:   {}", s.name);
        let _ = writeln!(out, "Mean:     {:.2}", s.mean);
        let _ = writeln!(out, "StdDev:   {:.2}", s.std_dev);
        let _ = writeln!(out, "Min:      {:.2}", s.min);
        let _ = writeln!(out, "25%:      {:.2}", s.q25);
        let _ = writeln!(out, "50%:      {:.2}", s.q50);
        let _ = writeln!(out, "75%:      {:.2}", s.q75);
        let _ = writeln!(out, "Max:      {:.2}", s.max);
        out.push('\n');
    }

    out
}

/// Renders the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`crate::Error::Json`] if encoding fails.
pub fn render_json(report: &ProfileReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{profile::ColumnProfiler, table::ColumnTable};

    fn sample_report() -> ProfileReport {
        let rows = vec![
            vec!["score".to_string(), "city".to_string()],
            vec!["1".to_string(), "Oslo".to_string()],
            vec!["2".to_string(), "Lima".to_string()],
            vec!["3".to_string(), "Oslo".to_string()],
            vec!["4".to_string(), "Pune".to_string()],
        ];
        ColumnProfiler::new().profile(&ColumnTable::assemble(rows, true))
    }

    #[test]
    fn test_text_numeric_block() {
        let text = render_text(&sample_report());

        assert!(text.contains("Column:   score"));
        assert!(text.contains("Mean:     2.50"));
        assert!(text.contains("StdDev:   1.12"));
        assert!(text.contains("Min:      1.00"));
        assert!(text.contains("25%:      2.00"));
        assert!(text.contains("50%:      2.50"));
        assert!(text.contains("75%:      4.00"));
        assert!(text.contains("Max:      4.00"));
    }

    #[test]
    fn test_text_categorical_block() {
        let text = render_text(&sample_report());

        assert!(text.contains("Column:       city"));
        assert!(text.contains("Uniques:      3"));
        assert!(text.contains("Mode:         Oslo"));
        assert!(text.contains("Top Frequent: Oslo, Lima, Pune"));
    }

    #[test]
    fn test_text_empty_report() {
        assert_eq!(render_text(&ProfileReport::default()), "");
    }

    #[test]
    fn test_json_round_trips() {
        let json = render_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["numeric"][0]["name"], "score");
        assert_eq!(value["categorical"][0]["frequencies"]["Oslo"], 2);
    }
}
