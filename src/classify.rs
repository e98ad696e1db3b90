//! Numeric-vs-categorical column classification.
//!
//! A column is numeric iff every non-missing value parses as an `f64`. The
//! first parse failure settles the whole column as categorical. Missing
//! values are detected against a configurable token set before any parsing
//! is attempted.

use std::collections::HashSet;

/// Sentinel substituted for missing values in categorical columns.
pub const MISSING_SENTINEL: &str = "NA";

/// Tokens that denote an absent value.
///
/// Matching is applied to the trimmed, ASCII-lowercased form of a cell, so
/// `"NA"`, `" na "`, and `"Na"` all hit the default `"na"` token.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingTokens {
    tokens: HashSet<String>,
}

impl Default for MissingTokens {
    fn default() -> Self {
        Self::from_tokens(["", "na", "n/a", "null", "missing"])
    }
}

impl MissingTokens {
    /// Builds a token set. Tokens are normalized (trim + ASCII lowercase) on
    /// the way in.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|t| t.as_ref().trim().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Whether the raw cell denotes a missing value.
    pub fn is_missing(&self, value: &str) -> bool {
        self.tokens.contains(&value.trim().to_ascii_lowercase())
    }
}

/// A column after type classification.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedColumn {
    /// Every non-missing value parsed as an `f64`. Missing entries are
    /// dropped, so the sequence may be shorter than the row count. Never
    /// empty: a column with no parseable values classifies as categorical.
    Numeric(Vec<f64>),
    /// At least one non-missing value failed to parse, or no value parsed at
    /// all. Row count is preserved; missing entries are rendered as
    /// [`MISSING_SENTINEL`], present values verbatim.
    Categorical(Vec<String>),
}

impl ClassifiedColumn {
    /// Short type name for display.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Numeric(_) => "numeric",
            Self::Categorical(_) => "categorical",
        }
    }
}

/// Classifies one column's raw values.
///
/// Pure and deterministic in `(values, missing)`. The scan short-circuits on
/// the first non-missing value that fails to parse.
pub fn classify(values: &[String], missing: &MissingTokens) -> ClassifiedColumn {
    let mut floats = Vec::with_capacity(values.len());
    let mut all_numeric = true;

    for value in values {
        if missing.is_missing(value) {
            continue;
        }
        match value.parse::<f64>() {
            Ok(f) => floats.push(f),
            Err(_) => {
                all_numeric = false;
                break;
            }
        }
    }

    // An all-missing column would otherwise become a zero-length numeric
    // sequence, which downstream summarizers must never see.
    if all_numeric && !floats.is_empty() {
        return ClassifiedColumn::Numeric(floats);
    }

    ClassifiedColumn::Categorical(
        values
            .iter()
            .map(|v| {
                if missing.is_missing(v) {
                    MISSING_SENTINEL.to_string()
                } else {
                    v.clone()
                }
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_numeric() {
        let result = classify(&col(&["1", "2.5", "-3e2"]), &MissingTokens::default());
        assert_eq!(result, ClassifiedColumn::Numeric(vec![1.0, 2.5, -300.0]));
    }

    #[test]
    fn test_missing_values_dropped_from_numeric() {
        let result = classify(&col(&["1", "", "2", "null"]), &MissingTokens::default());
        assert_eq!(result, ClassifiedColumn::Numeric(vec![1.0, 2.0]));
    }

    #[test]
    fn test_parse_failure_reclassifies_as_categorical() {
        let result = classify(&col(&["1", "two", "3"]), &MissingTokens::default());
        assert_eq!(
            result,
            ClassifiedColumn::Categorical(col(&["1", "two", "3"]))
        );
    }

    #[test]
    fn test_categorical_preserves_case_and_substitutes_sentinel() {
        let result = classify(&col(&["Yes", "NO", "", "n/a"]), &MissingTokens::default());
        assert_eq!(
            result,
            ClassifiedColumn::Categorical(col(&["Yes", "NO", "NA", "NA"]))
        );
    }

    #[test]
    fn test_all_missing_column_is_categorical() {
        let result = classify(&col(&["", "na", "NULL"]), &MissingTokens::default());
        assert_eq!(
            result,
            ClassifiedColumn::Categorical(col(&["NA", "NA", "NA"]))
        );
    }

    #[test]
    fn test_missing_match_is_case_insensitive_and_trimmed() {
        let missing = MissingTokens::default();
        assert!(missing.is_missing("NA"));
        assert!(missing.is_missing(" Null "));
        assert!(missing.is_missing("N/A"));
        assert!(!missing.is_missing("nah"));
    }

    #[test]
    fn test_custom_token_set() {
        let missing = MissingTokens::from_tokens(["?", "-"]);
        let result = classify(&col(&["1", "?", "2", "-"]), &missing);
        assert_eq!(result, ClassifiedColumn::Numeric(vec![1.0, 2.0]));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let values = col(&["1", "x", "", "2"]);
        let missing = MissingTokens::default();
        assert_eq!(classify(&values, &missing), classify(&values, &missing));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ClassifiedColumn::Numeric(vec![1.0]).kind(), "numeric");
        assert_eq!(
            ClassifiedColumn::Categorical(Vec::new()).kind(),
            "categorical"
        );
    }
}
