//! Property tests for classification and summarization invariants.
//!
//! Uses proptest to verify invariants hold across random inputs.

use proptest::prelude::*;

use colstat::{
    classify::{classify, ClassifiedColumn, MissingTokens},
    CategoricalSummary, NumericSummary,
};

proptest! {
    #[test]
    fn numeric_order_statistics_hold(
        values in prop::collection::vec(-1_000_000i32..1_000_000, 1..200)
    ) {
        // Integer-valued floats keep the summation exact, so the mean bound
        // is not blurred by accumulation error.
        let values: Vec<f64> = values.into_iter().map(f64::from).collect();
        let s = NumericSummary::compute("x", values);

        prop_assert!(s.min <= s.q25);
        prop_assert!(s.q25 <= s.median);
        prop_assert!(s.median <= s.q75);
        prop_assert!(s.q75 <= s.max);
        prop_assert!(s.mean >= s.min && s.mean <= s.max);
        prop_assert!(s.std_dev >= 0.0);
        prop_assert_eq!(s.q50, s.median);
    }

    #[test]
    fn categorical_frequencies_sum_to_input_length(
        values in prop::collection::vec("[a-e]{1,2}", 0..100)
    ) {
        let s = CategoricalSummary::compute("x", &values);

        prop_assert_eq!(s.total_count(), values.len());
        prop_assert_eq!(s.unique_count, s.frequencies.len());
        prop_assert!(s.top_frequent.len() <= 3);
        prop_assert_eq!(s.top_frequent.len(), s.unique_count.min(3));

        if let Some(&mode_count) = s.frequencies.get(&s.mode) {
            prop_assert!(s.frequencies.values().all(|&c| c <= mode_count));
        }
    }

    #[test]
    fn classification_is_pure(
        values in prop::collection::vec("[0-9x.]{0,4}", 0..50)
    ) {
        let missing = MissingTokens::default();
        prop_assert_eq!(classify(&values, &missing), classify(&values, &missing));
    }

    #[test]
    fn numeric_columns_only_contain_parseable_values(
        numbers in prop::collection::vec(-1000i64..1000, 1..50)
    ) {
        let values: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
        let classified = classify(&values, &MissingTokens::default());

        match classified {
            ClassifiedColumn::Numeric(floats) => {
                prop_assert_eq!(floats.len(), values.len());
            }
            ClassifiedColumn::Categorical(_) => {
                prop_assert!(false, "all-integer column must classify numeric");
            }
        }
    }

    #[test]
    fn categorical_columns_preserve_row_count(
        values in prop::collection::vec("[a-z ]{0,6}", 1..50)
    ) {
        // Force at least one unparseable token so the column is categorical.
        let mut values = values;
        values.push("not-a-number".to_string());

        match classify(&values, &MissingTokens::default()) {
            ClassifiedColumn::Categorical(rendered) => {
                prop_assert_eq!(rendered.len(), values.len());
            }
            ClassifiedColumn::Numeric(_) => {
                prop_assert!(false, "column with unparseable token must be categorical");
            }
        }
    }
}
