//! Property-based tests for encoding and matrix assembly.
//!
//! Rows mix parsable and junk numeric fields; the properties pin the
//! first-occurrence id order, the row-count law, and determinism.

use proptest::collection::vec as prop_vec;
use proptest::prelude::*;

use smogcast::{build_design_matrix, DatasetError, PollutionRecord};

// =============================================================================
// Arbitrary Record Generators
// =============================================================================

/// Short names drawn from a small alphabet so collisions actually happen.
fn arb_name() -> impl Strategy<Value = String> {
    "[A-D][a-c]{0,2}"
}

/// Either a clean decimal or junk that must fail the parse.
fn arb_numeric_text() -> impl Strategy<Value = String> {
    prop_oneof![
        (-1000.0..1000.0f64).prop_map(|value| format!("{value}")),
        Just("n/a".to_string()),
        Just(String::new()),
        Just("12.5.3".to_string()),
        Just("NaN".to_string()),
    ]
}

fn arb_record() -> impl Strategy<Value = PollutionRecord> {
    (
        arb_name(),
        arb_name(),
        prop_vec(arb_numeric_text(), 6),
    )
        .prop_map(|(state, city, numbers)| {
            let [pm2_5, pm10, no2, so2, co, o3] = numbers.as_slice() else {
                unreachable!("strategy always yields six numeric fields");
            };
            PollutionRecord::new(
                state,
                city,
                pm2_5.as_str(),
                pm10.as_str(),
                no2.as_str(),
                so2.as_str(),
                co.as_str(),
                o3.as_str(),
            )
        })
}

/// A record parses iff all six numeric fields are finite decimals.
fn is_fully_parsable(record: &PollutionRecord) -> bool {
    [
        &record.pm2_5,
        &record.pm10,
        &record.no2,
        &record.so2,
        &record.co,
        &record.o3,
    ]
    .iter()
    .all(|text| matches!(text.trim().parse::<f64>(), Ok(v) if v.is_finite()))
}

/// First-occurrence scan over all records, dropped or not.
fn expected_order<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for name in names {
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}

// =============================================================================
// Encoding and Assembly Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn row_count_law_and_id_order(records in prop_vec(arb_record(), 1..40)) {
        let parsable = records.iter().filter(|r| is_fully_parsable(r)).count();

        match build_design_matrix(&records) {
            Ok(design) => {
                prop_assert_eq!(design.n_samples(), parsable);
                prop_assert_eq!(design.features.nrows(), parsable);

                // Ids follow first occurrence across *all* rows, including
                // the ones the numeric filter dropped.
                let cities = expected_order(records.iter().map(|r| r.city.as_str()));
                let states = expected_order(records.iter().map(|r| r.state.as_str()));
                prop_assert_eq!(design.cities.names(), cities.as_slice());
                prop_assert_eq!(design.states.names(), states.as_slice());

                // Dense ids: every name resolves to its position.
                for (id, name) in design.cities.names().iter().enumerate() {
                    prop_assert_eq!(design.cities.get(name), Some(id));
                }
            }
            Err(DatasetError::NoValidRows) => prop_assert_eq!(parsable, 0),
            Err(DatasetError::Empty) => prop_assert!(records.is_empty()),
        }
    }

    #[test]
    fn building_twice_is_identical(records in prop_vec(arb_record(), 1..25)) {
        let first = build_design_matrix(&records);
        let second = build_design_matrix(&records);

        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.cities.names(), b.cities.names());
                prop_assert_eq!(a.states.names(), b.states.names());
                prop_assert_eq!(a.features, b.features);
                prop_assert_eq!(a.targets, b.targets);
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "diverging outcomes: {:?} vs {:?}", a.is_ok(), b.is_ok()),
        }
    }
}
