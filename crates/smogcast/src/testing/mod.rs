//! Synthetic data helpers for tests and benches.

use rand::prelude::*;

use crate::dataset::{PollutionRecord, N_FEATURES};

/// Generate records whose target follows an exact linear model of the
/// features the builder will assemble: `pm2_5 = intercept + Σ wᵢ·fᵢ`, no
/// noise.
///
/// Cities and states cycle through `City0..City{n_cities-1}` and
/// `State0..State{n_states-1}` in row order, so the builder assigns id `i`
/// to `City{i}` (first occurrences arrive in index order). Pollutant values
/// are uniform in `[0, 50)`.
///
/// Returns `(records, weights, intercept)` with weights aligned to the
/// feature layout `[city_id, state_id, PM10, NO2, SO2, CO, O3]`.
pub fn linear_records(
    n_rows: usize,
    n_cities: usize,
    n_states: usize,
    seed: u64,
) -> (Vec<PollutionRecord>, [f64; N_FEATURES], f64) {
    assert!(n_cities > 0 && n_states > 0);
    assert!(
        n_rows >= n_cities && n_rows >= n_states,
        "every category must occur at least once"
    );
    let mut rng = StdRng::seed_from_u64(seed);

    let weights: [f64; N_FEATURES] = std::array::from_fn(|_| rng.random::<f64>() * 2.0 - 1.0);
    let intercept = rng.random::<f64>() * 0.5 - 0.25;

    let mut records = Vec::with_capacity(n_rows);
    for row in 0..n_rows {
        let city = row % n_cities;
        let state = row % n_states;
        let pollutants: [f64; 5] = std::array::from_fn(|_| rng.random::<f64>() * 50.0);

        let features = [
            city as f64,
            state as f64,
            pollutants[0],
            pollutants[1],
            pollutants[2],
            pollutants[3],
            pollutants[4],
        ];
        let pm2_5: f64 = intercept
            + weights
                .iter()
                .zip(features.iter())
                .map(|(w, f)| w * f)
                .sum::<f64>();

        records.push(PollutionRecord::new(
            format!("State{state}"),
            format!("City{city}"),
            format!("{pm2_5}"),
            format!("{}", pollutants[0]),
            format!("{}", pollutants[1]),
            format!("{}", pollutants[2]),
            format!("{}", pollutants[3]),
            format!("{}", pollutants[4]),
        ));
    }

    (records, weights, intercept)
}
