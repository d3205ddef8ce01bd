//! Raw dataset rows as ingested.

use serde::Deserialize;

/// One raw dataset row, fields kept as the text they arrived as.
///
/// Field names bind to the CSV header by exact string match (`State`,
/// `City`, `PM2.5`, ...). A column absent from the file deserializes to the
/// empty string, which later fails the numeric parse; nothing is coerced at
/// this stage.
#[derive(Debug, Clone, Deserialize)]
pub struct PollutionRecord {
    /// State name, encoded categorically.
    #[serde(rename = "State", default)]
    pub state: String,
    /// City name, encoded categorically.
    #[serde(rename = "City", default)]
    pub city: String,
    /// Target pollutant.
    #[serde(rename = "PM2.5", default)]
    pub pm2_5: String,
    #[serde(rename = "PM10", default)]
    pub pm10: String,
    #[serde(rename = "NO2", default)]
    pub no2: String,
    #[serde(rename = "SO2", default)]
    pub so2: String,
    #[serde(rename = "CO", default)]
    pub co: String,
    #[serde(rename = "O3", default)]
    pub o3: String,
}

impl PollutionRecord {
    /// Build a record from its fields, in CSV header order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        state: impl Into<String>,
        city: impl Into<String>,
        pm2_5: impl Into<String>,
        pm10: impl Into<String>,
        no2: impl Into<String>,
        so2: impl Into<String>,
        co: impl Into<String>,
        o3: impl Into<String>,
    ) -> Self {
        Self {
            state: state.into(),
            city: city.into(),
            pm2_5: pm2_5.into(),
            pm10: pm10.into(),
            no2: no2.into(),
            so2: so2.into(),
            co: co.into(),
            o3: o3.into(),
        }
    }
}
