//! SenML (RFC 8428) records published through the HTTP adapter.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A single SenML record.
///
/// Base fields (`bn`, `bt`, `bu`, `bv`) apply to the record they appear in
/// and every record after it in the same pack.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SenMLRecord {
    /// Base name
    pub bn: Option<String>,
    /// Base time
    pub bt: Option<f64>,
    /// Base unit
    pub bu: Option<String>,
    /// Base value
    pub bv: Option<f64>,
    /// Name
    pub n: Option<String>,
    /// Unit
    pub u: Option<String>,
    /// Numeric value
    pub v: Option<f64>,
    /// String value
    pub vs: Option<String>,
    /// Boolean value
    pub vb: Option<bool>,
    /// Data value (base64)
    pub vd: Option<String>,
    /// Sum
    pub s: Option<f64>,
    /// Time
    pub t: Option<f64>,
    /// Update time
    pub ut: Option<f64>,
}

impl SenMLRecord {
    /// A named numeric measurement.
    #[must_use]
    pub fn value(name: impl Into<String>, value: f64) -> Self {
        Self {
            n: Some(name.into()),
            v: Some(value),
            ..Default::default()
        }
    }

    /// Set the unit.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.u = Some(unit.into());
        self
    }

    /// Set the time.
    #[must_use]
    pub fn at(mut self, time: f64) -> Self {
        self.t = Some(time);
        self
    }

    /// Pack records into the JSON array body the adapter expects.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn pack(records: &[SenMLRecord]) -> Result<String, serde_json::Error> {
        serde_json::to_string(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_omits_unset_fields() {
        let records = vec![
            SenMLRecord {
                bn: Some("dev1:".to_string()),
                ..SenMLRecord::value("temp", 21.5).with_unit("Cel")
            },
            SenMLRecord::value("humidity", 40.0).at(1_700_000_000.0),
        ];
        let body = SenMLRecord::pack(&records).unwrap();
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"bn": "dev1:", "n": "temp", "u": "Cel", "v": 21.5},
                {"n": "humidity", "v": 40.0, "t": 1_700_000_000.0}
            ])
        );
    }

    #[test]
    fn empty_pack_is_empty_array() {
        assert_eq!(SenMLRecord::pack(&[]).unwrap(), "[]");
    }
}
