use serde::{Deserialize, Serialize};

/// One launch entry as returned by the SpaceX v4 query endpoint.
///
/// No field is guaranteed present on the wire; consumers supply their own
/// defaults. `None` fields are skipped when serializing so the JSON export
/// mirrors what the API returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct LaunchRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) date_utc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) flight_number: Option<i64>,
}

/// Interpretation of the tri-state `success` flag (absent means unknown,
/// not failed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Success,
    Failure,
    Unknown,
}

impl Outcome {
    pub(crate) fn from_flag(success: Option<bool>) -> Self {
        match success {
            Some(true) => Outcome::Success,
            Some(false) => Outcome::Failure,
            None => Outcome::Unknown,
        }
    }

    /// Uppercase status label shown in console output
    pub(crate) fn display_label(self) -> &'static str {
        match self {
            Outcome::Success => "SUCCESS",
            Outcome::Failure => "FAILURE",
            Outcome::Unknown => "UNKNOWN",
        }
    }

    /// Russian outcome label written to the CSV export (legacy column format)
    pub(crate) fn csv_label(self) -> &'static str {
        match self {
            Outcome::Success => "Успешно",
            Outcome::Failure => "Неудача",
            Outcome::Unknown => "Неизвестно",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Outcome ---

    #[test]
    fn outcome_from_true_is_success() {
        assert_eq!(Outcome::from_flag(Some(true)), Outcome::Success);
    }

    #[test]
    fn outcome_from_false_is_failure() {
        assert_eq!(Outcome::from_flag(Some(false)), Outcome::Failure);
    }

    #[test]
    fn outcome_from_absent_is_unknown() {
        assert_eq!(Outcome::from_flag(None), Outcome::Unknown);
    }

    #[test]
    fn outcome_labels_follow_tri_state() {
        assert_eq!(Outcome::Success.display_label(), "SUCCESS");
        assert_eq!(Outcome::Failure.display_label(), "FAILURE");
        assert_eq!(Outcome::Unknown.display_label(), "UNKNOWN");
        assert_eq!(Outcome::Success.csv_label(), "Успешно");
        assert_eq!(Outcome::Failure.csv_label(), "Неудача");
        assert_eq!(Outcome::Unknown.csv_label(), "Неизвестно");
    }

    // --- LaunchRecord serde ---

    #[test]
    fn deserialize_full_record() {
        let json = r#"{
            "name": "CRS-20",
            "date_utc": "2020-03-07T04:50:31.000Z",
            "success": true,
            "details": "Last launch of the original Dragon capsule.",
            "flight_number": 91
        }"#;
        let record: LaunchRecord = serde_json::from_str(json).expect("parse");
        assert_eq!(record.name.as_deref(), Some("CRS-20"));
        assert_eq!(record.date_utc.as_deref(), Some("2020-03-07T04:50:31.000Z"));
        assert_eq!(record.success, Some(true));
        assert_eq!(record.flight_number, Some(91));
    }

    #[test]
    fn deserialize_missing_fields_default_to_none() {
        let record: LaunchRecord = serde_json::from_str("{}").expect("parse");
        assert_eq!(record.name, None);
        assert_eq!(record.date_utc, None);
        assert_eq!(record.success, None);
        assert_eq!(record.details, None);
        assert_eq!(record.flight_number, None);
    }

    #[test]
    fn deserialize_null_success_is_none() {
        let record: LaunchRecord =
            serde_json::from_str(r#"{"name":"Starlink 4","success":null}"#).expect("parse");
        assert_eq!(record.success, None);
    }

    #[test]
    fn deserialize_ignores_unknown_fields() {
        let record: LaunchRecord =
            serde_json::from_str(r#"{"name":"DemoSat","id":"5eb87cdaffd86e000604b32b"}"#)
                .expect("parse");
        assert_eq!(record.name.as_deref(), Some("DemoSat"));
    }

    #[test]
    fn serialize_skips_absent_fields() {
        let record = LaunchRecord {
            name: Some("FalconSat".to_string()),
            date_utc: None,
            success: None,
            details: None,
            flight_number: Some(1),
        };
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, r#"{"name":"FalconSat","flight_number":1}"#);
    }

    #[test]
    fn serde_round_trip_preserves_fields() {
        let record = LaunchRecord {
            name: Some("CRS-19".to_string()),
            date_utc: Some("2019-12-05T17:29:00.000Z".to_string()),
            success: Some(false),
            details: Some("Booster landing anomaly".to_string()),
            flight_number: Some(88),
        };
        let json = serde_json::to_string(&record).expect("serialize");
        let back: LaunchRecord = serde_json::from_str(&json).expect("parse");
        assert_eq!(back, record);
    }
}
