use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};

/// Path of the analysis route, appended to the service base URL.
pub const ANALYZE_PATH: &str = "/analyze";

/// Multipart field the service reads the image from.
pub const FILE_FIELD: &str = "file";

/// Body of a successful `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub result: String,
    pub confidence: Confidence,
}

impl AnalyzeResponse {
    pub fn verdict(&self) -> Option<Verdict> {
        Verdict::from_label(&self.result)
    }
}

/// Body the service sends alongside a 4xx/5xx status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Labels the detector is known to emit. Anything else is shown verbatim
/// and styled like a real image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(ascii_case_insensitive)]
pub enum Verdict {
    Real,
    Fake,
}

impl Verdict {
    pub fn from_label(label: &str) -> Option<Self> {
        label.trim().parse().ok()
    }
}

/// Whole-number percentage in `0..=100`.
///
/// The service reports confidence rounded to two decimals, so the wire
/// value is read as a float and rounded to the nearest integer.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[display(fmt = "{}%", _0)]
#[serde(try_from = "f64", into = "u8")]
pub struct Confidence(u8);

impl Confidence {
    pub const MAX: u8 = 100;

    pub fn new(percent: u8) -> Option<Self> {
        (percent <= Self::MAX).then_some(Self(percent))
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl From<Confidence> for u8 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq)]
#[display(fmt = "confidence {} is outside 0..=100", _0)]
pub struct ConfidenceOutOfRange(pub f64);

impl std::error::Error for ConfidenceOutOfRange {}

impl TryFrom<f64> for Confidence {
    type Error = ConfidenceOutOfRange;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || !(0.0..=f64::from(Self::MAX)).contains(&value) {
            return Err(ConfidenceOutOfRange(value));
        }
        Ok(Self(value.round() as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let response: AnalyzeResponse =
            serde_json::from_str(r#"{"result": "Fake", "confidence": 73}"#).unwrap();

        assert_eq!(response.result, "Fake");
        assert_eq!(response.confidence.percent(), 73);
        assert_eq!(response.verdict(), Some(Verdict::Fake));
    }

    #[test]
    fn test_fractional_confidence_is_rounded() {
        let response: AnalyzeResponse =
            serde_json::from_str(r#"{"result": "Real", "confidence": 87.53}"#).unwrap();
        assert_eq!(response.confidence.percent(), 88);

        let response: AnalyzeResponse =
            serde_json::from_str(r#"{"result": "Real", "confidence": 99.99}"#).unwrap();
        assert_eq!(response.confidence.percent(), 100);
    }

    #[test]
    fn test_confidence_out_of_range_is_rejected() {
        for body in [
            r#"{"result": "Real", "confidence": 100.6}"#,
            r#"{"result": "Real", "confidence": -1}"#,
            r#"{"result": "Real", "confidence": "91"}"#,
            r#"{"result": "Real"}"#,
        ] {
            assert!(serde_json::from_str::<AnalyzeResponse>(body).is_err(), "{body}");
        }
    }

    #[test]
    fn test_confidence_serializes_as_integer() {
        let response = AnalyzeResponse {
            result: "Real".into(),
            confidence: Confidence::new(91).unwrap(),
        };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"result":"Real","confidence":91}"#
        );
        assert_eq!(response.confidence.to_string(), "91%");
    }

    #[test]
    fn test_confidence_new_bounds() {
        assert_eq!(Confidence::new(0).map(Confidence::percent), Some(0));
        assert_eq!(Confidence::new(100).map(Confidence::percent), Some(100));
        assert!(Confidence::new(101).is_none());
    }

    #[test]
    fn test_verdict_from_label() {
        assert_eq!(Verdict::from_label("Fake"), Some(Verdict::Fake));
        assert_eq!(Verdict::from_label("fake"), Some(Verdict::Fake));
        assert_eq!(Verdict::from_label(" Real "), Some(Verdict::Real));
        assert_eq!(Verdict::from_label("Deepfake"), None);
        assert_eq!(Verdict::Fake.as_ref(), "Fake");
    }

    #[test]
    fn test_error_body_deserialization() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "No file uploaded"}"#).unwrap();
        assert_eq!(body.error, "No file uploaded");
    }
}
