use crate::config;
use crate::error::AnalyzeError;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{AnalyzeResponse, FILE_FIELD};
use web_sys::{AbortSignal, FormData};

/// Uploads `file` to the inference service and decodes its verdict.
///
/// One attempt, no timeout. Aborting `signal` makes the request settle with
/// [`AnalyzeError::Network`].
pub async fn analyze(
    file: &GlooFile,
    signal: Option<&AbortSignal>,
) -> Result<AnalyzeResponse, AnalyzeError> {
    let form_data =
        FormData::new().map_err(|e| AnalyzeError::Request(format!("FormData: {:?}", e)))?;
    form_data
        .append_with_blob_and_filename(FILE_FIELD, file.as_ref(), &file.name())
        .map_err(|e| AnalyzeError::Request(format!("append {}: {:?}", FILE_FIELD, e)))?;

    let request = Request::post(&config::analyze_url())
        .abort_signal(signal)
        .body(form_data)
        .map_err(|e| AnalyzeError::Request(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| AnalyzeError::Network(e.to_string()))?;

    let status = response.status();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| AnalyzeError::Network(e.to_string()))?;

    if !ok {
        return Err(AnalyzeError::from_status(status, &body));
    }

    parse_analysis(&body)
}

pub fn parse_analysis(body: &str) -> Result<AnalyzeResponse, AnalyzeError> {
    serde_json::from_str(body).map_err(|e| AnalyzeError::MalformedBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analysis() {
        let response = parse_analysis(r#"{"result": "Real", "confidence": 91}"#).unwrap();
        assert_eq!(response.result, "Real");
        assert_eq!(response.confidence.percent(), 91);
    }

    #[test]
    fn test_parse_analysis_ignores_extra_fields() {
        let response =
            parse_analysis(r#"{"result": "Fake", "confidence": 73.2, "model": "vit"}"#).unwrap();
        assert_eq!(response.confidence.percent(), 73);
    }

    #[test]
    fn test_parse_analysis_rejects_malformed_bodies() {
        for body in [
            "",
            "not json",
            r#"{"confidence": 50}"#,
            r#"{"result": "Fake"}"#,
            r#"{"result": "Fake", "confidence": 140}"#,
            r#"{"result": 1, "confidence": 50}"#,
        ] {
            match parse_analysis(body) {
                Err(AnalyzeError::MalformedBody(_)) => {}
                other => panic!("expected MalformedBody for {body:?}, got {other:?}"),
            }
        }
    }
}
