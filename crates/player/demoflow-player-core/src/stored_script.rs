use serde::Deserialize;

use crate::error::ScriptError;
use crate::script::{DemoScript, StepDefinition};

/// Public API: parse stored demo-script JSON (the format the web screens
/// author their walkthroughs in) into the canonical DemoScript (script.rs).
///
/// Notes:
/// - Durations are provided in milliseconds and kept as milliseconds.
/// - `payload` is optional in the JSON and preserved verbatim; a missing
///   payload becomes JSON null.
/// - Validation (non-empty sequence, positive durations) runs before the
///   script is returned; a missing or zero duration is never defaulted.
pub fn parse_stored_script_json(s: &str) -> Result<DemoScript, ScriptError> {
    let stored: StoredScript = serde_json::from_str(s)?;

    let mut steps: Vec<StepDefinition> = Vec::with_capacity(stored.steps.len());
    for (idx, st) in stored.steps.into_iter().enumerate() {
        steps.push(StepDefinition {
            id: st.id.unwrap_or_else(|| format!("step-{idx}")),
            title: st.title,
            description: st.description.unwrap_or_default(),
            duration_ms: st.duration,
            payload: st.payload,
        });
    }

    let script = DemoScript {
        name: stored.name,
        steps,
    };
    script.validate_basic()?;
    Ok(script)
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct StoredScript {
    #[allow(dead_code)]
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub steps: Vec<StoredStep>,
}

#[derive(Debug, Deserialize)]
struct StoredStep {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Milliseconds.
    pub duration: u32,
    #[serde(default)]
    pub payload: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_script() {
        let json = r#"{
            "id": "demo-1",
            "name": "Business Fraud Check",
            "steps": [
                { "title": "Transaction Initiated", "duration": 3000 },
                { "id": "risk", "title": "Risk Score Calculated", "description": "Signals combined", "duration": 4000,
                  "payload": { "score": 87, "verdict": "review" } }
            ]
        }"#;
        let script = parse_stored_script_json(json).unwrap();
        assert_eq!(script.name, "Business Fraud Check");
        assert_eq!(script.len(), 2);
        assert_eq!(script.steps[0].id, "step-0");
        assert_eq!(script.steps[1].id, "risk");
        assert_eq!(script.steps[1].payload["score"], 87);
    }

    #[test]
    fn zero_duration_is_rejected_not_defaulted() {
        let json = r#"{ "name": "bad", "steps": [ { "title": "t", "duration": 0 } ] }"#;
        let err = parse_stored_script_json(json).unwrap_err();
        assert!(matches!(err, ScriptError::ZeroDuration { index: 0, .. }));
    }

    #[test]
    fn malformed_json_surfaces_parse_error() {
        let err = parse_stored_script_json("{ not json").unwrap_err();
        assert!(matches!(err, ScriptError::Parse { .. }));
    }
}
