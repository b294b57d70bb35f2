use crate::error::{ExportError, ImportError};
use crate::selector::PairwiseResult;
use crate::step::{IntoSteps, Step};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use tracing::debug;
use uuid::Uuid;

const STEPS_FIELD: &str = "steps";
const RESULTS_FIELD: &str = "pairwiseResults";

/// The structured export envelope: steps plus the results generated from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairwiseDocument {
    #[serde(default = "fresh_id")]
    pub id: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    pub steps: Vec<Step>,
    pub pairwise_results: Vec<PairwiseResult>,
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

impl PairwiseDocument {
    /// Wraps steps and results with a new id and the current timestamp.
    pub fn new(steps: Vec<Step>, pairwise_results: Vec<PairwiseResult>) -> Self {
        Self {
            id: fresh_id(),
            created_at: Utc::now(),
            steps,
            pairwise_results,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self).map_err(|e| ExportError::Serialization(e.to_string()))
    }

    /// Saves the document as pretty-printed JSON.
    pub fn save(&self, path: &str) -> Result<(), ExportError> {
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|e| ExportError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        debug!(path, id = %self.id, "saved pairwise document");
        Ok(())
    }

    /// Parses a document after checking that both collections are present arrays.
    ///
    /// Nothing is returned unless both collections deserialize.
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        let raw: Value =
            serde_json::from_str(json).map_err(|e| ImportError::InvalidJson(e.to_string()))?;

        let object = raw.as_object().ok_or(ImportError::WrongShape {
            field: "document",
            expected: "an object",
        })?;
        for field in [STEPS_FIELD, RESULTS_FIELD] {
            match object.get(field) {
                None => return Err(ImportError::MissingField(field)),
                Some(value) if !value.is_array() => {
                    return Err(ImportError::WrongShape {
                        field,
                        expected: "an array",
                    });
                }
                Some(_) => {}
            }
        }

        serde_json::from_value(raw).map_err(|e| ImportError::InvalidJson(e.to_string()))
    }

    /// Loads a document from a file.
    pub fn from_file(path: &str) -> Result<Self, ImportError> {
        let content = fs::read_to_string(path).map_err(|e| ImportError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let document = Self::from_json(&content)?;
        debug!(
            path,
            steps = document.steps.len(),
            results = document.pairwise_results.len(),
            "loaded pairwise document"
        );
        Ok(document)
    }
}

impl IntoSteps for PairwiseDocument {
    fn into_steps(self) -> Result<Vec<Step>, ImportError> {
        Ok(self.steps)
    }
}
