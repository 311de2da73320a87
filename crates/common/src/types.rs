//! Core types for FormCase

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Name of the file produced by the download action
pub const OUTPUT_FILE_NAME: &str = "testcases_output.json";

/// Content type of the downloaded artifact
pub const OUTPUT_CONTENT_TYPE: &str = "application/json";

/// Placeholder shown in the output region while a generation is in flight
pub const LOADING_PLACEHOLDER: &str = "Generating test cases... ";

/// Response of the generation endpoint.
///
/// The document is kept as received (key order included). Only the lengths
/// of `fields` and `test_cases` are inspected; their elements are opaque.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GenerationResult {
    document: Value,
}

impl GenerationResult {
    /// Validate a parsed response document
    pub fn from_value(document: Value) -> Result<Self> {
        let obj = document
            .as_object()
            .ok_or_else(|| Error::MalformedResponse("expected a JSON object".to_string()))?;

        for key in ["fields", "test_cases"] {
            match obj.get(key) {
                Some(Value::Array(_)) => {}
                Some(_) => {
                    return Err(Error::MalformedResponse(format!(
                        "`{}` is not an array",
                        key
                    )))
                }
                None => {
                    return Err(Error::MalformedResponse(format!("missing `{}` array", key)))
                }
            }
        }

        Ok(Self { document })
    }

    /// Parse a raw response body
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let document: Value = serde_json::from_slice(body)?;
        Self::from_value(document)
    }

    /// Detected form-field descriptors
    pub fn fields(&self) -> &[Value] {
        self.array("fields")
    }

    /// Generated test case descriptors
    pub fn test_cases(&self) -> &[Value] {
        self.array("test_cases")
    }

    pub fn summary(&self) -> Summary {
        Summary {
            fields: self.fields().len(),
            test_cases: self.test_cases().len(),
        }
    }

    /// Pretty-print with 2-space indentation
    pub fn render(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn into_document(self) -> Value {
        self.document
    }

    fn array(&self, key: &str) -> &[Value] {
        self.document
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Counts shown in the summary region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub fields: usize,
    pub test_cases: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fields Detected: {} | Test Cases Generated: {}",
            self.fields, self.test_cases
        )
    }
}

/// A file handed to the client-side save action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Download {
    /// The generated-output artifact for the given rendered JSON
    pub fn json_output(text: &str) -> Self {
        Self {
            file_name: OUTPUT_FILE_NAME.to_string(),
            content_type: OUTPUT_CONTENT_TYPE.to_string(),
            bytes: text.as_bytes().to_vec(),
        }
    }
}

/// User-facing notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    SampleInfo,
    NothingToCopy,
    NothingToDownload,
    Copied,
    Downloaded { location: PathBuf },
    GenerationFailed { message: String },
}

/// Severity used by hosts to style a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::SampleInfo => {
                "Server will use the sample form (examples/sample_form.html). Click Generate."
                    .to_string()
            }
            Notice::NothingToCopy => "No JSON to copy yet!".to_string(),
            Notice::NothingToDownload => "No JSON to download yet!".to_string(),
            Notice::Copied => "JSON copied to clipboard!".to_string(),
            Notice::Downloaded { location } => format!("JSON saved to {}", location.display()),
            Notice::GenerationFailed { message } => {
                format!("Test case generation failed: {}", message)
            }
        }
    }

    pub fn level(&self) -> NoticeLevel {
        match self {
            Notice::SampleInfo => NoticeLevel::Info,
            Notice::NothingToCopy | Notice::NothingToDownload => NoticeLevel::Warning,
            Notice::Copied | Notice::Downloaded { .. } => NoticeLevel::Success,
            Notice::GenerationFailed { .. } => NoticeLevel::Error,
        }
    }
}
