//! Question file loading and parsing

use crate::config::question::QuestionSpec;
use crate::constants::CONFIG_EXTENSIONS;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Questions in the order they are asked
#[derive(Debug, Deserialize)]
pub struct QuestionFileV1 {
    #[serde(default)]
    pub questions: IndexMap<String, QuestionSpec>,
}

impl QuestionFileV1 {
    pub fn validate(&self) -> Result<()> {
        if self.questions.is_empty() {
            return Err(Error::ConfigValidation("no questions defined".into()));
        }
        for (name, question) in &self.questions {
            question.validate(name)?;
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "schemaVersion")]
pub enum QuestionFile {
    #[serde(rename = "v1")]
    V1(QuestionFileV1),
}

impl QuestionFile {
    /// Loads a question file, choosing JSON or YAML from its extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();

        let file: QuestionFile = match extension {
            "json" => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            "yaml" | "yml" => serde_yaml::from_str(&std::fs::read_to_string(path)?)?,
            _ => {
                return Err(Error::UnsupportedConfigFormat {
                    path: path.display().to_string(),
                    expected: CONFIG_EXTENSIONS.join(", "),
                })
            }
        };
        debug!("Loaded question file {}", path.display());

        Ok(file)
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            QuestionFile::V1(file) => file.validate(),
        }
    }

    pub fn into_questions(self) -> IndexMap<String, QuestionSpec> {
        match self {
            QuestionFile::V1(file) => file.questions,
        }
    }
}
