//! Output formats for parse results
//!
//! Formats are selected by name, from the command line or the `output.format`
//! configuration key:
//!
//! - `json`: the result tree serialized with serde_json
//! - `yaml`: the same tree serialized with serde_yaml
//! - `treeviz`: an indented box-drawing tree, one node per component
//! - `edtf`: the canonical EDTF rendering of the result

pub mod treeviz;

use std::fmt;

use crate::ast::Edtf;
use crate::error::ProcessingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Json,
    Yaml,
    Treeviz,
    Edtf,
}

impl OutputFormat {
    const ALL: [OutputFormat; 4] = [
        OutputFormat::Json,
        OutputFormat::Yaml,
        OutputFormat::Treeviz,
        OutputFormat::Edtf,
    ];

    /// Look up a format by name
    pub fn from_name(name: &str) -> Result<Self, ProcessingError> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| ProcessingError::InvalidFormat(name.to_string()))
    }

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Edtf => "edtf",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Json => "Result tree as pretty-printed JSON",
            OutputFormat::Yaml => "Result tree as YAML",
            OutputFormat::Treeviz => "Indented tree of the result components",
            OutputFormat::Edtf => "Canonical EDTF rendering",
        }
    }

    pub fn available() -> &'static [OutputFormat] {
        &Self::ALL
    }

    pub fn render(self, edtf: &Edtf) -> Result<String, ProcessingError> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(edtf)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(edtf)?),
            OutputFormat::Treeviz => Ok(treeviz::to_treeviz_str(edtf)),
            OutputFormat::Edtf => Ok(edtf.to_string()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
