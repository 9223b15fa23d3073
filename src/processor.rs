//! Processing API for EDTF input
//!
//! A [`Processor`] couples a configured parser with an output format. It
//! works on single expressions, on multi-line sources (one expression per
//! non-blank line) and on files. Every processed line yields an
//! [`Outcome`] carrying the rendered output or the error, plus the trace
//! events recorded while parsing it.

use std::fs;
use std::path::Path;

use crate::ast::Edtf;
use crate::config::EdtfConfig;
use crate::error::ProcessingError;
use crate::formats::OutputFormat;
use crate::parser::{EdtfParser, ParseOptions};
use crate::trace::TraceEvent;

/// Result of processing one line of input
#[derive(Debug)]
pub struct Outcome {
    /// 1-based line number within the processed source
    pub line: usize,
    pub input: String,
    pub result: Result<String, ProcessingError>,
    pub trace: Vec<TraceEvent>,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn into_result(self) -> Result<String, ProcessingError> {
        self.result
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Processor {
    parser: EdtfParser,
    format: OutputFormat,
}

impl Processor {
    pub fn new(options: ParseOptions, format: OutputFormat) -> Self {
        Self {
            parser: EdtfParser::new(options),
            format,
        }
    }

    pub fn from_config(config: &EdtfConfig) -> Result<Self, ProcessingError> {
        let format = OutputFormat::from_name(&config.output.format)?;
        Ok(Self::new(config.parser.options(), format))
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn options(&self) -> ParseOptions {
        self.parser.options()
    }

    /// Parse and render a single expression
    pub fn process_expression(&self, input: &str) -> Outcome {
        self.process_line(1, input)
    }

    fn process_line(&self, line: usize, input: &str) -> Outcome {
        self.run_line(line, input, |edtf| self.format.render(edtf))
    }

    /// Parse without rendering; an accepted line yields its canonical EDTF
    /// text. The configured output format is not consulted.
    fn check_line(&self, line: usize, input: &str) -> Outcome {
        self.run_line(line, input, |edtf| Ok(edtf.to_string()))
    }

    fn run_line<F>(&self, line: usize, input: &str, finish: F) -> Outcome
    where
        F: FnOnce(&Edtf) -> Result<String, ProcessingError>,
    {
        let traced = self.parser.parse_traced(input);
        let result = match traced.result {
            Ok(edtf) => finish(&edtf),
            Err(source) => Err(ProcessingError::Syntax {
                line,
                input: input.to_string(),
                source,
            }),
        };
        Outcome {
            line,
            input: input.to_string(),
            result,
            trace: traced.events,
        }
    }

    /// Process every non-blank line of `source`. Surrounding whitespace is
    /// not part of an expression and is trimmed.
    pub fn process_source(&self, source: &str) -> Vec<Outcome> {
        each_line(source, |line, input| self.process_line(line, input))
    }

    pub fn process_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Outcome>, ProcessingError> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(self.process_source(&content))
    }

    /// Like [`Processor::process_source`], but only parses each line
    pub fn check_source(&self, source: &str) -> Vec<Outcome> {
        each_line(source, |line, input| self.check_line(line, input))
    }

    pub fn check_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Outcome>, ProcessingError> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(self.check_source(&content))
    }
}

fn each_line<F>(source: &str, mut handle: F) -> Vec<Outcome>
where
    F: FnMut(usize, &str) -> Outcome,
{
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| handle(index + 1, line.trim()))
        .collect()
}
