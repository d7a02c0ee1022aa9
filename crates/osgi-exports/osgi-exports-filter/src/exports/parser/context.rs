//! Per-call parser scratch state.

use smallvec::SmallVec;

use osgi_exports_core::constants::{EXCLUDE_DIRECTIVE, INCLUDE_DIRECTIVE};
use osgi_exports_core::{FxHashSet, ParseError};

use crate::exports::definition::ExportDefinition;
use crate::exports::pattern::{glob_to_regex, ClassPattern};

/// The directive whose value is currently being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirectiveKind {
    Include,
    Exclude,
    Other,
}

pub(super) struct Context<'a> {
    input: &'a str,
    position: usize,
    output: &'a mut FxHashSet<ExportDefinition>,
    accumulator: String,
    directive: DirectiveKind,
    packages: SmallVec<[String; 2]>,
    include: SmallVec<[String; 2]>,
    exclude: SmallVec<[String; 2]>,
}

impl<'a> Context<'a> {
    pub(super) fn new(input: &'a str, output: &'a mut FxHashSet<ExportDefinition>) -> Self {
        Self {
            input,
            position: 0,
            output,
            accumulator: String::new(),
            directive: DirectiveKind::Other,
            packages: SmallVec::new(),
            include: SmallVec::new(),
            exclude: SmallVec::new(),
        }
    }

    /// Character index of the input being processed.
    pub(super) fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    pub(super) fn accumulate(&mut self, c: char) {
        self.accumulator.push(c);
    }

    pub(super) fn clear_accumulator(&mut self) {
        self.accumulator.clear();
    }

    pub(super) fn directive_name_done(&mut self) {
        self.directive = match self.accumulator.as_str() {
            INCLUDE_DIRECTIVE => DirectiveKind::Include,
            EXCLUDE_DIRECTIVE => DirectiveKind::Exclude,
            _ => DirectiveKind::Other,
        };
        self.clear_accumulator();
    }

    pub(super) fn package_done(&mut self) {
        let package = std::mem::take(&mut self.accumulator);
        self.packages.push(package);
    }

    pub(super) fn directive_value_done(&mut self) {
        match self.directive {
            DirectiveKind::Include => self.include.extend(split_and_trim(&self.accumulator)),
            DirectiveKind::Exclude => self.exclude.extend(split_and_trim(&self.accumulator)),
            DirectiveKind::Other => {}
        }
        self.clear_accumulator();
        self.directive = DirectiveKind::Other;
    }

    /// Emit the clause read so far and reset for the next one.
    ///
    /// A clause with no package and no pattern (empty input, trailing comma)
    /// emits nothing.
    pub(super) fn export_done(&mut self) -> Result<(), ParseError> {
        if !(self.packages.is_empty() && self.include.is_empty() && self.exclude.is_empty()) {
            let includes = self.compile(&self.include)?;
            let excludes = self.compile(&self.exclude)?;
            let definition =
                ExportDefinition::new(self.packages.drain(..), includes, excludes);
            tracing::trace!(%definition, "export clause parsed");
            self.output.insert(definition);
        }

        self.packages.clear();
        self.include.clear();
        self.exclude.clear();
        self.clear_accumulator();
        Ok(())
    }

    pub(super) fn unexpected_character(&self) -> ParseError {
        ParseError::UnexpectedCharacter {
            index: self.position,
            input: self.input.to_string(),
        }
    }

    pub(super) fn unexpected_end(&self) -> ParseError {
        ParseError::UnexpectedEnd {
            index: self.position,
            input: self.input.to_string(),
        }
    }

    fn compile(&self, globs: &[String]) -> Result<Vec<ClassPattern>, ParseError> {
        globs
            .iter()
            .map(|glob| {
                ClassPattern::from_glob(glob).map_err(|e| ParseError::InvalidPattern {
                    index: self.position,
                    input: self.input.to_string(),
                    pattern: glob_to_regex(glob),
                    message: e.to_string(),
                })
            })
            .collect()
    }
}

/// Split a directive value on commas and trim each piece.
///
/// Trailing empty pieces are dropped, but a value without any comma is kept
/// as a single piece even when empty.
fn split_and_trim(value: &str) -> Vec<String> {
    if !value.contains(',') {
        return vec![value.trim().to_string()];
    }

    let mut pieces: Vec<&str> = value.split(',').collect();
    while pieces.last().is_some_and(|p| p.is_empty()) {
        pieces.pop();
    }
    pieces.into_iter().map(|p| p.trim().to_string()).collect()
}
