//! Version extraction from the autoconf definition file.
//!
//! Recognised lines look like `m4_define([libmodbus_version_major], [3])` and
//! must start at column 0. Anything after the closing parenthesis is ignored.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::boundary::BoundaryWarning;
use crate::error::{ConfigureError, Result};
use crate::version::{Component, VersionSet};

/// Compiled `m4_define` matcher for one identifier prefix.
#[derive(Debug, Clone)]
pub struct DefinitionPattern {
    regex: Regex,
}

impl DefinitionPattern {
    /// Builds the matcher for `<prefix>_version_m*` definitions.
    pub fn new(prefix: &str) -> Result<Self> {
        let pattern = format!(
            r"^m4_define\(\[{}_version_(m[a-z]+)\], \[([0-9]+)\]\)",
            regex::escape(prefix)
        );
        let regex = Regex::new(&pattern)
            .map_err(|e| ConfigureError::config(format!("Invalid prefix '{}': {}", prefix, e)))?;
        Ok(DefinitionPattern { regex })
    }

    /// Returns the component suffix and the captured digits of a matching line.
    pub fn match_line<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let captures = self.regex.captures(line)?;
        match (captures.get(1), captures.get(2)) {
            (Some(name), Some(value)) => Some((name.as_str(), value.as_str())),
            _ => None,
        }
    }
}

/// Result of scanning a definition file.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub versions: VersionSet,
    pub warnings: Vec<BoundaryWarning>,
    /// Number of lines that set a known component
    pub matched: usize,
}

impl Extraction {
    /// True when no line in the file declared any version component.
    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }
}

/// Scans `text` line by line and collects the declared version components.
///
/// Every component starts at "0". The last declaration of a component wins.
pub fn parse_definitions(text: &str, pattern: &DefinitionPattern) -> Extraction {
    let mut versions = VersionSet::default();
    let mut warnings = Vec::new();
    let mut seen: Vec<Component> = Vec::with_capacity(3);
    let mut matched = 0;

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let Some((name, value)) = pattern.match_line(line) else {
            continue;
        };

        match Component::from_name(name) {
            Some(component) => {
                if seen.contains(&component) {
                    warnings.push(BoundaryWarning::DuplicateDefinition {
                        component,
                        line: line_number,
                    });
                } else {
                    seen.push(component);
                }
                versions.set(component, value);
                matched += 1;
            }
            None => warnings.push(BoundaryWarning::UnknownComponent {
                name: name.to_string(),
                line: line_number,
            }),
        }
    }

    for component in Component::ALL {
        if !seen.contains(&component) {
            warnings.push(BoundaryWarning::MissingComponent { component });
        }
    }

    Extraction {
        versions,
        warnings,
        matched,
    }
}

/// Reads the definition file at `path` and extracts its version components.
///
/// # Errors
/// Returns `ConfigureError::Read` if the file is missing or unreadable.
pub fn extract(path: &Path, pattern: &DefinitionPattern) -> Result<Extraction> {
    let text = fs::read_to_string(path).map_err(|e| ConfigureError::read(path, e))?;
    Ok(parse_definitions(&text, pattern))
}

/// Reads `path` with the default `libmodbus` prefix and returns only the versions.
pub fn extract_versions(path: &Path) -> Result<VersionSet> {
    let pattern = DefinitionPattern::new(crate::config::DEFAULT_PREFIX)?;
    Ok(extract(path, &pattern)?.versions)
}
