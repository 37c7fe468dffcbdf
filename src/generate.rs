//! Generation workflow
//!
//! Extracts the version once, renders every target in memory, then writes the
//! outputs. Nothing is written unless every template could be read.

use std::path::{Path, PathBuf};

use crate::boundary::BoundaryWarning;
use crate::config::{Config, Target};
use crate::error::{ConfigureError, Result};
use crate::extractor::{self, DefinitionPattern};
use crate::substituter;
use crate::version::VersionSet;

/// Options for one generation run
///
/// Mirrors the CLI flags so the workflow can be called without clap.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    /// Directory that relative paths in the config resolve against
    pub root: PathBuf,

    /// Render outputs but do not write them
    pub dry_run: bool,

    /// Fail when the definition file declares no version
    pub strict: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            root: PathBuf::from("."),
            dry_run: false,
            strict: false,
        }
    }
}

/// A file produced (or, in dry-run mode, that would be produced)
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub template: PathBuf,
    pub output: PathBuf,
    pub content: String,
}

/// Result of a successful generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub versions: VersionSet,
    pub warnings: Vec<BoundaryWarning>,
    pub outputs: Vec<GeneratedFile>,
    pub dry_run: bool,
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn render_target(
    target: &Target,
    root: &Path,
    versions: &VersionSet,
    prefix: &str,
) -> Result<GeneratedFile> {
    let template = resolve(root, &target.template);
    let content = substituter::render(&template, versions, target.placeholders, prefix)?;
    Ok(GeneratedFile {
        template,
        output: resolve(root, &target.output),
        content,
    })
}

/// Runs the whole generation: extract, render all targets, write.
///
/// # Errors
/// * `ConfigureError::Read` - definition file or a template is missing
/// * `ConfigureError::MissingVersion` - strict mode and no version declared
/// * `ConfigureError::Write` - an output could not be written; earlier
///   outputs are left in place
pub fn run(config: &Config, options: &GenerateOptions) -> Result<GenerationReport> {
    config.validate()?;

    let pattern = DefinitionPattern::new(&config.prefix)?;
    let definition = resolve(&options.root, &config.definition_file);
    let extraction = extractor::extract(&definition, &pattern)?;

    if (options.strict || config.strict) && extraction.is_empty() {
        return Err(ConfigureError::MissingVersion { path: definition });
    }

    let outputs = config
        .targets
        .iter()
        .map(|target| {
            render_target(target, &options.root, &extraction.versions, &config.prefix)
        })
        .collect::<Result<Vec<_>>>()?;

    if !options.dry_run {
        for file in &outputs {
            substituter::write_output(&file.output, &file.content)?;
        }
    }

    Ok(GenerationReport {
        versions: extraction.versions,
        warnings: extraction.warnings,
        outputs,
        dry_run: options.dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::PlaceholderSet;
    use std::fs;
    use tempfile::TempDir;

    fn project(definition: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("configure.ac"), definition).unwrap();
        fs::write(dir.path().join("in.h.in"), "v=@LIBMODBUS_VERSION@\n").unwrap();
        dir
    }

    fn single_target() -> Config {
        Config {
            targets: vec![Target::new("in.h.in", "out.h", PlaceholderSet::Full)],
            ..Config::default()
        }
    }

    fn options(dir: &TempDir) -> GenerateOptions {
        GenerateOptions {
            root: dir.path().to_path_buf(),
            ..GenerateOptions::default()
        }
    }

    #[test]
    fn test_run_writes_output() {
        let dir = project("m4_define([libmodbus_version_major], [2])\n");
        let report = run(&single_target(), &options(&dir)).unwrap();

        assert_eq!(report.versions.full(), "2.0.0");
        assert_eq!(report.outputs.len(), 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("out.h")).unwrap(),
            "v=2.0.0\n"
        );
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = project("m4_define([libmodbus_version_major], [2])\n");
        let opts = GenerateOptions {
            dry_run: true,
            ..options(&dir)
        };
        let report = run(&single_target(), &opts).unwrap();

        assert!(report.dry_run);
        assert_eq!(report.outputs[0].content, "v=2.0.0\n");
        assert!(!dir.path().join("out.h").exists());
    }

    #[test]
    fn test_strict_rejects_missing_version() {
        let dir = project("AC_INIT([libmodbus])\n");
        let opts = GenerateOptions {
            strict: true,
            ..options(&dir)
        };
        let err = run(&single_target(), &opts).unwrap_err();
        assert!(matches!(err, ConfigureError::MissingVersion { .. }));
        assert!(!dir.path().join("out.h").exists());
    }

    #[test]
    fn test_strict_from_config() {
        let dir = project("");
        let config = Config {
            strict: true,
            ..single_target()
        };
        assert!(run(&config, &options(&dir)).is_err());
    }

    #[test]
    fn test_lenient_zero_fill() {
        let dir = project("");
        let report = run(&single_target(), &options(&dir)).unwrap();
        assert_eq!(report.versions.full(), "0.0.0");
        assert_eq!(report.warnings.len(), 3);
    }

    #[test]
    fn test_failed_write_keeps_earlier_outputs() {
        let dir = project("m4_define([libmodbus_version_major], [4])\n");
        let config = Config {
            targets: vec![
                Target::new("in.h.in", "out.h", PlaceholderSet::Full),
                Target::new("in.h.in", "missing/out2.h", PlaceholderSet::Full),
            ],
            ..Config::default()
        };

        let err = run(&config, &options(&dir)).unwrap_err();

        match err {
            ConfigureError::Write { path, .. } => assert!(path.ends_with("missing/out2.h")),
            other => panic!("expected write error, got {:?}", other),
        }
        assert_eq!(
            fs::read_to_string(dir.path().join("out.h")).unwrap(),
            "v=4.0.0\n"
        );
        assert!(!dir.path().join("missing/out2.h").exists());
    }

    #[test]
    fn test_absolute_paths_kept() {
        let dir = project("m4_define([libmodbus_version_micro], [5])\n");
        let config = Config {
            definition_file: dir.path().join("configure.ac"),
            ..single_target()
        };
        let opts = GenerateOptions {
            root: PathBuf::from("/nonexistent-root"),
            dry_run: true,
            strict: false,
        };
        let err = run(&config, &opts).unwrap_err();
        // definition resolved, template relative to the bogus root
        assert!(matches!(err, ConfigureError::Read { ref path, .. } if path.ends_with("in.h.in")));
    }
}
