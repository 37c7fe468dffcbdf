//! Formatting functions for user-facing output.
//!
//! Errors and warnings go to stderr, progress to stdout. Colours are dropped
//! automatically when the stream is not a terminal.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::generate::GenerationReport;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the configured targets.
///
/// # Arguments
/// * `config` - Loaded configuration
pub fn display_targets(config: &Config) {
    println!("{}", style("Configured targets:").bold());
    println!("  definition: {}", config.definition_file.display());
    for target in &config.targets {
        println!(
            "  - {} -> {} ({})",
            target.template.display(),
            target.output.display(),
            target.placeholders
        );
    }
}

/// Display the outcome of a generation run.
///
/// Prints the extracted version, then one line per output. In dry-run mode
/// the outputs are listed as pending rather than written.
///
/// # Arguments
/// * `report` - Report returned by `generate::run`
/// * `prefix` - Library name shown in front of the version
pub fn display_report(report: &GenerationReport, prefix: &str) {
    for warning in &report.warnings {
        display_boundary_warning(warning);
    }

    display_status(&format!("{} version: {}", prefix, report.versions));

    for file in &report.outputs {
        if report.dry_run {
            display_status(&format!(
                "Would create {} from {}",
                file.output.display(),
                file.template.display()
            ));
        } else {
            display_success(&format!("Created {}", file.output.display()));
        }
    }
}
