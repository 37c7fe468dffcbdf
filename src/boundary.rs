use std::fmt;

use crate::version::Component;

/// Warnings raised while reading the definition file.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Component not declared, defaulted to "0"
    MissingComponent { component: Component },
    /// Component declared more than once; the later line wins
    DuplicateDefinition { component: Component, line: usize },
    /// Line matches the definition syntax but names no known component
    UnknownComponent { name: String, line: usize },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::MissingComponent { component } => {
                write!(f, "No {} version declared, using 0", component)
            }
            BoundaryWarning::DuplicateDefinition { component, line } => {
                write!(
                    f,
                    "{} version redefined on line {}, later value wins",
                    component, line
                )
            }
            BoundaryWarning::UnknownComponent { name, line } => {
                write!(f, "Ignoring unknown version component '{}' on line {}", name, line)
            }
        }
    }
}
