use serde::{Deserialize, Serialize};

use crate::version::{Component, VersionSet};

/// A sentinel token that templates use to mark where a version goes.
///
/// With the `libmodbus` prefix the tokens are `@LIBMODBUS_VERSION@`,
/// `@LIBMODBUS_VERSION_MAJOR@`, `@LIBMODBUS_VERSION_MINOR@` and
/// `@LIBMODBUS_VERSION_MICRO@`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Full dotted version
    Version,
    Component(Component),
}

impl Placeholder {
    /// The literal token for `prefix`, e.g. `@LIBMODBUS_VERSION_MINOR@`.
    pub fn token(&self, prefix: &str) -> String {
        let prefix = prefix.to_uppercase();
        match self {
            Placeholder::Version => format!("@{}_VERSION@", prefix),
            Placeholder::Component(component) => format!(
                "@{}_VERSION_{}@",
                prefix,
                component.name().to_uppercase()
            ),
        }
    }

    /// The replacement text for this token.
    pub fn value(&self, versions: &VersionSet) -> String {
        match self {
            Placeholder::Version => versions.full(),
            Placeholder::Component(component) => versions.get(*component).to_string(),
        }
    }
}

/// Which placeholders a template is stamped with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderSet {
    /// Only the full version token
    #[default]
    Full,
    /// Full version, then major, minor and micro
    All,
}

const FULL: [Placeholder; 1] = [Placeholder::Version];

const ALL: [Placeholder; 4] = [
    Placeholder::Version,
    Placeholder::Component(Component::Major),
    Placeholder::Component(Component::Minor),
    Placeholder::Component(Component::Micro),
];

impl PlaceholderSet {
    /// Placeholders in the order they are replaced.
    pub fn placeholders(&self) -> &'static [Placeholder] {
        match self {
            PlaceholderSet::Full => &FULL,
            PlaceholderSet::All => &ALL,
        }
    }
}

impl std::fmt::Display for PlaceholderSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceholderSet::Full => f.write_str("full"),
            PlaceholderSet::All => f.write_str("all"),
        }
    }
}
