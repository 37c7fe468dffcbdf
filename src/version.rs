use std::fmt;

/// The value a component takes when the definition file does not declare it.
pub const DEFAULT_COMPONENT: &str = "0";

/// One of the three version components declared in the definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Micro,
}

impl Component {
    pub const ALL: [Component; 3] = [Component::Major, Component::Minor, Component::Micro];

    /// Lowercase suffix used in the m4 identifier (`libmodbus_version_<name>`).
    pub fn name(&self) -> &'static str {
        match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Micro => "micro",
        }
    }

    /// Looks a component up by its identifier suffix.
    pub fn from_name(name: &str) -> Option<Self> {
        Component::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Major, minor and micro version strings extracted from the definition file.
///
/// Values are kept exactly as captured. They are never parsed as integers, so
/// `"007"` is substituted as `007`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSet {
    major: String,
    minor: String,
    micro: String,
}

impl Default for VersionSet {
    fn default() -> Self {
        VersionSet {
            major: DEFAULT_COMPONENT.to_string(),
            minor: DEFAULT_COMPONENT.to_string(),
            micro: DEFAULT_COMPONENT.to_string(),
        }
    }
}

impl VersionSet {
    /// Creates a VersionSet from the three component strings.
    pub fn new(
        major: impl Into<String>,
        minor: impl Into<String>,
        micro: impl Into<String>,
    ) -> Self {
        VersionSet {
            major: major.into(),
            minor: minor.into(),
            micro: micro.into(),
        }
    }

    pub fn get(&self, component: Component) -> &str {
        match component {
            Component::Major => &self.major,
            Component::Minor => &self.minor,
            Component::Micro => &self.micro,
        }
    }

    pub(crate) fn set(&mut self, component: Component, value: impl Into<String>) {
        let slot = match component {
            Component::Major => &mut self.major,
            Component::Minor => &mut self.minor,
            Component::Micro => &mut self.micro,
        };
        *slot = value.into();
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minor(&self) -> &str {
        &self.minor
    }

    pub fn micro(&self) -> &str {
        &self.micro
    }

    /// The dotted `major.minor.micro` form.
    pub fn full(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.micro)
    }
}

impl fmt::Display for VersionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}
