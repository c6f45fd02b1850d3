use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A named vertex of the navigation graph.
/// The name is stored lower-case, therefore two locations are equal if and only if their
/// names match case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location(Arc<str>);

impl Location {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref().to_lowercase()))
    }

    /// Canonical (lower-case) name of the location.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

// Lets the graph index be queried with an already normalized name.
impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Directed edge between two locations.
/// Carries one value for each edge property declared by the graph it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    source: Location,
    destination: Location,
    properties: Vec<f64>,
}

impl Path {
    pub fn new(source: Location, destination: Location, properties: Vec<f64>) -> Self {
        Self {
            source,
            destination,
            properties,
        }
    }

    pub const fn source(&self) -> &Location {
        &self.source
    }

    pub const fn destination(&self) -> &Location {
        &self.destination
    }

    /// Property values, in the order of the graph edge property names.
    pub fn properties(&self) -> &[f64] {
        &self.properties
    }

    pub fn property(&self, index: usize) -> Option<f64> {
        self.properties.get(index).copied()
    }

    /// Renders the path showing only the property at the given index.
    pub fn display_property(&self, index: usize) -> String {
        match self.property(index) {
            Some(value) => format!("{} -> {} ({value})", self.source, self.destination),
            None => format!("{} -> {}", self.source, self.destination),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} [", self.source, self.destination)?;
        for (i, value) in self.properties.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
