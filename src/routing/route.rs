use std::ops::Deref;

use crate::Path;

/// Shortest route between two locations.
///
/// The edges are stored from the destination back to the origin, that is, the first edge enters
/// into the destination and the last edge exits from the origin. An empty route means that the
/// destination cannot be reached.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route(Vec<Path>);

impl From<Vec<Path>> for Route {
    fn from(paths: Vec<Path>) -> Self {
        Self(paths)
    }
}

impl Deref for Route {
    type Target = Vec<Path>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Route {
    /// Gets the edges in travel order, from the origin to the destination.
    pub fn legs(&self) -> impl DoubleEndedIterator<Item = &Path> {
        self.0.iter().rev()
    }

    /// Gets the sum of the property at the given index over all the edges of the route.
    pub fn weight(&self, property_index: usize) -> f64 {
        self.0.iter().filter_map(|e| e.property(property_index)).sum()
    }

    pub fn into_paths(self) -> Vec<Path> {
        self.0
    }
}
