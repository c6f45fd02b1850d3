use std::fmt;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{EdgeDefect, GraphError, Location, Path};

/// Directed graph of named locations.
///
/// Every edge carries one numeric value for each of the edge property names declared when the
/// graph is created. Vertices and, for each vertex, its exiting edges are kept in insertion order:
/// the shortest route search relaxes edges in this order.
#[derive(Debug, Clone, Default)]
pub struct NavigationGraph {
    edge_property_names: Vec<String>,
    vertices: Vec<Vertex>,
    /// Canonical location name to vertex slot.
    index: FxHashMap<Location, usize>,
}

#[derive(Debug, Clone)]
struct Vertex {
    location: Location,
    exiting_edges: Vec<Path>,
}

impl NavigationGraph {
    /// Creates an empty graph whose edges will carry the given properties.
    pub fn new<I, S>(edge_property_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            edge_property_names: edge_property_names.into_iter().map(Into::into).collect(),
            vertices: vec![],
            index: FxHashMap::default(),
        }
    }

    /// Gets the edge property names, every edge of the graph has one value for each of them.
    pub fn get_edge_property_names(&self) -> &[String] {
        &self.edge_property_names
    }

    /// Gets the position of the property name in the graph schema.
    pub fn property_index(&self, name: &str) -> Option<usize> {
        self.edge_property_names.iter().position(|p| p == name)
    }

    /// Adds a new vertex without exiting edges.
    pub fn add_vertex(&mut self, location: Location) -> Result<(), GraphError> {
        if self.index.contains_key(&location) {
            return Err(GraphError::DuplicateVertex(location));
        }

        trace!("Adding vertex {location}");
        self.index.insert(location.clone(), self.vertices.len());
        self.vertices.push(Vertex {
            location,
            exiting_edges: vec![],
        });

        Ok(())
    }

    /// Appends the edge to the exiting edges of the source vertex.
    /// Multiple edges between the same pair of vertices are all retained.
    pub fn add_edge(
        &mut self,
        src: &Location,
        dest: &Location,
        edge: Path,
    ) -> Result<(), GraphError> {
        let Some(&slot) = self.index.get(src) else {
            return Err(EdgeDefect::MissingEndpoint(src.clone()).into());
        };

        if !self.contains(dest) {
            return Err(EdgeDefect::MissingEndpoint(dest.clone()).into());
        }

        if src == dest {
            return Err(EdgeDefect::SelfLoop(src.clone()).into());
        }

        if edge.properties().len() != self.edge_property_names.len() {
            return Err(EdgeDefect::PropertyCount {
                expected: self.edge_property_names.len(),
                found: edge.properties().len(),
            }
            .into());
        }

        if edge.source() != src || edge.destination() != dest {
            return Err(EdgeDefect::EndpointMismatch.into());
        }

        trace!("Adding edge {edge}");
        self.vertices[slot].exiting_edges.push(edge);

        Ok(())
    }

    /// Gets the location with the given name, ignoring the letter case.
    pub fn get_location_by_name(&self, name: &str) -> Option<&Location> {
        let name = name.to_lowercase();
        self.index
            .get(name.as_str())
            .map(|&slot| &self.vertices[slot].location)
    }

    /// Gets all the vertices in insertion order.
    pub fn get_vertices(&self) -> impl ExactSizeIterator<Item = &Location> {
        self.vertices.iter().map(|v| &v.location)
    }

    /// Gets the exiting edges of the vertex in insertion order.
    pub fn get_out_edges(&self, location: &Location) -> Result<&[Path], GraphError> {
        let slot = self.slot(location)?;
        Ok(self.edges_at(slot))
    }

    /// Gets the end vertex of each exiting edge of the vertex, in the order of the edges.
    /// A neighbor is repeated when more than one edge leads to it.
    pub fn get_neighbors(&self, location: &Location) -> Result<Vec<&Location>, GraphError> {
        let neighbors = self
            .get_out_edges(location)?
            .iter()
            .map(Path::destination)
            .collect();

        Ok(neighbors)
    }

    /// Gets the first exiting edge of the source that enters into the destination.
    pub fn get_edge_if_exists(
        &self,
        src: &Location,
        dest: &Location,
    ) -> Result<Option<&Path>, GraphError> {
        if src == dest {
            return Err(GraphError::InvalidArgument("same location"));
        }

        let edge = self
            .get_out_edges(src)?
            .iter()
            .find(|e| e.destination() == dest);

        Ok(edge)
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.index.contains_key(location)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.exiting_edges.len()).sum()
    }

    pub(crate) fn slot(&self, location: &Location) -> Result<usize, GraphError> {
        self.index
            .get(location)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(location.clone()))
    }

    pub(crate) fn location_at(&self, slot: usize) -> &Location {
        &self.vertices[slot].location
    }

    pub(crate) fn edges_at(&self, slot: usize) -> &[Path] {
        &self.vertices[slot].exiting_edges
    }
}

/// Lists all the edges of the graph, three per line.
impl fmt::Display for NavigationGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const EDGES_PER_LINE: usize = 3;

        let edges = self.vertices.iter().flat_map(|v| &v.exiting_edges);

        for (i, edge) in edges.enumerate() {
            if i > 0 {
                let separator = if i % EDGES_PER_LINE == 0 { ",\n" } else { ", " };
                f.write_str(separator)?;
            }
            write!(f, "{edge}")?;
        }

        Ok(())
    }
}
