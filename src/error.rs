use std::io::ErrorKind;

use thiserror::Error;

use crate::Location;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum GraphError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("Location {0} is not in the graph")]
    UnknownVertex(Location),
    #[error("Edge property {0:?} is not in the graph schema")]
    UnknownProperty(String),
    #[error("Location {0} is already in the graph")]
    DuplicateVertex(Location),
    #[error("Invalid edge: {0}")]
    InvalidEdge(EdgeDefect),
}

/// Reason why an edge was rejected by the graph.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum EdgeDefect {
    #[error("endpoint {0} is not in the graph")]
    MissingEndpoint(Location),
    #[error("edge loops onto {0}")]
    SelfLoop(Location),
    #[error("expected {expected} properties, found {found}")]
    PropertyCount { expected: usize, found: usize },
    #[error("edge endpoints differ from the given locations")]
    EndpointMismatch,
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum QueueError {
    #[error("Priority queue is empty")]
    EmptyQueue,
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum MapFileError {
    #[error("Map file I/O error: {0:?}")]
    IO(ErrorKind),
    #[error("Map file has no header line")]
    MissingHeader,
    #[error("Map file header needs at least 3 columns, found {0}")]
    InvalidHeader(usize),
    #[error("Map file line {line}: expected {expected} columns, found {found}")]
    PropertyCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("Map file line {line}: property {value:?} is not a finite number")]
    InvalidProperty { line: usize, value: String },
    #[error("Map file line {line}: {error}")]
    Graph { line: usize, error: GraphError },
}

impl From<std::io::Error> for MapFileError {
    fn from(error: std::io::Error) -> Self {
        Self::IO(error.kind())
    }
}

impl From<EdgeDefect> for GraphError {
    fn from(defect: EdgeDefect) -> Self {
        Self::InvalidEdge(defect)
    }
}
