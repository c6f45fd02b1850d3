#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod reader;
mod routing;

pub use error::{EdgeDefect, GraphError, MapFileError, QueueError};
pub use graph::NavigationGraph;
pub use model::{Location, Path};
pub use reader::{ReaderConfig, read_navigation_graph, read_navigation_graph_file};
pub use routing::queue::VertexPriorityQueue;
pub use routing::route::Route;
pub use routing::shortest_route;
