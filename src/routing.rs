//! Single source, single destination shortest routes.
//!
//! The route is computed with Dijkstra's algorithm on one of the edge properties of the graph.
//! Instead of updating the priority of a vertex already in the queue, every relaxation pushes a
//! new entry and the outdated ones are discarded when popped, since their vertex is already
//! visited.

pub mod queue;
pub mod route;

use tracing::{debug, trace, warn};

use crate::routing::queue::VertexPriorityQueue;
use crate::routing::route::Route;
use crate::{GraphError, Location, NavigationGraph, QueueError};

/// Computes the shortest route from the source to the destination minimizing the sum of the
/// given edge property.
///
/// The edges of the route are returned from the destination back to the source.
/// If the destination cannot be reached from the source the route is empty.
pub fn shortest_route(
    graph: &NavigationGraph,
    src: &Location,
    dest: &Location,
    property_name: &str,
) -> Result<Route, GraphError> {
    if src == dest {
        return Err(GraphError::InvalidArgument("same location"));
    }

    let origin = graph.slot(src)?;
    let destination = graph.slot(dest)?;

    let property = graph
        .property_index(property_name)
        .ok_or_else(|| GraphError::UnknownProperty(property_name.to_owned()))?;

    debug!("Computing shortest route {src} -> {dest} on {property_name:?}");

    let vertex_count = graph.vertex_count();

    // (current) shortest distance from origin to this vertex
    let mut distances = vec![f64::INFINITY; vertex_count];
    let mut visited = vec![false; vertex_count];

    // previous vertex on the best known path from origin to this vertex
    let mut predecessors: Vec<Option<usize>> = vec![None; vertex_count];

    distances[origin] = 0.0;

    let mut frontier = VertexPriorityQueue::new();
    frontier.insert(0.0, origin);

    loop {
        let vertex = match frontier.remove_min() {
            Ok((_, vertex)) => vertex,
            Err(QueueError::EmptyQueue) => break,
        };

        if visited[vertex] {
            trace!("Skipping stale entry of vertex {vertex}");
            continue;
        }
        visited[vertex] = true;

        for edge in graph.edges_at(vertex) {
            let vertex_to = graph.slot(edge.destination())?;
            if visited[vertex_to] {
                continue;
            }

            let weight = edge.property(property).unwrap_or(f64::INFINITY);
            let distance = distances[vertex] + weight;

            // Relax: we have now found a better way that we are going to explore
            if distance < distances[vertex_to] {
                trace!("Relaxing {edge} to {distance}");
                distances[vertex_to] = distance;
                predecessors[vertex_to] = Some(vertex);
                frontier.insert(distance, vertex_to);
            }
        }
    }

    if !visited[destination] {
        debug!("{dest} cannot be reached from {src}");
        return Ok(Route::default());
    }

    // Unpacking: the shortest route from destination back to origin
    let mut edges = vec![];
    let mut next = destination;
    while next != origin {
        let Some(previous) = predecessors[next] else {
            warn!("Missing predecessor while unpacking route {src} -> {dest}");
            return Ok(Route::default());
        };

        let (from, to) = (graph.location_at(previous), graph.location_at(next));
        let Some(edge) = graph.get_edge_if_exists(from, to)? else {
            warn!("Missing edge {from} -> {to} while unpacking route {src} -> {dest}");
            return Ok(Route::default());
        };

        edges.push(edge.clone());
        next = previous;
    }

    Ok(Route::from(edges))
}
