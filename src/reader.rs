//! Builds a [`NavigationGraph`] from a textual map description.
//!
//! The first line is the header: two columns for the source and destination location followed
//! by the names of the edge properties. Each following line describes one directed edge.
//!
//! ```text
//! source destination time cost
//! Home Office 12.5 3
//! Office Gym 4 1.25
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};

use tracing::debug;

use crate::{Location, MapFileError, NavigationGraph, Path};

/// Number of leading columns naming the edge endpoints.
const ENDPOINT_COLUMNS: usize = 2;

#[derive(Debug, Clone, Copy)]
pub struct ReaderConfig {
    /// Character separating the columns, any whitespace if not set.
    pub separator: Option<char>,
    /// Ignore lines that contain only whitespace instead of rejecting them.
    pub skip_blank_lines: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            separator: None,
            skip_blank_lines: true,
        }
    }
}

impl ReaderConfig {
    fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self.separator {
            Some(separator) => line.trim().split(separator).map(str::trim).collect(),
            None => line.split_whitespace().collect(),
        }
    }
}

/// Reads the map file at the given path.
pub fn read_navigation_graph_file(
    config: &ReaderConfig,
    path: impl AsRef<std::path::Path>,
) -> Result<NavigationGraph, MapFileError> {
    let file = File::open(path)?;
    read_navigation_graph(config, BufReader::new(file))
}

/// Reads a map description, vertices are added in the order they first appear.
pub fn read_navigation_graph(
    config: &ReaderConfig,
    reader: impl BufRead,
) -> Result<NavigationGraph, MapFileError> {
    let mut lines = reader.lines().enumerate();

    let header = match lines.next() {
        Some((_, line)) => line?,
        None => return Err(MapFileError::MissingHeader),
    };

    let columns = config.split(&header);
    if columns.len() <= ENDPOINT_COLUMNS {
        return Err(MapFileError::InvalidHeader(columns.len()));
    }

    let mut graph = NavigationGraph::new(columns[ENDPOINT_COLUMNS..].iter().copied());
    let expected = columns.len();

    for (index, line) in lines {
        let line = line?;
        let line_number = index + 1;

        if config.skip_blank_lines && line.trim().is_empty() {
            continue;
        }

        let columns = config.split(&line);
        if columns.len() != expected {
            return Err(MapFileError::PropertyCount {
                line: line_number,
                expected,
                found: columns.len(),
            });
        }

        let properties = columns[ENDPOINT_COLUMNS..]
            .iter()
            .map(|value| parse_property(line_number, value))
            .collect::<Result<Vec<_>, _>>()?;

        let [src, dest] = [columns[0], columns[1]].map(Location::new);
        for location in [&src, &dest] {
            if !graph.contains(location) {
                graph
                    .add_vertex(location.clone())
                    .map_err(|error| MapFileError::Graph {
                        line: line_number,
                        error,
                    })?;
            }
        }

        let edge = Path::new(src.clone(), dest.clone(), properties);
        graph
            .add_edge(&src, &dest, edge)
            .map_err(|error| MapFileError::Graph {
                line: line_number,
                error,
            })?;
    }

    debug!(
        "Loaded map with {} locations and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(graph)
}

fn parse_property(line: usize, value: &str) -> Result<f64, MapFileError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MapFileError::InvalidProperty {
            line,
            value: value.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::{EdgeDefect, GraphError};

    fn read(data: &str) -> Result<NavigationGraph, MapFileError> {
        read_navigation_graph(&ReaderConfig::default(), data.as_bytes())
    }

    #[test]
    fn read_navigation_graph_001() {
        let graph = read("source destination time cost\nHome Office 12.5 3\noffice GYM 4 1.25\n")
            .unwrap();

        assert_eq!(graph.get_edge_property_names(), ["time", "cost"]);

        let names: Vec<_> = graph.get_vertices().map(Location::name).collect();
        assert_eq!(names, ["home", "office", "gym"]);

        assert_eq!(
            graph.get_out_edges(&"office".into()).unwrap(),
            &[Path::new("office".into(), "gym".into(), vec![4.0, 1.25])]
        );
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn read_navigation_graph_002() {
        assert_eq!(read("").unwrap_err(), MapFileError::MissingHeader);
        assert_eq!(
            read("source destination\n").unwrap_err(),
            MapFileError::InvalidHeader(2)
        );
        assert_eq!(
            read("source destination cost\na b 1 2\n").unwrap_err(),
            MapFileError::PropertyCount {
                line: 2,
                expected: 3,
                found: 4
            }
        );
        assert_eq!(
            read("source destination cost\na b 1\nb c fast\n").unwrap_err(),
            MapFileError::InvalidProperty {
                line: 3,
                value: "fast".to_owned()
            }
        );
        assert_eq!(
            read("source destination cost\na b NaN\n").unwrap_err(),
            MapFileError::InvalidProperty {
                line: 2,
                value: "NaN".to_owned()
            }
        );
        assert_eq!(
            read("source destination cost\nA a 1\n").unwrap_err(),
            MapFileError::Graph {
                line: 2,
                error: GraphError::InvalidEdge(EdgeDefect::SelfLoop("a".into()))
            }
        );
    }

    #[test]
    fn read_navigation_graph_003() {
        let data = "source destination cost\n\na b 1\n   \nb a 2\n";

        let graph = read(data).unwrap();
        assert_eq!(graph.edge_count(), 2);

        let config = ReaderConfig {
            skip_blank_lines: false,
            ..Default::default()
        };
        assert_eq!(
            read_navigation_graph(&config, data.as_bytes()).map(|g| g.edge_count()),
            Err(MapFileError::PropertyCount {
                line: 2,
                expected: 3,
                found: 0
            })
        );
    }

    #[test]
    fn read_navigation_graph_004() {
        let config = ReaderConfig {
            separator: Some(','),
            ..Default::default()
        };

        let graph =
            read_navigation_graph(&config, "src, dest, time\nNew York, Boston, 4".as_bytes())
                .unwrap();

        assert_eq!(graph.get_edge_property_names(), ["time"]);
        assert_eq!(
            graph.get_edge_if_exists(&"new york".into(), &"boston".into()).unwrap(),
            Some(&Path::new("New York".into(), "Boston".into(), vec![4.0]))
        );
    }

    #[test]
    fn read_navigation_graph_file_001() {
        assert_eq!(
            read_navigation_graph_file(&ReaderConfig::default(), "does/not/exist.txt")
                .map(|g| g.vertex_count()),
            Err(MapFileError::IO(std::io::ErrorKind::NotFound))
        );
    }
}
