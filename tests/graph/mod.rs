use std::sync::LazyLock;

use navroute::{NavigationGraph, ReaderConfig, read_navigation_graph};

/// Campus map, every location reaches every other one except for the stadium that has no
/// entering edges.
pub static CAMPUS_GRAPH: LazyLock<NavigationGraph> = LazyLock::new(|| {
    let map = include_str!("../data/campus.txt");
    read_navigation_graph(&ReaderConfig::default(), map.as_bytes()).unwrap()
});
