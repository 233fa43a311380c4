//! Reference oracles for MST property verification.
//!
//! `sequential_kruskal` is a plain index-based Kruskal over a stably sorted
//! edge list. `exhaustive_minimum` enumerates every edge subset of size
//! `|V| - 1` and is only used on graphs with a handful of edges.

use crate::graph::Graph;

use super::helpers::{endpoints, find_root};

/// Minimum spanning forest summary produced by the sequential oracle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct OracleForest {
    pub total_weight: u64,
    pub edge_count: usize,
    pub component_count: usize,
}

impl OracleForest {
    pub(super) fn is_tree(&self) -> bool {
        self.component_count <= 1
    }
}

/// Computes the minimum spanning forest of `graph`.
pub(super) fn sequential_kruskal(graph: &Graph) -> OracleForest {
    let vertex_count = graph.vertex_count();
    let mut indexed: Vec<(u32, usize, usize)> = graph
        .edges()
        .iter()
        .filter_map(|edge| {
            let (from, to) = endpoints(graph, edge)?;
            (from != to).then_some((edge.weight(), from, to))
        })
        .collect();
    indexed.sort_by_key(|(weight, _, _)| *weight);

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut forest = OracleForest {
        total_weight: 0,
        edge_count: 0,
        component_count: vertex_count,
    };
    for (weight, from, to) in indexed {
        let (left, right) = (find_root(&mut parent, from), find_root(&mut parent, to));
        if left != right {
            parent[right] = left;
            forest.total_weight += u64::from(weight);
            forest.edge_count += 1;
            forest.component_count -= 1;
        }
    }
    forest
}

/// Returns the cheapest spanning tree cost by brute force, or `None` when
/// the graph has no spanning tree.
///
/// # Panics
/// Panics when `graph` has more than 20 edges.
pub(super) fn exhaustive_minimum(graph: &Graph) -> Option<u64> {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Some(0);
    }
    let edges: Vec<(usize, usize, u64)> = graph
        .edges()
        .iter()
        .filter_map(|edge| {
            endpoints(graph, edge).map(|(from, to)| (from, to, u64::from(edge.weight())))
        })
        .collect();
    assert!(edges.len() <= 20, "exhaustive oracle only handles tiny graphs");

    let needed = u32::try_from(vertex_count - 1).ok()?;
    (0_u32..1 << edges.len())
        .filter(|mask| mask.count_ones() == needed)
        .filter_map(|mask| {
            let mut parent: Vec<usize> = (0..vertex_count).collect();
            let mut cost = 0;
            for (position, &(from, to, weight)) in edges.iter().enumerate() {
                if mask & (1 << position) == 0 {
                    continue;
                }
                let (left, right) = (find_root(&mut parent, from), find_root(&mut parent, to));
                if left == right {
                    return None;
                }
                parent[right] = left;
                cost += weight;
            }
            Some(cost)
        })
        .min()
}
