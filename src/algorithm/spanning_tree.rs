//! 最小生成树（Prim 算法）
//!
//! 从下标 0 出发，每轮线性扫描所有“一端已入树、一端未入树”的边，
//! 选出权值最小者加入生成树。不使用优先队列。

use super::components::require_undirected;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use tracing::debug;

/// 最小生成树
///
/// 只适用于无向图；图不连通时返回 `Disconnected` 而不是部分生成树。
/// 权值相同时，先扫描到的边（顶点下标、邻接表顺序）优先。
pub fn minimum_spanning_tree(graph: &Graph) -> Result<Graph> {
    require_undirected(graph, "最小生成树")?;

    let n = graph.vertex_count();
    let names: Vec<String> = graph.vertices().iter().map(|v| v.name().to_string()).collect();
    let tree_name = format!("{}-mst", graph.name());

    if n == 0 {
        return Ok(Graph::derived(tree_name, false, graph.is_weighted(), names, Vec::new()));
    }

    let mut in_tree = vec![false; n];
    in_tree[0] = true;
    let mut tree_edges: Vec<Edge> = Vec::with_capacity(n - 1);

    while let Some(edge) = lightest_frontier_edge(graph, &in_tree) {
        in_tree[edge.destination()] = true;
        tree_edges.push(edge);
    }

    if tree_edges.len() + 1 < n {
        return Err(Error::Disconnected(format!(
            "{} 只有 {} / {} 个顶点可从 {} 到达，不存在生成树",
            graph.name(),
            tree_edges.len() + 1,
            n,
            names[0]
        )));
    }

    let tree = Graph::derived(tree_name, false, graph.is_weighted(), names, tree_edges);
    debug!(
        graph = graph.name(),
        total_weight = tree.total_weight(),
        "最小生成树计算完成"
    );
    Ok(tree)
}

/// 前沿上权值最小的边，起点在树内、终点在树外
fn lightest_frontier_edge(graph: &Graph, in_tree: &[bool]) -> Option<Edge> {
    let mut best: Option<Edge> = None;

    for v in graph.vertices().iter().filter(|v| in_tree[v.index()]) {
        for e in v.edges() {
            if in_tree[e.destination()] {
                continue;
            }
            if best.map_or(true, |b| e.weight() < b.weight()) {
                best = Some(*e);
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphDescription;

    fn weighted(vertices: &[&str], edges: &[(&str, &str, i64)]) -> Graph {
        let mut desc = GraphDescription::new("w", false).with_vertices(vertices.iter().copied());
        for (o, d, w) in edges {
            desc = desc.with_weighted_edge(*o, *d, *w);
        }
        Graph::from_description(&desc).unwrap()
    }

    #[test]
    fn test_mst_basic() {
        //   a --1-- b
        //   |     / |
        //   4   2   5
        //   | /     |
        //   c --3-- d
        let graph = weighted(
            &["a", "b", "c", "d"],
            &[
                ("a", "b", 1),
                ("a", "c", 4),
                ("b", "c", 2),
                ("b", "d", 5),
                ("c", "d", 3),
            ],
        );

        let tree = minimum_spanning_tree(&graph).unwrap();
        assert!(!tree.is_directed());
        assert!(tree.is_weighted());
        assert_eq!(tree.vertex_count(), 4);
        assert_eq!(tree.edge_count(), 3);
        assert_eq!(tree.total_weight(), 6);

        // 树边在两端邻接表中都出现
        let degree_sum: usize = tree.vertices().iter().map(|v| v.degree()).sum();
        assert_eq!(degree_sum, 6);
    }

    #[test]
    fn test_mst_disconnected() {
        let graph = weighted(&["a", "b", "c"], &[("a", "b", 1)]);
        assert!(matches!(
            minimum_spanning_tree(&graph),
            Err(Error::Disconnected(_))
        ));
    }

    #[test]
    fn test_mst_directed_rejected() {
        let desc = GraphDescription::new("d", true).with_vertex("a");
        let graph = Graph::from_description(&desc).unwrap();
        assert!(minimum_spanning_tree(&graph).unwrap_err().is_precondition());
    }

    #[test]
    fn test_mst_trivial_graphs() {
        let empty = Graph::from_description(&GraphDescription::new("e", false)).unwrap();
        assert_eq!(minimum_spanning_tree(&empty).unwrap().vertex_count(), 0);

        let single = weighted(&["a"], &[]);
        let tree = minimum_spanning_tree(&single).unwrap();
        assert_eq!(tree.vertex_count(), 1);
        assert_eq!(tree.edge_count(), 0);
    }
}
