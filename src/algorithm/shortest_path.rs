//! 最短路径树（Dijkstra 算法，线性扫描版）
//!
//! 维护 `distance[]` 与已处理集合；每轮在“起点已处理、终点未处理”的边中
//! 选出使 `distance[origin] + weight` 最小的一条，处理其终点并把该边
//! 加入树中。没有 decrease-key 结构，每次调用 O(V·E)。
//!
//! 权值应为非负；负权不做校验，结果未定义。

use super::traversal::{Dfs, DfsEvent, Direction};
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::types::{saturating_add, Weight, INFINITY};
use tracing::debug;

/// 单源最短路径结果
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    /// 根下标
    pub root: usize,
    /// 到各顶点的距离，不可达为 [`INFINITY`]
    pub distance: Vec<Weight>,
    /// 树边，按顶点被处理的先后排列
    pub tree_edges: Vec<Edge>,
}

/// 计算以 `root` 为根的最短路径
pub fn dijkstra(graph: &Graph, root: usize) -> Result<ShortestPaths> {
    let n = graph.vertex_count();
    if root >= n {
        return Err(Error::NotFound(format!("顶点下标 {}", root)));
    }

    let mut distance = vec![INFINITY; n];
    let mut processed = vec![false; n];
    let mut tree_edges = Vec::new();
    distance[root] = 0;
    processed[root] = true;

    loop {
        let mut best: Option<(Weight, Edge)> = None;

        for v in graph.vertices().iter().filter(|v| processed[v.index()]) {
            for e in v.edges() {
                if processed[e.destination()] {
                    continue;
                }
                let candidate = saturating_add(distance[v.index()], e.weight());
                if best.map_or(true, |(d, _)| candidate < d) {
                    best = Some((candidate, *e));
                }
            }
        }

        match best {
            Some((d, e)) => {
                processed[e.destination()] = true;
                distance[e.destination()] = d;
                tree_edges.push(e);
            }
            None => break,
        }
    }

    Ok(ShortestPaths {
        root,
        distance,
        tree_edges,
    })
}

/// 以下标 `root` 为根的最短路径树
///
/// 输出为有向图，顶点与原图相同，每个可达的非根顶点有一条来自父节点的边。
pub fn shortest_path_arborescence_from(graph: &Graph, root: usize) -> Result<Graph> {
    let paths = dijkstra(graph, root)?;
    let names: Vec<String> = graph.vertices().iter().map(|v| v.name().to_string()).collect();
    let name = format!("{}-spt-{}", graph.name(), names[root]);

    debug!(
        graph = graph.name(),
        root = %names[root],
        reached = paths.tree_edges.len() + 1,
        "最短路径树计算完成"
    );

    Ok(Graph::derived(
        name,
        true,
        graph.is_weighted(),
        names,
        paths.tree_edges,
    ))
}

/// 以顶点 `root` 为根的最短路径树，顶点名不存在时返回 `NotFound`
pub fn shortest_path_arborescence(graph: &Graph, root: &str) -> Result<Graph> {
    let index = graph
        .find_vertex_index(root)
        .ok_or_else(|| Error::NotFound(format!("顶点 {}", root)))?;
    shortest_path_arborescence_from(graph, index)
}

/// 沿树从根向下累加权值，得到根到每个顶点的距离
///
/// 树中不可达的顶点距离为 [`INFINITY`]。
pub fn arborescence_distances(tree: &Graph, root: usize) -> Result<Vec<Weight>> {
    let mut distance = vec![INFINITY; tree.vertex_count()];

    for event in Dfs::new(tree, root, Direction::Forward)? {
        if let DfsEvent::Enter { vertex, parent } = event {
            distance[vertex] = match parent {
                None => 0,
                Some(p) => {
                    let weight = tree.vertices()[p]
                        .edges()
                        .iter()
                        .find(|e| e.destination() == vertex)
                        .map(|e| e.weight())
                        .unwrap_or(INFINITY);
                    saturating_add(distance[p], weight)
                }
            };
        }
    }

    Ok(distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphDescription;

    fn sample(directed: bool) -> Graph {
        // s -> a (10), s -> b (3), b -> a (4), a -> c (2), b -> c (8), d 孤立
        let desc = GraphDescription::new("sp", directed)
            .with_vertices(["s", "a", "b", "c", "d"])
            .with_weighted_edge("s", "a", 10)
            .with_weighted_edge("s", "b", 3)
            .with_weighted_edge("b", "a", 4)
            .with_weighted_edge("a", "c", 2)
            .with_weighted_edge("b", "c", 8);
        Graph::from_description(&desc).unwrap()
    }

    #[test]
    fn test_dijkstra_distances() {
        let graph = sample(true);
        let paths = dijkstra(&graph, 0).unwrap();

        assert_eq!(paths.distance, vec![0, 7, 3, 9, INFINITY]);
        assert_eq!(paths.tree_edges.len(), 3);
    }

    #[test]
    fn test_arborescence_shape() {
        let graph = sample(true);
        let tree = shortest_path_arborescence(&graph, "s").unwrap();

        assert!(tree.is_directed());
        assert_eq!(tree.vertex_count(), graph.vertex_count());
        assert_eq!(tree.edge_count(), 3);

        // 每个非根可达顶点恰有一条入边
        let mut indegree = vec![0; tree.vertex_count()];
        for e in tree.edges() {
            indegree[e.destination()] += 1;
        }
        assert_eq!(indegree, vec![0, 1, 1, 1, 0]);

        // a 的父节点是 b
        let b = tree.find_vertex("b").unwrap();
        assert!(b.has_edge_to(1));
    }

    #[test]
    fn test_arborescence_walk_matches_dijkstra() {
        let graph = sample(false);
        let paths = dijkstra(&graph, 3).unwrap();
        let tree = shortest_path_arborescence_from(&graph, 3).unwrap();

        assert_eq!(arborescence_distances(&tree, 3).unwrap(), paths.distance);
        assert_eq!(paths.distance, vec![9, 2, 6, 0, INFINITY]);
    }

    #[test]
    fn test_arborescence_unknown_root() {
        let graph = sample(true);
        assert!(matches!(
            shortest_path_arborescence(&graph, "zz"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_dijkstra_saturates() {
        let desc = GraphDescription::new("big", true)
            .with_vertices(["a", "b", "c"])
            .with_weighted_edge("a", "b", INFINITY - 1)
            .with_weighted_edge("b", "c", INFINITY - 1);
        let graph = Graph::from_description(&desc).unwrap();

        let paths = dijkstra(&graph, 0).unwrap();
        assert_eq!(paths.distance[1], INFINITY - 1);
        assert_eq!(paths.distance[2], INFINITY);
    }
}
