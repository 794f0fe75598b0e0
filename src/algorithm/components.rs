//! 连通分量
//!
//! 仅适用于无向图：按下标升序挑选未归属的顶点，广度优先泛洪标记
//! 整个分量，再把它复制为独立的图。

use crate::container::List;
use crate::error::{Error, Result};
use crate::graph::Graph;
use std::collections::VecDeque;
use tracing::debug;

/// 无向图的连通分量划分（顶点下标）
///
/// 分量按发现顺序排列，分量内顶点按泛洪插入顺序排列。
pub fn component_members(graph: &Graph) -> Result<Vec<Vec<usize>>> {
    require_undirected(graph, "连通分量")?;

    let n = graph.vertex_count();
    let mut assigned = vec![false; n];
    let mut members = Vec::new();

    for start in 0..n {
        if assigned[start] {
            continue;
        }

        let mut component = Vec::new();
        let mut queue = VecDeque::new();
        assigned[start] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            component.push(current);
            for neighbor in graph.neighbors(current) {
                if !assigned[neighbor] {
                    assigned[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        members.push(component);
    }

    Ok(members)
}

/// 连通分量，每个分量是一个独立的图
pub fn connected_components(graph: &Graph) -> Result<List<Graph>> {
    let members = component_members(graph)?;
    debug!(graph = graph.name(), components = members.len(), "连通分量计算完成");

    Ok(members
        .iter()
        .enumerate()
        .map(|(k, m)| graph.subgraph(format!("{}-component-{}", graph.name(), k + 1), m))
        .collect())
}

/// 是否为连通的无向图
///
/// 有向图返回 `false`；没有顶点的图不视为连通。
pub fn is_connected(graph: &Graph) -> bool {
    match component_members(graph) {
        Ok(members) => members.len() == 1,
        Err(_) => false,
    }
}

pub(crate) fn require_undirected(graph: &Graph, operation: &str) -> Result<()> {
    if graph.is_directed() {
        return Err(Error::PreconditionViolated(format!(
            "{} 只适用于无向图，而 {} 是有向图",
            operation,
            graph.name()
        )));
    }
    Ok(())
}

pub(crate) fn require_directed(graph: &Graph, operation: &str) -> Result<()> {
    if !graph.is_directed() {
        return Err(Error::PreconditionViolated(format!(
            "{} 只适用于有向图，而 {} 是无向图",
            operation,
            graph.name()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphDescription;

    fn two_islands() -> Graph {
        // a - b - c     d - e     f
        let desc = GraphDescription::new("islands", false)
            .with_vertices(["a", "d", "b", "e", "c", "f"])
            .with_edge("a", "b")
            .with_edge("b", "c")
            .with_edge("d", "e");
        Graph::from_description(&desc).unwrap()
    }

    #[test]
    fn test_components_partition() {
        let graph = two_islands();
        let components = connected_components(&graph).unwrap();

        assert_eq!(components.len(), 3);

        let total: usize = components.iter().map(|c| c.vertex_count()).sum();
        assert_eq!(total, graph.vertex_count());

        let mut names: Vec<String> = components
            .iter()
            .flat_map(|c| c.vertices().iter().map(|v| v.name().to_string()))
            .collect();
        names.sort();
        assert_eq!(names, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_components_discovery_order() {
        let graph = two_islands();
        let components: Vec<Graph> = connected_components(&graph).unwrap().into_iter().collect();

        let first: Vec<&str> = components[0].vertices().iter().map(|v| v.name()).collect();
        assert_eq!(first, vec!["a", "b", "c"]);
        assert_eq!(components[0].edge_count(), 2);

        assert_eq!(components[1].vertex_name(0), Some("d"));
        assert_eq!(components[1].edge_count(), 1);

        assert_eq!(components[2].vertex_count(), 1);
        assert_eq!(components[2].edge_count(), 0);
    }

    #[test]
    fn test_components_directed_rejected() {
        let desc = GraphDescription::new("d", true).with_vertex("a");
        let graph = Graph::from_description(&desc).unwrap();

        let err = connected_components(&graph).unwrap_err();
        assert!(err.is_precondition());
        assert!(!is_connected(&graph));
    }

    #[test]
    fn test_is_connected() {
        assert!(!is_connected(&two_islands()));

        let desc = GraphDescription::new("pair", false)
            .with_vertices(["a", "b"])
            .with_edge("a", "b");
        assert!(is_connected(&Graph::from_description(&desc).unwrap()));

        let empty = Graph::from_description(&GraphDescription::new("empty", false)).unwrap();
        assert!(!is_connected(&empty));
    }
}
