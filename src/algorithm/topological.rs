//! 拓扑排序
//!
//! 对有向图做完整的 DFS 扫描（根按下标顺序），按后序的逆序输出顶点。
//! 遍历中遇到指向“已进入未完成”顶点的边即说明存在有向环。

use super::components::require_directed;
use super::traversal::{Dfs, DfsEvent, Direction};
use crate::container::List;
use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unvisited,
    Active,
    Finished,
}

/// 拓扑序（顶点下标）
///
/// 存在有向环时返回 `CycleDetected`，错误信息中给出环上的一个顶点。
pub fn topological_order(graph: &Graph) -> Result<Vec<usize>> {
    require_directed(graph, "拓扑排序")?;

    let mut state = vec![State::Unvisited; graph.vertex_count()];
    let mut finished = Vec::with_capacity(graph.vertex_count());

    for event in Dfs::sweep(graph, Direction::Forward) {
        match event {
            DfsEvent::Enter { vertex, .. } => state[vertex] = State::Active,
            DfsEvent::NonTreeEdge { to, .. } => {
                if state[to] == State::Active {
                    let name = graph.vertex_name(to).unwrap_or_default().to_string();
                    debug!(graph = graph.name(), vertex = %name, "拓扑排序遇到有向环");
                    return Err(Error::CycleDetected(name));
                }
            }
            DfsEvent::Exit { vertex, .. } => {
                state[vertex] = State::Finished;
                finished.push(vertex);
            }
        }
    }

    finished.reverse();
    Ok(finished)
}

/// 拓扑排序，列表借用图中的顶点
pub fn topological_sort(graph: &Graph) -> Result<List<&Vertex>> {
    let order = topological_order(graph)?;
    Ok(order.into_iter().map(|i| &graph.vertices()[i]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphDescription;

    #[test]
    fn test_topological_chain() {
        let desc = GraphDescription::new("chain", true)
            .with_vertices(["a", "b", "c"])
            .with_edge("a", "b")
            .with_edge("b", "c");
        let graph = Graph::from_description(&desc).unwrap();

        let order: Vec<&str> = topological_sort(&graph)
            .unwrap()
            .iter()
            .map(|v| v.name())
            .collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_topological_respects_every_edge() {
        // 声明顺序与依赖方向相反
        let desc = GraphDescription::new("dag", true)
            .with_vertices([
                "shirt",
                "tie",
                "jacket",
                "belt",
                "pants",
                "undershorts",
                "socks",
                "shoes",
            ])
            .with_edge("undershorts", "pants")
            .with_edge("undershorts", "shoes")
            .with_edge("pants", "belt")
            .with_edge("pants", "shoes")
            .with_edge("belt", "jacket")
            .with_edge("shirt", "belt")
            .with_edge("shirt", "tie")
            .with_edge("tie", "jacket")
            .with_edge("socks", "shoes");
        let graph = Graph::from_description(&desc).unwrap();

        let order = topological_order(&graph).unwrap();
        assert_eq!(order.len(), graph.vertex_count());

        let mut position = vec![0; graph.vertex_count()];
        for (i, &v) in order.iter().enumerate() {
            position[v] = i;
        }
        for e in graph.edges() {
            assert!(position[e.origin()] < position[e.destination()]);
        }
    }

    #[test]
    fn test_topological_cycle() {
        let desc = GraphDescription::new("cycle", true)
            .with_vertices(["a", "b", "c"])
            .with_edge("a", "b")
            .with_edge("b", "c")
            .with_edge("c", "a");
        let graph = Graph::from_description(&desc).unwrap();

        assert!(matches!(
            topological_sort(&graph),
            Err(Error::CycleDetected(_))
        ));
    }

    #[test]
    fn test_topological_undirected_rejected() {
        let desc = GraphDescription::new("u", false).with_vertex("a");
        let graph = Graph::from_description(&desc).unwrap();

        assert!(topological_sort(&graph).unwrap_err().is_precondition());
    }
}
