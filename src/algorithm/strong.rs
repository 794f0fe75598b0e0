//! 强连通性（Kosaraju 算法）
//!
//! 第一遍在原图上完整扫描记录完成顺序；第二遍按完成顺序的逆序
//! 在转置图上遍历，每棵 DFS 树恰好是一个强连通分量。

use super::traversal::{full_sweep, Dfs, DfsEvent, Direction};
use crate::container::List;
use crate::graph::Graph;
use tracing::debug;

/// 强连通分量（顶点下标），按第二遍发现顺序排列
pub fn strong_component_members(graph: &Graph) -> Vec<Vec<usize>> {
    let first = full_sweep(graph);
    let roots: Vec<usize> = first.finish_order.iter().rev().copied().collect();

    let mut members: Vec<Vec<usize>> = Vec::new();
    for event in Dfs::ordered(graph, Direction::Transpose, roots) {
        if let DfsEvent::Enter { vertex, parent } = event {
            match (parent, members.last_mut()) {
                (Some(_), Some(current)) => current.push(vertex),
                _ => members.push(vec![vertex]),
            }
        }
    }

    debug!(graph = graph.name(), components = members.len(), "强连通分量计算完成");
    members
}

/// 第二遍产生的 DFS 树数量
pub fn kosaraju_tree_count(graph: &Graph) -> usize {
    strong_component_members(graph).len()
}

/// 是否强连通：第二遍恰好产生一棵树
///
/// 无向图等价于连通性判断；没有顶点的图不视为强连通。
pub fn is_strongly_connected(graph: &Graph) -> bool {
    kosaraju_tree_count(graph) == 1
}

/// 强连通分量，每个分量是一个独立的图
pub fn strongly_connected_components(graph: &Graph) -> List<Graph> {
    strong_component_members(graph)
        .iter()
        .enumerate()
        .map(|(k, m)| graph.subgraph(format!("{}-scc-{}", graph.name(), k + 1), m))
        .collect()
}
