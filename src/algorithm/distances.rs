//! 全源距离与直径
//!
//! 对每个顶点构造最短路径树，再沿树累加权值得到距离。

use super::shortest_path::{arborescence_distances, shortest_path_arborescence_from};
use crate::error::Result;
use crate::graph::{Edge, Graph};
use crate::types::{is_finite, Distance, Weight};
use tracing::debug;

/// 距离表，`table[i][j]` 为 `i` 到 `j` 的距离，对角线为 0
pub fn distance_table(graph: &Graph) -> Result<Vec<Vec<Distance>>> {
    let n = graph.vertex_count();
    let mut table = Vec::with_capacity(n);

    for root in 0..n {
        let tree = shortest_path_arborescence_from(graph, root)?;
        let row = arborescence_distances(&tree, root)?
            .into_iter()
            .map(Distance::from_weight)
            .collect();
        table.push(row);
    }

    Ok(table)
}

/// 距离图
///
/// 与原图顶点同名、方向性相同的带权完全图；边 `(i, j)` 的权值是 `i` 到 `j`
/// 的距离，不可达时为 [`crate::types::INFINITY`]。自身距离省略。
/// 无向图中每对顶点只有一条边。
pub fn distances(graph: &Graph) -> Result<Graph> {
    let table = distance_table(graph)?;
    let n = graph.vertex_count();
    let names: Vec<String> = graph.vertices().iter().map(|v| v.name().to_string()).collect();

    let mut edges = Vec::with_capacity(n * n.saturating_sub(1));
    for (i, row) in table.iter().enumerate() {
        for (j, d) in row.iter().enumerate() {
            if i == j || (!graph.is_directed() && j < i) {
                continue;
            }
            edges.push(Edge::new(i, j, d.as_weight()));
        }
    }

    Ok(Graph::derived(
        format!("{}-distances", graph.name()),
        graph.is_directed(),
        true,
        names,
        edges,
    ))
}

/// 直径：距离图中最大的有限权值
///
/// 不可达的顶点对被忽略，因此对不连通的图给出的是各可达对中的最大距离。
/// 没有任何有限距离时为 0。
pub fn diameter(graph: &Graph) -> Result<Weight> {
    let distance_graph = distances(graph)?;
    let diameter = distance_graph
        .edges()
        .map(|e| e.weight())
        .filter(|&w| is_finite(w))
        .max()
        .unwrap_or(0);

    debug!(graph = graph.name(), diameter, "直径计算完成");
    Ok(diameter)
}
