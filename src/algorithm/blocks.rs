//! 割点与块（双连通分量）
//!
//! 一次 DFS 同时计算每个顶点的发现时间 `pre` 与 low 值：
//! `low[v]` 是 `v` 的子树经由一条回边所能到达的最小发现时间。
//! 树边与回边压入边栈，当子树 `c` 满足 `low[c] >= pre[v]` 时，
//! 弹出直到树边 `(v, c)` 的所有边即构成一个块。

use super::components::require_undirected;
use super::traversal::{Dfs, DfsEvent, Direction};
use crate::container::List;
use crate::error::Result;
use crate::graph::{Graph, Vertex};
use tracing::debug;

const UNVISITED: usize = usize::MAX;

/// 块分解结果（顶点下标）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockDecomposition {
    /// 割点，按下标升序
    pub articulation_points: Vec<usize>,
    /// 每个块的顶点，块内按下标升序
    pub blocks: Vec<Vec<usize>>,
}

/// 计算无向图的割点与块
pub fn decompose(graph: &Graph) -> Result<BlockDecomposition> {
    require_undirected(graph, "割点与块")?;

    let n = graph.vertex_count();
    let mut pre = vec![UNVISITED; n];
    let mut low = vec![UNVISITED; n];
    let mut parent_of: Vec<Option<usize>> = vec![None; n];
    let mut children = vec![0usize; n];
    let mut is_cut = vec![false; n];
    let mut edge_stack: Vec<(usize, usize)> = Vec::new();
    let mut blocks = Vec::new();
    let mut counter = 0;

    for event in Dfs::sweep(graph, Direction::Forward) {
        match event {
            DfsEvent::Enter { vertex, parent } => {
                pre[vertex] = counter;
                low[vertex] = counter;
                counter += 1;
                parent_of[vertex] = parent;
                if let Some(p) = parent {
                    children[p] += 1;
                    edge_stack.push((p, vertex));
                }
            }
            DfsEvent::NonTreeEdge { from, to } => {
                // 树边在子顶点一侧的镜像记录
                if parent_of[from] == Some(to) {
                    continue;
                }
                // 只记录指向祖先的一侧，另一侧在祖先处已出现
                if pre[to] < pre[from] {
                    low[from] = low[from].min(pre[to]);
                    edge_stack.push((from, to));
                }
            }
            DfsEvent::Exit { vertex, parent } => match parent {
                Some(p) => {
                    low[p] = low[p].min(low[vertex]);
                    if low[vertex] >= pre[p] {
                        if parent_of[p].is_some() {
                            is_cut[p] = true;
                        }
                        blocks.push(pop_block(&mut edge_stack, (p, vertex)));
                    }
                }
                None => {
                    if children[vertex] > 1 {
                        is_cut[vertex] = true;
                    }
                    if children[vertex] == 0 {
                        blocks.push(vec![vertex]);
                    }
                }
            },
        }
    }

    let articulation_points: Vec<usize> = (0..n).filter(|&v| is_cut[v]).collect();
    debug!(
        graph = graph.name(),
        articulation_points = articulation_points.len(),
        blocks = blocks.len(),
        "块分解完成"
    );

    Ok(BlockDecomposition {
        articulation_points,
        blocks,
    })
}

/// 弹出边栈直到（含）树边 `until`，返回涉及的顶点
fn pop_block(edge_stack: &mut Vec<(usize, usize)>, until: (usize, usize)) -> Vec<usize> {
    let mut members = Vec::new();
    while let Some((u, v)) = edge_stack.pop() {
        members.push(u);
        members.push(v);
        if (u, v) == until {
            break;
        }
    }
    members.sort_unstable();
    members.dedup();
    members
}

/// 割点列表，按下标升序；列表借用图中的顶点
pub fn articulation_points(graph: &Graph) -> Result<List<&Vertex>> {
    let decomposition = decompose(graph)?;
    Ok(decomposition
        .articulation_points
        .iter()
        .map(|&i| &graph.vertices()[i])
        .collect())
}

/// 块列表，每个块是一个独立的图
///
/// 没有割点的连通图只有一个块，即其自身；孤立顶点单独成块。
pub fn blocks(graph: &Graph) -> Result<List<Graph>> {
    let decomposition = decompose(graph)?;
    Ok(decomposition
        .blocks
        .iter()
        .enumerate()
        .map(|(k, m)| graph.subgraph(format!("{}-block-{}", graph.name(), k + 1), m))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphDescription;

    fn build(name: &str, vertices: &[&str], edges: &[(&str, &str)]) -> Graph {
        let mut desc = GraphDescription::new(name, false).with_vertices(vertices.iter().copied());
        for (o, d) in edges {
            desc = desc.with_edge(*o, *d);
        }
        Graph::from_description(&desc).unwrap()
    }

    fn names(list: &List<&Vertex>) -> Vec<String> {
        list.iter().map(|v| v.name().to_string()).collect()
    }

    #[test]
    fn test_articulation_points_path() {
        let graph = build(
            "path",
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "c"), ("c", "d")],
        );

        let points = articulation_points(&graph).unwrap();
        assert_eq!(names(&points), vec!["b", "c"]);

        let blocks = blocks(&graph).unwrap();
        assert_eq!(blocks.len(), 3);
        for block in &blocks {
            assert_eq!(block.vertex_count(), 2);
            assert_eq!(block.edge_count(), 1);
        }
    }

    #[test]
    fn test_articulation_root_with_two_children() {
        // b 是 DFS 根时仍应识别为割点
        let graph = build("star", &["b", "a", "c"], &[("b", "a"), ("b", "c")]);

        let points = articulation_points(&graph).unwrap();
        assert_eq!(names(&points), vec!["b"]);
    }

    #[test]
    fn test_biconnected_graph_is_single_block() {
        let graph = build(
            "square",
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a"), ("a", "c")],
        );

        assert!(articulation_points(&graph).unwrap().is_empty());

        let blocks: Vec<Graph> = blocks(&graph).unwrap().into_iter().collect();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].vertex_count(), graph.vertex_count());
        assert_eq!(blocks[0].edge_count(), graph.edge_count());
    }

    #[test]
    fn test_bowtie_blocks() {
        // 两个三角形共享顶点 c
        let graph = build(
            "bowtie",
            &["a", "b", "c", "d", "e"],
            &[
                ("a", "b"),
                ("b", "c"),
                ("c", "a"),
                ("c", "d"),
                ("d", "e"),
                ("e", "c"),
            ],
        );

        let decomposition = decompose(&graph).unwrap();
        assert_eq!(decomposition.articulation_points, vec![2]);

        let mut blocks = decomposition.blocks;
        blocks.sort();
        assert_eq!(blocks, vec![vec![0, 1, 2], vec![2, 3, 4]]);
    }

    #[test]
    fn test_isolated_vertex_block() {
        let graph = build("iso", &["a", "b", "c"], &[("a", "b")]);

        let decomposition = decompose(&graph).unwrap();
        assert!(decomposition.articulation_points.is_empty());
        assert_eq!(decomposition.blocks, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn test_blocks_directed_rejected() {
        let desc = GraphDescription::new("d", true).with_vertex("a");
        let graph = Graph::from_description(&desc).unwrap();

        assert!(articulation_points(&graph).unwrap_err().is_precondition());
        assert!(blocks(&graph).unwrap_err().is_precondition());
    }
}
