//! 深度优先遍历
//!
//! 显式栈实现的 DFS 事件迭代器，不依赖递归深度。
//! 先序/后序编号作为遍历结果返回，而不是通过参数层层传递。

use crate::error::{Error, Result};
use crate::graph::Graph;
use serde::{Deserialize, Serialize};

/// 遍历方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// 沿边方向（起点 -> 终点）
    Forward,
    /// 沿反向边（终点 -> 起点），相当于在转置图上遍历
    Transpose,
}

/// 遍历事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// 首次访问顶点；`parent` 为 `None` 表示该顶点是一棵 DFS 树的根
    Enter { vertex: usize, parent: Option<usize> },
    /// 经过一条通往已访问顶点的边（回边、前向边或横叉边）
    NonTreeEdge { from: usize, to: usize },
    /// 顶点的邻接表已处理完
    Exit { vertex: usize, parent: Option<usize> },
}

#[derive(Debug)]
struct Frame {
    vertex: usize,
    parent: Option<usize>,
    /// 下一个待检查的邻居位置
    next: usize,
}

/// DFS 事件迭代器
///
/// 按给定顺序依次从未访问的根出发，生成整片 DFS 森林的事件。
/// 迭代器是惰性、有限且不可重启的。
pub struct Dfs<'g> {
    graph: &'g Graph,
    /// 转置遍历时的反向邻接（仅下标）
    reverse: Option<Vec<Vec<usize>>>,
    visited: Vec<bool>,
    stack: Vec<Frame>,
    roots: std::vec::IntoIter<usize>,
}

impl<'g> Dfs<'g> {
    /// 从单个顶点出发的遍历
    pub fn new(graph: &'g Graph, start: usize, direction: Direction) -> Result<Self> {
        if start >= graph.vertex_count() {
            return Err(Error::NotFound(format!("顶点下标 {}", start)));
        }
        Ok(Self::ordered(graph, direction, vec![start]))
    }

    /// 按下标顺序 `0..n` 遍历所有顶点
    pub fn sweep(graph: &'g Graph, direction: Direction) -> Self {
        Self::ordered(graph, direction, (0..graph.vertex_count()).collect())
    }

    /// 按调用方给定的根顺序遍历
    ///
    /// 任一根下标越界时返回 `NotFound`。
    pub fn with_roots(graph: &'g Graph, direction: Direction, roots: Vec<usize>) -> Result<Self> {
        if let Some(&bad) = roots.iter().find(|&&r| r >= graph.vertex_count()) {
            return Err(Error::NotFound(format!("顶点下标 {}", bad)));
        }
        Ok(Self::ordered(graph, direction, roots))
    }

    /// 根下标必须都在 `0..n` 内
    pub(crate) fn ordered(graph: &'g Graph, direction: Direction, roots: Vec<usize>) -> Self {
        let reverse = match direction {
            Direction::Forward => None,
            Direction::Transpose => Some(reverse_adjacency(graph)),
        };

        Self {
            graph,
            reverse,
            visited: vec![false; graph.vertex_count()],
            stack: Vec::new(),
            roots: roots.into_iter(),
        }
    }

    /// 顶点 `v` 的第 `k` 个邻居
    fn neighbor(&self, v: usize, k: usize) -> Option<usize> {
        match &self.reverse {
            Some(reverse) => reverse[v].get(k).copied(),
            None => self.graph.vertices()[v]
                .edges()
                .get(k)
                .map(|e| e.destination()),
        }
    }

    fn enter(&mut self, vertex: usize, parent: Option<usize>) -> DfsEvent {
        self.visited[vertex] = true;
        self.stack.push(Frame {
            vertex,
            parent,
            next: 0,
        });
        DfsEvent::Enter { vertex, parent }
    }
}

impl Iterator for Dfs<'_> {
    type Item = DfsEvent;

    fn next(&mut self) -> Option<DfsEvent> {
        loop {
            if let Some(top) = self.stack.last() {
                let (v, k) = (top.vertex, top.next);

                return match self.neighbor(v, k) {
                    Some(w) => {
                        if let Some(top) = self.stack.last_mut() {
                            top.next += 1;
                        }
                        if self.visited[w] {
                            Some(DfsEvent::NonTreeEdge { from: v, to: w })
                        } else {
                            Some(self.enter(w, Some(v)))
                        }
                    }
                    None => self.stack.pop().map(|frame| DfsEvent::Exit {
                        vertex: frame.vertex,
                        parent: frame.parent,
                    }),
                };
            }

            let root = self.roots.next()?;
            if !self.visited[root] {
                return Some(self.enter(root, None));
            }
        }
    }
}

/// 反向邻接：`reverse[d]` 包含所有存在边 `o -> d` 的 `o`
fn reverse_adjacency(graph: &Graph) -> Vec<Vec<usize>> {
    let mut reverse = vec![Vec::new(); graph.vertex_count()];
    for v in graph.vertices() {
        for e in v.edges() {
            reverse[e.destination()].push(e.origin());
        }
    }
    reverse
}

/// 遍历编号
///
/// 先序/后序计数在整片森林中共享，后序编号递增即全局完成顺序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfsOrder {
    /// 先序编号，未访问为 `None`
    pub pre: Vec<Option<usize>>,
    /// 后序编号，未访问为 `None`
    pub post: Vec<Option<usize>>,
    /// 按完成先后排列的顶点
    pub finish_order: Vec<usize>,
    /// DFS 树的数量
    pub trees: usize,
}

impl DfsOrder {
    /// 消耗事件流并记录编号
    pub fn record<I>(vertex_count: usize, events: I) -> Self
    where
        I: IntoIterator<Item = DfsEvent>,
    {
        let mut order = Self {
            pre: vec![None; vertex_count],
            post: vec![None; vertex_count],
            finish_order: Vec::with_capacity(vertex_count),
            trees: 0,
        };
        let mut pre_counter = 0;

        for event in events {
            match event {
                DfsEvent::Enter { vertex, parent } => {
                    order.pre[vertex] = Some(pre_counter);
                    pre_counter += 1;
                    if parent.is_none() {
                        order.trees += 1;
                    }
                }
                DfsEvent::Exit { vertex, .. } => {
                    order.post[vertex] = Some(order.finish_order.len());
                    order.finish_order.push(vertex);
                }
                DfsEvent::NonTreeEdge { .. } => {}
            }
        }

        order
    }

    /// 顶点是否被访问
    pub fn reached(&self, vertex: usize) -> bool {
        self.pre[vertex].is_some()
    }

    /// 被访问的顶点数
    pub fn reached_count(&self) -> usize {
        self.finish_order.len()
    }
}

/// 从 `start` 出发的单棵 DFS 树
///
/// `transpose` 为真时沿反向边遍历。
pub fn depth_first_search(graph: &Graph, start: usize, transpose: bool) -> Result<DfsOrder> {
    let direction = if transpose {
        Direction::Transpose
    } else {
        Direction::Forward
    };
    let dfs = Dfs::new(graph, start, direction)?;
    Ok(DfsOrder::record(graph.vertex_count(), dfs))
}

/// 按下标顺序从每个未访问顶点出发，得到整片 DFS 森林
pub fn full_sweep(graph: &Graph) -> DfsOrder {
    DfsOrder::record(graph.vertex_count(), Dfs::sweep(graph, Direction::Forward))
}
