//! 顶点定义

use super::edge::Edge;
use serde::{Deserialize, Serialize};

/// 顶点，独占自己的邻接表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点名（图内唯一）
    name: String,
    /// 在图顶点数组中的下标
    index: usize,
    /// 邻接表
    edges: Vec<Edge>,
}

impl Vertex {
    /// 创建无邻边的顶点
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
            edges: Vec::new(),
        }
    }

    /// 顶点名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 顶点下标
    pub fn index(&self) -> usize {
        self.index
    }

    /// 邻接表
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 度（邻接表长度）
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// 是否已有通往 `destination` 的边
    pub fn has_edge_to(&self, destination: usize) -> bool {
        self.edges.iter().any(|e| e.destination() == destination)
    }

    pub(crate) fn push_edge(&mut self, edge: Edge) {
        debug_assert_eq!(edge.origin(), self.index);
        self.edges.push(edge);
    }
}
