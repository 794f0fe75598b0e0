//! 图数据结构
//!
//! 基于下标的邻接表：顶点存放在连续数组中，下标 `0..n` 稳定，
//! 是唯一的交叉引用方式。派生图（连通分量、块、生成树等）总是
//! 深拷贝边并重新编号，不与原图共享任何存储。

use super::description::GraphDescription;
use super::edge::Edge;
use super::vertex::Vertex;
use crate::error::{Error, Result};
use crate::types::{saturating_add, Weight, DEFAULT_WEIGHT};
use tracing::{debug, trace};

/// 图
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// 图名
    name: String,
    /// 是否有向
    directed: bool,
    /// 是否带权
    weighted: bool,
    /// 顶点数组
    vertices: Vec<Vertex>,
}

impl Graph {
    /// 创建只有顶点、没有边的图
    pub fn with_vertices<I, S>(
        name: impl Into<String>,
        directed: bool,
        weighted: bool,
        names: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let vertices = names
            .into_iter()
            .enumerate()
            .map(|(i, n)| Vertex::new(n, i))
            .collect();

        Self {
            name: name.into(),
            directed,
            weighted,
            vertices,
        }
    }

    /// 由图描述构建
    ///
    /// 端点名无法解析或顶点名重复时返回 `MalformedInput`。
    pub fn from_description(desc: &GraphDescription) -> Result<Self> {
        let mut graph = Self::with_vertices(
            desc.name.clone(),
            desc.directed,
            desc.has_weights(),
            desc.vertices.iter().cloned(),
        );

        for (i, name) in desc.vertices.iter().enumerate() {
            if graph.find_vertex_index(name) != Some(i) {
                return Err(Error::MalformedInput(format!("顶点名重复: {}", name)));
            }
        }

        for e in &desc.edges {
            let origin = graph.find_vertex_index(&e.origin).ok_or_else(|| {
                Error::MalformedInput(format!("边引用了未知顶点: {}", e.origin))
            })?;
            let destination = graph.find_vertex_index(&e.destination).ok_or_else(|| {
                Error::MalformedInput(format!("边引用了未知顶点: {}", e.destination))
            })?;

            let weight = e.weight.unwrap_or(DEFAULT_WEIGHT);
            if !graph.insert_edge(Edge::new(origin, destination, weight)) {
                debug!(
                    origin = %e.origin,
                    destination = %e.destination,
                    "忽略重复边"
                );
            }
        }

        debug!(
            graph = %graph.name,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            directed = graph.directed,
            weighted = graph.weighted,
            "图构建完成"
        );

        Ok(graph)
    }

    /// 由顶点名和逻辑边构建派生图
    pub(crate) fn derived<I>(
        name: impl Into<String>,
        directed: bool,
        weighted: bool,
        names: Vec<String>,
        edges: I,
    ) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::with_vertices(name, directed, weighted, names);
        for edge in edges {
            graph.insert_edge(edge);
        }
        graph
    }

    /// 插入一条逻辑边，已存在时返回 `false`
    ///
    /// 无向图中写入两端的邻接表（自环只写一次）。
    pub(crate) fn insert_edge(&mut self, edge: Edge) -> bool {
        let (o, d) = (edge.origin(), edge.destination());
        if self.vertices[o].has_edge_to(d) {
            return false;
        }

        trace!(origin = o, destination = d, weight = edge.weight(), "插入边");
        self.vertices[o].push_edge(edge);
        if !self.directed && !edge.is_loop() {
            self.vertices[d].push_edge(edge.reversed());
        }
        true
    }

    /// 取出顶点子集构成的导出子图
    ///
    /// 顶点按 `members` 的顺序重新编号，保留两端都在子集内的边。
    /// 下标越界返回 `NotFound`，下标重复返回 `MalformedInput`。
    pub fn induced_subgraph(&self, name: impl Into<String>, members: &[usize]) -> Result<Self> {
        let mut seen = vec![false; self.vertex_count()];
        for &i in members {
            match seen.get_mut(i) {
                None => return Err(Error::NotFound(format!("顶点下标 {}", i))),
                Some(true) => {
                    return Err(Error::MalformedInput(format!("子图顶点重复: 下标 {}", i)))
                }
                Some(slot) => *slot = true,
            }
        }
        Ok(self.subgraph(name, members))
    }

    /// 导出子图；`members` 须是互不相同的合法下标
    pub(crate) fn subgraph(&self, name: impl Into<String>, members: &[usize]) -> Self {
        let mut remap = vec![None; self.vertex_count()];
        for (new_index, &old_index) in members.iter().enumerate() {
            remap[old_index] = Some(new_index);
        }

        let names = members
            .iter()
            .map(|&i| self.vertices[i].name().to_string())
            .collect();

        let edges: Vec<Edge> = self
            .edges()
            .filter_map(|e| match (remap[e.origin()], remap[e.destination()]) {
                (Some(o), Some(d)) => Some(Edge::new(o, d, e.weight())),
                _ => None,
            })
            .collect();

        Self::derived(name, self.directed, self.weighted, names, edges)
    }

    // ==================== 访问器 ====================

    /// 图名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 顶点数
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 是否有向
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// 是否带权
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// 所有顶点
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// 按下标获取顶点
    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// 按下标获取顶点名
    pub fn vertex_name(&self, index: usize) -> Option<&str> {
        self.vertex(index).map(|v| v.name())
    }

    /// 按名字查找顶点下标（线性扫描）
    pub fn find_vertex_index(&self, name: &str) -> Option<usize> {
        self.vertices.iter().position(|v| v.name() == name)
    }

    /// 按名字查找顶点
    pub fn find_vertex(&self, name: &str) -> Result<&Vertex> {
        self.find_vertex_index(name)
            .map(|i| &self.vertices[i])
            .ok_or_else(|| Error::NotFound(format!("顶点 {}", name)))
    }

    /// 邻居下标（沿邻接表顺序）
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.vertices[index].edges().iter().map(|e| e.destination())
    }

    /// 逻辑边：有向图每条弧一次，无向图每条边一次（起点下标不大于终点）
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        let directed = self.directed;
        self.vertices
            .iter()
            .flat_map(|v| v.edges().iter())
            .filter(move |e| directed || e.origin() <= e.destination())
    }

    /// 逻辑边数
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// 所有逻辑边权值之和（饱和）
    pub fn total_weight(&self) -> Weight {
        self.edges()
            .fold(0, |acc, e| saturating_add(acc, e.weight()))
    }

    /// 导出为图描述，无向边只输出一次
    pub fn to_description(&self) -> GraphDescription {
        let mut desc = GraphDescription::new(self.name.clone(), self.directed);
        desc.vertices = self.vertices.iter().map(|v| v.name().to_string()).collect();

        for e in self.edges() {
            let weight = if self.weighted { Some(e.weight()) } else { None };
            desc.push_edge(
                self.vertices[e.origin()].name().to_string(),
                self.vertices[e.destination()].name().to_string(),
                weight,
            );
        }

        desc
    }
}
