//! 图分析报告
//!
//! 对一个图依次执行全部分析，逐项记录结果或不可用的原因。

use crate::algorithm;
use crate::graph::{Graph, GraphDescription, Vertex};
use crate::types::{Distance, Weight};
use crate::{container::List, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 分析选项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// 最短路径树的根，缺省时取第一个顶点
    pub root: Option<String>,
    /// 是否计算全源距离
    pub include_distances: bool,
    /// 是否计算块分解
    pub include_blocks: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            root: None,
            include_distances: true,
            include_blocks: true,
        }
    }
}

/// 单项分析结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<T> {
    /// 计算成功
    Ok { value: T },
    /// 图类型不符或计算失败
    Unavailable { reason: String },
}

impl<T> Outcome<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Ok { value } => Some(value),
            Outcome::Unavailable { .. } => None,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok { .. })
    }
}

impl<T> From<Result<T>> for Outcome<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Outcome::Ok { value },
            Err(e) => Outcome::Unavailable {
                reason: e.to_string(),
            },
        }
    }
}

/// 距离矩阵
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    pub vertices: Vec<String>,
    pub rows: Vec<Vec<Distance>>,
}

/// 图分析报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphReport {
    pub name: String,
    pub directed: bool,
    pub weighted: bool,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub graph: GraphDescription,
    pub topological_order: Outcome<Vec<String>>,
    pub components: Outcome<Vec<GraphDescription>>,
    pub minimum_spanning_tree: Outcome<GraphDescription>,
    pub arborescence: Option<Outcome<GraphDescription>>,
    pub distances: Option<Outcome<DistanceMatrix>>,
    pub diameter: Outcome<Weight>,
    pub connected: bool,
    pub strongly_connected: bool,
    pub strong_components: Vec<Vec<String>>,
    pub articulation_points: Option<Outcome<Vec<String>>>,
    pub blocks: Option<Outcome<Vec<GraphDescription>>>,
}

impl GraphReport {
    /// 执行全部分析
    pub fn analyze(graph: &Graph, options: &AnalysisOptions) -> Self {
        debug!(graph = graph.name(), ?options, "开始分析");

        let root = options
            .root
            .clone()
            .or_else(|| graph.vertex_name(0).map(str::to_string));

        let arborescence: Option<Outcome<GraphDescription>> = root.map(|r| {
            algorithm::shortest_path_arborescence(graph, &r)
                .map(|t| t.to_description())
                .into()
        });

        let distances: Option<Outcome<DistanceMatrix>> = options.include_distances.then(|| {
            algorithm::distance_table(graph)
                .map(|rows| DistanceMatrix {
                    vertices: vertex_names(graph.vertices()),
                    rows,
                })
                .into()
        });

        let (articulation_points, blocks): (
            Option<Outcome<Vec<String>>>,
            Option<Outcome<Vec<GraphDescription>>>,
        ) = if options.include_blocks {
            (
                Some(algorithm::articulation_points(graph).map(|l| list_names(&l)).into()),
                Some(algorithm::blocks(graph).map(|l| descriptions(&l)).into()),
            )
        } else {
            (None, None)
        };

        let strong_components: Vec<Vec<String>> = algorithm::strong_component_members(graph)
            .iter()
            .map(|members| {
                members
                    .iter()
                    .map(|&i| graph.vertices()[i].name().to_string())
                    .collect()
            })
            .collect();

        Self {
            name: graph.name().to_string(),
            directed: graph.is_directed(),
            weighted: graph.is_weighted(),
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            graph: graph.to_description(),
            topological_order: algorithm::topological_sort(graph).map(|l| list_names(&l)).into(),
            components: algorithm::connected_components(graph)
                .map(|l| descriptions(&l))
                .into(),
            minimum_spanning_tree: algorithm::minimum_spanning_tree(graph)
                .map(|t| t.to_description())
                .into(),
            arborescence,
            distances,
            diameter: algorithm::diameter(graph).into(),
            connected: algorithm::is_connected(graph),
            strongly_connected: algorithm::is_strongly_connected(graph),
            strong_components,
            articulation_points,
            blocks,
        }
    }

    /// 输出为 JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn vertex_names(vertices: &[Vertex]) -> Vec<String> {
    vertices.iter().map(|v| v.name().to_string()).collect()
}

fn list_names(list: &List<&Vertex>) -> Vec<String> {
    list.iter().map(|v| v.name().to_string()).collect()
}

fn descriptions(list: &List<Graph>) -> Vec<GraphDescription> {
    list.iter().map(|g| g.to_description()).collect()
}
