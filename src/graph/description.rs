//! 图描述
//!
//! 文本格式适配器与核心之间交换的抽象结构

use crate::types::Weight;
use serde::{Deserialize, Serialize};

/// 边描述（按顶点名引用端点）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDescription {
    pub origin: String,
    pub destination: String,
    /// 未给出时使用默认权值
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}

/// 图描述
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription {
    pub name: String,
    pub directed: bool,
    /// 顶点名，保持声明顺序
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
}

impl GraphDescription {
    /// 创建空描述
    pub fn new(name: impl Into<String>, directed: bool) -> Self {
        Self {
            name: name.into(),
            directed,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// 声明顶点（已声明则忽略）
    pub fn with_vertex(mut self, name: impl Into<String>) -> Self {
        self.declare_vertex(name);
        self
    }

    /// 按顺序声明多个顶点
    pub fn with_vertices<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.declare_vertex(name);
        }
        self
    }

    /// 添加无权边
    pub fn with_edge(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.push_edge(origin.into(), destination.into(), None);
        self
    }

    /// 添加带权边
    pub fn with_weighted_edge(
        mut self,
        origin: impl Into<String>,
        destination: impl Into<String>,
        weight: Weight,
    ) -> Self {
        self.push_edge(origin.into(), destination.into(), Some(weight));
        self
    }

    /// 声明顶点，返回是否为新顶点
    pub fn declare_vertex(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.vertices.iter().any(|v| *v == name) {
            return false;
        }
        self.vertices.push(name);
        true
    }

    /// 追加一条边，不检查端点是否已声明
    pub fn push_edge(&mut self, origin: String, destination: String, weight: Option<Weight>) {
        self.edges.push(EdgeDescription {
            origin,
            destination,
            weight,
        });
    }

    /// 是否有任何边显式带权
    pub fn has_weights(&self) -> bool {
        self.edges.iter().any(|e| e.weight.is_some())
    }

    /// 从 JSON 文本读取
    pub fn from_json(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// 输出为 JSON 文本
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_builder() {
        let desc = GraphDescription::new("g", false)
            .with_vertices(["a", "b"])
            .with_vertex("a")
            .with_weighted_edge("a", "b", 3);

        assert_eq!(desc.vertices, vec!["a", "b"]);
        assert_eq!(desc.edges.len(), 1);
        assert!(desc.has_weights());
    }

    #[test]
    fn test_description_json() {
        let json = r#"{
            "name": "g",
            "directed": true,
            "vertices": ["a", "b"],
            "edges": [{"origin": "a", "destination": "b"}]
        }"#;

        let desc = GraphDescription::from_json(json).unwrap();
        assert!(desc.directed);
        assert_eq!(desc.edges[0].weight, None);

        let back = GraphDescription::from_json(&desc.to_json().unwrap()).unwrap();
        assert_eq!(back, desc);
    }
}
