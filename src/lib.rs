//! graphcalc - 内存图计算库
//!
//! 以顶点名标识顶点、以邻接表存储的有向/无向、带权/无权图，支持：
//! - 深度优先遍历、连通分量、块与割点、拓扑排序、强连通分量
//! - 最小生成树、最短路径树、全源距离与直径
//! - DOT 与 JSON 文本格式的读写

pub mod algorithm;
pub mod cli;
pub mod container;
pub mod dot;
pub mod error;
pub mod graph;
pub mod import;
pub mod report;
pub mod types;

// 重导出常用类型
pub use container::List;
pub use error::{Error, Result};
pub use graph::{Edge, EdgeDescription, Graph, GraphDescription, Vertex};
pub use report::{AnalysisOptions, GraphReport};
pub use types::{Distance, Weight, INFINITY};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
