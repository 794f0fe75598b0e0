//! DOT 文本格式适配器
//!
//! 在文本与 [`GraphDescription`] / [`Graph`] 之间转换，只依赖核心的公开接口。

mod parser;
mod writer;

pub use parser::DotParser;
pub use writer::{format, write_graph};

use crate::error::Result;
use crate::graph::{Graph, GraphDescription};

/// 解析 DOT 文本为图描述
pub fn parse(text: &str) -> Result<GraphDescription> {
    DotParser::new(text).parse()
}

/// 解析 DOT 文本并构建图
pub fn read_graph(text: &str) -> Result<Graph> {
    Graph::from_description(&parse(text)?)
}
