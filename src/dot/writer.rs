//! DOT 输出
//!
//! 1. 所有顶点先于所有边输出，保持声明顺序
//! 2. 无向边只输出一次（起点下标不大于终点下标）
//! 3. 带权图的每条边输出 `weight` 属性，无穷大写作 `inf`

use crate::graph::Graph;
use crate::types::format_weight;
use std::fmt::{self, Write};

/// 把图写为 DOT 文本
pub fn format(graph: &Graph) -> String {
    let mut out = String::new();
    // 写入 String 不会失败
    let _ = write_graph(&mut out, graph);
    out
}

/// 把图写入任意 `fmt::Write`
pub fn write_graph<W: Write>(out: &mut W, graph: &Graph) -> fmt::Result {
    let (keyword, edge_op) = if graph.is_directed() {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };

    writeln!(out, "strict {} {} {{", keyword, quote(graph.name()))?;
    writeln!(out)?;

    for v in graph.vertices() {
        writeln!(out, "    {}", quote(v.name()))?;
    }

    writeln!(out)?;

    for e in graph.edges() {
        write!(
            out,
            "    {} {} {}",
            quote(graph.vertices()[e.origin()].name()),
            edge_op,
            quote(graph.vertices()[e.destination()].name())
        )?;
        if graph.is_weighted() {
            write!(out, " [weight={}]", format_weight(e.weight()))?;
        }
        writeln!(out)?;
    }

    writeln!(out, "}}")
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_graph(f, self)
    }
}
