//! 结果打印器
//!
//! 把图、分析报告和统计信息渲染为文本

use crate::dot;
use crate::graph::{Graph, GraphDescription};
use crate::report::{DistanceMatrix, GraphReport, Outcome};
use prettytable::{format, row, Cell, Row, Table};

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 经典文本输出，距离以 DOT 图给出
    Plain,
    /// 距离矩阵以表格输出
    Table,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 打印单个图
    pub fn print_graph(&self, graph: &Graph) -> String {
        dot::format(graph)
    }

    /// 打印顶点名序列，每行一个
    pub fn print_names<'a, I>(&self, names: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut output = String::new();
        for name in names {
            output.push_str(name);
            output.push('\n');
        }
        output
    }

    /// 打印完整报告
    ///
    /// 顺序为：图本身、拓扑序、连通分量、最小生成树、最短路径树、距离、
    /// 直径、连通性、强连通性、割点和块。不可用的项只输出原因。
    pub fn print_report(&self, report: &GraphReport) -> String {
        let mut output = describe(&report.graph);

        match &report.topological_order {
            Outcome::Ok { value } => {
                output.push_str(&self.print_names(value.iter().map(String::as_str)))
            }
            Outcome::Unavailable { reason } => output.push_str(&unavailable("拓扑排序", reason)),
        }

        match &report.components {
            Outcome::Ok { value } => value.iter().for_each(|c| output.push_str(&describe(c))),
            Outcome::Unavailable { reason } => output.push_str(&unavailable("连通分量", reason)),
        }

        match &report.minimum_spanning_tree {
            Outcome::Ok { value } => output.push_str(&describe(value)),
            Outcome::Unavailable { reason } => output.push_str(&unavailable("最小生成树", reason)),
        }

        match &report.arborescence {
            Some(Outcome::Ok { value }) => output.push_str(&describe(value)),
            Some(Outcome::Unavailable { reason }) => {
                output.push_str(&unavailable("最短路径树", reason))
            }
            None => {}
        }

        match &report.distances {
            Some(Outcome::Ok { value }) => output.push_str(&self.print_distances(report, value)),
            Some(Outcome::Unavailable { reason }) => output.push_str(&unavailable("距离", reason)),
            None => {}
        }

        match &report.diameter {
            Outcome::Ok { value } => output.push_str(&format!("Diameter = {}\n", value)),
            Outcome::Unavailable { reason } => output.push_str(&unavailable("直径", reason)),
        }

        output.push_str(if report.connected {
            "Connected!\n"
        } else {
            "Not connected!\n"
        });
        output.push_str(if report.strongly_connected {
            "Strongly connected!\n"
        } else {
            "Not strongly connected!\n"
        });

        if let Some(Outcome::Ok { value }) = &report.articulation_points {
            output.push_str(&format!("Articulation points: {}\n", value.join(", ")));
        }
        if let Some(Outcome::Ok { value }) = &report.blocks {
            value.iter().for_each(|b| output.push_str(&describe(b)));
        }

        output
    }

    /// 打印距离
    fn print_distances(&self, report: &GraphReport, matrix: &DistanceMatrix) -> String {
        match self.mode {
            PrintMode::Plain => distance_graph_text(report, matrix),
            PrintMode::Table => self.print_distance_table(matrix),
        }
    }

    /// 距离矩阵表格，行为起点，列为终点
    pub fn print_distance_table(&self, matrix: &DistanceMatrix) -> String {
        if matrix.vertices.is_empty() {
            return "Empty set\n".to_string();
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let mut header = vec![Cell::new("")];
        header.extend(matrix.vertices.iter().map(|v| Cell::new(v)));
        table.set_titles(Row::new(header));

        for (name, distances) in matrix.vertices.iter().zip(&matrix.rows) {
            let mut cells = vec![Cell::new(name)];
            cells.extend(distances.iter().map(|d| Cell::new(&d.to_string())));
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 打印统计信息
    pub fn print_stats(&self, graph: &Graph) -> String {
        let kind = if graph.is_directed() {
            "directed"
        } else {
            "undirected"
        };

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Name", graph.name()]);
        table.add_row(row!["Kind", kind]);
        table.add_row(row!["Weighted", graph.is_weighted().to_string()]);
        table.add_row(row!["Vertex Count", graph.vertex_count().to_string()]);
        table.add_row(row!["Edge Count", graph.edge_count().to_string()]);
        table.to_string()
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                    graphcalc 命令帮助
═══════════════════════════════════════════════════════════════

基础命令:
  help, h, ?              显示帮助
  quit, exit, q           退出程序
  stats, info             显示图统计信息
  show, dot               以 DOT 格式输出图
  vertex, v <名字>        查看顶点详情
  report                  执行全部分析

结构算法:
  toposort, order         拓扑排序（有向图）
  components, cc          连通分量（无向图）
  connected               是否连通
  strong, scc             强连通分量与强连通性
  articulation, cut       割点（无向图）
  blocks                  块分解（无向图）

带权算法:
  mst                     最小生成树（无向图）
  spt <根>                以 <根> 为根的最短路径树
                          示例: spt a
  distances, dist         全源距离矩阵
  diameter                直径

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}

fn describe(desc: &GraphDescription) -> String {
    match Graph::from_description(desc) {
        Ok(graph) => dot::format(&graph),
        Err(e) => format!("// {}: {}\n", desc.name, e),
    }
}

fn unavailable(item: &str, reason: &str) -> String {
    format!("// {} 不可用: {}\n", item, reason)
}

/// 距离矩阵写为完全带权图，与 `algorithm::distances` 的形状一致
fn distance_graph_text(report: &GraphReport, matrix: &DistanceMatrix) -> String {
    let mut desc = GraphDescription::new(format!("{}-distances", report.name), report.directed)
        .with_vertices(matrix.vertices.iter().cloned());

    for (i, row) in matrix.rows.iter().enumerate() {
        for (j, distance) in row.iter().enumerate() {
            if i == j || (!report.directed && j < i) {
                continue;
            }
            desc.push_edge(
                matrix.vertices[i].clone(),
                matrix.vertices[j].clone(),
                Some(distance.as_weight()),
            );
        }
    }

    describe(&desc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::AnalysisOptions;
    use crate::types::Distance;

    fn path() -> Graph {
        let desc = GraphDescription::new("p", false)
            .with_vertices(["a", "b", "c"])
            .with_weighted_edge("a", "b", 1)
            .with_weighted_edge("b", "c", 2);
        Graph::from_description(&desc).unwrap()
    }

    #[test]
    fn test_print_report_tail() {
        let report = GraphReport::analyze(&path(), &AnalysisOptions::default());
        let text = Printer::new(PrintMode::Plain).print_report(&report);

        assert!(text.starts_with("strict graph \"p\" {"));
        assert!(text.contains("Diameter = 3\n"));
        assert!(text.contains("Connected!\n"));
        assert!(text.contains("Strongly connected!\n"));
        assert!(text.contains("Articulation points: b\n"));
        assert!(text.contains("\"p-distances\""));
    }

    #[test]
    fn test_print_report_directed() {
        let desc = GraphDescription::new("d", true)
            .with_vertices(["x", "y"])
            .with_edge("x", "y");
        let graph = Graph::from_description(&desc).unwrap();
        let report = GraphReport::analyze(&graph, &AnalysisOptions::default());
        let text = Printer::default().print_report(&report);

        assert!(text.contains("x\ny\n"));
        assert!(text.contains("Not connected!\n"));
        assert!(text.contains("Not strongly connected!\n"));
        assert!(text.contains("最小生成树 不可用"));
    }

    #[test]
    fn test_print_distance_table() {
        let matrix = DistanceMatrix {
            vertices: vec!["a".to_string(), "b".to_string()],
            rows: vec![
                vec![Distance::Finite(0), Distance::Unreachable],
                vec![Distance::Finite(4), Distance::Finite(0)],
            ],
        };
        let text = Printer::default().print_distance_table(&matrix);

        assert!(text.contains("inf"));
        assert!(text.contains('4'));
    }

    #[test]
    fn test_print_stats() {
        let text = Printer::default().print_stats(&path());
        assert!(text.contains("Vertex Count"));
        assert!(text.contains("undirected"));
    }
}
