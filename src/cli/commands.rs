//! 控制台命令处理
//!
//! 每条命令针对已加载的图执行一个分析操作

use super::printer::Printer;
use crate::algorithm;
use crate::container::List;
use crate::graph::{Graph, Vertex};
use crate::report::{AnalysisOptions, DistanceMatrix, GraphReport};
use crate::types::format_weight;
use tracing::debug;

/// 控制台命令执行结果
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 解析并执行命令
pub fn execute_command(input: &str, graph: &Graph, printer: &Printer) -> CommandResult {
    let input = input.trim();
    if input.is_empty() {
        return CommandResult::Continue;
    }

    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let args = parts.get(1).map(|s| s.trim()).unwrap_or("");

    debug!(command = %cmd, args, "执行命令");

    match cmd.as_str() {
        "help" | "h" | "?" => CommandResult::Message(Printer::print_help()),

        "quit" | "exit" | "q" => CommandResult::Exit,

        "stats" | "info" => CommandResult::Message(printer.print_stats(graph)),

        "show" | "dot" => CommandResult::Message(printer.print_graph(graph)),

        "vertex" | "v" => {
            if args.is_empty() {
                return CommandResult::Error("用法: vertex <名字>".to_string());
            }
            match graph.find_vertex(args) {
                Ok(v) => CommandResult::Message(show_vertex(graph, v)),
                Err(e) => CommandResult::Error(e.to_string()),
            }
        }

        "toposort" | "order" => match algorithm::topological_sort(graph) {
            Ok(order) => CommandResult::Message(names(printer, &order)),
            Err(e) => CommandResult::Error(e.to_string()),
        },

        "components" | "cc" => graphs(printer, algorithm::connected_components(graph)),

        "connected" => CommandResult::Message(yes_no(algorithm::is_connected(graph), "Connected")),

        "strong" | "scc" => {
            let mut output = String::new();
            for component in algorithm::strongly_connected_components(graph).iter() {
                output.push_str(&printer.print_graph(component));
            }
            output.push_str(&yes_no(
                algorithm::is_strongly_connected(graph),
                "Strongly connected",
            ));
            CommandResult::Message(output)
        }

        "articulation" | "cut" => match algorithm::articulation_points(graph) {
            Ok(points) => CommandResult::Message(names(printer, &points)),
            Err(e) => CommandResult::Error(e.to_string()),
        },

        "blocks" => graphs(printer, algorithm::blocks(graph)),

        "mst" => match algorithm::minimum_spanning_tree(graph) {
            Ok(tree) => CommandResult::Message(printer.print_graph(&tree)),
            Err(e) => CommandResult::Error(e.to_string()),
        },

        "spt" | "arborescence" => {
            if args.is_empty() {
                return CommandResult::Error("用法: spt <根>".to_string());
            }
            match algorithm::shortest_path_arborescence(graph, args) {
                Ok(tree) => CommandResult::Message(printer.print_graph(&tree)),
                Err(e) => CommandResult::Error(e.to_string()),
            }
        }

        "distances" | "dist" => match algorithm::distance_table(graph) {
            Ok(rows) => {
                let matrix = DistanceMatrix {
                    vertices: graph.vertices().iter().map(|v| v.name().to_string()).collect(),
                    rows,
                };
                CommandResult::Message(printer.print_distance_table(&matrix))
            }
            Err(e) => CommandResult::Error(e.to_string()),
        },

        "diameter" => match algorithm::diameter(graph) {
            Ok(d) => CommandResult::Message(format!("Diameter = {}\n", d)),
            Err(e) => CommandResult::Error(e.to_string()),
        },

        "report" => {
            let options = AnalysisOptions {
                root: (!args.is_empty()).then(|| args.to_string()),
                ..AnalysisOptions::default()
            };
            let report = GraphReport::analyze(graph, &options);
            CommandResult::Message(printer.print_report(&report))
        }

        _ => CommandResult::Error(format!("未知命令: {}。输入 'help' 查看帮助。", cmd)),
    }
}

fn names(printer: &Printer, list: &List<&Vertex>) -> String {
    printer.print_names(list.iter().map(|v| v.name()))
}

fn graphs(printer: &Printer, result: crate::Result<List<Graph>>) -> CommandResult {
    match result {
        Ok(list) => CommandResult::Message(list.iter().map(|g| printer.print_graph(g)).collect()),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn yes_no(value: bool, what: &str) -> String {
    if value {
        format!("{}!\n", what)
    } else {
        format!("Not {}!\n", what.to_lowercase())
    }
}

fn show_vertex(graph: &Graph, v: &Vertex) -> String {
    let mut output = format!("顶点 {} (下标 {}):\n", v.name(), v.index());
    output.push_str(&format!("  度: {}\n", v.degree()));
    for e in v.edges() {
        let target = graph.vertex_name(e.destination()).unwrap_or("?");
        if graph.is_weighted() {
            output.push_str(&format!("  -> {} [weight={}]\n", target, format_weight(e.weight())));
        } else {
            output.push_str(&format!("  -> {}\n", target));
        }
    }
    output
}
