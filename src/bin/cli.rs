//! graphcalc CLI 工具
//!
//! 读取一个图并输出分析结果，或进入交互模式逐条执行命令

use clap::Parser;
use graphcalc::cli::{execute_command, CommandResult, PrintMode, Printer};
use graphcalc::import::{GraphLoader, InputFormat};
use graphcalc::{AnalysisOptions, Graph, GraphReport};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphcalc-cli")]
#[command(about = "graphcalc 命令行工具", version)]
struct Args {
    /// 输入文件，缺省时从标准输入读取
    input: Option<String>,

    /// 输入格式，缺省时按扩展名推断
    #[arg(short, long, value_enum)]
    format: Option<InputFormat>,

    /// 执行单条命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 以 JSON 输出完整报告
    #[arg(long)]
    json: bool,

    /// 最短路径树的根
    #[arg(short, long)]
    root: Option<String>,

    /// 距离以 DOT 图而非表格输出
    #[arg(long)]
    plain: bool,

    /// 交互模式（需要指定输入文件）
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let graph = load(&args)?;

    let mode = if args.plain {
        PrintMode::Plain
    } else {
        PrintMode::Table
    };
    let printer = Printer::new(mode);

    // 单条命令模式
    if let Some(command) = &args.execute {
        return match execute_command(command, &graph, &printer) {
            CommandResult::Message(m) => {
                print!("{}", m);
                Ok(())
            }
            CommandResult::Error(e) => Err(e.into()),
            CommandResult::Continue | CommandResult::Exit => Ok(()),
        };
    }

    if args.interactive {
        return interactive(&graph, &printer);
    }

    let options = AnalysisOptions {
        root: args.root.clone(),
        ..AnalysisOptions::default()
    };
    let report = GraphReport::analyze(&graph, &options);

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", printer.print_report(&report));
    }

    Ok(())
}

fn load(args: &Args) -> Result<Graph, Box<dyn std::error::Error>> {
    let mut loader = GraphLoader::new();
    if let Some(format) = args.format {
        loader = loader.with_format(format);
    }

    let (graph, _) = match &args.input {
        Some(path) => loader.load_file(path)?,
        None => {
            if args.interactive {
                return Err("交互模式需要指定输入文件".into());
            }
            loader.load_reader(io::stdin().lock())?
        }
    };

    Ok(graph)
}

fn interactive(graph: &Graph, printer: &Printer) -> Result<(), Box<dyn std::error::Error>> {
    println!("graphcalc CLI - {}", graphcalc::VERSION);
    println!("=============================================");
    println!("已加载图: {}", graph.name());
    println!("  顶点数: {}", graph.vertex_count());
    println!("  边数: {}", graph.edge_count());
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let stdin = io::stdin();
    loop {
        print!("graphcalc> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match execute_command(&line, graph, printer) {
            CommandResult::Continue => {}
            CommandResult::Exit => break,
            CommandResult::Message(m) => print!("{}", m),
            CommandResult::Error(e) => println!("错误: {}", e),
        }
    }

    println!("再见！");
    Ok(())
}
