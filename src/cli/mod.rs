//! 命令行界面组件

pub mod commands;
pub mod printer;

pub use commands::{execute_command, CommandResult};
pub use printer::{PrintMode, Printer};
