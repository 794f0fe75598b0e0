//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("输入格式错误: {0}")]
    MalformedInput(String),

    #[error("前置条件不满足: {0}")]
    PreconditionViolated(String),

    #[error("图不连通: {0}")]
    Disconnected(String),

    #[error("未找到: {0}")]
    NotFound(String),

    #[error("存在有向环，经过顶点: {0}")]
    CycleDetected(String),

    #[error("解析错误 (第 {line} 行): {message}")]
    ParseError { line: usize, message: String },

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    /// 是否为“图类型不符”类错误（调用方通常把它当作结果缺失处理）
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::PreconditionViolated(_))
    }
}
