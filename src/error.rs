//! 统一错误处理模块

use thiserror::Error;

pub type ParticleResult<T> = Result<T, ParticleError>;

/// 粒子系统顶层错误
#[derive(Error, Debug)]
pub enum ParticleError {
    #[error("Particle file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Particle format error: {0}")]
    Format(#[from] FormatError),
}

/// 定义文本解析错误
///
/// 解析失败是全有或全无的：不会留下可运行的半成品发射器。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unexpected end of input at line {line}")]
    UnexpectedEof { line: usize },

    #[error("Invalid number '{value}' at line {line}")]
    InvalidNumber { line: usize, value: String },

    #[error("Invalid boolean '{value}' at line {line}")]
    InvalidBool { line: usize, value: String },

    #[error("Unknown spawn shape '{value}' at line {line}")]
    UnknownShape { line: usize, value: String },

    #[error("Unknown ellipse side '{value}' at line {line}")]
    UnknownSide { line: usize, value: String },
}
