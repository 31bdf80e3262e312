//! # 统一错误处理模块
//!
//! 定义 qverify 的所有错误类型，使用 `thiserror` 派生。
//!
//! 容差不满足不是错误（由 `models::Verdict` 表达）；
//! 这里只包含调用失败和日志格式假设被破坏的情况。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// qverify 统一错误类型
#[derive(Error, Debug)]
pub enum VerifyError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("External command failed ({status}): {command}")]
    CommandFailed { command: String, status: String },

    // ─────────────────────────────────────────────────────────────
    // 日志结构错误
    // ─────────────────────────────────────────────────────────────
    #[error("Expected at least {expected} force records with marker '{marker}', found {found}")]
    InsufficientForceRecords {
        marker: String,
        expected: usize,
        found: usize,
    },

    #[error("Eigenvalue line {line} (marker at line {marker_line} + {offset}) is beyond the end of the log")]
    MissingLine {
        line: usize,
        marker_line: usize,
        offset: usize,
    },

    #[error("Line {line} has no token at index {index}: '{content}'")]
    MissingToken {
        line: usize,
        index: usize,
        content: String,
    },

    #[error("Line {line}: token '{token}' at index {index} is not a valid number")]
    MalformedNumber {
        line: usize,
        index: usize,
        token: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, VerifyError>;
