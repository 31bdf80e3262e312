//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `run`: 运行求解器并检查输出
//! - `check`: 检查已保存的求解器输出
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: run, check, verify

pub mod check;
pub mod run;
pub mod verify;

use clap::{Parser, Subcommand};

/// qverify - 电子结构求解器回归检查
#[derive(Parser)]
#[command(name = "qverify")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Regression harness checking force symmetry and band gap of solver runs",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Run the solver and verify its output
    Run(run::RunArgs),

    /// Verify a previously captured solver output file
    Check(check::CheckArgs),
}
