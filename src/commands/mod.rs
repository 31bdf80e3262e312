//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `launch/`, `parsers/`, `checks/`, `models/`, `utils/`
//! - 子模块: run, check, verify, report

pub mod check;
pub mod report;
pub mod run;
pub mod verify;

use crate::cli::Commands;
use crate::error::Result;
use crate::models::Verdict;

/// 执行命令
pub fn run(cmd: Commands) -> Result<Verdict> {
    match cmd {
        Commands::Run(args) => run::execute(args),
        Commands::Check(args) => check::execute(args),
    }
}
