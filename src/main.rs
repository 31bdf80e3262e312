//! # qverify - 电子结构求解器回归检查
//!
//! 运行求解器（通常经由 MPI 启动器），从其标准输出中检查：
//! - 对称双原子体系两原子受力等值反向
//! - 带隙与参考值一致
//!
//! ## 子命令
//! - `run`   - 运行求解器并检查输出
//! - `check` - 检查已保存的输出
//!
//! ## 退出码
//! - 0: 全部检查通过
//! - 1: 检查失败、日志格式不符或求解器运行失败
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── launch/    (命令组装与进程执行)
//!   │     ├── parsers/   (日志扫描与记录提取)
//!   │     ├── checks/    (容差比较)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod checks;
mod cli;
mod commands;
mod error;
mod launch;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    match commands::run(cli.command) {
        Ok(verdict) => std::process::exit(verdict.exit_code()),
        Err(e) => {
            utils::output::print_error(&format!("{}", e));
            std::process::exit(1);
        }
    }
}
