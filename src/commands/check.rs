//! # check 命令实现
//!
//! 读取已保存的求解器输出并执行检查。
//!
//! ## 依赖关系
//! - 使用 `cli/check.rs` 定义的参数
//! - 使用 `parsers/log.rs`, `commands/verify.rs`

use super::verify;
use crate::cli::check::CheckArgs;
use crate::error::Result;
use crate::models::Verdict;
use crate::parsers::LogLines;
use crate::utils::output;

/// 执行 check 命令
pub fn execute(args: CheckArgs) -> Result<Verdict> {
    output::print_header("Verify solver output");
    output::print_info(&format!("Reading '{}'", args.log_file.display()));

    let log = LogLines::from_file(&args.log_file)?;
    verify::verify_output(&log, &args.verify)
}
