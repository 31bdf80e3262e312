//! # run 命令实现
//!
//! 准备赝势链接，运行求解器，捕获输出后执行检查。
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `launch/`, `parsers/log.rs`, `commands/verify.rs`, `utils/output.rs`

use super::verify;
use crate::cli::run::RunArgs;
use crate::error::{Result, VerifyError};
use crate::launch::{self, CommandSpec, LinkStatus};
use crate::models::Verdict;
use crate::parsers::LogLines;
use crate::utils::output;

/// 执行 run 命令
pub fn execute(args: RunArgs) -> Result<Verdict> {
    output::print_header("Test band gap N2");

    if !args.workdir.is_dir() {
        return Err(VerifyError::DirectoryNotFound {
            path: args.workdir.display().to_string(),
        });
    }

    output::print_info(&format!("Coordinates file: {}", args.coordinates.display()));

    match launch::ensure_pseudo_link(&args.workdir, &args.pseudo_dir, &args.pseudo_file)? {
        LinkStatus::Created(target) => output::print_info(&format!(
            "Create link to {} -> {}",
            args.pseudo_file,
            target.display()
        )),
        LinkStatus::AlreadyPresent => {
            output::print_skip(&format!("{} already present", args.pseudo_file))
        }
    }

    let spec = CommandSpec {
        launcher: vec![args.launcher, args.launcher_flag, args.launcher_count],
        executable: args.executable,
        input_file: args.input,
        coordinates_file: args.coordinates,
        library_spec: args.library,
    };

    output::print_info(&format!("Running: {}", spec));
    let stdout = launch::run_captured(&spec, &args.workdir)?;
    output::print_success(&format!("Solver finished, captured {} bytes", stdout.len()));

    let log = LogLines::from_bytes(&stdout);
    verify::verify_output(&log, &args.verify)
}
