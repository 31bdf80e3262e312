//! # 求解器进程执行
//!
//! 同步运行求解器，等待其结束并返回捕获的标准输出。
//! 标准错误直接透传到终端。没有超时、取消或重试。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用
//! - 使用 `launch/command.rs`, `utils/progress.rs`

use super::command::CommandSpec;
use crate::error::{Result, VerifyError};
use crate::utils::progress;

use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;

/// 在 `workdir` 中运行求解器，返回标准输出字节流
///
/// 非零退出码视为调用失败。
pub fn run_captured(spec: &CommandSpec, workdir: &Path) -> Result<Vec<u8>> {
    let mut cmd = spec.to_command();
    cmd.current_dir(workdir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());

    let pb = progress::create_spinner(&format!("Running {}", spec.program()));
    let result = cmd.output();
    pb.finish_and_clear();

    let out = result.map_err(|e| match e.kind() {
        ErrorKind::NotFound => VerifyError::CommandNotFound {
            command: spec.program(),
        },
        _ => VerifyError::CommandFailed {
            command: spec.render(),
            status: e.to_string(),
        },
    })?;

    if !out.status.success() {
        return Err(VerifyError::CommandFailed {
            command: spec.render(),
            status: out.status.to_string(),
        });
    }

    Ok(out.stdout)
}
