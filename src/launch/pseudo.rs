//! # 赝势文件链接
//!
//! 求解器在工作目录中按固定文件名查找赝势文件。
//! 若工作目录中不存在该名称，则创建指向 `<源目录>/<文件名>` 的符号链接。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用

use crate::error::{Result, VerifyError};
use std::path::{Path, PathBuf};

/// N2 测试使用的赝势文件名
pub const DEFAULT_PSEUDO_FILE: &str = "pseudo.N_ONCVPSP_LDA";

/// 链接操作结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    /// 新建链接，附带链接目标
    Created(PathBuf),
    /// 目标名称已存在，未做任何修改
    AlreadyPresent,
}

/// 确保 `workdir/file_name` 存在
pub fn ensure_pseudo_link(workdir: &Path, source_dir: &Path, file_name: &str) -> Result<LinkStatus> {
    let link = workdir.join(file_name);

    // 悬空链接也算已存在
    if link.symlink_metadata().is_ok() {
        return Ok(LinkStatus::AlreadyPresent);
    }

    let target = source_dir.join(file_name);
    create_symlink(&target, &link).map_err(|e| VerifyError::FileWriteError {
        path: link.display().to_string(),
        source: e,
    })?;

    Ok(LinkStatus::Created(target))
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
