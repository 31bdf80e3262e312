//! # run 子命令 CLI 定义
//!
//! 位置参数顺序固定：启动器 3 个 token、可执行文件、输入文件、坐标文件、
//! 库路径替换、赝势目录。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use super::verify::VerifyOptions;
use crate::launch::DEFAULT_PSEUDO_FILE;
use clap::Args;
use std::path::PathBuf;

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Launcher program (e.g. mpirun)
    #[arg(allow_hyphen_values = true)]
    pub launcher: String,

    /// First launcher argument (e.g. -np)
    #[arg(allow_hyphen_values = true)]
    pub launcher_flag: String,

    /// Second launcher argument (e.g. the process count)
    #[arg(allow_hyphen_values = true)]
    pub launcher_count: String,

    /// Path to the solver executable
    pub executable: PathBuf,

    /// Solver input file (passed with -c)
    pub input: PathBuf,

    /// Atomic coordinates file (passed with -i)
    pub coordinates: PathBuf,

    /// Library replacement specifier (passed with -l)
    #[arg(allow_hyphen_values = true)]
    pub library: String,

    /// Directory containing the pseudopotential file
    pub pseudo_dir: PathBuf,

    /// Pseudopotential file name linked into the working directory
    #[arg(long, default_value = DEFAULT_PSEUDO_FILE)]
    pub pseudo_file: String,

    /// Working directory for the solver run
    #[arg(long, default_value = ".")]
    pub workdir: PathBuf,

    #[command(flatten)]
    pub verify: VerifyOptions,
}
