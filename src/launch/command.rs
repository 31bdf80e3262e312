//! # 求解器启动命令
//!
//! 由启动器 token、可执行文件和命名参数组装求解器命令：
//!
//! ```text
//! <launcher...> <executable> -c <input> -i <coordinates> -l <library>
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 构造
//! - 被 `launch/process.rs` 执行

use std::path::PathBuf;
use std::process::Command;

/// 求解器命令描述（构造后不修改）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// MPI 启动器及其参数，例如 `mpirun -np 2`
    pub launcher: Vec<String>,
    pub executable: PathBuf,
    /// `-c` 输入文件
    pub input_file: PathBuf,
    /// `-i` 坐标文件
    pub coordinates_file: PathBuf,
    /// `-l` 库路径替换
    pub library_spec: String,
}

impl CommandSpec {
    /// 启动器之后的全部参数
    fn solver_args(&self) -> Vec<String> {
        vec![
            self.executable.display().to_string(),
            "-c".to_string(),
            self.input_file.display().to_string(),
            "-i".to_string(),
            self.coordinates_file.display().to_string(),
            "-l".to_string(),
            self.library_spec.clone(),
        ]
    }

    /// 完整的参数列表（第一个元素为要执行的程序）
    ///
    /// 启动器 token 按空白再切分，`"srun --mpi=pmix"` 展开为两个参数；空 token 被丢弃。
    pub fn argv(&self) -> Vec<String> {
        self.launcher
            .iter()
            .flat_map(|t| t.split_whitespace())
            .map(str::to_string)
            .chain(self.solver_args())
            .collect()
    }

    /// 要执行的程序名
    pub fn program(&self) -> String {
        self.argv().into_iter().next().unwrap_or_default()
    }

    /// 构造 `std::process::Command`
    pub fn to_command(&self) -> Command {
        let argv = self.argv();
        let mut cmd = Command::new(&argv[0]);
        cmd.args(&argv[1..]);
        cmd
    }

    /// 用于日志输出的命令行
    pub fn render(&self) -> String {
        self.argv().join(" ")
    }
}

impl std::fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
