//! # 日志格式约定
//!
//! 描述检查依赖的标记字符串和固定偏移：
//!
//! | 事件 | 匹配条件 | 读取位置 |
//! |------|----------|----------|
//! | 力记录 | 含 `##` 且恰好 8 个 token | token 5, 6, 7 |
//! | 收敛 | 同时含 `convergence` 和 `achieved` | 之后第 3 行的 token 4, 5 |
//! | 回显 | 含 `%%` | 不读取，仅输出 |
//!
//! ## 依赖关系
//! - 被 `parsers/forces.rs`, `parsers/band_gap.rs` 使用
//! - 被 `cli/verify.rs` 构造

/// 求解器输出的标记与偏移表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLayout {
    /// 力记录行的标记
    pub force_marker: String,

    /// 力记录行的 token 数
    pub force_token_count: usize,

    /// 原子标签所在 token
    pub force_label_index: usize,

    /// x, y, z 力分量所在 token
    pub force_component_indices: [usize; 3],

    /// 收敛行必须同时包含的标记
    pub convergence_markers: Vec<String>,

    /// 本征值行相对收敛行的偏移
    pub eigenvalue_offset: usize,

    /// 带隙下沿本征值所在 token
    pub lower_eigenvalue_index: usize,

    /// 带隙上沿本征值所在 token
    pub upper_eigenvalue_index: usize,

    /// 仅回显、不检查的行标记
    pub echo_markers: Vec<String>,
}

impl Default for LogLayout {
    fn default() -> Self {
        LogLayout {
            force_marker: "##".to_string(),
            force_token_count: 8,
            force_label_index: 1,
            force_component_indices: [5, 6, 7],
            convergence_markers: vec!["convergence".to_string(), "achieved".to_string()],
            eigenvalue_offset: 3,
            lower_eigenvalue_index: 4,
            upper_eigenvalue_index: 5,
            echo_markers: vec!["%%".to_string()],
        }
    }
}

impl LogLayout {
    pub fn is_force_line(&self, line: &str) -> bool {
        line.contains(&self.force_marker)
    }

    pub fn is_convergence_line(&self, line: &str) -> bool {
        !self.convergence_markers.is_empty()
            && self.convergence_markers.iter().all(|m| line.contains(m))
    }

    pub fn is_echo_line(&self, line: &str) -> bool {
        self.echo_markers.iter().any(|m| line.contains(m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_predicates() {
        let layout = LogLayout::default();

        assert!(layout.is_force_line("## N1 0.0 0.0 0.0 1e-3 2e-3 3e-3"));
        assert!(!layout.is_force_line("# N1 0.0"));

        assert!(layout.is_convergence_line(" convergence criterion achieved!!!"));
        assert!(!layout.is_convergence_line("convergence not yet"));
        assert!(!layout.is_convergence_line("achieved"));

        assert!(layout.is_echo_line("%% timer 1.0"));
        assert!(!layout.is_echo_line("% single"));
    }

    #[test]
    fn test_empty_convergence_markers_never_match() {
        let layout = LogLayout {
            convergence_markers: Vec::new(),
            ..LogLayout::default()
        };
        assert!(!layout.is_convergence_line("convergence achieved"));
    }
}
