//! # 容差阈值
//!
//! 力对称性和带隙检查使用的数值阈值，以及缺少收敛标记时的处理策略。
//! 默认值对应 N2 双原子带隙回归测试。
//!
//! ## 依赖关系
//! - 被 `cli/verify.rs` 构造
//! - 被 `commands/verify.rs` 使用

use crate::error::{Result, VerifyError};
use clap::ValueEnum;

/// 力分量之和允许的最大绝对值（求解器力单位）
pub const DEFAULT_FORCE_TOLERANCE: f64 = 1.0e-5;

/// 带隙允许的最大偏差 (eV)
pub const DEFAULT_GAP_TOLERANCE_EV: f64 = 0.1;

/// 参考带隙 (eV)，仅适用于 N2 测试体系
pub const DEFAULT_EXPECTED_GAP_EV: f64 = 8.3;

/// Hartree -> eV
pub const DEFAULT_HARTREE_TO_EV: f64 = 27.211;

/// 日志中找不到收敛标记时带隙检查的行为
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum GapPolicy {
    /// Skip the band gap check and report it as skipped
    #[default]
    Lenient,
    /// Fail the run when no convergence marker is found
    Strict,
}

impl std::fmt::Display for GapPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GapPolicy::Lenient => write!(f, "lenient"),
            GapPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// 一次运行使用的全部阈值
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// 两原子力分量之和的容差
    pub force_tolerance: f64,

    /// 带隙与参考值偏差的容差 (eV)
    pub gap_tolerance_ev: f64,

    /// 参考带隙 (eV)
    pub expected_gap_ev: f64,

    /// Hartree 到 eV 的换算因子
    pub hartree_to_ev: f64,

    pub gap_policy: GapPolicy,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            force_tolerance: DEFAULT_FORCE_TOLERANCE,
            gap_tolerance_ev: DEFAULT_GAP_TOLERANCE_EV,
            expected_gap_ev: DEFAULT_EXPECTED_GAP_EV,
            hartree_to_ev: DEFAULT_HARTREE_TO_EV,
            gap_policy: GapPolicy::default(),
        }
    }
}

impl Thresholds {
    /// 检查阈值是否有意义
    pub fn validate(&self) -> Result<()> {
        check_positive("force tolerance", self.force_tolerance)?;
        check_positive("gap tolerance", self.gap_tolerance_ev)?;
        check_positive("Hartree-to-eV factor", self.hartree_to_ev)?;

        if !self.expected_gap_ev.is_finite() {
            return Err(VerifyError::InvalidArgument(format!(
                "expected gap must be finite, got {}",
                self.expected_gap_ev
            )));
        }

        Ok(())
    }
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(VerifyError::InvalidArgument(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}
