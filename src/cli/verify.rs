//! # 检查参数（run / check 共用）
//!
//! 容差阈值和日志格式选项，均可通过环境变量设置。
//!
//! ## 依赖关系
//! - 被 `cli/run.rs`, `cli/check.rs` 展开 (flatten)
//! - 转换为 `models::Thresholds`, `parsers::LogLayout`

use crate::models::thresholds::{
    DEFAULT_EXPECTED_GAP_EV, DEFAULT_FORCE_TOLERANCE, DEFAULT_GAP_TOLERANCE_EV,
    DEFAULT_HARTREE_TO_EV,
};
use crate::models::{GapPolicy, Thresholds};
use crate::parsers::LogLayout;
use clap::Args;
use std::path::PathBuf;

/// 检查选项
#[derive(Args, Debug, Clone)]
pub struct VerifyOptions {
    /// Maximum |F1 + F2| allowed on each force component
    #[arg(long, env = "QVERIFY_FORCE_TOL", default_value_t = DEFAULT_FORCE_TOLERANCE)]
    pub force_tol: f64,

    /// Maximum deviation of the band gap from the reference value (eV)
    #[arg(long, env = "QVERIFY_GAP_TOL", default_value_t = DEFAULT_GAP_TOLERANCE_EV)]
    pub gap_tol: f64,

    /// Reference band gap (eV)
    #[arg(long, env = "QVERIFY_EXPECTED_GAP", default_value_t = DEFAULT_EXPECTED_GAP_EV)]
    pub expected_gap: f64,

    /// Hartree to eV conversion factor
    #[arg(long, env = "QVERIFY_HARTREE_TO_EV", default_value_t = DEFAULT_HARTREE_TO_EV)]
    pub hartree_to_ev: f64,

    /// What to do when the output has no convergence marker
    #[arg(long, env = "QVERIFY_GAP_POLICY", value_enum, default_value_t = GapPolicy::Lenient)]
    pub gap_policy: GapPolicy,

    /// Marker identifying per-atom force lines
    #[arg(long, default_value = "##")]
    pub force_marker: String,

    /// Number of lines between the convergence marker and the eigenvalue line
    #[arg(long, default_value_t = 3)]
    pub eigenvalue_offset: usize,

    /// Write a CSV report of every evaluated quantity
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl VerifyOptions {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            force_tolerance: self.force_tol,
            gap_tolerance_ev: self.gap_tol,
            expected_gap_ev: self.expected_gap,
            hartree_to_ev: self.hartree_to_ev,
            gap_policy: self.gap_policy,
        }
    }

    pub fn layout(&self) -> LogLayout {
        LogLayout {
            force_marker: self.force_marker.clone(),
            eigenvalue_offset: self.eigenvalue_offset,
            ..LogLayout::default()
        }
    }
}
