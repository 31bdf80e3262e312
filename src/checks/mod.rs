//! # 物理一致性检查
//!
//! 对提取的记录做容差比较，生成 `CheckOutcome`。
//! - 力对称性: 两原子每个力分量之和应接近 0
//! - 带隙: (上沿 - 下沿) 换算为 eV 后应接近参考值
//!
//! ## 依赖关系
//! - 被 `commands/verify.rs` 使用
//! - 使用 `models/`

use crate::models::{
    CheckKind, CheckOutcome, EigenvalueRecord, ForceRecord, GapPolicy, Measurement, Thresholds,
};

/// 力分量名称，与 `ForceRecord::components` 顺序一致
pub const FORCE_COMPONENTS: [&str; 3] = ["force_x", "force_y", "force_z"];

/// 检查两原子的力是否等值反向
///
/// 遇到第一个超出容差的分量即停止，后续分量不再比较。
pub fn evaluate_forces(
    first: &ForceRecord,
    second: &ForceRecord,
    thresholds: &Thresholds,
) -> CheckOutcome {
    let mut measurements = Vec::with_capacity(FORCE_COMPONENTS.len());

    for ((name, a), b) in FORCE_COMPONENTS
        .iter()
        .zip(first.components())
        .zip(second.components())
    {
        let measurement = Measurement::new(*name, a + b, 0.0, thresholds.force_tolerance);
        let passed = measurement.passed;
        measurements.push(measurement);
        if !passed {
            break;
        }
    }

    CheckOutcome::from_measurements(CheckKind::ForceSymmetry, measurements)
}

/// 检查带隙是否与参考值一致
///
/// `record` 为 `None` 表示日志中没有收敛行，结果由 `GapPolicy` 决定。
pub fn evaluate_band_gap(
    record: Option<&EigenvalueRecord>,
    thresholds: &Thresholds,
) -> CheckOutcome {
    let record = match record {
        Some(r) => r,
        None => {
            let reason = "no convergence marker found in solver output";
            return match thresholds.gap_policy {
                GapPolicy::Lenient => CheckOutcome::skipped(CheckKind::BandGap, reason),
                GapPolicy::Strict => CheckOutcome::failed(CheckKind::BandGap, reason),
            };
        }
    };

    let gap_ev = record.gap_ev(thresholds.hartree_to_ev);
    CheckOutcome::from_measurements(
        CheckKind::BandGap,
        vec![Measurement::new(
            "gap_ev",
            gap_ev,
            thresholds.expected_gap_ev,
            thresholds.gap_tolerance_ev,
        )],
    )
}
