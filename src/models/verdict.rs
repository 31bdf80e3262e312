//! # 检查结果与最终判定
//!
//! 每项检查产生一个 `CheckOutcome`，按顺序汇总为 `Verdict`。
//! 判定只区分通过/失败，不区分是哪一项检查失败。
//!
//! ## 依赖关系
//! - 被 `parsers/forces.rs`, `parsers/band_gap.rs` 构造
//! - 被 `commands/verify.rs`, `commands/report.rs` 使用

use serde::Serialize;

/// 检查类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    ForceSymmetry,
    BandGap,
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckKind::ForceSymmetry => write!(f, "Force symmetry"),
            CheckKind::BandGap => write!(f, "Band gap"),
        }
    }
}

/// 检查状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Passed,
    Failed,
    /// 日志中没有该检查需要的数据（宽松模式）
    Skipped,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Passed => write!(f, "PASS"),
            CheckStatus::Failed => write!(f, "FAIL"),
            CheckStatus::Skipped => write!(f, "SKIP"),
        }
    }
}

/// 一次数值比较
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// 被比较的量，例如 `force_z` 或 `gap_ev`
    pub quantity: String,

    /// 测得值（力检查中为两分量之和）
    pub value: f64,

    /// 期望值
    pub reference: f64,

    pub tolerance: f64,

    pub passed: bool,
}

impl Measurement {
    pub fn new(quantity: impl Into<String>, value: f64, reference: f64, tolerance: f64) -> Self {
        Measurement {
            quantity: quantity.into(),
            value,
            reference,
            tolerance,
            passed: (value - reference).abs() <= tolerance,
        }
    }

    /// 与期望值的绝对偏差
    pub fn deviation(&self) -> f64 {
        (self.value - self.reference).abs()
    }
}

/// 单项检查结果
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub kind: CheckKind,
    pub status: CheckStatus,
    pub measurements: Vec<Measurement>,
    /// 失败或跳过的原因
    pub reason: Option<String>,
}

impl CheckOutcome {
    /// 根据测量结果生成通过/失败结果；第一项失败的测量决定失败原因
    pub fn from_measurements(kind: CheckKind, measurements: Vec<Measurement>) -> Self {
        let reason = measurements.iter().find(|m| !m.passed).map(|m| {
            format!(
                "{} = {:e} deviates from {} by more than {:e}",
                m.quantity, m.value, m.reference, m.tolerance
            )
        });
        let status = if reason.is_some() {
            CheckStatus::Failed
        } else {
            CheckStatus::Passed
        };

        CheckOutcome {
            kind,
            status,
            measurements,
            reason,
        }
    }

    pub fn skipped(kind: CheckKind, reason: impl Into<String>) -> Self {
        CheckOutcome {
            kind,
            status: CheckStatus::Skipped,
            measurements: Vec::new(),
            reason: Some(reason.into()),
        }
    }

    pub fn failed(kind: CheckKind, reason: impl Into<String>) -> Self {
        CheckOutcome {
            kind,
            status: CheckStatus::Failed,
            measurements: Vec::new(),
            reason: Some(reason.into()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.status == CheckStatus::Failed
    }
}

/// 整次运行的判定
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Verdict {
    pub outcomes: Vec<CheckOutcome>,
}

impl Verdict {
    pub fn push(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    /// 已有检查中是否出现失败
    pub fn has_failure(&self) -> bool {
        self.outcomes.iter().any(CheckOutcome::is_failure)
    }

    pub fn passed(&self) -> bool {
        !self.has_failure()
    }

    /// 进程退出码: 0 = 通过, 1 = 失败
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}
