//! # 输出检查流程
//!
//! `run` 和 `check` 共用的核心流程：
//! 1. 扫描力记录行并回显
//! 2. 力对称性检查（失败则立即结束）
//! 3. 定位收敛行，提取本征值，带隙检查
//! 4. 汇总表格和可选 CSV 报告
//!
//! 日志格式假设被破坏（记录不足、行或 token 缺失、数值非法）时返回错误，
//! 不生成判定。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs`, `commands/check.rs` 调用
//! - 使用 `parsers/`, `checks/`, `commands/report.rs`, `utils/output.rs`

use super::report;
use crate::checks;
use crate::cli::verify::VerifyOptions;
use crate::error::Result;
use crate::models::{CheckOutcome, CheckStatus, EigenvalueRecord, ForceRecord, Thresholds, Verdict};
use crate::parsers::{band_gap, forces, LogLines};
use crate::utils::output;

/// 对一次运行的输出执行全部检查
pub fn verify_output(log: &LogLines, options: &VerifyOptions) -> Result<Verdict> {
    let thresholds = options.thresholds();
    thresholds.validate()?;
    let layout = options.layout();

    if log.is_empty() {
        output::print_warning("Solver output is empty");
    } else {
        output::print_info(&format!("Scanned {} lines of solver output", log.len()));
    }

    let mut verdict = Verdict::default();

    // ─────────────────────────────────────────────────────────────
    // 力对称性
    // ─────────────────────────────────────────────────────────────
    output::print_header("Check forces");

    let scan = forces::scan_forces(log, &layout);
    for &index in &scan.echoed {
        output::print_trace(index + 1, log.get(index).unwrap_or_default());
    }

    let (first, second) = forces::extract_force_pair(&scan, &layout)?;
    let outcome = checks::evaluate_forces(&first, &second, &thresholds);
    trace_forces(&first, &second, &outcome, &thresholds);
    verdict.push(outcome);

    if verdict.has_failure() {
        return finish(verdict, options);
    }

    // ─────────────────────────────────────────────────────────────
    // 带隙
    // ─────────────────────────────────────────────────────────────
    output::print_header("Check band gap");

    let extracted = band_gap::extract_eigenvalues(log, &layout)?;
    if let Some((record, tokens)) = &extracted {
        output::print_info(&format!(
            "Eigenvalue line {} ({} lines after convergence marker)",
            record.line_number, layout.eigenvalue_offset
        ));
        output::print_value("Eigenvalues", &format!("{:?}", tokens));
    }

    let record = extracted.as_ref().map(|(r, _)| r);
    let outcome = checks::evaluate_band_gap(record, &thresholds);
    trace_band_gap(record, &outcome, &thresholds);
    verdict.push(outcome);

    finish(verdict, options)
}

/// 打印每个比较过的力分量
fn trace_forces(
    first: &ForceRecord,
    second: &ForceRecord,
    outcome: &CheckOutcome,
    thresholds: &Thresholds,
) {
    let pairs = first.components().into_iter().zip(second.components());

    for (m, (a, b)) in outcome.measurements.iter().zip(pairs) {
        output::print_info(&format!("Component {}", m.quantity));
        output::print_value(
            &format!("Force 1 [{} @ line {}]", first.label, first.line_number),
            &a.to_string(),
        );
        output::print_value(
            &format!("Force 2 [{} @ line {}]", second.label, second.line_number),
            &b.to_string(),
        );
        output::print_value("Force diff.", &format!("{:e}", m.value));
    }

    match outcome.status {
        CheckStatus::Failed => output::print_failure(&format!(
            "Forces not converged: {}",
            outcome.reason.as_deref().unwrap_or("residual above tolerance")
        )),
        _ => output::print_success(&format!(
            "Forces cancel within {:e}",
            thresholds.force_tolerance
        )),
    }
}

fn trace_band_gap(record: Option<&EigenvalueRecord>, outcome: &CheckOutcome, thresholds: &Thresholds) {
    if let Some(r) = record {
        output::print_value("Lower eigenvalue (Ha)", &r.lower_eigenvalue_ha.to_string());
        output::print_value("Upper eigenvalue (Ha)", &r.upper_eigenvalue_ha.to_string());
        output::print_value("Band gap (Ha)", &r.gap_ha().to_string());
        output::print_value("Band gap (eV)", &r.gap_ev(thresholds.hartree_to_ev).to_string());
        output::print_value("Expected value (eV)", &thresholds.expected_gap_ev.to_string());
    }
    for m in &outcome.measurements {
        output::print_value("Deviation (eV)", &m.deviation().to_string());
    }

    let reason = outcome.reason.as_deref().unwrap_or_default();
    match outcome.status {
        CheckStatus::Passed => output::print_success(&format!(
            "Band gap within {} eV of {} eV",
            thresholds.gap_tolerance_ev, thresholds.expected_gap_ev
        )),
        CheckStatus::Skipped => {
            output::print_warning(&format!(
                "Band gap not checked (gap policy: {})",
                thresholds.gap_policy
            ));
            output::print_skip(reason);
        }
        CheckStatus::Failed => output::print_failure(&format!("Band gap check failed: {}", reason)),
    }
}

/// 汇总并写出报告
fn finish(verdict: Verdict, options: &VerifyOptions) -> Result<Verdict> {
    output::print_header("Summary");
    report::print_summary(&verdict);

    if let Some(ref path) = options.report {
        report::write_csv(path, &verdict)?;
        output::print_success(&format!("Report saved to '{}'", path.display()));
    }

    output::print_separator();
    if verdict.passed() {
        output::print_done("TEST PASSED");
    } else {
        output::print_failure("TEST FAILED");
    }

    Ok(verdict)
}
