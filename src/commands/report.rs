//! # 检查结果报告
//!
//! 终端汇总表格 (`tabled`) 和 CSV 报告 (`csv` + `serde`)，每个比较过的量一行。
//! 没有测量值的检查（跳过或缺少数据）输出一行空数值。
//!
//! ## 依赖关系
//! - 被 `commands/verify.rs` 使用
//! - 使用 `models/verdict.rs`

use crate::error::{Result, VerifyError};
use crate::models::{CheckKind, CheckStatus, Verdict};

use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

/// 汇总表格行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Check")]
    check: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Reference")]
    reference: String,
    #[tabled(rename = "Tolerance")]
    tolerance: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// CSV 报告行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub check: CheckKind,
    pub quantity: String,
    pub value: Option<f64>,
    pub reference: Option<f64>,
    pub tolerance: Option<f64>,
    pub status: CheckStatus,
}

/// 把判定展开为报告行
pub fn report_rows(verdict: &Verdict) -> Vec<ReportRow> {
    let mut rows = Vec::new();

    for outcome in &verdict.outcomes {
        if outcome.measurements.is_empty() {
            rows.push(ReportRow {
                check: outcome.kind,
                quantity: String::new(),
                value: None,
                reference: None,
                tolerance: None,
                status: outcome.status,
            });
            continue;
        }

        for m in &outcome.measurements {
            rows.push(ReportRow {
                check: outcome.kind,
                quantity: m.quantity.clone(),
                value: Some(m.value),
                reference: Some(m.reference),
                tolerance: Some(m.tolerance),
                status: if m.passed {
                    CheckStatus::Passed
                } else {
                    CheckStatus::Failed
                },
            });
        }
    }

    rows
}

/// 打印汇总表格
pub fn print_summary(verdict: &Verdict) {
    let fmt = |v: Option<f64>| v.map(|x| format!("{:.6e}", x)).unwrap_or_else(|| "-".to_string());

    let table_rows: Vec<SummaryRow> = report_rows(verdict)
        .into_iter()
        .map(|r| SummaryRow {
            check: r.check.to_string(),
            quantity: if r.quantity.is_empty() {
                "-".to_string()
            } else {
                r.quantity
            },
            value: fmt(r.value),
            reference: fmt(r.reference),
            tolerance: fmt(r.tolerance),
            status: r.status.to_string(),
        })
        .collect();

    let table = Table::new(&table_rows);
    println!("{}", table);
}

/// 保存报告到 CSV
pub fn write_csv(path: &Path, verdict: &Verdict) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for row in report_rows(verdict) {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| VerifyError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CheckOutcome, Measurement};
    use tempfile::TempDir;

    fn sample_verdict() -> Verdict {
        let mut verdict = Verdict::default();
        verdict.push(CheckOutcome::from_measurements(
            CheckKind::ForceSymmetry,
            vec![
                Measurement::new("force_x", 0.0, 0.0, 1e-5),
                Measurement::new("force_y", 0.0, 0.0, 1e-5),
                Measurement::new("force_z", 0.0, 0.0, 1e-5),
            ],
        ));
        verdict.push(CheckOutcome::skipped(CheckKind::BandGap, "no marker"));
        verdict
    }

    #[test]
    fn test_report_rows() {
        let rows = report_rows(&sample_verdict());
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2].quantity, "force_z");
        assert_eq!(rows[2].status, CheckStatus::Passed);
        assert_eq!(rows[3].check, CheckKind::BandGap);
        assert_eq!(rows[3].status, CheckStatus::Skipped);
        assert_eq!(rows[3].value, None);
    }

    #[test]
    fn test_write_csv() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report.csv");
        write_csv(&path, &sample_verdict()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("check,quantity,value,reference,tolerance,status")
        );
        let first = lines.next().unwrap();
        assert!(first.starts_with("force_symmetry,force_x,0.0,0.0,"));
        assert!(first.ends_with(",passed"));
        assert_eq!(lines.last(), Some("band_gap,,,,,skipped"));
    }
}
