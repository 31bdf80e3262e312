//! # 力记录提取
//!
//! 按出现顺序收集含力标记且 token 数正确的行，并把前两条解析为 `ForceRecord`。
//!
//! ```text
//! ## N1   0.000   0.000   0.550   -1.23e-03   4.10e-07   2.28e-01
//! ##  label  x      y       z        fx          fy          fz
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/verify.rs` 使用
//! - 使用 `parsers/log.rs`, `parsers/layout.rs`, `models/record.rs`

use super::layout::LogLayout;
use super::log::{numeric_token, tokenize, LogLines};
use crate::error::{Result, VerifyError};
use crate::models::ForceRecord;

/// 对称双原子体系需要的力记录数
pub const REQUIRED_FORCE_RECORDS: usize = 2;

/// 一条匹配的力记录行（未解析）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForceLine<'a> {
    /// 0 起始下标
    pub index: usize,
    pub tokens: Vec<&'a str>,
}

impl ForceLine<'_> {
    /// 解析标签和三个力分量
    pub fn to_record(&self, layout: &LogLayout) -> Result<ForceRecord> {
        let [ix, iy, iz] = layout.force_component_indices;
        let label = self
            .tokens
            .get(layout.force_label_index)
            .map(|s| s.to_string())
            .unwrap_or_default();

        Ok(ForceRecord {
            line_number: self.index + 1,
            label,
            force_x: numeric_token(&self.tokens, ix, self.index)?,
            force_y: numeric_token(&self.tokens, iy, self.index)?,
            force_z: numeric_token(&self.tokens, iz, self.index)?,
        })
    }
}

/// 力标记扫描结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForceScan<'a> {
    /// 合格的力记录行，按出现顺序
    pub records: Vec<ForceLine<'a>>,

    /// 需要回显的行下标（合格力记录行和回显标记行），按出现顺序
    pub echoed: Vec<usize>,
}

/// 扫描日志中的力记录行
pub fn scan_forces<'a>(log: &'a LogLines, layout: &LogLayout) -> ForceScan<'a> {
    let mut scan = ForceScan::default();

    for (index, line) in log.iter() {
        let echo = layout.is_echo_line(line);

        if layout.is_force_line(line) {
            let tokens = tokenize(line);
            if tokens.len() == layout.force_token_count {
                scan.records.push(ForceLine { index, tokens });
                scan.echoed.push(index);
                continue;
            }
        }

        if echo {
            scan.echoed.push(index);
        }
    }

    scan
}

/// 解析前两条力记录
///
/// 多于两条时只取最先出现的两条。
pub fn extract_force_pair(
    scan: &ForceScan<'_>,
    layout: &LogLayout,
) -> Result<(ForceRecord, ForceRecord)> {
    if scan.records.len() < REQUIRED_FORCE_RECORDS {
        return Err(VerifyError::InsufficientForceRecords {
            marker: layout.force_marker.clone(),
            expected: REQUIRED_FORCE_RECORDS,
            found: scan.records.len(),
        });
    }

    let first = scan.records[0].to_record(layout)?;
    let second = scan.records[1].to_record(layout)?;
    Ok((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
MGmol output
%% Timer: total 12.0 s
## N1 0.000 0.000  0.550 0.00001 0.00002 -0.00002
## N2 0.000 0.000 -0.550 -0.00001 -0.00002 0.00002
## too few tokens
   convergence achieved
";

    #[test]
    fn test_scan_collects_eight_token_lines_in_order() {
        let log = LogLines::from_bytes(SAMPLE.as_bytes());
        let layout = LogLayout::default();
        let scan = scan_forces(&log, &layout);

        assert_eq!(scan.records.len(), 2);
        assert_eq!(scan.records[0].index, 2);
        assert_eq!(scan.records[1].index, 3);
        assert_eq!(scan.echoed, vec![1, 2, 3]);
    }

    #[test]
    fn test_extract_force_pair_named_fields() {
        let log = LogLines::from_bytes(SAMPLE.as_bytes());
        let layout = LogLayout::default();
        let scan = scan_forces(&log, &layout);
        let (first, second) = extract_force_pair(&scan, &layout).unwrap();

        assert_eq!(first.line_number, 3);
        assert_eq!(first.label, "N1");
        assert_eq!(first.force_x, 0.00001);
        assert_eq!(first.force_z, -0.00002);
        assert_eq!(second.label, "N2");
        assert_eq!(second.force_y, -0.00002);
    }

    #[test]
    fn test_single_record_is_structural_failure() {
        let log = LogLines::from_bytes(b"## N1 0 0 0 1.0 2.0 3.0\n");
        let layout = LogLayout::default();
        let scan = scan_forces(&log, &layout);

        match extract_force_pair(&scan, &layout) {
            Err(VerifyError::InsufficientForceRecords { expected, found, .. }) => {
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_log_is_structural_failure() {
        let log = LogLines::from_bytes(b"");
        let layout = LogLayout::default();
        let scan = scan_forces(&log, &layout);

        assert!(scan.records.is_empty());
        assert!(matches!(
            extract_force_pair(&scan, &layout),
            Err(VerifyError::InsufficientForceRecords { found: 0, .. })
        ));
    }

    #[test]
    fn test_malformed_component_is_structural_failure() {
        let log = LogLines::from_bytes(b"## A 0 0 0 1.0 oops 3.0\n## B 0 0 0 -1.0 -2.0 -3.0\n");
        let layout = LogLayout::default();
        let scan = scan_forces(&log, &layout);

        assert!(matches!(
            extract_force_pair(&scan, &layout),
            Err(VerifyError::MalformedNumber { line: 1, index: 6, .. })
        ));
    }

    #[test]
    fn test_extra_records_use_first_two() {
        let log = LogLines::from_bytes(
            b"## A 0 0 0 1.0 2.0 3.0\n## B 0 0 0 -1.0 -2.0 -3.0\n## C 0 0 0 9.0 9.0 9.0\n",
        );
        let layout = LogLayout::default();
        let scan = scan_forces(&log, &layout);
        let (first, second) = extract_force_pair(&scan, &layout).unwrap();

        assert_eq!(scan.records.len(), 3);
        assert_eq!(first.label, "A");
        assert_eq!(second.label, "B");
    }
}
