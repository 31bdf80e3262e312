//! # 带隙本征值提取
//!
//! 找到第一条收敛行，读取其后固定偏移处的本征值行。
//!
//! ## 依赖关系
//! - 被 `commands/verify.rs` 使用
//! - 使用 `parsers/log.rs`, `parsers/layout.rs`, `models/record.rs`

use super::layout::LogLayout;
use super::log::{numeric_token, tokenize, LogLines};
use crate::error::{Result, VerifyError};
use crate::models::EigenvalueRecord;

/// 第一条收敛行的下标
pub fn find_convergence_line(log: &LogLines, layout: &LogLayout) -> Option<usize> {
    log.iter()
        .find(|(_, line)| layout.is_convergence_line(line))
        .map(|(index, _)| index)
}

/// 提取本征值行
///
/// 没有收敛行时返回 `Ok(None)`；有收敛行但偏移处的行或 token 不合格时返回错误。
pub fn extract_eigenvalues(
    log: &LogLines,
    layout: &LogLayout,
) -> Result<Option<(EigenvalueRecord, Vec<String>)>> {
    let marker = match find_convergence_line(log, layout) {
        Some(index) => index,
        None => return Ok(None),
    };

    let missing = || VerifyError::MissingLine {
        line: marker.saturating_add(layout.eigenvalue_offset).saturating_add(1),
        marker_line: marker + 1,
        offset: layout.eigenvalue_offset,
    };
    let index = marker
        .checked_add(layout.eigenvalue_offset)
        .ok_or_else(missing)?;
    let line = log.get(index).ok_or_else(missing)?;

    let tokens = tokenize(line);
    let record = EigenvalueRecord {
        line_number: index + 1,
        lower_eigenvalue_ha: numeric_token(&tokens, layout.lower_eigenvalue_index, index)?,
        upper_eigenvalue_ha: numeric_token(&tokens, layout.upper_eigenvalue_index, index)?,
    };

    Ok(Some((record, tokens.iter().map(|s| s.to_string()).collect())))
}
