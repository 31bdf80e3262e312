//! # 求解器标准输出行扫描
//!
//! 把一次运行捕获的输出切分为有序的行序列，供各检查按位置读取。
//!
//! ## 依赖关系
//! - 被 `parsers/forces.rs`, `parsers/band_gap.rs` 使用
//! - 被 `commands/run.rs`, `commands/check.rs` 构造

use crate::error::{Result, VerifyError};
use std::fs;
use std::path::Path;

/// 一次运行的日志行序列（构造后不可变）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogLines {
    lines: Vec<String>,
}

impl LogLines {
    /// 按 `\n` 切分原始输出；非 UTF-8 字节按 lossy 方式替换，行内容不做 trim
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return LogLines::default();
        }

        let text = String::from_utf8_lossy(bytes);
        LogLines {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// 读取已保存的日志文件
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(VerifyError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let bytes = fs::read(path).map_err(|e| VerifyError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(Self::from_bytes(&bytes))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 按 0 起始下标取行
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// 按顺序遍历 (下标, 行)
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines.iter().map(String::as_str).enumerate()
    }
}

/// 按空白切分一行
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// 把第 `index` 个 token 解析为有限数值
///
/// `line_index` 为 0 起始下标，错误信息中报告 1 起始行号。
pub fn numeric_token(tokens: &[&str], index: usize, line_index: usize) -> Result<f64> {
    let token = tokens.get(index).ok_or_else(|| VerifyError::MissingToken {
        line: line_index + 1,
        index,
        content: tokens.join(" "),
    })?;

    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(VerifyError::MalformedNumber {
            line: line_index + 1,
            index,
            token: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_output_has_no_lines() {
        let log = LogLines::from_bytes(b"");
        assert!(log.is_empty());
        assert_eq!(log.iter().count(), 0);
    }

    #[test]
    fn test_lines_keep_raw_content() {
        let log = LogLines::from_bytes(b"  ## N1 0 \n%% timing\n\nlast");
        assert_eq!(log.len(), 4);
        assert_eq!(log.get(0), Some("  ## N1 0 "));
        assert_eq!(log.get(2), Some(""));
        assert_eq!(log.get(3), Some("last"));
        assert_eq!(log.get(4), None);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let log = LogLines::from_bytes(b"ok\n\xff## bad\n");
        assert_eq!(log.len(), 3);
        assert!(log.get(1).unwrap().contains("##"));
    }

    #[test]
    fn test_numeric_token() {
        let tokens = tokenize("a b 1.5e-3 -2 x nan");
        assert_eq!(numeric_token(&tokens, 2, 0).unwrap(), 1.5e-3);
        assert_eq!(numeric_token(&tokens, 3, 0).unwrap(), -2.0);

        match numeric_token(&tokens, 4, 6) {
            Err(VerifyError::MalformedNumber { line, index, token }) => {
                assert_eq!(line, 7);
                assert_eq!(index, 4);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected result: {:?}", other),
        }

        assert!(matches!(
            numeric_token(&tokens, 5, 0),
            Err(VerifyError::MalformedNumber { .. })
        ));
        assert!(matches!(
            numeric_token(&tokens, 9, 0),
            Err(VerifyError::MissingToken { index: 9, .. })
        ));
    }
}
