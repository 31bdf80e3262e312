//! # 日志数值记录数据模型
//!
//! 从求解器输出中按固定位置提取的力记录和本征值记录。
//! 位置到字段的映射由 `parsers::layout::LogLayout` 决定，这里只保存解析后的数值。
//!
//! ## 依赖关系
//! - 被 `parsers/forces.rs`, `parsers/band_gap.rs` 构造
//! - 被 `commands/` 使用

use serde::Serialize;

/// 单个原子的力记录（一行 `##` 输出）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForceRecord {
    /// 日志中的行号（从 1 开始）
    pub line_number: usize,

    /// 原子标签（记录的第二个 token）
    pub label: String,

    pub force_x: f64,
    pub force_y: f64,
    pub force_z: f64,
}

impl ForceRecord {
    /// 按 x, y, z 顺序返回力分量
    pub fn components(&self) -> [f64; 3] {
        [self.force_x, self.force_y, self.force_z]
    }
}

/// 收敛标记之后的本征值记录 (Hartree)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EigenvalueRecord {
    /// 日志中的行号（从 1 开始）
    pub line_number: usize,

    /// 带隙下沿（最高占据态）本征值
    pub lower_eigenvalue_ha: f64,

    /// 带隙上沿（最低未占据态）本征值
    pub upper_eigenvalue_ha: f64,
}

impl EigenvalueRecord {
    /// 带隙 (Hartree)
    pub fn gap_ha(&self) -> f64 {
        self.upper_eigenvalue_ha - self.lower_eigenvalue_ha
    }

    /// 带隙 (eV)
    pub fn gap_ev(&self, hartree_to_ev: f64) -> f64 {
        self.gap_ha() * hartree_to_ev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_conversion() {
        let record = EigenvalueRecord {
            line_number: 12,
            lower_eigenvalue_ha: 0.1,
            upper_eigenvalue_ha: 0.405,
        };
        assert!((record.gap_ha() - 0.305).abs() < 1e-12);
        assert!((record.gap_ev(27.211) - 0.305 * 27.211).abs() < 1e-9);
    }

    #[test]
    fn test_force_components_order() {
        let record = ForceRecord {
            line_number: 3,
            label: "N1".to_string(),
            force_x: 1.0,
            force_y: -2.0,
            force_z: 3.0,
        };
        assert_eq!(record.components(), [1.0, -2.0, 3.0]);
    }
}
