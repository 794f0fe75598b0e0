//! 基础类型定义
//!
//! 边权、无穷大哨兵值以及带饱和语义的权值运算

use serde::{Deserialize, Serialize};
use std::fmt;

/// 边权（有符号整数）
pub type Weight = i64;

/// 表示“不可达”的保留权值
pub const INFINITY: Weight = Weight::MAX;

/// 未显式给出权值时的默认值
pub const DEFAULT_WEIGHT: Weight = 1;

/// 文本格式中无穷大的字面量
pub const INFINITY_TOKEN: &str = "inf";

/// 权值累加，溢出时停在 [`INFINITY`]
///
/// 任一操作数为无穷大时结果也为无穷大。
pub fn saturating_add(a: Weight, b: Weight) -> Weight {
    if a == INFINITY || b == INFINITY {
        return INFINITY;
    }
    a.saturating_add(b)
}

/// 是否为有限权值
pub fn is_finite(w: Weight) -> bool {
    w != INFINITY
}

/// 距离（有限值或不可达）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Distance {
    Finite(Weight),
    Unreachable,
}

impl Distance {
    /// 由权值构造，[`INFINITY`] 映射为不可达
    pub fn from_weight(w: Weight) -> Self {
        if is_finite(w) {
            Distance::Finite(w)
        } else {
            Distance::Unreachable
        }
    }

    /// 转换回权值表示
    pub fn as_weight(&self) -> Weight {
        match self {
            Distance::Finite(w) => *w,
            Distance::Unreachable => INFINITY,
        }
    }

    pub fn finite(&self) -> Option<Weight> {
        match self {
            Distance::Finite(w) => Some(*w),
            Distance::Unreachable => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => write!(f, "{}", w),
            Distance::Unreachable => write!(f, "{}", INFINITY_TOKEN),
        }
    }
}

/// 把权值格式化为文本（无穷大输出 `inf`）
pub fn format_weight(w: Weight) -> String {
    Distance::from_weight(w).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating_add() {
        assert_eq!(saturating_add(2, 3), 5);
        assert_eq!(saturating_add(INFINITY, 3), INFINITY);
        assert_eq!(saturating_add(3, INFINITY), INFINITY);
        assert_eq!(saturating_add(INFINITY - 1, 10), INFINITY);
    }

    #[test]
    fn test_distance_display() {
        assert_eq!(Distance::Finite(7).to_string(), "7");
        assert_eq!(Distance::from_weight(INFINITY).to_string(), "inf");
        assert_eq!(format_weight(-4), "-4");
        assert_eq!(Distance::Unreachable.finite(), None);
    }
}
