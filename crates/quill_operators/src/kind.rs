//! 运算符标识
//!
//! 可重载运算符的封闭集合，每个成员对应一个元数据成员名（如 `op_Addition`）

use crate::error::OperatorError;
use std::fmt;
use std::str::FromStr;

/// 可由用户重载的运算符种类
///
/// 集合是封闭的：上游符号模型把一个方法解析为"运算符 K"之后，
/// 所有分类查询都以 K 为唯一键。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperatorKind {
    // --- 比较与取反 ---
    Equality,
    Inequality,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    LogicalNot,

    // --- 算术 ---
    Addition,
    Subtraction,
    Multiply,
    Division,
    Modulus,
    Increment,
    Decrement,
    UnaryPlus,
    UnaryNegation,

    // --- 位运算 ---
    BitwiseAnd,
    BitwiseOr,
    ExclusiveOr,
    LeftShift,
    RightShift,
    OnesComplement,

    // --- 布尔转换 ---
    False,
    True,
}

impl OperatorKind {
    /// 全部运算符，按展示顺序排列（下标即排序键）
    pub const ALL: [OperatorKind; 24] = [
        Self::Equality,
        Self::Inequality,
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::LessThan,
        Self::LessThanOrEqual,
        Self::LogicalNot,
        Self::Addition,
        Self::Subtraction,
        Self::Multiply,
        Self::Division,
        Self::Modulus,
        Self::Increment,
        Self::Decrement,
        Self::UnaryPlus,
        Self::UnaryNegation,
        Self::BitwiseAnd,
        Self::BitwiseOr,
        Self::ExclusiveOr,
        Self::LeftShift,
        Self::RightShift,
        Self::OnesComplement,
        Self::False,
        Self::True,
    ];

    /// 元数据成员名
    pub const fn member_name(self) -> &'static str {
        match self {
            Self::Addition => "op_Addition",
            Self::BitwiseAnd => "op_BitwiseAnd",
            Self::BitwiseOr => "op_BitwiseOr",
            Self::Division => "op_Division",
            Self::Equality => "op_Equality",
            Self::ExclusiveOr => "op_ExclusiveOr",
            Self::GreaterThan => "op_GreaterThan",
            Self::GreaterThanOrEqual => "op_GreaterThanOrEqual",
            Self::Inequality => "op_Inequality",
            Self::LeftShift => "op_LeftShift",
            Self::LessThan => "op_LessThan",
            Self::LessThanOrEqual => "op_LessThanOrEqual",
            Self::Modulus => "op_Modulus",
            Self::Multiply => "op_Multiply",
            Self::RightShift => "op_RightShift",
            Self::Subtraction => "op_Subtraction",
            Self::Decrement => "op_Decrement",
            Self::False => "op_False",
            Self::Increment => "op_Increment",
            Self::LogicalNot => "op_LogicalNot",
            Self::OnesComplement => "op_OnesComplement",
            Self::True => "op_True",
            Self::UnaryNegation => "op_UnaryNegation",
            Self::UnaryPlus => "op_UnaryPlus",
        }
    }

    /// 根据成员名查找运算符
    ///
    /// # Errors
    ///
    /// 名称不在封闭集合内时返回 [`OperatorError::UnrecognizedOperator`]
    pub fn from_member_name(name: &str) -> Result<Self, OperatorError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.member_name() == name)
            .ok_or_else(|| OperatorError::UnrecognizedOperator {
                name: name.to_string(),
            })
    }

    /// 拼写最接近 `name` 的运算符，用于报错时给出替换建议
    ///
    /// 比较不区分大小写，缺少 `op_` 前缀时自动补上；
    /// 编辑距离超过 2 视为没有相近的名称。
    pub fn closest_to(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        let wanted = if lower.starts_with("op_") {
            lower
        } else {
            format!("op_{}", lower)
        };

        Self::ALL
            .into_iter()
            .map(|kind| {
                let candidate = kind.member_name().to_lowercase();
                (kind, edit_distance(&wanted, &candidate))
            })
            .filter(|(_, distance)| *distance <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|(_, distance)| *distance)
            .map(|(kind, _)| kind)
    }
}

const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Levenshtein 距离
fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut row = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        row[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            row[j + 1] = if ca == *cb {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(row[j])
            };
        }
        std::mem::swap(&mut prev, &mut row);
    }

    prev[b_chars.len()]
}

impl FromStr for OperatorKind {
    type Err = OperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_member_name(s)
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.member_name())
    }
}
