//! 运算符目录
//!
//! 每个运算符的符号、排序键、用法示例与语法位置集中在一张描述表里，
//! 四种查询都从同一条记录派生，不会出现覆盖范围不一致。

use crate::error::OperatorError;
use crate::kind::OperatorKind;
use crate::position::OperatorPosition;

const INFIX: OperatorPosition = OperatorPosition::INFIX;
const PREFIX: OperatorPosition = OperatorPosition::PREFIX;
const PREFIX_POSTFIX: OperatorPosition = OperatorPosition::PREFIX.union(OperatorPosition::POSTFIX);
const IMPLICIT: OperatorPosition = OperatorPosition::empty();

/// 运算符描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorDescriptor {
    pub kind: OperatorKind,
    /// 运算符符号，如 `+`、`==`
    pub sign: &'static str,
    /// 展示顺序 (0..=23)
    pub sort_index: u8,
    /// 用法示例，操作数用 `a` / `b` 占位
    pub usage_example: &'static str,
    pub position: OperatorPosition,
}

/// 获取运算符描述
pub const fn descriptor(kind: OperatorKind) -> OperatorDescriptor {
    use OperatorKind::*;

    let (sign, sort_index, usage_example, position) = match kind {
        // 比较与取反
        Equality => ("==", 0, "a == b", INFIX),
        Inequality => ("!=", 1, "a != b", INFIX),
        GreaterThan => (">", 2, "a > b", INFIX),
        GreaterThanOrEqual => (">=", 3, "a >= b", INFIX),
        LessThan => ("<", 4, "a < b", INFIX),
        LessThanOrEqual => ("<=", 5, "a <= b", INFIX),
        LogicalNot => ("!", 6, "!a", PREFIX),

        // 算术
        Addition => ("+", 7, "a + b", INFIX),
        Subtraction => ("-", 8, "a - b", INFIX),
        Multiply => ("*", 9, "a * b", INFIX),
        Division => ("/", 10, "a / b", INFIX),
        Modulus => ("%", 11, "a % b", INFIX),
        Increment => ("++", 12, "a++", PREFIX_POSTFIX),
        Decrement => ("--", 13, "a--", PREFIX_POSTFIX),
        UnaryPlus => ("+", 14, "+a", PREFIX),
        UnaryNegation => ("-", 15, "-a", PREFIX),

        // 位运算
        BitwiseAnd => ("&", 16, "a & b", INFIX),
        BitwiseOr => ("|", 17, "a | b", INFIX),
        ExclusiveOr => ("^", 18, "a ^ b", INFIX),
        LeftShift => ("<<", 19, "a << b", INFIX),
        RightShift => (">>", 20, "a >> b", INFIX),
        OnesComplement => ("~", 21, "~a", PREFIX),

        // 布尔转换：不以运算符语法出现
        False => ("false", 22, "false", IMPLICIT),
        True => ("true", 23, "true", IMPLICIT),
    };

    OperatorDescriptor {
        kind,
        sign,
        sort_index,
        usage_example,
        position,
    }
}

/// 运算符符号
pub fn sign_of(kind: OperatorKind) -> &'static str {
    descriptor(kind).sign
}

/// 展示排序键
pub fn sort_index_of(kind: OperatorKind) -> u8 {
    descriptor(kind).sort_index
}

/// 用法示例
pub fn usage_example_of(kind: OperatorKind) -> &'static str {
    descriptor(kind).usage_example
}

/// 语法位置
pub fn position_of(kind: OperatorKind) -> OperatorPosition {
    descriptor(kind).position
}

/// 按成员名获取描述
///
/// # Errors
///
/// 成员名不是已知运算符时返回 [`OperatorError::UnrecognizedOperator`]
pub fn descriptor_for_name(member_name: &str) -> Result<OperatorDescriptor, OperatorError> {
    OperatorKind::from_member_name(member_name).map(descriptor)
}

pub fn sign_of_name(member_name: &str) -> Result<&'static str, OperatorError> {
    descriptor_for_name(member_name).map(|d| d.sign)
}

pub fn sort_index_of_name(member_name: &str) -> Result<u8, OperatorError> {
    descriptor_for_name(member_name).map(|d| d.sort_index)
}

pub fn usage_example_of_name(member_name: &str) -> Result<&'static str, OperatorError> {
    descriptor_for_name(member_name).map(|d| d.usage_example)
}

pub fn position_of_name(member_name: &str) -> Result<OperatorPosition, OperatorError> {
    descriptor_for_name(member_name).map(|d| d.position)
}

/// 完整目录，按排序键升序
pub fn catalog() -> [OperatorDescriptor; 24] {
    OperatorKind::ALL.map(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signs() {
        assert_eq!(sign_of(OperatorKind::Addition), "+");
        assert_eq!(sign_of(OperatorKind::UnaryPlus), "+");
        assert_eq!(sign_of(OperatorKind::Equality), "==");
        assert_eq!(sign_of(OperatorKind::LogicalNot), "!");
        assert_eq!(sign_of(OperatorKind::RightShift), ">>");
        assert_eq!(sign_of(OperatorKind::True), "true");
        assert_eq!(sign_of(OperatorKind::False), "false");
    }

    #[test]
    fn test_usage_examples() {
        assert_eq!(usage_example_of(OperatorKind::Addition), "a + b");
        assert_eq!(usage_example_of(OperatorKind::Increment), "a++");
        assert_eq!(usage_example_of(OperatorKind::Decrement), "a--");
        assert_eq!(usage_example_of(OperatorKind::LogicalNot), "!a");
        assert_eq!(usage_example_of(OperatorKind::UnaryNegation), "-a");
        assert_eq!(usage_example_of(OperatorKind::True), "true");
    }

    #[test]
    fn test_sort_order_matches_all() {
        for (i, kind) in OperatorKind::ALL.into_iter().enumerate() {
            assert_eq!(sort_index_of(kind) as usize, i, "{:?}", kind);
        }
    }

    #[test]
    fn test_positions() {
        assert_eq!(position_of(OperatorKind::Multiply), OperatorPosition::INFIX);
        assert_eq!(
            position_of(OperatorKind::Increment),
            OperatorPosition::PREFIX | OperatorPosition::POSTFIX
        );
        assert_eq!(position_of(OperatorKind::OnesComplement), OperatorPosition::PREFIX);
        assert!(position_of(OperatorKind::False).is_empty());
    }

    #[test]
    fn test_descriptor_kind_matches() {
        for kind in OperatorKind::ALL {
            assert_eq!(descriptor(kind).kind, kind);
        }
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(sign_of_name("op_ExclusiveOr"), Ok("^"));
        assert_eq!(sort_index_of_name("op_True"), Ok(23));
        assert_eq!(usage_example_of_name("op_Modulus"), Ok("a % b"));
        assert_eq!(position_of_name("op_UnaryPlus"), Ok(OperatorPosition::PREFIX));
    }

    #[test]
    fn test_name_lookup_unrecognized() {
        for result in [
            sign_of_name("op_Explicit").map(|_| ()),
            sort_index_of_name("op_Explicit").map(|_| ()),
            usage_example_of_name("op_Explicit").map(|_| ()),
            position_of_name("op_Explicit").map(|_| ()),
        ] {
            assert!(matches!(
                result,
                Err(OperatorError::UnrecognizedOperator { ref name }) if name == "op_Explicit"
            ));
        }
    }
}
