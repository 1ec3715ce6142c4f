//! 运算符的语法位置（前缀 / 中缀 / 后缀）

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// 运算符符号相对操作数出现的位置
    ///
    /// 空集表示运算符不以运算符语法书写（`true` / `false` 由语言隐式调用）
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OperatorPosition: u8 {
        const PREFIX = 0b001;
        const INFIX = 0b010;
        const POSTFIX = 0b100;
    }
}

impl OperatorPosition {
    /// 展示用的分组名
    ///
    /// 目录只用到 infix、prefix、prefix/postfix 与空集，
    /// 其余组合按前缀、中缀、后缀的顺序拼接。未定义的位被忽略。
    pub fn label(self) -> &'static str {
        match self.bits() & Self::all().bits() {
            0b000 => "implicit",
            0b001 => "prefix",
            0b010 => "infix",
            0b011 => "prefix/infix",
            0b100 => "postfix",
            0b101 => "prefix/postfix",
            0b110 => "infix/postfix",
            _ => "prefix/infix/postfix",
        }
    }
}

impl fmt::Display for OperatorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(OperatorPosition::empty().label(), "implicit");
        assert_eq!(OperatorPosition::INFIX.label(), "infix");
        assert_eq!(OperatorPosition::PREFIX.label(), "prefix");
        assert_eq!(OperatorPosition::POSTFIX.label(), "postfix");
        assert_eq!(
            (OperatorPosition::PREFIX | OperatorPosition::POSTFIX).label(),
            "prefix/postfix"
        );
    }

    #[test]
    fn test_mixed_labels() {
        use OperatorPosition as P;

        assert_eq!((P::PREFIX | P::INFIX).label(), "prefix/infix");
        assert_eq!((P::INFIX | P::POSTFIX).label(), "infix/postfix");
        assert_eq!(P::all().label(), "prefix/infix/postfix");
        assert_eq!(P::from_bits_retain(0b1000_0010).label(), "infix");
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: std::collections::HashSet<&str> = (0..=0b111u8)
            .map(|bits| OperatorPosition::from_bits_truncate(bits).label())
            .collect();
        assert_eq!(labels.len(), 8);
    }

    #[test]
    fn test_contains() {
        let both = OperatorPosition::PREFIX | OperatorPosition::POSTFIX;
        assert!(both.contains(OperatorPosition::PREFIX));
        assert!(both.contains(OperatorPosition::POSTFIX));
        assert!(!both.contains(OperatorPosition::INFIX));
    }
}
