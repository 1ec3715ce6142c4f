//! 提升运算符（lifted operator）判定
//!
//! 用户在值类型上声明的运算符，语言会自动提供一个作用于其可空包装的版本：
//! `operator +(S, S)` 同时可以当作 `operator +(S?, S?)` 使用。
//!
//! 判定规则：
//! - 运算符必须由用户声明，且所有参数都是值类型
//! - 一元运算符：恰好一个参数，返回值类型
//! - 二元算术 / 位运算符：恰好两个参数，返回值类型
//! - 相等 / 关系运算符：恰好两个参数，返回 `bool`
//! - `true` / `false` 运算符永远不可提升

use crate::kind::OperatorKind;
use std::fmt;

/// 类型类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    /// 内置 `bool`（也是值类型）
    Boolean,
    /// 其他值类型
    Value,
    /// 引用类型
    Reference,
}

impl TypeCategory {
    pub fn is_value_type(self) -> bool {
        matches!(self, Self::Boolean | Self::Value)
    }

    pub fn is_boolean(self) -> bool {
        matches!(self, Self::Boolean)
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => write!(f, "bool"),
            Self::Value => write!(f, "T"),
            Self::Reference => write!(f, "R"),
        }
    }
}

/// 运算符声明来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatorOrigin {
    /// 源码中由用户声明
    #[default]
    UserDefined,
    /// 编译器内建 / 合成
    Intrinsic,
}

/// 运算符声明的操作数形状
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperandShape {
    pub origin: OperatorOrigin,
    pub parameter_types: Vec<TypeCategory>,
    pub return_type: TypeCategory,
}

impl OperandShape {
    /// 创建用户声明的形状
    pub fn new(parameter_types: Vec<TypeCategory>, return_type: TypeCategory) -> Self {
        Self {
            origin: OperatorOrigin::UserDefined,
            parameter_types,
            return_type,
        }
    }

    /// 一元形状
    pub fn unary(operand: TypeCategory, return_type: TypeCategory) -> Self {
        Self::new(vec![operand], return_type)
    }

    /// 二元形状
    pub fn binary(lhs: TypeCategory, rhs: TypeCategory, return_type: TypeCategory) -> Self {
        Self::new(vec![lhs, rhs], return_type)
    }

    /// 设置声明来源
    pub fn with_origin(mut self, origin: OperatorOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }
}

/// 返回类型要求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReturnRequirement {
    ValueType,
    Boolean,
}

/// 单个运算符类别的提升规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LiftRule {
    arity: usize,
    returns: ReturnRequirement,
}

impl LiftRule {
    fn accepts(self, shape: &OperandShape) -> bool {
        let returns_ok = match self.returns {
            ReturnRequirement::ValueType => shape.return_type.is_value_type(),
            ReturnRequirement::Boolean => shape.return_type.is_boolean(),
        };
        shape.arity() == self.arity && returns_ok
    }
}

const UNARY: LiftRule = LiftRule {
    arity: 1,
    returns: ReturnRequirement::ValueType,
};

const BINARY: LiftRule = LiftRule {
    arity: 2,
    returns: ReturnRequirement::ValueType,
};

const COMPARISON: LiftRule = LiftRule {
    arity: 2,
    returns: ReturnRequirement::Boolean,
};

fn lift_rule(kind: OperatorKind) -> Option<LiftRule> {
    use OperatorKind::*;

    match kind {
        UnaryPlus | Increment | UnaryNegation | Decrement | LogicalNot | OnesComplement => {
            Some(UNARY)
        }
        Addition | Subtraction | Multiply | Division | Modulus | BitwiseAnd | BitwiseOr
        | ExclusiveOr | LeftShift | RightShift => Some(BINARY),
        Equality | Inequality | LessThan | GreaterThan | LessThanOrEqual | GreaterThanOrEqual => {
            Some(COMPARISON)
        }
        True | False => None,
    }
}

/// 判断运算符声明是否获得提升版本
///
/// 不会失败：任何不符合预期的形状都返回 `false`
pub fn is_liftable(kind: OperatorKind, shape: &OperandShape) -> bool {
    if shape.origin != OperatorOrigin::UserDefined {
        return false;
    }
    if !shape.parameter_types.iter().all(|ty| ty.is_value_type()) {
        return false;
    }

    lift_rule(kind).is_some_and(|rule| rule.accepts(shape))
}

/// 提升后的签名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiftedSignature {
    pub kind: OperatorKind,
    pub parameter_types: Vec<TypeCategory>,
    pub return_type: TypeCategory,
    /// 返回值是否被包装为可空
    pub nullable_return: bool,
}

impl fmt::Display for LiftedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = crate::catalog::sign_of(self.kind);
        match self.parameter_types.as_slice() {
            [operand] => write!(f, "{}{}?", sign, operand)?,
            [lhs, rhs] => write!(f, "{}? {} {}?", lhs, sign, rhs)?,
            params => {
                let joined: Vec<String> = params.iter().map(|p| format!("{}?", p)).collect();
                write!(f, "{}({})", sign, joined.join(", "))?
            }
        }
        write!(f, " -> {}", self.return_type)?;
        if self.nullable_return {
            write!(f, "?")?;
        }
        Ok(())
    }
}

/// 计算提升后的签名
///
/// 参数全部包装为可空；一元与二元运算符的返回值也包装为可空，
/// 相等 / 关系运算符仍然返回 `bool`。不可提升时返回 `None`。
pub fn lifted_signature(kind: OperatorKind, shape: &OperandShape) -> Option<LiftedSignature> {
    if !is_liftable(kind, shape) {
        return None;
    }

    let nullable_return = lift_rule(kind)? != COMPARISON;
    Some(LiftedSignature {
        kind,
        parameter_types: shape.parameter_types.clone(),
        return_type: shape.return_type,
        nullable_return,
    })
}
