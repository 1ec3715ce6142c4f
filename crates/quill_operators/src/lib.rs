//! Quill Operators
//!
//! 可重载运算符的目录，为补全列表提供运算符元数据：
//! - 符号 ([`sign_of`])
//! - 展示顺序 ([`sort_index_of`])
//! - 用法示例 ([`usage_example_of`])
//! - 语法位置 ([`position_of`])
//! - 是否可提升到可空值类型 ([`is_liftable`])
//!
//! 所有查询都是纯函数，作用于编译期固定的表，可以在任意线程并发调用。
//!
//! # 示例
//!
//! ```rust
//! use quill_operators::{is_liftable, sign_of, OperandShape, OperatorKind, TypeCategory};
//!
//! let kind = OperatorKind::from_member_name("op_Addition").unwrap();
//! assert_eq!(sign_of(kind), "+");
//!
//! let shape = OperandShape::binary(TypeCategory::Value, TypeCategory::Value, TypeCategory::Value);
//! assert!(is_liftable(kind, &shape));
//! ```

pub mod catalog;
pub mod error;
pub mod kind;
pub mod lift;
pub mod position;
pub mod symbol;

// 重新导出核心类型
pub use catalog::{
    catalog, descriptor, descriptor_for_name, position_of, position_of_name, sign_of,
    sign_of_name, sort_index_of, sort_index_of_name, usage_example_of, usage_example_of_name,
    OperatorDescriptor,
};
pub use error::OperatorError;
pub use kind::OperatorKind;
pub use lift::{
    is_liftable, lifted_signature, LiftedSignature, OperandShape, OperatorOrigin, TypeCategory,
};
pub use position::OperatorPosition;
pub use symbol::OperatorSymbol;
