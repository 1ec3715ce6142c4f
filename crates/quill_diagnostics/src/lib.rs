//! Quill Diagnostics
//!
//! 工具层的诊断类型。诊断既用于命令行报错，也作为建议操作（code action）的载荷。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`DiagnosticLevel`] - 诊断级别（Error/Warning/Info/Hidden）
//! - [`Suggestion`] - 修复建议，可附带替换文本
//! - [`Emitter`] - 诊断输出器
//!
//! # 示例
//!
//! ```rust
//! use quill_diagnostics::{Diagnostic, Emitter};
//!
//! let diag = Diagnostic::warning("operator '+' has no matching '-'")
//!     .code("QL0002")
//!     .suggest("declare 'op_Subtraction' alongside 'op_Addition'");
//!
//! let mut out = Vec::new();
//! Emitter::without_colors().emit_to(&mut out, &diag).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("warning[QL0002]"));
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod level;

// 重新导出核心类型
pub use diagnostic::{Diagnostic, Suggestion};
pub use emitter::Emitter;
pub use level::DiagnosticLevel;
