//! 运算符目录错误类型

use crate::kind::OperatorKind;
use quill_diagnostics::{Diagnostic, Suggestion};
use thiserror::Error;

/// 运算符目录错误
///
/// 目录覆盖的运算符集合应当与语言规范一致，
/// 出现此错误说明上游传入了目录不认识的名称，属于工具内部缺陷。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperatorError {
    /// 不在封闭集合中的运算符
    #[error("unrecognized operator '{name}'")]
    UnrecognizedOperator { name: String },
}

impl OperatorError {
    /// 转换为诊断信息
    ///
    /// 名称与某个运算符拼写相近时，建议中附带可直接替换的成员名
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::UnrecognizedOperator { name } => {
                let diag = Diagnostic::error(self.to_string())
                    .code("QL0001")
                    .with_note(format!("'{}' is not an overloadable operator member name", name));

                match OperatorKind::closest_to(name) {
                    Some(kind) => diag.with_suggestion(
                        Suggestion::new(format!("did you mean '{}'?", kind.member_name()))
                            .with_replacement(kind.member_name()),
                    ),
                    None => diag
                        .suggest("operator member names look like 'op_Addition' or 'op_LogicalNot'"),
                }
            }
        }
    }
}
