//! 上游符号模型提供的运算符方法视图

use crate::catalog::{descriptor, OperatorDescriptor};
use crate::error::OperatorError;
use crate::kind::OperatorKind;
use crate::lift::{self, LiftedSignature, OperandShape};

/// 一个已声明的运算符方法
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorSymbol {
    /// 元数据成员名，如 `op_Addition`
    pub member_name: String,
    /// 声明该运算符的类型名
    pub containing_type: String,
    pub shape: OperandShape,
}

impl OperatorSymbol {
    pub fn new(
        member_name: impl Into<String>,
        containing_type: impl Into<String>,
        shape: OperandShape,
    ) -> Self {
        Self {
            member_name: member_name.into(),
            containing_type: containing_type.into(),
            shape,
        }
    }

    /// 解析运算符种类
    pub fn kind(&self) -> Result<OperatorKind, OperatorError> {
        OperatorKind::from_member_name(&self.member_name)
    }

    pub fn descriptor(&self) -> Result<OperatorDescriptor, OperatorError> {
        self.kind().map(descriptor)
    }

    /// 是否可提升；名称无法识别时视为不可提升
    pub fn is_liftable(&self) -> bool {
        self.kind()
            .map(|kind| lift::is_liftable(kind, &self.shape))
            .unwrap_or(false)
    }

    pub fn lifted_signature(&self) -> Option<LiftedSignature> {
        let kind = self.kind().ok()?;
        lift::lifted_signature(kind, &self.shape)
    }
}
