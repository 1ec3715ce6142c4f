//! 运算符候选来源
//!
//! 符号解析不在本 crate 内完成：服务器通过 [`OperatorSource`] 向上游索取
//! 某个位置可用的运算符方法，以及可以提供的建议操作。

use quill_actions::FixAllSuggestedAction;
use quill_operators::{
    OperandShape, OperatorError, OperatorKind, OperatorOrigin, OperatorSymbol, TypeCategory,
};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tower_lsp::lsp_types::{Position, Range, Url};

/// 运算符候选来源
pub trait OperatorSource: Send + Sync {
    /// 某个位置可见的运算符方法
    fn operators_at(&self, uri: &Url, position: Position) -> Vec<OperatorSymbol>;

    /// 某个范围内可用的建议操作
    fn suggested_actions(&self, _uri: &Url, _range: Range) -> Vec<FixAllSuggestedAction> {
        Vec::new()
    }
}

/// 不提供任何候选
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOperators;

impl OperatorSource for NoOperators {
    fn operators_at(&self, _uri: &Url, _position: Position) -> Vec<OperatorSymbol> {
        Vec::new()
    }
}

/// 候选加载错误
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read operator declarations: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed operator declarations: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Operator(#[from] OperatorError),
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum CategoryDecl {
    #[serde(alias = "boolean")]
    Bool,
    Value,
    Reference,
}

impl From<CategoryDecl> for TypeCategory {
    fn from(decl: CategoryDecl) -> Self {
        match decl {
            CategoryDecl::Bool => TypeCategory::Boolean,
            CategoryDecl::Value => TypeCategory::Value,
            CategoryDecl::Reference => TypeCategory::Reference,
        }
    }
}

/// JSON 中的一条运算符声明
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OperatorDecl {
    member_name: String,
    containing_type: String,
    parameters: Vec<CategoryDecl>,
    returns: CategoryDecl,
    #[serde(default)]
    intrinsic: bool,
}

impl OperatorDecl {
    fn into_symbol(self) -> Result<OperatorSymbol, OperatorError> {
        // 名称必须是已知运算符
        OperatorKind::from_member_name(&self.member_name)?;

        let origin = if self.intrinsic {
            OperatorOrigin::Intrinsic
        } else {
            OperatorOrigin::UserDefined
        };
        let parameters: Vec<TypeCategory> = self.parameters.into_iter().map(Into::into).collect();
        let shape = OperandShape::new(parameters, self.returns.into()).with_origin(origin);

        Ok(OperatorSymbol::new(self.member_name, self.containing_type, shape))
    }
}

/// 固定的候选集合，对所有位置返回同样的结果
#[derive(Debug, Default, Clone)]
pub struct StaticOperatorSource {
    operators: Vec<OperatorSymbol>,
    actions: Vec<FixAllSuggestedAction>,
}

impl StaticOperatorSource {
    pub fn new(operators: Vec<OperatorSymbol>) -> Self {
        Self {
            operators,
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: FixAllSuggestedAction) -> Self {
        self.actions.push(action);
        self
    }

    /// 从 JSON 数组解析声明
    ///
    /// ```json
    /// [{ "memberName": "op_Addition", "containingType": "Vector",
    ///    "parameters": ["value", "value"], "returns": "value" }]
    /// ```
    pub fn from_json(text: &str) -> Result<Self, SourceError> {
        let decls: Vec<OperatorDecl> = serde_json::from_str(text)?;
        let operators = decls
            .into_iter()
            .map(OperatorDecl::into_symbol)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(operators))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn operators(&self) -> &[OperatorSymbol] {
        &self.operators
    }
}

impl OperatorSource for StaticOperatorSource {
    fn operators_at(&self, _uri: &Url, _position: Position) -> Vec<OperatorSymbol> {
        self.operators.clone()
    }

    fn suggested_actions(&self, _uri: &Url, _range: Range) -> Vec<FixAllSuggestedAction> {
        self.actions.clone()
    }
}
