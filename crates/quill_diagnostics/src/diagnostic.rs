//! Diagnostic - 诊断信息
//!
//! 诊断不携带源码位置：运算符名称来自符号模型而非源文本，
//! 位置由使用方（命令行或编辑器请求）决定。

use crate::level::DiagnosticLevel;

/// 修复建议
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// 建议消息
    pub message: String,
    /// 可以原样替换进去的文本，如拼写正确的成员名
    pub replacement: Option<String>,
}

impl Suggestion {
    /// 创建新的建议
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: None,
        }
    }

    /// 附带替换文本
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }
}

/// 诊断信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 诊断级别
    pub level: DiagnosticLevel,
    /// 诊断编号（如 `QL0001`），批量修复按编号归组
    pub code: Option<String>,
    /// 主要消息
    pub message: String,
    /// 补充注释
    pub notes: Vec<String>,
    /// 修复建议
    pub suggestions: Vec<Suggestion>,
}

impl Diagnostic {
    /// 创建新的诊断
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            code: None,
            message: message.into(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// 创建错误诊断
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Error, message)
    }

    /// 创建警告诊断
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warning, message)
    }

    /// 创建信息诊断
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Info, message)
    }

    /// 设置诊断编号
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// 添加注释
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// 添加建议
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    /// 添加只有消息的建议
    pub fn suggest(self, message: impl Into<String>) -> Self {
        self.with_suggestion(Suggestion::new(message))
    }

    /// 所有建议中的替换文本
    pub fn replacements(&self) -> impl Iterator<Item = &str> {
        self.suggestions
            .iter()
            .filter_map(|suggestion| suggestion.replacement.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let diag = Diagnostic::error("unrecognized operator 'op_Foo'")
            .code("QL0001")
            .with_note("'op_Foo' is not an overloadable operator member name")
            .suggest("operator member names look like 'op_Addition'");

        assert_eq!(diag.level, DiagnosticLevel::Error);
        assert_eq!(diag.code.as_deref(), Some("QL0001"));
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.suggestions, vec![Suggestion::new("operator member names look like 'op_Addition'")]);
        assert_eq!(diag.replacements().count(), 0);
    }

    #[test]
    fn test_levels() {
        assert_eq!(Diagnostic::error("e").level, DiagnosticLevel::Error);
        assert_eq!(Diagnostic::warning("w").level, DiagnosticLevel::Warning);
        assert_eq!(Diagnostic::info("i").level, DiagnosticLevel::Info);
        assert!(Diagnostic::info("i").code.is_none());
    }

    #[test]
    fn test_replacements() {
        let diag = Diagnostic::error("unrecognized operator 'op_Additon'")
            .suggest("check the spelling")
            .with_suggestion(
                Suggestion::new("did you mean 'op_Addition'?").with_replacement("op_Addition"),
            );

        let replacements: Vec<&str> = diag.replacements().collect();
        assert_eq!(replacements, vec!["op_Addition"]);
    }
}
