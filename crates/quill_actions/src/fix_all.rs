//! 批量修复建议

use crate::priority::CodeActionPriority;
use quill_diagnostics::Diagnostic;
use std::fmt;

/// 批量修复的作用范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixAllScope {
    Document,
    Project,
    Solution,
    ContainingMember,
    ContainingType,
}

impl fmt::Display for FixAllScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Document => "document",
            Self::Project => "project",
            Self::Solution => "solution",
            Self::ContainingMember => "containing member",
            Self::ContainingType => "containing type",
        };
        write!(f, "{}", name)
    }
}

/// 批量修复描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixAllState {
    /// 同一等价键的修复可以合并执行
    pub equivalence_key: String,
    pub scope: FixAllScope,
    /// 参与批量修复的诊断编号
    pub diagnostic_ids: Vec<String>,
}

impl FixAllState {
    pub fn new(equivalence_key: impl Into<String>, scope: FixAllScope) -> Self {
        Self {
            equivalence_key: equivalence_key.into(),
            scope,
            diagnostic_ids: Vec::new(),
        }
    }

    pub fn with_diagnostic_id(mut self, id: impl Into<String>) -> Self {
        self.diagnostic_ids.push(id.into());
        self
    }
}

/// 批量修复建议操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixAllSuggestedAction {
    pub title: String,
    pub diagnostic: Diagnostic,
    pub fix_all_state: Option<FixAllState>,
    pub priority: CodeActionPriority,
}

impl FixAllSuggestedAction {
    /// 由诊断创建
    ///
    /// 如果诊断带编号，默认的批量修复范围是当前文档
    pub fn new(title: impl Into<String>, diagnostic: Diagnostic) -> Self {
        let title = title.into();
        let fix_all_state = diagnostic.code.as_ref().map(|code| {
            FixAllState::new(title.clone(), FixAllScope::Document).with_diagnostic_id(code.clone())
        });

        Self {
            title,
            diagnostic,
            fix_all_state,
            priority: CodeActionPriority::default(),
        }
    }

    pub fn with_priority(mut self, priority: CodeActionPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_fix_all_state(mut self, state: FixAllState) -> Self {
        self.fix_all_state = Some(state);
        self
    }

    pub fn without_fix_all(mut self) -> Self {
        self.fix_all_state = None;
        self
    }

    pub fn supports_fix_all(&self) -> bool {
        self.fix_all_state.is_some()
    }
}
