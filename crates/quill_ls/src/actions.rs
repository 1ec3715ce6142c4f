//! 建议操作到 LSP code action 的转换

use quill_actions::{CodeActionPriority, FixAllSuggestedAction};
use quill_diagnostics::{Diagnostic, DiagnosticLevel};
use serde_json::json;
use tower_lsp::lsp_types::{
    self, CodeAction, CodeActionKind, DiagnosticSeverity, NumberOrString, Range,
};

fn severity(level: DiagnosticLevel) -> DiagnosticSeverity {
    match level {
        DiagnosticLevel::Error => DiagnosticSeverity::ERROR,
        DiagnosticLevel::Warning => DiagnosticSeverity::WARNING,
        DiagnosticLevel::Info => DiagnosticSeverity::INFORMATION,
        DiagnosticLevel::Hidden => DiagnosticSeverity::HINT,
    }
}

/// 诊断不带位置，LSP 位置沿用请求的范围
///
/// 注释与建议追加到消息末尾，替换文本放进 `data.replacements`
pub fn to_lsp_diagnostic(diagnostic: &Diagnostic, range: Range) -> lsp_types::Diagnostic {
    let mut message = diagnostic.message.clone();
    for note in &diagnostic.notes {
        message.push_str("\nnote: ");
        message.push_str(note);
    }
    for suggestion in &diagnostic.suggestions {
        message.push_str("\nhelp: ");
        message.push_str(&suggestion.message);
    }

    let replacements: Vec<&str> = diagnostic.replacements().collect();
    let data = (!replacements.is_empty()).then(|| json!({ "replacements": replacements }));

    lsp_types::Diagnostic {
        range,
        severity: Some(severity(diagnostic.level)),
        code: diagnostic.code.clone().map(NumberOrString::String),
        source: Some("quill".to_string()),
        message,
        data,
        ..Default::default()
    }
}

pub fn to_code_action(action: &FixAllSuggestedAction, range: Range) -> CodeAction {
    let data = action.fix_all_state.as_ref().map(|state| {
        json!({
            "equivalenceKey": state.equivalence_key,
            "scope": state.scope.to_string(),
            "diagnosticIds": state.diagnostic_ids,
        })
    });

    CodeAction {
        title: action.title.clone(),
        kind: Some(CodeActionKind::QUICKFIX),
        diagnostics: Some(vec![to_lsp_diagnostic(&action.diagnostic, range)]),
        is_preferred: Some(action.priority == CodeActionPriority::High),
        data,
        ..Default::default()
    }
}

/// 按优先级从高到低转换
pub fn to_code_actions(actions: &[FixAllSuggestedAction], range: Range) -> Vec<CodeAction> {
    let mut ordered: Vec<&FixAllSuggestedAction> = actions.iter().collect();
    ordered.sort_by(|a, b| b.priority.cmp(&a.priority));
    ordered
        .into_iter()
        .map(|action| to_code_action(action, range))
        .collect()
}
