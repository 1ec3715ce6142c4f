//! 运算符补全项
//!
//! 按目录的排序键排列候选，标签由符号和用法示例组成，
//! 语法位置作为分组说明显示在右侧。

use crate::config::ServerConfig;
use quill_operators::{
    OperatorDescriptor, OperatorError, OperatorKind, OperatorSymbol, TypeCategory,
};
use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, CompletionItemLabelDetails, Documentation, MarkupContent,
    MarkupKind,
};

/// 把候选运算符转换为补全项
///
/// 上游只应提供可重载运算符；遇到无法识别的名称时整个请求失败，
/// 错误原样返回给调用方。
pub fn operator_items(
    symbols: &[OperatorSymbol],
    config: &ServerConfig,
) -> Result<Vec<CompletionItem>, OperatorError> {
    let mut resolved: Vec<(OperatorDescriptor, &OperatorSymbol)> =
        Vec::with_capacity(symbols.len());
    for symbol in symbols {
        let d = symbol.descriptor()?;
        if config.include_conversions || !is_conversion(d.kind) {
            resolved.push((d, symbol));
        }
    }

    resolved.sort_by(|(a, sa), (b, sb)| {
        a.sort_index
            .cmp(&b.sort_index)
            .then_with(|| sa.containing_type.cmp(&sb.containing_type))
    });

    Ok(resolved
        .into_iter()
        .map(|(d, symbol)| completion_item(&d, symbol, config))
        .collect())
}

fn is_conversion(kind: OperatorKind) -> bool {
    matches!(kind, OperatorKind::True | OperatorKind::False)
}

fn completion_item(
    d: &OperatorDescriptor,
    symbol: &OperatorSymbol,
    config: &ServerConfig,
) -> CompletionItem {
    let documentation = if config.show_lifted {
        symbol.lifted_signature().map(|sig| {
            Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::Markdown,
                value: format!("Also available on nullable operands: `{}`", sig),
            })
        })
    } else {
        None
    };

    CompletionItem {
        label: d.sign.to_string(),
        label_details: Some(CompletionItemLabelDetails {
            detail: Some(format!(" {}", d.usage_example)),
            description: Some(d.position.label().to_string()),
        }),
        kind: Some(CompletionItemKind::OPERATOR),
        detail: Some(signature(symbol)),
        documentation,
        sort_text: Some(format!("{:02}_{}", d.sort_index, symbol.containing_type)),
        filter_text: Some(d.sign.to_string()),
        insert_text: Some(d.sign.to_string()),
        ..Default::default()
    }
}

/// `Vector.op_Addition(T, T) -> T`
fn signature(symbol: &OperatorSymbol) -> String {
    let params: Vec<String> = symbol
        .shape
        .parameter_types
        .iter()
        .map(TypeCategory::to_string)
        .collect();
    format!(
        "{}.{}({}) -> {}",
        symbol.containing_type,
        symbol.member_name,
        params.join(", "),
        symbol.shape.return_type
    )
}
