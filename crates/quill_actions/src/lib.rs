//! Quill Actions
//!
//! 建议操作（suggested action）的数据载体。
//! 只保存诊断、可选的批量修复描述和优先级，不含算法逻辑，
//! 由语言服务器转换为 code action 响应。

pub mod fix_all;
pub mod priority;

pub use fix_all::{FixAllScope, FixAllState, FixAllSuggestedAction};
pub use priority::CodeActionPriority;
