//! 建议操作优先级

use std::fmt;

/// 建议操作优先级，数值越大越靠前
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum CodeActionPriority {
    Lowest,
    Low,
    #[default]
    Medium,
    High,
}

impl CodeActionPriority {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lowest => "lowest",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for CodeActionPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
