//! 服务器配置
//!
//! 从 `initializationOptions` 读取，缺省字段使用默认值

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    /// 在补全文档中显示提升后的签名
    pub show_lifted: bool,
    /// 是否提供 `true` / `false` 运算符
    pub include_conversions: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            show_lifted: true,
            include_conversions: true,
        }
    }
}

impl ServerConfig {
    /// 解析初始化参数，格式错误时回退到默认配置
    pub fn from_options(options: Option<Value>) -> Self {
        match options {
            None | Some(Value::Null) => Self::default(),
            Some(value) => serde_json::from_value(value).unwrap_or_else(|err| {
                warn!("invalid initializationOptions, using defaults: {}", err);
                Self::default()
            }),
        }
    }
}
