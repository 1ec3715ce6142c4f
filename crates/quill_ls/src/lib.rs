//! Quill Language Server
//!
//! 基于 tower-lsp 的语言服务器，为补全列表提供运算符候选。
//! 候选方法由上游 [`OperatorSource`] 提供，本 crate 只负责呈现。

pub mod actions;
pub mod completion;
pub mod config;
pub mod source;

pub use config::ServerConfig;
pub use source::{NoOperators, OperatorSource, SourceError, StaticOperatorSource};

use std::sync::Arc;
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService, Server};
use tracing::{debug, error, info};

pub struct Backend {
    pub client: Client,
    source: Arc<dyn OperatorSource>,
    config: RwLock<ServerConfig>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self::with_source(client, Arc::new(NoOperators))
    }

    pub fn with_source(client: Client, source: Arc<dyn OperatorSource>) -> Self {
        Self {
            client,
            source,
            config: RwLock::new(ServerConfig::default()),
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        info!("received initialize request");

        let config = ServerConfig::from_options(params.initialization_options);
        debug!(?config, "server configuration");
        *self.config.write().await = config;

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec![".".to_string()]),
                    ..Default::default()
                }),
                code_action_provider: Some(CodeActionProviderCapability::Simple(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "quill-ls".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
            ..Default::default()
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        info!("server initialized and ready");
        self.client
            .log_message(MessageType::INFO, "Quill Language Server initialized!")
            .await;
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let pos = params.text_document_position.position;
        debug!(%uri, line = pos.line, col = pos.character, "completion request");

        let symbols = self.source.operators_at(&uri, pos);
        let config = self.config.read().await.clone();
        let items = completion::operator_items(&symbols, &config).map_err(|err| {
            error!(%uri, "operator catalog fault: {}", err);
            tower_lsp::jsonrpc::Error::internal_error()
        })?;
        debug!(candidates = symbols.len(), items = items.len(), "operator completion");

        Ok(Some(CompletionResponse::Array(items)))
    }

    async fn code_action(&self, params: CodeActionParams) -> Result<Option<CodeActionResponse>> {
        let uri = params.text_document.uri;
        let suggested = self.source.suggested_actions(&uri, params.range);
        debug!(%uri, actions = suggested.len(), "code action request");

        let response = actions::to_code_actions(&suggested, params.range)
            .into_iter()
            .map(CodeActionOrCommand::CodeAction)
            .collect();
        Ok(Some(response))
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let pos = params.text_document_position_params.position;
        debug!(line = pos.line, col = pos.character, "hover request");

        Ok(Some(Hover {
            contents: HoverContents::Scalar(MarkedString::String(
                "Quill operator metadata server".to_string(),
            )),
            range: None,
        }))
    }

    async fn shutdown(&self) -> Result<()> {
        info!("shutdown requested");
        Ok(())
    }
}

/// 在 stdio 上运行服务器
pub async fn run_server(source: Arc<dyn OperatorSource>) {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(|client| Backend::with_source(client, source));
    Server::new(stdin, stdout, socket).serve(service).await;
}
