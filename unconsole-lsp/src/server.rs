//! Main language server implementation

use std::collections::HashMap;
use std::sync::Arc;

use crate::features::commands;
use serde_json::Value;
use tokio::sync::RwLock;
use tower_lsp::async_trait;
use tower_lsp::jsonrpc::{Error, Result};
use tower_lsp::lsp_types::{
    ApplyWorkspaceEditResponse, DidChangeTextDocumentParams, DidChangeWatchedFilesParams,
    DidChangeWatchedFilesRegistrationOptions, DidCloseTextDocumentParams,
    DidOpenTextDocumentParams, ExecuteCommandOptions, ExecuteCommandParams, FileSystemWatcher,
    GlobPattern, InitializeParams, InitializeResult, InitializedParams, MessageType, Position,
    Range, Registration, ServerCapabilities, ServerInfo, TextDocumentItem,
    TextDocumentSyncCapability, TextDocumentSyncKind, TextEdit, Url, WorkDoneProgressOptions,
    WorkspaceEdit,
};
use tower_lsp::Client;
use unconsole_core::remove::{removed_line_count, DeletionSpan};

/// Glob the host watches for configuration changes on our behalf.
const CONFIG_GLOB: &str = "**/.unconsolerc";
const CONFIG_WATCHER_ID: &str = "unconsole.configWatcher";

#[async_trait]
pub trait LspClient: Send + Sync + Clone + 'static {
    async fn apply_edit(&self, edit: WorkspaceEdit) -> Result<ApplyWorkspaceEditResponse>;
    async fn register_capability(&self, registrations: Vec<Registration>) -> Result<()>;
    async fn log_message(&self, typ: MessageType, message: String);
}

#[async_trait]
impl LspClient for Client {
    async fn apply_edit(&self, edit: WorkspaceEdit) -> Result<ApplyWorkspaceEditResponse> {
        self.apply_edit(edit).await
    }

    async fn register_capability(&self, registrations: Vec<Registration>) -> Result<()> {
        self.register_capability(registrations).await
    }

    async fn log_message(&self, typ: MessageType, message: String) {
        self.log_message(typ, message).await;
    }
}

pub trait FeatureProvider: Send + Sync + 'static {
    fn removal_spans(&self, command: &str, source: &str) -> Option<Vec<DeletionSpan>>;
}

#[derive(Default)]
pub struct DefaultFeatureProvider;

impl DefaultFeatureProvider {
    pub fn new() -> Self {
        Self
    }
}

impl FeatureProvider for DefaultFeatureProvider {
    fn removal_spans(&self, command: &str, source: &str) -> Option<Vec<DeletionSpan>> {
        commands::removal_spans(command, source)
    }
}

#[derive(Default)]
struct DocumentStore {
    entries: RwLock<HashMap<Url, Arc<String>>>,
}

impl DocumentStore {
    async fn upsert(&self, uri: Url, text: String) {
        self.entries.write().await.insert(uri, Arc::new(text));
    }

    async fn get(&self, uri: &Url) -> Option<Arc<String>> {
        self.entries.read().await.get(uri).cloned()
    }

    async fn remove(&self, uri: &Url) {
        self.entries.write().await.remove(uri);
    }
}

pub struct UnconsoleLanguageServer<C = Client, P = DefaultFeatureProvider> {
    client: C,
    documents: DocumentStore,
    features: Arc<P>,
}

impl UnconsoleLanguageServer<Client, DefaultFeatureProvider> {
    pub fn new(client: Client) -> Self {
        Self::with_features(client, Arc::new(DefaultFeatureProvider::new()))
    }
}

impl<C, P> UnconsoleLanguageServer<C, P>
where
    C: LspClient,
    P: FeatureProvider,
{
    pub fn with_features(client: C, features: Arc<P>) -> Self {
        Self {
            client,
            documents: DocumentStore::default(),
            features,
        }
    }
}

fn compute_line_offsets(text: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (idx, ch) in text.char_indices() {
        if ch == '\n' {
            offsets.push(idx + ch.len_utf8());
        }
    }
    offsets
}

fn byte_to_position(offsets: &[usize], offset: usize) -> Position {
    let line = offsets.partition_point(|&start| start <= offset).saturating_sub(1);
    let column = offset - offsets[line];
    Position::new(line as u32, column as u32)
}

fn spans_to_text_edits(text: &str, spans: Vec<DeletionSpan>) -> Vec<TextEdit> {
    if spans.is_empty() {
        return Vec::new();
    }
    let offsets = compute_line_offsets(text);
    spans
        .into_iter()
        .map(|span| TextEdit {
            range: Range {
                start: byte_to_position(&offsets, span.start),
                end: byte_to_position(&offsets, span.end),
            },
            new_text: String::new(),
        })
        .collect()
}

/// Target document URI, supplied by the client adapter as the first
/// command argument.
fn document_uri(arguments: &[Value]) -> Option<Url> {
    arguments
        .first()
        .and_then(|value| value.as_str())
        .and_then(|raw| Url::parse(raw).ok())
}

fn config_watcher_registration() -> Option<Registration> {
    let options = DidChangeWatchedFilesRegistrationOptions {
        watchers: vec![FileSystemWatcher {
            glob_pattern: GlobPattern::String(CONFIG_GLOB.to_string()),
            kind: None,
        }],
    };
    serde_json::to_value(options).ok().map(|value| Registration {
        id: CONFIG_WATCHER_ID.to_string(),
        method: "workspace/didChangeWatchedFiles".to_string(),
        register_options: Some(value),
    })
}

#[async_trait]
impl<C, P> tower_lsp::LanguageServer for UnconsoleLanguageServer<C, P>
where
    C: LspClient,
    P: FeatureProvider,
{
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        let capabilities = ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
            execute_command_provider: Some(ExecuteCommandOptions {
                commands: commands::command_ids(),
                work_done_progress_options: WorkDoneProgressOptions::default(),
            }),
            ..ServerCapabilities::default()
        };

        Ok(InitializeResult {
            capabilities,
            server_info: Some(ServerInfo {
                name: "unconsole-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        if let Some(registration) = config_watcher_registration() {
            if let Err(err) = self.client.register_capability(vec![registration]).await {
                tracing::debug!("config watcher registration rejected: {err}");
            }
        }
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let TextDocumentItem { uri, text, .. } = params.text_document;
        self.documents.upsert(uri, text).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // Full sync: the last change carries the whole document.
        if let Some(change) = params.content_changes.into_iter().last() {
            self.documents
                .upsert(params.text_document.uri, change.text)
                .await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.remove(&params.text_document.uri).await;
    }

    async fn did_change_watched_files(&self, params: DidChangeWatchedFilesParams) {
        tracing::debug!("{} watched config file(s) changed", params.changes.len());
    }

    async fn execute_command(&self, params: ExecuteCommandParams) -> Result<Option<Value>> {
        if commands::statement_kind(&params.command).is_none() {
            return Err(Error::invalid_request());
        }
        let Some(uri) = document_uri(&params.arguments) else {
            // No target buffer: nothing to operate on.
            return Ok(None);
        };
        let Some(text) = self.documents.get(&uri).await else {
            return Ok(None);
        };
        let Some(spans) = self.features.removal_spans(&params.command, &text) else {
            return Err(Error::invalid_request());
        };
        if spans.is_empty() {
            return Ok(None);
        }

        let removed = removed_line_count(&spans);
        let edits = spans_to_text_edits(&text, spans);
        let mut changes = HashMap::new();
        changes.insert(uri.clone(), edits);
        let edit = WorkspaceEdit {
            changes: Some(changes),
            ..Default::default()
        };

        let response = self.client.apply_edit(edit).await?;
        if response.applied {
            tracing::debug!("removed {removed} console statement line(s) from {uri}");
        } else {
            let reason = response
                .failure_reason
                .unwrap_or_else(|| "no reason given".to_string());
            self.client
                .log_message(
                    MessageType::WARNING,
                    format!("host declined console removal edit for {uri}: {reason}"),
                )
                .await;
        }
        Ok(None)
    }
}
