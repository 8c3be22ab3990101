use std::sync::Arc;

use voicepick_core::RequestContext;
use voicepick_inventory::InventoryTable;

use crate::intent::{Intent, classify};
use crate::response::respond;

pub const LOGIN_REQUIRED: &str = "Please log in to access warehouse functions.";

/// Answer to one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// `None` when the request was refused before classification.
    pub intent: Option<Intent>,
    pub text: String,
}

/// Stateless command interpreter over a shared, read-only inventory table.
///
/// Cloning is cheap (the table is behind an `Arc`), and every call is
/// independent, so one interpreter can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Interpreter {
    table: Arc<InventoryTable>,
}

impl Interpreter {
    pub fn new(table: Arc<InventoryTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &InventoryTable {
        &self.table
    }

    /// Classify and answer, without any access check.
    pub fn interpret(&self, utterance: &str) -> Reply {
        let intent = classify(utterance);
        let text = respond(&intent, &self.table);

        tracing::debug!(
            intent = ?intent.kind(),
            subject = intent.subject().unwrap_or_default(),
            "utterance interpreted"
        );

        Reply {
            intent: Some(intent),
            text,
        }
    }

    /// Entry point for callers: unauthenticated requests are refused.
    pub fn handle(&self, ctx: &RequestContext, utterance: &str) -> Reply {
        match ctx.require_authenticated() {
            Ok(username) => {
                tracing::debug!(username, "warehouse command");
                self.interpret(utterance)
            }
            Err(err) => {
                tracing::info!(error = %err, "warehouse command refused: not logged in");
                Reply {
                    intent: None,
                    text: LOGIN_REQUIRED.to_string(),
                }
            }
        }
    }
}
