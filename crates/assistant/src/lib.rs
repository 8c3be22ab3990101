//! Command interpretation for the warehouse voice assistant.
//!
//! The pipeline is `classify -> lookup -> format`, run once per utterance:
//!
//! - [`intent::classify`] turns free text into an [`Intent`].
//! - [`response::respond`] resolves the intent against an
//!   [`InventoryTable`](voicepick_inventory::InventoryTable) and formats the
//!   answer.
//! - [`Interpreter`] bundles both behind a shared, read-only table and gates
//!   requests on the caller's [`RequestContext`](voicepick_core::RequestContext).
//!
//! Speech capture and synthesis are external; [`speech`] only defines the
//! seams they plug into.

pub mod intent;
pub mod interpreter;
pub mod response;
pub mod speech;

pub use intent::{Intent, IntentKind, classify};
pub use interpreter::{Interpreter, Reply};
pub use response::respond;
pub use speech::{
    CaptureOutcome, LineCapture, ResponseSink, SpeechCapture, TracingSpeechSink, WriterSink,
    listen_and_respond,
};
