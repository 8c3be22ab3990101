//! Seams for the external speech collaborators.
//!
//! Capture (microphone + speech-to-text) and synthesis (text-to-speech) are
//! provided outside this crate. Capture failures are plain values, mapped to
//! utterance text that the interpreter classifies as unrecognized.

use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use voicepick_core::RequestContext;

use crate::interpreter::{Interpreter, Reply};

/// Spoken before capture starts.
pub const LISTENING_PROMPT: &str =
    "Listening... Speak now! You can ask about product details, stock location, or pick status.";

pub const UNINTELLIGIBLE: &str = "Could not understand. Please speak clearly.";
pub const SERVICE_UNAVAILABLE: &str = "Speech service unavailable.";

/// Result of one capture attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Recognized(String),
    /// Audio was captured but could not be transcribed.
    Unintelligible,
    /// The recognition service could not be reached.
    ServiceUnavailable,
}

impl CaptureOutcome {
    pub fn into_utterance(self) -> String {
        match self {
            CaptureOutcome::Recognized(text) => text,
            CaptureOutcome::Unintelligible => UNINTELLIGIBLE.to_string(),
            CaptureOutcome::ServiceUnavailable => SERVICE_UNAVAILABLE.to_string(),
        }
    }
}

/// Source of spoken utterances.
pub trait SpeechCapture {
    fn capture(&mut self) -> CaptureOutcome;
}

/// Destination for response text (display, speech synthesis, ...).
pub trait ResponseSink {
    fn deliver(&mut self, text: &str) -> Result<()>;
}

/// Capture fed by an external speech-to-text process that writes one
/// transcript per line (a file or a named pipe).
///
/// A blank line is an attempt that could not be transcribed; end of input or
/// a read failure means the recognition service is gone.
#[derive(Debug)]
pub struct LineCapture<R> {
    reader: R,
}

impl<R: BufRead> LineCapture<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> SpeechCapture for LineCapture<R> {
    fn capture(&mut self) -> CaptureOutcome {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => CaptureOutcome::ServiceUnavailable,
            Ok(_) => match line.trim() {
                "" => CaptureOutcome::Unintelligible,
                text => CaptureOutcome::Recognized(text.to_string()),
            },
            Err(err) => {
                tracing::warn!(error = %err, "transcript feed read failed");
                CaptureOutcome::ServiceUnavailable
            }
        }
    }
}

/// Display sink: one response per write, newline-terminated.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResponseSink for WriterSink<W> {
    fn deliver(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Stand-in for a text-to-speech engine: records what would be spoken in
/// the trace log.
#[derive(Debug, Default)]
pub struct TracingSpeechSink {
    spoken: usize,
}

impl TracingSpeechSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of utterances synthesised so far.
    pub fn spoken(&self) -> usize {
        self.spoken
    }
}

impl ResponseSink for TracingSpeechSink {
    fn deliver(&mut self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            bail!("cannot speak empty text");
        }
        tracing::info!(target: "voicepick::speech", text, "speak");
        self.spoken += 1;
        Ok(())
    }
}

/// One voice round: prompt, capture, interpret, deliver to every sink.
///
/// Sink failures are logged and do not stop delivery to the other sinks.
pub fn listen_and_respond(
    capture: &mut dyn SpeechCapture,
    interpreter: &Interpreter,
    ctx: &RequestContext,
    sinks: &mut [&mut dyn ResponseSink],
) -> Reply {
    for sink in sinks.iter_mut() {
        if let Err(err) = sink.deliver(LISTENING_PROMPT) {
            tracing::warn!(error = %err, "failed to deliver listening prompt");
        }
    }

    let outcome = capture.capture();
    if !matches!(outcome, CaptureOutcome::Recognized(_)) {
        tracing::warn!(outcome = ?outcome, "speech capture failed");
    }

    let reply = interpreter.handle(ctx, &outcome.into_utterance());
    for sink in sinks.iter_mut() {
        if let Err(err) = sink.deliver(&reply.text) {
            tracing::warn!(error = %err, "failed to deliver response");
        }
    }
    reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::classify;
    use crate::intent::Intent;

    #[test]
    fn capture_failures_classify_as_unrecognized() {
        for outcome in [CaptureOutcome::Unintelligible, CaptureOutcome::ServiceUnavailable] {
            assert_eq!(classify(&outcome.into_utterance()), Intent::Unrecognized);
        }
    }

    #[test]
    fn recognized_text_passes_through() {
        let outcome = CaptureOutcome::Recognized("where is gear".into());
        assert_eq!(outcome.into_utterance(), "where is gear");
    }

    #[test]
    fn line_capture_maps_feed_to_outcomes() {
        let feed = "where is gear\n\n  tell me about bolt  \n";
        let mut capture = LineCapture::new(feed.as_bytes());
        assert_eq!(capture.capture(), CaptureOutcome::Recognized("where is gear".into()));
        assert_eq!(capture.capture(), CaptureOutcome::Unintelligible);
        assert_eq!(capture.capture(), CaptureOutcome::Recognized("tell me about bolt".into()));
        assert_eq!(capture.capture(), CaptureOutcome::ServiceUnavailable);
    }

    #[test]
    fn writer_sink_writes_lines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.deliver("one").unwrap();
        sink.deliver("two\nlines").unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "one\ntwo\nlines\n");
    }

    #[test]
    fn speech_sink_rejects_empty_text() {
        let mut sink = TracingSpeechSink::new();
        assert!(sink.deliver("   ").is_err());
        assert!(sink.deliver("Bolt 5mm is stored at A-12.").is_ok());
        assert_eq!(sink.spoken(), 1);
    }
}
