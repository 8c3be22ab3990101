use serde::{Deserialize, Serialize};

/// Phrase that introduces a product description request.
pub const DESCRIBE_PHRASE: &str = "tell me about ";

/// Phrase that introduces a shelf location request.
pub const LOCATE_PHRASE: &str = "where is ";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    DescribeProduct { subject: String },
    LocateProduct { subject: String },
    Unrecognized,
}

/// Tag-only view of an [`Intent`], for logging and matching without the subject.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentKind {
    DescribeProduct,
    LocateProduct,
    Unrecognized,
}

impl Intent {
    pub fn kind(&self) -> IntentKind {
        match self {
            Intent::DescribeProduct { .. } => IntentKind::DescribeProduct,
            Intent::LocateProduct { .. } => IntentKind::LocateProduct,
            Intent::Unrecognized => IntentKind::Unrecognized,
        }
    }

    /// Product name extracted from the utterance, if any.
    pub fn subject(&self) -> Option<&str> {
        match self {
            Intent::DescribeProduct { subject } | Intent::LocateProduct { subject } => {
                Some(subject)
            }
            Intent::Unrecognized => None,
        }
    }
}

/// Classify an utterance.
///
/// Phrases are matched by containment (anywhere in the utterance), ignoring
/// ASCII case, after trimming. `DESCRIBE_PHRASE` is checked before
/// `LOCATE_PHRASE`. The subject is whatever follows the first occurrence of
/// the phrase, trimmed, with its letter case preserved. Empty or unmatched
/// input is `Unrecognized`; this never fails.
///
/// A product whose name itself contains one of the phrases cannot be asked
/// about reliably.
pub fn classify(utterance: &str) -> Intent {
    let text = utterance.trim();

    if let Some(subject) = subject_after(text, DESCRIBE_PHRASE) {
        return Intent::DescribeProduct { subject };
    }
    if let Some(subject) = subject_after(text, LOCATE_PHRASE) {
        return Intent::LocateProduct { subject };
    }
    Intent::Unrecognized
}

/// `text` is trimmed and `phrase` ends in a space, so a match always leaves a
/// non-empty subject.
fn subject_after(text: &str, phrase: &str) -> Option<String> {
    let start = find_ignore_ascii_case(text, phrase)?;
    Some(text[start + phrase.len()..].trim().to_string())
}

/// Byte offset of the first ASCII-case-insensitive occurrence of `needle`.
///
/// `needle` must be ASCII, so any match starts and ends on a char boundary.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    debug_assert!(needle.is_ascii());
    let (hay, pat) = (haystack.as_bytes(), needle.as_bytes());
    if pat.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - pat.len()).find(|&i| hay[i..i + pat.len()].eq_ignore_ascii_case(pat))
}
