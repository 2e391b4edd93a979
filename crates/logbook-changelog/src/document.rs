//! Typed changelog document model
//!
//! The document is split into exact substrings around two known anchors, so
//! parsing followed by rendering with no edits reproduces the input byte for
//! byte. Edits become structural operations on the model instead of regex
//! surgery over the raw text.

/// Header anchoring the unreleased-changes section
pub const UNRELEASED_HEADER: &str = "## [Unreleased]";
/// Header anchoring the commit-history section
pub const HISTORY_HEADER: &str = "## Commit History";
/// Delimiter separating the history section from the document trailer
const TRAILER_DELIMITER: &str = "\n\n---";
/// Start of a markdown section heading on a fresh line
const SECTION_BOUNDARY: &str = "\n## ";

/// A changelog document split at its structural anchors.
///
/// Concatenating the fields, with the anchor headers re-emitted between
/// them, reproduces the source text exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Text before the first recognized anchor
    preamble: String,
    /// Body of the unreleased section, excluding its header
    unreleased: Option<String>,
    /// Text between the unreleased body and the history header
    middle: String,
    /// Body of the history section, excluding its header
    history: Option<String>,
    /// Trailer from the `\n\n---` delimiter to end of text
    trailer: String,
}

impl Document {
    /// Split document text at the unreleased and history anchors
    pub fn parse(text: &str) -> Self {
        let history_at = text.find(HISTORY_HEADER);

        // The template puts Unreleased before Commit History. An unreleased
        // header sitting after the history section is left as history
        // content rather than risking a destructive edit.
        let unreleased_at = text.find(UNRELEASED_HEADER).filter(|&u| match history_at {
            Some(h) => u < h,
            None => true,
        });

        match (unreleased_at, history_at) {
            (Some(u), h) => {
                let body_start = u + UNRELEASED_HEADER.len();
                let bound = h.unwrap_or(text.len());
                let body_end = text[body_start..bound]
                    .find(SECTION_BOUNDARY)
                    .map(|i| body_start + i)
                    .unwrap_or(bound);

                let (middle, history, trailer) = match h {
                    Some(h) => {
                        let (history, trailer) = split_history(text, h);
                        (text[body_end..h].to_string(), Some(history), trailer)
                    }
                    None => (text[body_end..].to_string(), None, String::new()),
                };

                Self {
                    preamble: text[..u].to_string(),
                    unreleased: Some(text[body_start..body_end].to_string()),
                    middle,
                    history,
                    trailer,
                }
            }
            (None, Some(h)) => {
                let (history, trailer) = split_history(text, h);
                Self {
                    preamble: text[..h].to_string(),
                    unreleased: None,
                    middle: String::new(),
                    history: Some(history),
                    trailer,
                }
            }
            (None, None) => Self {
                preamble: text.to_string(),
                unreleased: None,
                middle: String::new(),
                history: None,
                trailer: String::new(),
            },
        }
    }

    /// Reassemble the document text
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(
            self.preamble.len() + self.middle.len() + self.trailer.len() + 64,
        );
        out.push_str(&self.preamble);
        if let Some(body) = &self.unreleased {
            out.push_str(UNRELEASED_HEADER);
            out.push_str(body);
        }
        out.push_str(&self.middle);
        if let Some(body) = &self.history {
            out.push_str(HISTORY_HEADER);
            out.push_str(body);
        }
        out.push_str(&self.trailer);
        out
    }

    /// Check if the document has an unreleased section
    pub fn has_unreleased(&self) -> bool {
        self.unreleased.is_some()
    }

    /// Check if the document has a commit-history section
    pub fn has_history(&self) -> bool {
        self.history.is_some()
    }

    /// Replace the unreleased body with a freshly rendered block.
    ///
    /// No-op when the document has no unreleased section. Replacing the whole
    /// body is what keeps repeated runs from accumulating stale entries.
    pub fn replace_unreleased(&mut self, block: &str) {
        if self.unreleased.is_some() {
            self.unreleased = Some(format!("\n\n{}\n", block.trim_end()));
        }
    }

    /// Insert a rendered block at the top of the history section, creating
    /// the section at document end when absent.
    ///
    /// The insertion point is always the header end; the trailer delimiter
    /// only bounds the history body during parsing.
    pub fn prepend_history(&mut self, block: &str) {
        let block = block.trim_end();
        match &mut self.history {
            Some(body) => {
                let rest = std::mem::take(body);
                *body = format!("\n\n{block}{rest}");
            }
            None => {
                self.middle.push_str("\n\n");
                self.history = Some(format!("\n\n{block}\n"));
            }
        }
    }
}

/// Split text from the history header into (body, trailer)
fn split_history(text: &str, header_at: usize) -> (String, String) {
    let body_start = header_at + HISTORY_HEADER.len();
    let trailer_start = text[body_start..]
        .find(TRAILER_DELIMITER)
        .map(|i| body_start + i)
        .unwrap_or(text.len());
    (
        text[body_start..trailer_start].to_string(),
        text[trailer_start..].to_string(),
    )
}
