//! Line-oriented scanning of server and session documents.
//!
//! Lines are classified into [`LineEvent`]s and folded through
//! [`ScanState`], which holds the record being accumulated between a
//! `<Video>`/`<Track>` open marker and its close marker.

use crate::error::{Error, Result};
use crate::extract::{extract, extract_or_empty};
use crate::model::{MediaKind, SessionRecord, TranscodeMode};
use tracing::debug;

/// Substring servers put in the body of a rejected request.
pub const UNAUTHORIZED_MARKER: &str = "Unauthorized";

pub const PLACEHOLDER_SERVER_NAME: &str = "Media Server";

/// Name the report uses for a server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerIdentity {
    friendly_name: String,
}

impl Default for ServerIdentity {
    fn default() -> Self {
        Self {
            friendly_name: PLACEHOLDER_SERVER_NAME.to_string(),
        }
    }
}

impl ServerIdentity {
    pub fn friendly_name(&self) -> &str {
        &self.friendly_name
    }

    /// Scan a server descriptor document.
    ///
    /// Stops at the first line carrying `friendlyName`. An unauthorized
    /// marker on an earlier line aborts with [`Error::Unauthorized`]; the
    /// name line itself is never checked for the marker.
    pub fn scan(&mut self, document: &str, host: &str, token_supplied: bool) -> Result<()> {
        for line in document.lines() {
            if let Some(name) = extract("friendlyName", line) {
                if !name.is_empty() {
                    self.friendly_name = name.to_string();
                }
                debug!(host, name = %self.friendly_name, "resolved server name");
                break;
            }

            if line.contains(UNAUTHORIZED_MARKER) {
                return Err(Error::Unauthorized {
                    host: host.to_string(),
                    token_supplied,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent<'a> {
    RecordOpen {
        kind: MediaKind,
        album: &'a str,
        title: &'a str,
        self_closing: bool,
    },
    User(&'a str),
    Transcode(TranscodeMode),
    RecordClose,
    ContainerClose,
}

/// Classify one document line; `None` for lines the report ignores.
pub fn classify(line: &str) -> Option<LineEvent<'_>> {
    let (closing, name) = tag_name(line)?;

    match (closing, name) {
        (false, "Video") | (false, "Track") => {
            let fallback = if name == "Track" {
                MediaKind::Track
            } else {
                MediaKind::Movie
            };
            let kind = MediaKind::from_type_attr(extract_or_empty("type", line)).unwrap_or(fallback);

            Some(LineEvent::RecordOpen {
                kind,
                album: extract_or_empty("grandparentTitle", line),
                title: extract_or_empty("title", line),
                self_closing: line.trim_end().ends_with("/>"),
            })
        }
        (false, "User") => Some(LineEvent::User(extract_or_empty("title", line))),
        (false, "TranscodeSession") => Some(LineEvent::Transcode(TranscodeMode::from_hw_flag(
            extract_or_empty("transcodeHwFullPipeline", line),
        ))),
        (true, "Video") | (true, "Track") => Some(LineEvent::RecordClose),
        (true, "MediaContainer") => Some(LineEvent::ContainerClose),
        _ => None,
    }
}

/// Element name of the tag a line starts with, and whether it is a close tag.
fn tag_name(line: &str) -> Option<(bool, &str)> {
    let rest = line.trim_start().strip_prefix('<')?;
    let (closing, rest) = match rest.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, rest),
    };
    let end = rest
        .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
        .unwrap_or(rest.len());

    Some((closing, &rest[..end]))
}

/// What a single [`ScanState::step`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    None,
    Completed(SessionRecord),
    ContainerClosed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Idle,
    Accumulating(SessionRecord),
}

impl ScanState {
    pub fn step(self, event: LineEvent<'_>) -> (ScanState, Transition) {
        match (self, event) {
            (
                state,
                LineEvent::RecordOpen {
                    kind,
                    album,
                    title,
                    self_closing,
                },
            ) => {
                if let ScanState::Accumulating(dropped) = state {
                    debug!(title = %dropped.title, "record opened before previous one closed");
                }
                let record = SessionRecord::new(kind, album, title);
                if self_closing {
                    (ScanState::Idle, Transition::Completed(record))
                } else {
                    (ScanState::Accumulating(record), Transition::None)
                }
            }
            (ScanState::Accumulating(mut record), LineEvent::User(user)) => {
                if !user.is_empty() {
                    record.user = user.to_string();
                }
                (ScanState::Accumulating(record), Transition::None)
            }
            (ScanState::Accumulating(record), LineEvent::Transcode(mode)) => {
                (ScanState::Accumulating(record.with_transcode(mode)), Transition::None)
            }
            (ScanState::Accumulating(record), LineEvent::RecordClose) => {
                (ScanState::Idle, Transition::Completed(record))
            }
            (_, LineEvent::ContainerClose) => (ScanState::Idle, Transition::ContainerClosed),
            (ScanState::Idle, _) => (ScanState::Idle, Transition::None),
        }
    }
}
