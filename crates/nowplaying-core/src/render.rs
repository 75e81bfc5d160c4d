//! Fixed-width layout of one playback session.
//!
//! A rendered line has three columns:
//!
//! ```text
//! {ordinal.} {title}{dots}{ user} {glyph}
//! ```
//!
//! The ordinal column is right-aligned to its own width, the user column is
//! one wider than the name so it always starts with a space, and the middle
//! column takes whatever is left after [`SEPARATOR_WIDTH`].

use crate::entity::decode_apostrophe;
use crate::model::{MediaKind, SessionRecord};
use crate::text::{display_len, pad_dots, truncate, DEFAULT_LEADER};
use crate::theme::{Category, ColorTheme};

/// Space after the ordinal, space before the glyph, the glyph itself and a
/// right margin so full lines never hit the terminal's last column.
pub const SEPARATOR_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub columns: usize,
    pub leader: char,
}

impl Layout {
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            leader: DEFAULT_LEADER,
        }
    }

    pub fn with_leader(mut self, leader: char) -> Self {
        self.leader = leader;
        self
    }
}

/// Column widths for one render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    pub ordinal_width: usize,
    pub middle_width: usize,
    pub user_width: usize,
}

impl LayoutMetrics {
    /// The middle column never drops below one character, however narrow
    /// the terminal.
    pub fn compute(columns: usize, ordinal: usize, user: &str) -> Self {
        let ordinal_width = ordinal.to_string().len() + 1;
        let user_width = display_len(user) + 1;
        let middle_width = columns
            .saturating_sub(ordinal_width + user_width + SEPARATOR_WIDTH)
            .max(1);

        Self {
            ordinal_width,
            middle_width,
            user_width,
        }
    }
}

pub struct SessionRenderer<'a> {
    theme: &'a ColorTheme,
    layout: Layout,
}

impl<'a> SessionRenderer<'a> {
    pub fn new(theme: &'a ColorTheme, layout: Layout) -> Self {
        Self { theme, layout }
    }

    /// Render `session` as one or two lines, without a trailing newline.
    pub fn render(&self, ordinal: usize, session: &SessionRecord) -> String {
        let album = decode_apostrophe(&session.album);
        let title = decode_apostrophe(&session.title);
        let metrics = LayoutMetrics::compute(self.layout.columns, ordinal, &session.user);
        let ordinal_field = format!("{}.", ordinal);
        let glyph = session
            .transcode
            .map(|mode| self.theme.style(&mode.glyph().to_string(), Category::Transcode))
            .unwrap_or_default();

        let block = match session.kind {
            MediaKind::Movie => {
                let title = truncate(&title, metrics.middle_width);
                self.line(&metrics, &ordinal_field, &title, &session.user, &glyph)
            }
            MediaKind::Episode | MediaKind::Track => {
                let combined = format!("{}: {}", album, title);
                if display_len(&combined) > metrics.middle_width {
                    let album = format!("{}:", truncate(&album, metrics.middle_width));
                    let title = truncate(&title, metrics.middle_width);
                    format!(
                        "{:>width$} {}\n{}",
                        ordinal_field,
                        album,
                        self.line(&metrics, "", &title, &session.user, &glyph),
                        width = metrics.ordinal_width,
                    )
                } else {
                    self.line(&metrics, &ordinal_field, &combined, &session.user, &glyph)
                }
            }
        };

        self.theme.style(&block, session.kind.category())
    }

    fn line(
        &self,
        metrics: &LayoutMetrics,
        ordinal_field: &str,
        middle: &str,
        user: &str,
        glyph: &str,
    ) -> String {
        let dots = pad_dots(display_len(middle), metrics.middle_width, self.layout.leader);
        let mut line = format!(
            "{:>ordinal_width$} {}{}{:>user_width$}",
            ordinal_field,
            middle,
            dots,
            user,
            ordinal_width = metrics.ordinal_width,
            user_width = metrics.user_width,
        );
        if !glyph.is_empty() {
            line.push(' ');
            line.push_str(glyph);
        }
        line
    }
}
