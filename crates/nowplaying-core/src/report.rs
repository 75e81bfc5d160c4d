use std::io::Write;

use crate::error::Result;
use crate::render::{Layout, SessionRenderer};
use crate::scan::{classify, ScanState, ServerIdentity, Transition};
use crate::theme::{Category, ColorTheme};
use tracing::debug;

/// Writes the now-playing report for one or more servers to a text sink.
///
/// The ordinal counter lives as long as the reporter, so scanning several
/// hosts in a row numbers their sessions continuously.
pub struct Reporter<W: Write> {
    out: W,
    theme: ColorTheme,
    layout: Layout,
    verbose: bool,
    sessions_rendered: usize,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, theme: ColorTheme, layout: Layout, verbose: bool) -> Self {
        Self {
            out,
            theme,
            layout,
            verbose,
            sessions_rendered: 0,
        }
    }

    pub fn sessions_rendered(&self) -> usize {
        self.sessions_rendered
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render every session in a session-list document.
    ///
    /// Returns how many sessions this document contributed.
    pub fn scan_sessions(
        &mut self,
        document: &str,
        host: &str,
        server: &ServerIdentity,
    ) -> Result<usize> {
        let mut state = ScanState::default();
        let mut rendered_here = 0;

        for line in document.lines() {
            let Some(event) = classify(line) else {
                continue;
            };

            let (next, transition) = state.step(event);
            state = next;

            match transition {
                Transition::Completed(record) => {
                    if rendered_here == 0 {
                        let banner = format!("Now playing on {}", server.friendly_name());
                        writeln!(self.out)?;
                        writeln!(self.out, "{}", self.theme.style(&banner, Category::Log))?;
                    }
                    rendered_here += 1;
                    self.sessions_rendered += 1;

                    let renderer = SessionRenderer::new(&self.theme, self.layout);
                    writeln!(self.out, "{}", renderer.render(self.sessions_rendered, &record))?;
                }
                Transition::ContainerClosed => {
                    if self.sessions_rendered > 0 {
                        writeln!(self.out)?;
                    }
                }
                Transition::None => {}
            }
        }

        if let ScanState::Accumulating(record) = state {
            debug!(host, title = %record.title, "document ended inside an open record");
        }

        if rendered_here == 0 && self.verbose {
            let message = format!(
                "Nothing is playing on {} ({})",
                server.friendly_name(),
                host
            );
            writeln!(self.out, "{}", self.theme.style(&message, Category::Log))?;
        }

        debug!(host, sessions = rendered_here, "session scan finished");
        Ok(rendered_here)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_TRACKS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<MediaContainer size="2">
<Track grandparentTitle="Daft Punk" title="Aerodynamic" type="track">
<Player title="Web" />
</Track>
<Track grandparentTitle="Justice" title="Genesis" type="track">
</Track>
</MediaContainer>
"#;

    fn server(name: &str) -> ServerIdentity {
        let mut server = ServerIdentity::default();
        let line = format!("<MediaContainer friendlyName=\"{}\">", name);
        server.scan(&line, "host", false).unwrap();
        server
    }

    fn reporter(verbose: bool) -> Reporter<Vec<u8>> {
        Reporter::new(Vec::new(), ColorTheme::plain(), Layout::new(40), verbose)
    }

    fn output(reporter: Reporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_two_tracks_without_user_or_transcode() {
        let mut reporter = reporter(false);
        let count = reporter
            .scan_sessions(TWO_TRACKS, "nas", &server("attic"))
            .unwrap();
        assert_eq!(count, 2);

        let out = output(reporter);
        let lines: Vec<&str> = out.lines().collect();

        // 40 - 2 - 6 - 4 = 28
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Now playing on attic");
        assert_eq!(
            lines[2],
            format!("1. Daft Punk: Aerodynamic{} local", ".".repeat(28 - 22))
        );
        assert_eq!(
            lines[3],
            format!("2. Justice: Genesis{} local", ".".repeat(28 - 16))
        );
        assert_eq!(lines[4], "");
    }

    #[test]
    fn test_user_and_transcode_reset_between_records() {
        let document = r#"<MediaContainer size="2">
<Video title="Alien" type="movie">
<User id="1" title="ripley" />
<TranscodeSession transcodeHwFullPipeline="1" />
</Video>
<Video title="Heat" type="movie">
</Video>
</MediaContainer>
"#;
        let mut reporter = reporter(false);
        reporter.scan_sessions(document, "nas", &server("attic")).unwrap();

        let out = output(reporter);
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[2].starts_with("1. Alien"));
        assert!(lines[2].ends_with(" ripley »"));
        assert!(lines[3].starts_with("2. Heat"));
        assert!(lines[3].ends_with(" local"));
    }

    #[test]
    fn test_nothing_playing_verbose() {
        let mut reporter = reporter(true);
        let count = reporter
            .scan_sessions("<MediaContainer size=\"0\">\n</MediaContainer>\n", "nas", &server("attic"))
            .unwrap();

        assert_eq!(count, 0);
        assert_eq!(output(reporter), "Nothing is playing on attic (nas)\n");
    }

    #[test]
    fn test_nothing_playing_quiet() {
        let mut reporter = reporter(false);
        reporter
            .scan_sessions("<MediaContainer size=\"0\">\n</MediaContainer>\n", "nas", &server("attic"))
            .unwrap();

        assert_eq!(output(reporter), "");
    }

    #[test]
    fn test_ordinals_continue_across_hosts() {
        let mut reporter = reporter(false);
        reporter.scan_sessions(TWO_TRACKS, "a", &server("one")).unwrap();
        reporter.scan_sessions(TWO_TRACKS, "b", &server("two")).unwrap();
        assert_eq!(reporter.sessions_rendered(), 4);

        let out = output(reporter);
        assert_eq!(out.matches("Now playing on").count(), 2);
        assert!(out.contains("Now playing on two\n3. Daft Punk"));
        assert!(out.contains("\n4. Justice"));
    }

    #[test]
    fn test_banner_is_styled_when_color_enabled() {
        let theme = ColorTheme::new(true);
        let expected = theme.style("Now playing on attic", Category::Log);
        let mut reporter = Reporter::new(Vec::new(), theme, Layout::new(40), false);
        reporter.scan_sessions(TWO_TRACKS, "nas", &server("attic")).unwrap();

        assert!(output(reporter).contains(&expected));
    }
}
