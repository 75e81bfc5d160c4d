use owo_colors::Style;

/// Semantic categories the report colors by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Movie,
    Episode,
    Track,
    Transcode,
    Log,
    Error,
}

/// Read-only category → style table.
///
/// Whether color is used at all is decided by the caller (terminal probe,
/// `--color`) and passed in as `enabled`.
#[derive(Debug, Clone)]
pub struct ColorTheme {
    enabled: bool,
    movie: Style,
    episode: Style,
    track: Style,
    transcode: Style,
    log: Style,
    error: Style,
}

impl ColorTheme {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            movie: Style::new().blue().bold(),
            episode: Style::new().cyan().bold(),
            track: Style::new().magenta().bold(),
            transcode: Style::new().green().bold(),
            log: Style::new().green().bold(),
            error: Style::new().red().bold(),
        }
    }

    /// Theme that never emits escape codes.
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn style_of(&self, category: Category) -> Style {
        match category {
            Category::Movie => self.movie,
            Category::Episode => self.episode,
            Category::Track => self.track,
            Category::Transcode => self.transcode,
            Category::Log => self.log,
            Category::Error => self.error,
        }
    }

    /// Wrap `text` in the category's escape codes followed by a reset.
    pub fn style(&self, text: &str, category: Category) -> String {
        if !self.enabled || text.is_empty() {
            return text.to_string();
        }
        format!("{}", self.style_of(category).style(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_theme_passes_text_through() {
        let theme = ColorTheme::plain();
        assert_eq!(theme.style("Alien", Category::Movie), "Alien");
        assert!(!theme.is_enabled());
    }

    #[test]
    fn test_enabled_theme_wraps_and_resets() {
        let theme = ColorTheme::new(true);
        let styled = theme.style("Alien", Category::Movie);

        assert!(styled.starts_with("\x1b["));
        assert!(styled.contains("Alien"));
        assert!(styled.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_categories_are_distinguishable() {
        let theme = ColorTheme::new(true);
        let movie = theme.style("x", Category::Movie);
        let episode = theme.style("x", Category::Episode);
        let track = theme.style("x", Category::Track);
        let error = theme.style("x", Category::Error);

        assert_ne!(movie, episode);
        assert_ne!(episode, track);
        assert_ne!(track, error);
        assert_eq!(
            theme.style("x", Category::Transcode),
            theme.style("x", Category::Log)
        );
    }
}
