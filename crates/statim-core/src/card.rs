//! Typed card configuration shared by the terminal and web front-ends.

use serde::{Deserialize, Serialize};

/// Icons a card header may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Activity,
    Cpu,
    Refresh,
    FileText,
    Shield,
}

impl Icon {
    /// Single-cell glyph for terminal rendering.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Activity => "\u{2665}", // ♥
            Icon::Cpu => "\u{25A3}",      // ▣
            Icon::Refresh => "\u{21BB}",  // ↻
            Icon::FileText => "\u{2261}", // ≡
            Icon::Shield => "\u{25C6}",   // ◆
        }
    }

    /// CSS class used by the web view's icon element.
    pub fn css_class(&self) -> &'static str {
        match self {
            Icon::Activity => "icon icon-activity",
            Icon::Cpu => "icon icon-cpu",
            Icon::Refresh => "icon icon-refresh",
            Icon::FileText => "icon icon-file-text",
            Icon::Shield => "icon icon-shield",
        }
    }
}

/// A titled card wrapping arbitrary content.
#[derive(Debug, Clone, PartialEq)]
pub struct CardConfig<T> {
    pub title: String,
    pub icon: Option<Icon>,
    pub content: T,
}

impl<T> CardConfig<T> {
    pub fn new(title: impl Into<String>, content: T) -> Self {
        Self {
            title: title.into(),
            icon: None,
            content,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Header text: the icon glyph (when present) followed by the upper-cased title.
    pub fn heading(&self) -> String {
        let title = self.title.to_uppercase();
        match self.icon {
            Some(icon) => format!("{} {}", icon.glyph(), title),
            None => title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_with_and_without_icon() {
        let plain = CardConfig::new("Pulse", ());
        assert_eq!(plain.heading(), "PULSE");

        let iconic = CardConfig::new("Token Usage", ()).with_icon(Icon::Cpu);
        assert_eq!(iconic.heading(), format!("{} TOKEN USAGE", Icon::Cpu.glyph()));
    }
}
