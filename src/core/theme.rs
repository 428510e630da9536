//! Theme catalog - maps a theme id to card-face symbols and a display name
//!
//! Pure lookup tables. Unknown ids resolve to the default theme rather than
//! failing, so a stale persisted theme id can never break round setup.

/// Card-face theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Fruits,
    Animals,
    Flags,
    Emoji,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Fruits, Theme::Animals, Theme::Flags, Theme::Emoji];

    /// Resolve a theme id, falling back to the default for unknown ids
    pub fn resolve(id: &str) -> Self {
        Self::from_str(id).unwrap_or_default()
    }

    /// Parse a theme id (case-insensitive)
    pub fn from_str(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "fruits" | "default" => Some(Theme::Fruits),
            "animals" => Some(Theme::Animals),
            "flags" => Some(Theme::Flags),
            "emoji" => Some(Theme::Emoji),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Fruits => "fruits",
            Theme::Animals => "animals",
            Theme::Flags => "flags",
            Theme::Emoji => "emoji",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Fruits => "Fruits",
            Theme::Animals => "Animals",
            Theme::Flags => "Flags",
            Theme::Emoji => "Emoji",
        }
    }

    /// Ordered unique card-face symbols for this theme
    pub fn symbols(&self) -> &'static [&'static str] {
        match self {
            Theme::Fruits => &[
                "🍎", "🍌", "🍒", "🍇", "🍊", "🍓", "🍍", "🥭", "🥥", "🍑", "🍈", "🍋", "🍉",
                "🥝", "🫐", "🍐", "🥑", "🌶️",
            ],
            Theme::Animals => &[
                "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮", "🐷",
                "🐸", "🐵", "🐔", "🐧", "🐦",
            ],
            Theme::Flags => &[
                "🇺🇸", "🇬🇧", "🇨🇦", "🇯🇵", "🇫🇷", "🇩🇪", "🇮🇹", "🇪🇸", "🇦🇺", "🇧🇷", "🇨🇳", "🇮🇳", "🇰🇷",
                "🇲🇽", "🇷🇺", "🇿🇦", "🇸🇪", "🇳🇴",
            ],
            Theme::Emoji => &[
                "😀", "😂", "🥰", "😎", "🤩", "😜", "🤔", "😴", "🥳", "🤯", "😱", "🤗", "😈",
                "👻", "🤖", "👽", "👾", "💀",
            ],
        }
    }

    /// Next theme in the cycle (for the UI theme toggle)
    pub fn next(&self) -> Self {
        match self {
            Theme::Fruits => Theme::Animals,
            Theme::Animals => Theme::Flags,
            Theme::Flags => Theme::Emoji,
            Theme::Emoji => Theme::Fruits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_has_18_unique_symbols() {
        for theme in Theme::ALL {
            let symbols = theme.symbols();
            assert_eq!(symbols.len(), 18, "{:?}", theme);
            let mut seen = std::collections::HashSet::new();
            for s in symbols {
                assert!(seen.insert(s), "{:?} repeats {s}", theme);
            }
        }
    }

    #[test]
    fn unknown_id_falls_back_to_default() {
        assert_eq!(Theme::resolve("space"), Theme::Fruits);
        assert_eq!(Theme::resolve(""), Theme::Fruits);
        assert_eq!(Theme::resolve("ANIMALS"), Theme::Animals);
    }

    #[test]
    fn ids_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
    }
}
