//! Token definitions for the RIFT highlighter
//! The lexical categories a line of source gets split into

use serde::Serialize;

/// Tokyo Night palette used for the category markers.
pub mod colors {
    pub const PURPLE: &str = "#bb9af7";
    pub const TEAL: &str = "#7dcfff";
    pub const GREEN: &str = "#9ece6a";
    pub const ORANGE: &str = "#ff9e64";
    pub const BLUE: &str = "#7aa2f7";
    pub const RED: &str = "#f7768e";
    pub const MUTED: &str = "#565f89";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Comment,
    String,
    Keyword,
    Type,
    Number,
    Operator,
    Delimiter,
    Plain,
}

impl Category {
    pub fn color(self) -> Option<&'static str> {
        match self {
            Category::Comment => Some(colors::MUTED),
            Category::String => Some(colors::GREEN),
            Category::Keyword => Some(colors::PURPLE),
            Category::Type => Some(colors::TEAL),
            Category::Number => Some(colors::ORANGE),
            Category::Operator => Some(colors::BLUE),
            Category::Delimiter => Some(colors::RED),
            Category::Plain => None,
        }
    }

    /// Inline style of the category marker, `None` for plain text.
    pub fn style(self) -> Option<String> {
        let color = self.color()?;
        match self {
            Category::Comment => Some(format!("color:{};font-style:italic", color)),
            _ => Some(format!("color:{}", color)),
        }
    }
}

/// A categorised span of one source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub category: Category,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(category: Category, text: &'a str) -> Self {
        Self { category, text }
    }
}
