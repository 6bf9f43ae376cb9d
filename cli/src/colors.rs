use colored::*;
use mazepath_core::Tile;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn tile(&self, tile: Tile) -> ColoredString {
        let symbol = tile.symbol().to_string();
        match tile {
            Tile::Start | Tile::End => self.endpoint(&symbol),
            Tile::Path => self.path(&symbol),
            Tile::Wall => self.wall(&symbol),
            Tile::Open => symbol.normal(),
        }
    }

    pub fn endpoint(&self, text: &str) -> ColoredString {
        text.yellow().bold()
    }

    pub fn path(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn wall(&self, text: &str) -> ColoredString {
        text.bright_black()
    }

    pub fn heading(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }
}
