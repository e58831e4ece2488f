//! Terminal color mapping for the shared tag palette

use ratatui::style::{Color, Modifier, Style};

use crate::models::TagColor;

/// Closest terminal color for each palette entry
pub fn tag_color(color: TagColor) -> Color {
    match color {
        TagColor::Green => Color::Green,
        TagColor::Red => Color::Red,
        TagColor::Orange => Color::Yellow,
        TagColor::Blue => Color::Blue,
        TagColor::Purple => Color::LightMagenta,
        TagColor::Magenta => Color::Magenta,
        TagColor::Cyan => Color::Cyan,
        TagColor::Gold => Color::LightYellow,
        TagColor::Default => Color::White,
    }
}

pub fn tag_style(color: TagColor) -> Style {
    Style::default().fg(tag_color(color))
}

pub fn header_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn gain_style() -> Style {
    Style::default().fg(Color::Green)
}

pub fn loss_style() -> Style {
    Style::default().fg(Color::Red)
}

pub fn dim_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_palette_entry_maps_to_a_color() {
        let palette = [
            TagColor::Green,
            TagColor::Red,
            TagColor::Orange,
            TagColor::Blue,
            TagColor::Purple,
            TagColor::Magenta,
            TagColor::Cyan,
            TagColor::Gold,
            TagColor::Default,
        ];
        let colors: Vec<Color> = palette.iter().map(|c| tag_color(*c)).collect();
        assert_eq!(colors.len(), 9);
        assert_eq!(tag_color(TagColor::Default), Color::White);
    }
}
