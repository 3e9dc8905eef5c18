//! Colored console printing.

use std::fmt::Display;

use crossterm::style::{Color, StyledContent, Stylize, style};

/// The bright foreground colors used to tell apart training messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Red,
    Green,
    Yellow,
    LightPurple,
    Purple,
    Cyan,
    LightGray,
    Black,
}

impl Tint {
    /// Returns the terminal color this tint is drawn with.
    pub fn color(self) -> Color {
        match self {
            Tint::Red => Color::Red,
            Tint::Green => Color::Green,
            Tint::Yellow => Color::Yellow,
            Tint::LightPurple => Color::Blue,
            Tint::Purple => Color::Magenta,
            Tint::Cyan => Color::Cyan,
            Tint::LightGray => Color::White,
            Tint::Black => Color::DarkGrey,
        }
    }
}

/// Wraps `value` so it's displayed with the given tint.
pub fn paint<D: Display>(tint: Tint, value: D) -> StyledContent<D> {
    style(value).with(tint.color())
}

/// Prints `value` in a line of its own with the given tint.
pub fn print_tinted<D: Display>(tint: Tint, value: D) {
    println!("{}", paint(tint, value));
}

pub fn pr_red<D: Display>(value: D) {
    print_tinted(Tint::Red, value);
}

pub fn pr_green<D: Display>(value: D) {
    print_tinted(Tint::Green, value);
}

pub fn pr_yellow<D: Display>(value: D) {
    print_tinted(Tint::Yellow, value);
}

pub fn pr_light_purple<D: Display>(value: D) {
    print_tinted(Tint::LightPurple, value);
}

pub fn pr_purple<D: Display>(value: D) {
    print_tinted(Tint::Purple, value);
}

pub fn pr_cyan<D: Display>(value: D) {
    print_tinted(Tint::Cyan, value);
}

pub fn pr_light_gray<D: Display>(value: D) {
    print_tinted(Tint::LightGray, value);
}

pub fn pr_black<D: Display>(value: D) {
    print_tinted(Tint::Black, value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_keeps_the_text() {
        let painted = paint(Tint::Cyan, "epoch 3").to_string();
        assert!(painted.contains("epoch 3"));
    }

    #[test]
    fn paint_sets_the_foreground() {
        let painted = paint(Tint::Red, 42);

        assert_eq!(painted.style().foreground_color, Some(Color::Red));
        assert_eq!(*painted.content(), 42);
    }

    #[test]
    fn tints_are_distinct() {
        let tints = [
            Tint::Red,
            Tint::Green,
            Tint::Yellow,
            Tint::LightPurple,
            Tint::Purple,
            Tint::Cyan,
            Tint::LightGray,
            Tint::Black,
        ];

        for (i, a) in tints.iter().enumerate() {
            for b in &tints[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }
}
