// src/utils/format.rs
use console::{Color, Style};

use crate::models::{GeneratedStrength, StrengthTier};

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';

// Colour for an evaluator tier
pub fn tier_style(tier: StrengthTier) -> Style {
    let color = match tier {
        StrengthTier::VeryStrong => Color::Green,
        StrengthTier::Strong => Color::Blue,
        StrengthTier::Medium => Color::Yellow,
        StrengthTier::Weak => Color::Color256(208), // orange
        StrengthTier::VeryWeak => Color::Red,
    };
    Style::new().fg(color).bold()
}

// Colour for the generator's indicator
pub fn generated_style(strength: GeneratedStrength) -> Style {
    let color = match strength {
        GeneratedStrength::VeryStrong => Color::Green,
        GeneratedStrength::Strong => Color::Blue,
        GeneratedStrength::Medium => Color::Yellow,
        GeneratedStrength::Weak => Color::Red,
    };
    Style::new().fg(color)
}

/// Render `percentage` (0..=100) as a fixed-width bar.
pub fn percentage_bar(percentage: u8, width: usize) -> String {
    let percentage = usize::from(percentage.min(100));
    let filled = (percentage * width + 50) / 100;

    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    bar.extend(std::iter::repeat(BAR_FILLED).take(filled));
    bar.extend(std::iter::repeat(BAR_EMPTY).take(width - filled));
    bar.push(']');
    bar
}

pub fn check_glyph(passed: bool) -> String {
    if passed {
        Style::new().green().apply_to("✓").to_string()
    } else {
        Style::new().red().apply_to("✗").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_bar_widths() {
        assert_eq!(percentage_bar(0, 4), "[░░░░]");
        assert_eq!(percentage_bar(100, 4), "[████]");
        assert_eq!(percentage_bar(50, 4), "[██░░]");
        assert_eq!(percentage_bar(75, 20).chars().filter(|&c| c == BAR_FILLED).count(), 15);
        // out of range input is capped
        assert_eq!(percentage_bar(250, 2), "[██]");
    }

    #[test]
    fn test_check_glyph_content() {
        assert!(console::strip_ansi_codes(&check_glyph(true)).contains('✓'));
        assert!(console::strip_ansi_codes(&check_glyph(false)).contains('✗'));
    }
}
