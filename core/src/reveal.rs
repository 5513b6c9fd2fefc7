//! Values for the visibility-triggered effects: stat counters, skill bars
//! and the fade-in of cards.

pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const SKILL_BAR_THRESHOLD: f64 = 0.5;
pub const FADE_THRESHOLD: f64 = 0.1;
pub const ROOT_MARGIN: &str = "0px";

pub const FADE_HIDDEN_OPACITY: &str = "0";
pub const FADE_HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const FADE_SHOWN_OPACITY: &str = "1";
pub const FADE_SHOWN_TRANSFORM: &str = "translateY(0)";
pub const FADE_TRANSITION: &str = "opacity 0.6s ease-out, transform 0.6s ease-out";

pub fn stagger_delay_ms(batch_index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(batch_index)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_ms)
}

/// Inline width for a skill bar, from its `data-progress` attribute.
pub fn progress_width(raw: &str) -> String {
    format!("{raw}%")
}
