use crate::gallery::ENTRANCE_STAGGER_MS;
use crate::particles::{ConfettiConfig, MAX_CONFETTI_COUNT};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageConfig {
    pub header_scroll_threshold: f64,
    pub back_to_top_threshold: f64,
    pub nav_collapse_width: f64,
    pub anchor_scroll_offset: f64,
    pub parallax_base_speed: f64,
    pub parallax_speed_step: f64,
    pub parallax_range: f64,
    pub gallery_stagger_ms: f64,
    /// Extra delay before the first reveal after page load.
    pub gallery_initial_delay_ms: f64,
    /// Fraction of a section that must be visible to count as intersecting.
    pub reveal_threshold: f64,
    pub skill_bar_restore_ms: f64,
    pub title_underline_reset_ms: f64,
    pub logo_reveal_ms: f64,
    pub confetti: ConfettiConfig,
    pub confetti_enabled: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_scroll_threshold: 50.0,
            back_to_top_threshold: 300.0,
            nav_collapse_width: 768.0,
            anchor_scroll_offset: 80.0,
            parallax_base_speed: 0.05,
            parallax_speed_step: 0.01,
            parallax_range: 50.0,
            gallery_stagger_ms: ENTRANCE_STAGGER_MS,
            gallery_initial_delay_ms: 500.0,
            reveal_threshold: 0.1,
            skill_bar_restore_ms: 100.0,
            title_underline_reset_ms: 500.0,
            logo_reveal_ms: 1000.0,
            confetti: ConfettiConfig::default(),
            confetti_enabled: true,
        }
    }
}

impl PageConfig {
    /// Applies a `confetti=<count>` override; `0` turns the effect off and
    /// counts above [`MAX_CONFETTI_COUNT`] are clamped to it.
    pub fn with_confetti_count(mut self, count: usize) -> Self {
        if count == 0 {
            self.confetti_enabled = false;
        } else {
            self.confetti.count = count.min(MAX_CONFETTI_COUNT);
            self.confetti_enabled = true;
        }
        self
    }
}
