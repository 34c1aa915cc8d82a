//! Scroll, pointer and navigation mappings. Every function here is a pure
//! function of its inputs; the browser layer may call them in any order and
//! as often as events arrive.

use crate::config::PageConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollFlags {
    pub header_scrolled: bool,
    pub back_to_top_visible: bool,
}

pub fn scroll_flags(scroll_y: f64, config: &PageConfig) -> ScrollFlags {
    ScrollFlags {
        header_scrolled: scroll_y > config.header_scroll_threshold,
        back_to_top_visible: scroll_y > config.back_to_top_threshold,
    }
}

/// Cursor position as a fraction of the viewport, each axis in `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerRatio {
    pub x: f64,
    pub y: f64,
}

impl PointerRatio {
    pub fn from_client(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> Option<Self> {
        if viewport_w <= 0.0 || viewport_h <= 0.0 {
            return None;
        }
        Some(Self {
            x: (client_x / viewport_w).clamp(0.0, 1.0),
            y: (client_y / viewport_h).clamp(0.0, 1.0),
        })
    }
}

pub fn parallax_speed(index: usize, config: &PageConfig) -> f64 {
    config.parallax_base_speed + index as f64 * config.parallax_speed_step
}

/// Translation in px for background element `index`.
pub fn parallax_offset(index: usize, pointer: PointerRatio, config: &PageConfig) -> (f64, f64) {
    let speed = parallax_speed(index, config);
    let range = config.parallax_range;
    (
        -(pointer.x * range * speed) + range,
        -(pointer.y * range * speed) + range,
    )
}

pub fn parallax_transform(index: usize, pointer: PointerRatio, config: &PageConfig) -> String {
    let (x, y) = parallax_offset(index, pointer, config);
    format!("translate({x}px, {y}px)")
}

/// Scroll position for an in-page anchor, leaving room for the fixed header.
pub fn anchor_scroll_top(target_offset_top: f64, config: &PageConfig) -> f64 {
    (target_offset_top - config.anchor_scroll_offset).max(0.0)
}

pub fn nav_collapses_on_link(viewport_width: f64, config: &PageConfig) -> bool {
    viewport_width <= config.nav_collapse_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_independent_and_strict() {
        let config = PageConfig::default();
        assert_eq!(scroll_flags(0.0, &config), ScrollFlags::default());
        assert_eq!(
            scroll_flags(50.0, &config),
            ScrollFlags {
                header_scrolled: false,
                back_to_top_visible: false
            }
        );
        assert_eq!(
            scroll_flags(51.0, &config),
            ScrollFlags {
                header_scrolled: true,
                back_to_top_visible: false
            }
        );
        assert_eq!(
            scroll_flags(301.0, &config),
            ScrollFlags {
                header_scrolled: true,
                back_to_top_visible: true
            }
        );
    }

    #[test]
    fn parallax_recentres_on_fifty() {
        let config = PageConfig::default();
        let origin = PointerRatio { x: 0.0, y: 0.0 };
        assert_eq!(parallax_offset(3, origin, &config), (50.0, 50.0));

        let corner = PointerRatio { x: 1.0, y: 0.5 };
        let (x, y) = parallax_offset(0, corner, &config);
        assert!((x - 47.5).abs() < 1e-9);
        assert!((y - 48.75).abs() < 1e-9);

        let (x, _) = parallax_offset(2, corner, &config);
        assert!((x - 46.5).abs() < 1e-9);
    }

    #[test]
    fn pointer_ratio_rejects_empty_viewport() {
        assert_eq!(PointerRatio::from_client(10.0, 10.0, 0.0, 100.0), None);
        assert_eq!(
            PointerRatio::from_client(50.0, 25.0, 100.0, 100.0),
            Some(PointerRatio { x: 0.5, y: 0.25 })
        );
    }

    #[test]
    fn anchor_and_nav_rules() {
        let config = PageConfig::default();
        assert_eq!(anchor_scroll_top(500.0, &config), 420.0);
        assert_eq!(anchor_scroll_top(20.0, &config), 0.0);
        assert!(nav_collapses_on_link(768.0, &config));
        assert!(!nav_collapses_on_link(769.0, &config));
    }
}
