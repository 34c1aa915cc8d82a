use std::cell::RefCell;
use std::collections::HashMap;

use folio_core::action::{PageAction, PageEffect, PageTask};
use folio_core::catalog::ImageCategory;
use folio_core::config::PageConfig;
use folio_core::gallery::{GalleryFilter, TileStyle};
use folio_core::particles::{ConfettiRun, MAX_CONFETTI_COUNT};
use folio_core::reveal::{ObservedSection, SkillBarPhase};
use folio_core::state::PageState;
use folio_core::theme::{
    PreferenceStorage, PreferenceStore, StorageError, ThemePreference, THEME_STORAGE_KEY,
};
use folio_core::timeline::{RunSlot, Timeline};

#[derive(Default)]
struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Runs actions through the reducer the way the browser host does: scheduled
/// tasks go into a timeline that the test advances by hand.
struct Harness {
    state: PageState,
    timeline: Timeline<PageTask>,
    now_ms: f64,
    effects: Vec<PageEffect>,
}

impl Harness {
    fn new(state: PageState) -> Self {
        Self {
            state,
            timeline: Timeline::new(),
            now_ms: 0.0,
            effects: Vec::new(),
        }
    }

    fn dispatch(&mut self, action: PageAction) {
        let outcome = self.state.apply(action);
        for effect in outcome.effects {
            match effect {
                PageEffect::Schedule { delay_ms, task } => {
                    self.timeline.schedule(self.now_ms, delay_ms, task);
                }
                PageEffect::CancelTileReveals => {
                    self.timeline.cancel_where(PageTask::is_tile_reveal);
                }
                other => self.effects.push(other),
            }
        }
    }

    fn advance(&mut self, delta_ms: f64) {
        self.now_ms += delta_ms;
        for task in self.timeline.take_due(self.now_ms) {
            self.dispatch(PageAction::TaskDue(task));
        }
    }

    fn revealed_count(&self) -> usize {
        (0..self.state.gallery.tiles().len())
            .filter(|index| self.state.gallery.is_revealed(*index))
            .count()
    }
}

fn default_state() -> PageState {
    PageState::new(PageConfig::default(), ThemePreference::Light, GalleryFilter::All)
}

#[test]
fn no_stored_theme_with_dark_environment_is_dark() {
    let store = PreferenceStore::new(MemoryStorage::default());
    assert_eq!(store.load(true), ThemePreference::Dark);
}

#[test]
fn toggling_twice_restores_stored_value() {
    let store = PreferenceStore::new(MemoryStorage::with_item(THEME_STORAGE_KEY, "light"));
    let mut state = PageState::new(PageConfig::default(), store.load(true), GalleryFilter::All);
    for _ in 0..2 {
        let outcome = state.apply(PageAction::ToggleTheme);
        for effect in outcome.effects {
            if let PageEffect::PersistTheme(theme) = effect {
                store.save(theme).unwrap();
            }
        }
    }
    assert_eq!(
        store.storage().get_item(THEME_STORAGE_KEY),
        Some("light".to_string())
    );
}

#[test]
fn toggle_celebrates_in_both_directions() {
    let mut state = default_state();
    let to_dark = state.apply(PageAction::ToggleTheme);
    assert!(to_dark.effects.contains(&PageEffect::StartConfetti));
    assert!(to_dark.effects.contains(&PageEffect::PersistTheme(ThemePreference::Dark)));
    let to_light = state.apply(PageAction::ToggleTheme);
    assert!(to_light.effects.contains(&PageEffect::StartConfetti));
    assert!(to_light.effects.contains(&PageEffect::PersistTheme(ThemePreference::Light)));
}

#[test]
fn disabled_confetti_still_persists() {
    let config = PageConfig::default().with_confetti_count(0);
    let mut state = PageState::new(config, ThemePreference::Dark, GalleryFilter::All);
    let outcome = state.apply(PageAction::ToggleTheme);
    assert!(!outcome.effects.contains(&PageEffect::StartConfetti));
    assert!(outcome.effects.contains(&PageEffect::PersistTheme(ThemePreference::Light)));
}

#[test]
fn oversized_confetti_count_is_clamped() {
    let count: usize = "18446744073709551615".parse().unwrap();
    let config = PageConfig::default().with_confetti_count(count);
    assert!(config.confetti_enabled);
    assert_eq!(config.confetti.count, MAX_CONFETTI_COUNT);

    let mut state = PageState::new(config, ThemePreference::Light, GalleryFilter::All);
    let outcome = state.apply(PageAction::ToggleTheme);
    assert!(outcome.effects.contains(&PageEffect::StartConfetti));

    let run = ConfettiRun::new(config.confetti, 800.0, 600.0, 0.0, 1, RunSlot::new().begin());
    assert_eq!(run.particles().len(), MAX_CONFETTI_COUNT);
}

#[test]
fn exactly_one_filter_is_active() {
    let mut state = default_state();
    state.apply(PageAction::SelectFilter(GalleryFilter::Category(ImageCategory::Tech)));
    let active: Vec<_> = GalleryFilter::OPTIONS
        .into_iter()
        .filter(|option| state.gallery.is_active(*option))
        .collect();
    assert_eq!(active, vec![GalleryFilter::Category(ImageCategory::Tech)]);
    assert!(state
        .gallery
        .tiles()
        .iter()
        .all(|tile| tile.image.category == ImageCategory::Tech));
}

#[test]
fn initial_reveal_waits_then_staggers() {
    let mut harness = Harness::new(default_state());
    harness.dispatch(PageAction::PageLoaded);
    assert!(harness
        .effects
        .contains(&PageEffect::ApplyTheme(ThemePreference::Light)));

    harness.advance(499.0);
    assert_eq!(harness.revealed_count(), 0);
    harness.advance(1.0);
    assert_eq!(harness.revealed_count(), 1);
    harness.advance(100.0);
    assert_eq!(harness.revealed_count(), 2);
    harness.advance(1000.0);
    assert_eq!(harness.revealed_count(), 12);
    assert!(harness.state.logo_revealed);
}

#[test]
fn refilter_drops_pending_reveals_of_previous_render() {
    let mut harness = Harness::new(default_state());
    harness.dispatch(PageAction::PageLoaded);
    harness.advance(650.0);
    assert_eq!(harness.revealed_count(), 2);

    harness.dispatch(PageAction::SelectFilter(GalleryFilter::Category(ImageCategory::Nature)));
    assert_eq!(harness.revealed_count(), 0);
    assert_eq!(harness.state.gallery.tile_style(0), TileStyle::HIDDEN);

    harness.advance(0.0);
    assert_eq!(harness.revealed_count(), 1);
    harness.advance(200.0);
    assert_eq!(harness.revealed_count(), 3);
    // only the logo reveal remains
    assert_eq!(harness.timeline.len(), 1);
}

#[test]
fn modal_locks_and_restores_scroll() {
    let mut state = default_state();
    let opened = state.apply(PageAction::OpenTile { catalog_index: 4 });
    assert_eq!(opened.effects, vec![PageEffect::SetScrollLock(true)]);
    assert_eq!(
        state.gallery.modal_image().map(|image| image.caption),
        Some("Modern Sculpture")
    );
    let closed = state.apply(PageAction::CloseModal);
    assert_eq!(closed.effects, vec![PageEffect::SetScrollLock(false)]);
    let again = state.apply(PageAction::CloseModal);
    assert!(again.effects.is_empty());
}

#[test]
fn skill_bars_collapse_then_fill_once() {
    let mut harness = Harness::new(default_state());
    let about_visible = PageAction::SectionIntersected {
        section: ObservedSection::About,
        is_intersecting: true,
        ratio: 0.4,
    };
    harness.dispatch(about_visible.clone());
    assert_eq!(harness.state.reveal.skill_bars(), SkillBarPhase::Collapsed);
    harness.advance(99.0);
    assert_eq!(harness.state.reveal.skill_bars(), SkillBarPhase::Collapsed);
    harness.advance(1.0);
    assert_eq!(harness.state.reveal.skill_bars(), SkillBarPhase::Filled);

    harness.dispatch(about_visible);
    assert_eq!(harness.state.reveal.skill_bars(), SkillBarPhase::Filled);
    assert!(harness.timeline.is_empty());
}

#[test]
fn scroll_only_reports_change_on_threshold_crossing() {
    let mut state = default_state();
    assert!(!state.apply(PageAction::Scrolled { scroll_y: 10.0 }).changed);
    assert!(state.apply(PageAction::Scrolled { scroll_y: 60.0 }).changed);
    assert!(!state.apply(PageAction::Scrolled { scroll_y: 120.0 }).changed);
    assert!(state.apply(PageAction::Scrolled { scroll_y: 400.0 }).changed);
    assert!(state.scroll.back_to_top_visible);
    let outcome = state.apply(PageAction::BackToTop);
    assert_eq!(outcome.effects, vec![PageEffect::ScrollTo { top: 0.0 }]);
}

#[test]
fn nav_link_closes_menu_only_on_narrow_viewports() {
    let mut state = default_state();
    state.apply(PageAction::ToggleNav);
    assert!(state.nav_open);

    let wide = state.apply(PageAction::NavLinkClicked {
        viewport_width: 1024.0,
        target_offset_top: Some(900.0),
    });
    assert!(state.nav_open);
    assert_eq!(wide.effects, vec![PageEffect::ScrollTo { top: 820.0 }]);

    state.apply(PageAction::NavLinkClicked {
        viewport_width: 600.0,
        target_offset_top: None,
    });
    assert!(!state.nav_open);
}

#[test]
fn title_underline_resets_after_latest_hover() {
    let mut harness = Harness::new(default_state());
    harness.dispatch(PageAction::TitleHovered { index: 0 });
    harness.advance(300.0);
    harness.dispatch(PageAction::TitleHovered { index: 0 });
    harness.advance(200.0);
    assert!(harness.state.title_expanded(0));
    harness.advance(300.0);
    assert!(!harness.state.title_expanded(0));
}

#[test]
fn project_click_alerts_unless_on_link() {
    let mut state = default_state();
    let slug = state.projects()[0].slug;
    let outcome = state.apply(PageAction::ProjectClicked { index: 0, on_link: false });
    assert_eq!(
        outcome.effects,
        vec![PageEffect::Alert(format!("Opening {slug} project..."))]
    );
    let on_link = state.apply(PageAction::ProjectClicked { index: 0, on_link: true });
    assert!(on_link.effects.is_empty());
}
