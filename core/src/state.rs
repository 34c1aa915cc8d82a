use std::collections::HashMap;

use crate::action::{ActionOutcome, PageAction, PageEffect, PageTask};
use crate::catalog::{ImageDescriptor, ProjectEntry, GALLERY_CATALOG, PROJECTS};
use crate::config::PageConfig;
use crate::gallery::{entrance_delay_ms, GalleryFilter, GalleryState};
use crate::reactor::{anchor_scroll_top, nav_collapses_on_link, scroll_flags, PointerRatio, ScrollFlags};
use crate::reveal::{RevealTracker, RevealTrigger};
use crate::theme::ThemePreference;

#[derive(Clone, Debug)]
pub struct PageState {
    pub config: PageConfig,
    pub theme: ThemePreference,
    pub gallery: GalleryState,
    pub nav_open: bool,
    pub scroll: ScrollFlags,
    pub pointer: Option<PointerRatio>,
    pub reveal: RevealTracker,
    pub hovered_hero: Option<usize>,
    pub hovered_project: Option<usize>,
    pub logo_revealed: bool,
    projects: &'static [ProjectEntry],
    expanded_titles: HashMap<usize, u64>,
    title_stamp: u64,
}

impl PageState {
    pub fn new(config: PageConfig, theme: ThemePreference, filter: GalleryFilter) -> Self {
        Self::with_content(config, theme, filter, GALLERY_CATALOG, PROJECTS)
    }

    pub fn with_content(
        config: PageConfig,
        theme: ThemePreference,
        filter: GalleryFilter,
        catalog: &'static [ImageDescriptor],
        projects: &'static [ProjectEntry],
    ) -> Self {
        Self {
            config,
            theme,
            gallery: GalleryState::new(catalog, filter),
            nav_open: false,
            scroll: ScrollFlags::default(),
            pointer: None,
            reveal: RevealTracker::new(),
            hovered_hero: None,
            hovered_project: None,
            logo_revealed: false,
            projects,
            expanded_titles: HashMap::new(),
            title_stamp: 0,
        }
    }

    pub fn projects(&self) -> &'static [ProjectEntry] {
        self.projects
    }

    pub fn title_expanded(&self, index: usize) -> bool {
        self.expanded_titles.contains_key(&index)
    }

    pub fn apply(&mut self, action: PageAction) -> ActionOutcome {
        match action {
            PageAction::PageLoaded => {
                let mut outcome = ActionOutcome::unchanged().with_effect(PageEffect::ApplyTheme(self.theme));
                outcome.effects.extend(self.reveal_schedule(self.config.gallery_initial_delay_ms));
                outcome.effects.push(PageEffect::Schedule {
                    delay_ms: self.config.logo_reveal_ms,
                    task: PageTask::RevealLogo,
                });
                outcome
            }
            PageAction::ToggleTheme => {
                self.theme = self.theme.toggled();
                let mut outcome = ActionOutcome::changed()
                    .with_effect(PageEffect::ApplyTheme(self.theme))
                    .with_effect(PageEffect::PersistTheme(self.theme));
                if self.config.confetti_enabled {
                    outcome.effects.push(PageEffect::StartConfetti);
                }
                outcome
            }
            PageAction::SelectFilter(filter) => {
                self.gallery.render(filter);
                let mut outcome = ActionOutcome::changed().with_effect(PageEffect::CancelTileReveals);
                outcome.effects.extend(self.reveal_schedule(0.0));
                outcome
            }
            PageAction::OpenTile { catalog_index } => {
                if self.gallery.open_modal(catalog_index) {
                    ActionOutcome::changed().with_effect(PageEffect::SetScrollLock(true))
                } else {
                    ActionOutcome::unchanged()
                }
            }
            PageAction::CloseModal => {
                if self.gallery.close_modal() {
                    ActionOutcome::changed().with_effect(PageEffect::SetScrollLock(false))
                } else {
                    ActionOutcome::unchanged()
                }
            }
            PageAction::ToggleNav => {
                self.nav_open = !self.nav_open;
                ActionOutcome::changed()
            }
            PageAction::NavLinkClicked {
                viewport_width,
                target_offset_top,
            } => {
                let mut outcome = ActionOutcome::unchanged();
                if self.nav_open && nav_collapses_on_link(viewport_width, &self.config) {
                    self.nav_open = false;
                    outcome.changed = true;
                }
                if let Some(offset_top) = target_offset_top {
                    outcome.effects.push(PageEffect::ScrollTo {
                        top: anchor_scroll_top(offset_top, &self.config),
                    });
                }
                outcome
            }
            PageAction::AnchorClicked { target_offset_top } => match target_offset_top {
                Some(offset_top) => ActionOutcome::unchanged().with_effect(PageEffect::ScrollTo {
                    top: anchor_scroll_top(offset_top, &self.config),
                }),
                None => ActionOutcome::unchanged(),
            },
            PageAction::BackToTop => {
                ActionOutcome::unchanged().with_effect(PageEffect::ScrollTo { top: 0.0 })
            }
            PageAction::Scrolled { scroll_y } => {
                let next = scroll_flags(scroll_y, &self.config);
                if next == self.scroll {
                    return ActionOutcome::unchanged();
                }
                self.scroll = next;
                ActionOutcome::changed()
            }
            PageAction::PointerMoved {
                client_x,
                client_y,
                viewport_w,
                viewport_h,
            } => {
                let Some(pointer) = PointerRatio::from_client(client_x, client_y, viewport_w, viewport_h) else {
                    return ActionOutcome::unchanged();
                };
                self.pointer = Some(pointer);
                ActionOutcome::changed()
            }
            PageAction::SectionIntersected {
                section,
                is_intersecting,
                ratio,
            } => {
                let threshold = self.config.reveal_threshold;
                match self.reveal.on_intersection(section, is_intersecting, ratio, threshold) {
                    Some(RevealTrigger::SkillBars) => {
                        ActionOutcome::changed().with_effect(PageEffect::Schedule {
                            delay_ms: self.config.skill_bar_restore_ms,
                            task: PageTask::RestoreSkillBars,
                        })
                    }
                    None => ActionOutcome::unchanged(),
                }
            }
            PageAction::HeroHover { index, hovered } => {
                let next = if hovered {
                    Some(index)
                } else if self.hovered_hero == Some(index) {
                    None
                } else {
                    self.hovered_hero
                };
                if next == self.hovered_hero {
                    return ActionOutcome::unchanged();
                }
                self.hovered_hero = next;
                ActionOutcome::changed()
            }
            PageAction::TitleHovered { index } => {
                self.title_stamp = self.title_stamp.wrapping_add(1);
                let stamp = self.title_stamp;
                self.expanded_titles.insert(index, stamp);
                ActionOutcome::changed().with_effect(PageEffect::Schedule {
                    delay_ms: self.config.title_underline_reset_ms,
                    task: PageTask::ResetTitleUnderline { index, stamp },
                })
            }
            PageAction::ProjectHover { index, hovered } => {
                let next = if hovered {
                    Some(index)
                } else if self.hovered_project == Some(index) {
                    None
                } else {
                    self.hovered_project
                };
                if next == self.hovered_project {
                    return ActionOutcome::unchanged();
                }
                self.hovered_project = next;
                ActionOutcome::changed()
            }
            PageAction::ProjectClicked { index, on_link } => {
                if on_link {
                    return ActionOutcome::unchanged();
                }
                match self.projects.get(index) {
                    Some(project) => ActionOutcome::unchanged()
                        .with_effect(PageEffect::Alert(format!("Opening {} project...", project.slug))),
                    None => ActionOutcome::unchanged(),
                }
            }
            PageAction::TaskDue(task) => self.run_task(task),
        }
    }

    fn reveal_schedule(&self, base_delay_ms: f64) -> Vec<PageEffect> {
        let generation = self.gallery.generation();
        (0..self.gallery.tiles().len())
            .map(|index| PageEffect::Schedule {
                delay_ms: base_delay_ms + entrance_delay_ms(index, self.config.gallery_stagger_ms),
                task: PageTask::RevealTile { generation, index },
            })
            .collect()
    }

    fn run_task(&mut self, task: PageTask) -> ActionOutcome {
        let changed = match task {
            PageTask::RevealTile { generation, index } => self.gallery.reveal(generation, index),
            PageTask::RestoreSkillBars => self.reveal.restore_skill_bars(),
            PageTask::ResetTitleUnderline { index, stamp } => {
                if self.expanded_titles.get(&index) == Some(&stamp) {
                    self.expanded_titles.remove(&index);
                    true
                } else {
                    false
                }
            }
            PageTask::RevealLogo => !std::mem::replace(&mut self.logo_revealed, true),
        };
        ActionOutcome {
            changed,
            effects: Vec::new(),
        }
    }
}
