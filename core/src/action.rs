use crate::gallery::GalleryFilter;
use crate::reveal::ObservedSection;
use crate::theme::ThemePreference;

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    PageLoaded,
    ToggleTheme,
    SelectFilter(GalleryFilter),
    OpenTile {
        catalog_index: usize,
    },
    CloseModal,
    ToggleNav,
    NavLinkClicked {
        viewport_width: f64,
        target_offset_top: Option<f64>,
    },
    AnchorClicked {
        target_offset_top: Option<f64>,
    },
    BackToTop,
    Scrolled {
        scroll_y: f64,
    },
    PointerMoved {
        client_x: f64,
        client_y: f64,
        viewport_w: f64,
        viewport_h: f64,
    },
    SectionIntersected {
        section: ObservedSection,
        is_intersecting: bool,
        ratio: f64,
    },
    HeroHover {
        index: usize,
        hovered: bool,
    },
    TitleHovered {
        index: usize,
    },
    ProjectHover {
        index: usize,
        hovered: bool,
    },
    ProjectClicked {
        index: usize,
        on_link: bool,
    },
    TaskDue(PageTask),
}

/// Work deferred through the timeline. Tasks carry whatever stamp they need
/// to recognise that a newer action made them stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTask {
    RevealTile { generation: u64, index: usize },
    RestoreSkillBars,
    ResetTitleUnderline { index: usize, stamp: u64 },
    RevealLogo,
}

impl PageTask {
    pub fn is_tile_reveal(&self) -> bool {
        matches!(self, PageTask::RevealTile { .. })
    }
}

/// Side effects requested by the reducer, executed by the browser layer.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEffect {
    ApplyTheme(ThemePreference),
    PersistTheme(ThemePreference),
    StartConfetti,
    SetScrollLock(bool),
    ScrollTo { top: f64 },
    Alert(String),
    Schedule { delay_ms: f64, task: PageTask },
    CancelTileReveals,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionOutcome {
    /// Whether anything visible changed and the view should re-render.
    pub changed: bool,
    pub effects: Vec<PageEffect>,
}

impl ActionOutcome {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: PageEffect) -> Self {
        self.effects.push(effect);
        self
    }
}
