pub mod action;
pub mod catalog;
pub mod config;
pub mod gallery;
pub mod particles;
pub mod reactor;
pub mod reveal;
pub mod state;
pub mod theme;
pub mod timeline;

pub use action::{ActionOutcome, PageAction, PageEffect, PageTask};
pub use catalog::{ImageCategory, ImageDescriptor, ParseCategoryError, GALLERY_CATALOG, PROJECTS, SKILLS};
pub use config::PageConfig;
pub use gallery::{GalleryFilter, GalleryState, GalleryTile};
pub use particles::{ConfettiConfig, ConfettiRun, ConfettiSurface, FrameOutcome, Particle};
pub use state::PageState;
pub use theme::{
    resolve_theme, ParseThemeError, PreferenceStorage, PreferenceStore, StorageError, ThemePreference,
};
pub use timeline::{RunSlot, RunToken, Timeline};
