use std::fmt;
use std::str::FromStr;

use crate::catalog::{ImageCategory, ImageDescriptor, ParseCategoryError};

/// Delay between consecutive tile reveals after a render.
pub const ENTRANCE_STAGGER_MS: f64 = 100.0;
pub const ENTRANCE_DURATION_MS: f64 = 500.0;
pub const ENTRANCE_OFFSET_PX: f64 = 20.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GalleryFilter {
    #[default]
    All,
    Category(ImageCategory),
}

impl GalleryFilter {
    /// Filter buttons in display order.
    pub const OPTIONS: [GalleryFilter; 4] = [
        GalleryFilter::All,
        GalleryFilter::Category(ImageCategory::Art),
        GalleryFilter::Category(ImageCategory::Nature),
        GalleryFilter::Category(ImageCategory::Tech),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GalleryFilter::All => "all",
            GalleryFilter::Category(category) => category.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GalleryFilter::All => "All",
            GalleryFilter::Category(category) => category.label(),
        }
    }

    pub fn matches(self, image: &ImageDescriptor) -> bool {
        match self {
            GalleryFilter::All => true,
            GalleryFilter::Category(category) => image.category == category,
        }
    }
}

impl fmt::Display for GalleryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GalleryFilter {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(GalleryFilter::All);
        }
        value.parse::<ImageCategory>().map(GalleryFilter::Category)
    }
}

/// A rendered gallery tile. `catalog_index` keeps the image identity so the
/// modal can be opened from any filtered view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryTile {
    pub catalog_index: usize,
    pub image: &'static ImageDescriptor,
}

pub fn filter_catalog(catalog: &'static [ImageDescriptor], filter: GalleryFilter) -> Vec<GalleryTile> {
    catalog
        .iter()
        .enumerate()
        .filter(|(_, image)| filter.matches(image))
        .map(|(catalog_index, image)| GalleryTile {
            catalog_index,
            image,
        })
        .collect()
}

/// Start offset of tile `index`'s entrance transition, relative to the render.
pub fn entrance_delay_ms(index: usize, stagger_ms: f64) -> f64 {
    index as f64 * stagger_ms
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileStyle {
    pub opacity: f64,
    pub offset_y_px: f64,
}

impl TileStyle {
    pub const HIDDEN: TileStyle = TileStyle {
        opacity: 0.0,
        offset_y_px: ENTRANCE_OFFSET_PX,
    };
    pub const SHOWN: TileStyle = TileStyle {
        opacity: 1.0,
        offset_y_px: 0.0,
    };

    pub fn css(&self, animate: bool) -> String {
        let mut style = format!(
            "opacity: {}; transform: translateY({}px);",
            self.opacity, self.offset_y_px
        );
        if animate {
            let secs = ENTRANCE_DURATION_MS / 1000.0;
            style.push_str(&format!(
                " transition: opacity {secs}s ease, transform {secs}s ease;"
            ));
        }
        style
    }
}

#[derive(Clone, Debug)]
pub struct GalleryState {
    catalog: &'static [ImageDescriptor],
    filter: GalleryFilter,
    tiles: Vec<GalleryTile>,
    revealed: Vec<bool>,
    generation: u64,
    modal: Option<usize>,
}

impl GalleryState {
    pub fn new(catalog: &'static [ImageDescriptor], filter: GalleryFilter) -> Self {
        let tiles = filter_catalog(catalog, filter);
        let revealed = vec![false; tiles.len()];
        Self {
            catalog,
            filter,
            tiles,
            revealed,
            generation: 0,
            modal: None,
        }
    }

    pub fn is_active(&self, filter: GalleryFilter) -> bool {
        self.filter == filter
    }

    pub fn tiles(&self) -> &[GalleryTile] {
        &self.tiles
    }

    /// Bumped on every render; reveal tasks carry it so stale ones are dropped.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Re-renders the tile set for `filter`. Every tile starts hidden.
    pub fn render(&mut self, filter: GalleryFilter) -> u64 {
        self.filter = filter;
        self.tiles = filter_catalog(self.catalog, filter);
        self.revealed = vec![false; self.tiles.len()];
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn reveal(&mut self, generation: u64, index: usize) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.revealed.get_mut(index) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    pub fn tile_style(&self, index: usize) -> TileStyle {
        if self.revealed.get(index).copied().unwrap_or(false) {
            TileStyle::SHOWN
        } else {
            TileStyle::HIDDEN
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn open_modal(&mut self, catalog_index: usize) -> bool {
        if catalog_index >= self.catalog.len() {
            return false;
        }
        self.modal = Some(catalog_index);
        true
    }

    /// Returns whether a modal was open.
    pub fn close_modal(&mut self) -> bool {
        self.modal.take().is_some()
    }

    pub fn modal_image(&self) -> Option<&'static ImageDescriptor> {
        let index = self.modal?;
        self.catalog.get(index)
    }

    pub fn scroll_locked(&self) -> bool {
        self.modal.is_some()
    }
}
