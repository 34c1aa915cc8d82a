use folio_core::catalog::{ImageCategory, GALLERY_CATALOG};
use folio_core::gallery::{entrance_delay_ms, filter_catalog, GalleryFilter};

fn paths(filter: GalleryFilter) -> Vec<&'static str> {
    filter_catalog(GALLERY_CATALOG, filter)
        .iter()
        .map(|tile| tile.image.path)
        .collect()
}

#[test]
fn all_filter_yields_full_catalog_in_order() {
    let tiles = filter_catalog(GALLERY_CATALOG, GalleryFilter::All);
    assert_eq!(tiles.len(), GALLERY_CATALOG.len());
    for (position, tile) in tiles.iter().enumerate() {
        assert_eq!(tile.catalog_index, position);
    }
}

#[test]
fn category_filters_keep_only_matching_tiles_in_catalog_order() {
    for category in ImageCategory::ALL {
        let tiles = filter_catalog(GALLERY_CATALOG, GalleryFilter::Category(category));
        assert!(tiles.iter().all(|tile| tile.image.category == category));
        assert!(tiles
            .windows(2)
            .all(|pair| pair[0].catalog_index < pair[1].catalog_index));
    }
}

#[test]
fn category_counts_match_site_content() {
    let count = |category| filter_catalog(GALLERY_CATALOG, GalleryFilter::Category(category)).len();
    assert_eq!(count(ImageCategory::Art), 5);
    assert_eq!(count(ImageCategory::Nature), 3);
    assert_eq!(count(ImageCategory::Tech), 4);
}

#[test]
fn nature_filter_yields_three_entries() {
    assert_eq!(
        paths(GalleryFilter::Category(ImageCategory::Nature)),
        vec!["7.jpg", "19.jpg", "22.jpg"]
    );
}

#[test]
fn stagger_is_a_function_of_index_only() {
    assert_eq!(entrance_delay_ms(0, 100.0), 0.0);
    assert_eq!(entrance_delay_ms(1, 100.0), 100.0);
    assert_eq!(entrance_delay_ms(7, 100.0), 700.0);
}
