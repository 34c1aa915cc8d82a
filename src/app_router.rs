use web_sys::UrlSearchParams;

use folio_core::{GalleryFilter, PageConfig};

#[derive(Clone, Debug)]
pub(crate) struct InitConfig {
    pub(crate) page: PageConfig,
    pub(crate) filter: GalleryFilter,
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            page: PageConfig::default(),
            filter: GalleryFilter::All,
        }
    }
}

pub(crate) fn load_init_config() -> InitConfig {
    let Some(window) = web_sys::window() else {
        return InitConfig::default();
    };
    let search = window.location().search().unwrap_or_default();
    parse_init_config(&search)
}

/// Reads `?filter=<all|art|nature|tech>` and `?confetti=<count>`. Unknown or
/// malformed values fall back to the defaults.
pub(crate) fn parse_init_config(search: &str) -> InitConfig {
    let mut config = InitConfig::default();
    let search = search.trim();
    if search.is_empty() {
        return config;
    }
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        return config;
    };
    if let Some(raw) = params.get("filter") {
        match raw.parse::<GalleryFilter>() {
            Ok(filter) => config.filter = filter,
            Err(err) => gloo::console::warn!("ignoring filter param:", err.to_string()),
        }
    }
    if let Some(count) = params.get("confetti").and_then(|raw| raw.trim().parse::<usize>().ok()) {
        config.page = config.page.with_confetti_count(count);
    }
    config
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use folio_core::particles::MAX_CONFETTI_COUNT;
    use folio_core::ImageCategory;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn empty_query_uses_defaults() {
        let config = parse_init_config("");
        assert_eq!(config.filter, GalleryFilter::All);
        assert!(config.page.confetti_enabled);
        assert_eq!(config.page.confetti.count, 150);
    }

    #[wasm_bindgen_test]
    fn filter_and_confetti_params_apply() {
        let config = parse_init_config("?filter=Nature&confetti=40");
        assert_eq!(config.filter, GalleryFilter::Category(ImageCategory::Nature));
        assert_eq!(config.page.confetti.count, 40);

        let off = parse_init_config("?confetti=0&filter=sculpture");
        assert!(!off.page.confetti_enabled);
        assert_eq!(off.filter, GalleryFilter::All);
    }

    #[wasm_bindgen_test]
    fn huge_confetti_param_is_clamped() {
        let config = parse_init_config("?confetti=18446744073709551615");
        assert!(config.page.confetti_enabled);
        assert_eq!(config.page.confetti.count, MAX_CONFETTI_COUNT);
    }
}
