mod app_core;
mod app_router;
mod confetti;
mod page_runtime;
mod persisted_store;
mod scheduler;
mod viewport;
mod yew_app;

use folio_core::PageState;

use crate::app_core::AppCore;
use crate::confetti::ConfettiHost;
use crate::yew_app::{App, AppProps};

fn main() {
    let init = app_router::load_init_config();
    let prefers_dark = persisted_store::prefers_dark_scheme();
    let theme = persisted_store::theme_store().load(prefers_dark);
    gloo::console::log!(
        "folio: boot",
        theme.as_str(),
        init.filter.as_str(),
        init.page.confetti_enabled
    );
    viewport::apply_theme(theme);
    let confetti = ConfettiHost::new(init.page.confetti);
    let core = AppCore::new(PageState::new(init.page, theme, init.filter));
    yew::Renderer::<App>::with_props(AppProps { core, confetti }).render();
}
