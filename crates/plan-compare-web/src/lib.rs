use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use plan_compare_core::columns::product_columns;
use plan_compare_core::config::{self, SiteConfig};
use plan_compare_core::theme::MemoryThemeStore;
use plan_compare_core::{
    Action, MenuState, Page, PageState, TableModel, Theme, ThemePreference, ThemeState,
};

const THEME_KEY: &str = "theme";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = localStorage, js_name = setItem)]
    fn store_item(key: &str, value: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = ["document", "documentElement", "classList"], js_name = toggle)]
    fn toggle_root_class(name: &str, force: bool) -> bool;
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// All plans in display order.
#[wasm_bindgen]
pub fn get_products() -> JsValue {
    serde_wasm_bindgen::to_value(plan_compare_core::get_products()).unwrap_or(JsValue::NULL)
}

/// Column headers in display order.
#[wasm_bindgen]
pub fn get_headers() -> JsValue {
    let table = TableModel::new(product_columns(), plan_compare_core::get_products());
    serde_wasm_bindgen::to_value(&table.header_texts()).unwrap_or(JsValue::NULL)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn site() -> Option<SiteConfig> {
    config::load_bundled_site_config().ok()
}

/// Page markup (navbar + table) for a resolved theme and drawer state.
/// Returns null for an unknown theme.
#[wasm_bindgen]
pub fn render_page(theme: &str, menu_open: bool) -> JsValue {
    let (Ok(theme), Some(site)) = (theme.parse::<Theme>(), site()) else {
        return JsValue::NULL;
    };
    let state = ThemeState::init(MemoryThemeStore::with_theme(theme), ThemePreference::System, theme);
    let mut page = PageState::new(site, state);
    if menu_open && page.dispatch(&Action::OpenMenu).is_err() {
        return JsValue::NULL;
    }
    JsValue::from_str(&page.render_body())
}

/// Table markup alone.
#[wasm_bindgen]
pub fn render_table() -> String {
    plan_compare_core::render_table()
}

#[component]
fn App(site: SiteConfig, initial: Theme) -> impl IntoView {
    let menu = RwSignal::new(MenuState::Closed);
    let theme = RwSignal::new(Some(initial));
    // Only adopt the new theme once localStorage has it.
    let on_toggle = Callback::new(move |next: Theme| {
        if store_item(THEME_KEY, next.as_str()).is_ok() {
            toggle_root_class("dark", next == Theme::Dark);
            theme.set(Some(next));
        }
    });

    view! { <Page title=site.title links=site.links menu=menu theme=theme on_toggle=on_toggle /> }
}

/// Mount the interactive page into `<body>`. `stored` is the value under the
/// `theme` localStorage key, empty when unset.
#[wasm_bindgen]
pub fn mount(stored: &str, prefers_dark: bool) {
    let Some(site) = site() else {
        return;
    };
    let initial = resolve(stored, prefers_dark, site.default_theme);
    toggle_root_class("dark", initial == Theme::Dark);
    leptos::mount::mount_to_body(move || view! { <App site=site initial=initial /> });
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Theme the toggle switches to. Anything other than "dark" counts as light.
#[wasm_bindgen]
pub fn next_theme(current: &str) -> String {
    let current = current.parse::<Theme>().unwrap_or(Theme::Light);
    current.next().to_string()
}

fn resolve(stored: &str, prefers_dark: bool, preference: ThemePreference) -> Theme {
    let system = if prefers_dark { Theme::Dark } else { Theme::Light };
    let store = match stored.parse::<Theme>() {
        Ok(t) => MemoryThemeStore::with_theme(t),
        Err(_) => MemoryThemeStore::default(),
    };
    ThemeState::init(store, preference, system).resolved()
}

/// Resolve a stored value ("light", "dark" or empty) against the site
/// default and the browser's `prefers-color-scheme`.
#[wasm_bindgen]
pub fn resolve_theme(stored: &str, prefers_dark: bool) -> String {
    let preference = site().map(|s| s.default_theme).unwrap_or_default();
    resolve(stored, prefers_dark, preference).to_string()
}
