use leptos::prelude::*;
use tracing::debug;

use crate::columns::product_columns;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::icons::Logo;
use crate::navbar::{Action, MenuState, NavLink, Navbar};
use crate::product::get_products;
use crate::table::DataTable;
use crate::theme::{DarkModeToggle, Theme, ThemeState, ThemeStore};

/// Render a view to an HTML string under a fresh reactive owner.
pub fn render_to_html<F, V>(f: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    Owner::new().with(|| f().to_html())
}

/// The comparison page: navbar over the plan table.
///
/// `theme` is `None` until the client knows which theme is active; the
/// toggle is left out until then.
#[component]
pub fn Page(
    #[prop(into)] title: String,
    links: Vec<NavLink>,
    menu: RwSignal<MenuState>,
    #[prop(into)] theme: Signal<Option<Theme>>,
    on_toggle: Callback<Theme>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen font-sans">
            <Navbar links=links logo=view! { <Logo /> }.into_any() title=title menu=menu>
                <DarkModeToggle theme=theme on_toggle=on_toggle />
            </Navbar>
            <main class="flex flex-col gap-8 items-center sm:items-start p-8 pb-20 sm:p-20">
                <div class="container mx-auto py-10">
                    <DataTable columns=product_columns() records=get_products() />
                </div>
            </main>
        </div>
    }
}

/// Drawer and theme state behind a server-rendered page.
///
/// `dispatch` runs one handler to completion; callers re-render afterwards.
pub struct PageState<S> {
    config: SiteConfig,
    theme: ThemeState<S>,
    menu: MenuState,
}

impl<S: ThemeStore> PageState<S> {
    pub fn new(config: SiteConfig, theme: ThemeState<S>) -> Self {
        Self {
            config,
            theme,
            menu: MenuState::Closed,
        }
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn theme(&self) -> &ThemeState<S> {
        &self.theme
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// A failed theme save leaves both theme and drawer untouched.
    pub fn dispatch(&mut self, action: &Action) -> Result<()> {
        debug!(action = action.as_str(), "dispatch");
        if let Action::ToggleTheme = action {
            self.theme.toggle()?;
        }
        self.menu = self.menu.on_action(action);
        Ok(())
    }

    /// The page markup for the current state, without the document shell.
    pub fn render_body(&self) -> String {
        let title = self.config.title.clone();
        let links = self.config.links.clone();
        let menu = self.menu;
        let theme = self.theme.resolved();
        render_to_html(move || {
            view! {
                <Page
                    title=title
                    links=links
                    menu=RwSignal::new(menu)
                    theme=Signal::stored(Some(theme))
                    on_toggle=Callback::new(|_| {})
                />
            }
        })
    }

    /// Full HTML document for the current state.
    pub fn render_document(&self, generated_at: Option<&str>) -> String {
        let theme = self.theme.resolved();
        let title = self.config.title.clone();
        let head_title = title.clone();
        let links = self.config.links.clone();
        let menu = self.menu;
        let footer = generated_at
            .filter(|_| self.config.generated_footer)
            .map(|ts| format!("Generated at {ts}"));

        let html = render_to_html(move || {
            view! {
                <html
                    lang="en"
                    class=if theme == Theme::Dark { "dark" } else { "" }
                    data-theme=theme.as_str()
                    style=format!("color-scheme: {theme}")
                >
                    <head>
                        <meta charset="utf-8" />
                        <meta name="viewport" content="width=device-width, initial-scale=1" />
                        <title>{head_title}</title>
                    </head>
                    <body class="bg-white text-gray-900 dark:bg-black dark:text-gray-100">
                        <Page
                            title=title
                            links=links
                            menu=RwSignal::new(menu)
                            theme=Signal::stored(Some(theme))
                            on_toggle=Callback::new(|_| {})
                        />
                        {footer.map(|text| {
                            view! { <footer class="py-6 text-center text-xs text-gray-500">{text}</footer> }
                        })}
                    </body>
                </html>
            }
        });

        format!("<!DOCTYPE html>\n{html}\n")
    }
}
