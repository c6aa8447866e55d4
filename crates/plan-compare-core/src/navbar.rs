use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::icons::{CloseIcon, MenuIcon};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// What a click on the page asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenMenu,
    CloseMenu,
    ToggleTheme,
    FollowLink(String),
}

impl Action {
    pub fn as_str(&self) -> &str {
        match self {
            Self::OpenMenu => "open-menu",
            Self::CloseMenu => "close-menu",
            Self::ToggleTheme => "toggle-theme",
            Self::FollowLink(href) => href,
        }
    }
}

/// Mobile drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Trigger opens; close button or any link closes; other actions leave
    /// the drawer alone.
    pub fn on_action(self, action: &Action) -> Self {
        match action {
            Action::OpenMenu => Self::Open,
            Action::CloseMenu | Action::FollowLink(_) => Self::Closed,
            Action::ToggleTheme => self,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

fn apply(menu: RwSignal<MenuState>, action: Action) {
    menu.update(|m| *m = m.on_action(&action));
}

const SR_ONLY_STYLE: &str = "position:absolute;width:1px;height:1px;padding:0;margin:-1px;\
                             overflow:hidden;clip:rect(0,0,0,0);white-space:nowrap;border:0";

fn nav_link(link: NavLink, class: &'static str, menu: RwSignal<MenuState>) -> impl IntoView {
    let NavLink { href, label } = link;
    let target = href.clone();
    view! {
        <a href=href class=class on:click=move |_| apply(menu, Action::FollowLink(target.clone()))>
            {label}
        </a>
    }
}

/// Drawer trigger plus, while `menu` is open, the right-side drawer with the
/// same links as the desktop bar.
#[component]
pub fn NavbarMobileMenu(
    links: Vec<NavLink>,
    #[prop(into)] title: String,
    menu: RwSignal<MenuState>,
) -> impl IntoView {
    let drawer = move || {
        menu.get().is_open().then(|| {
            let links = links
                .iter()
                .cloned()
                .map(|link| {
                    nav_link(
                        link,
                        "px-2 py-1 text-gray-800 dark:text-gray-100 hover:underline font-medium",
                        menu,
                    )
                })
                .collect_view();
            view! {
                <div
                    role="dialog"
                    aria-modal="true"
                    data-testid="mobile-nav"
                    data-side="right"
                    class="fixed inset-y-0 right-0 z-50 h-full w-[240px] sm:w-[300px] border-l bg-background p-6 shadow-lg"
                >
                    <h2 style=SR_ONLY_STYLE>{title.clone()}</h2>
                    <div class="flex flex-col gap-4 py-4">
                        <div class="flex flex-col space-y-3 mt-4">{links}</div>
                    </div>
                    <button
                        type="button"
                        aria-label="Close"
                        class="absolute right-4 top-4 rounded-sm opacity-70 hover:opacity-100"
                        on:click=move |_| apply(menu, Action::CloseMenu)
                    >
                        <CloseIcon />
                    </button>
                </div>
            }
        })
    };

    view! {
        <button
            type="button"
            aria-label="Menu"
            aria-expanded=move || if menu.get().is_open() { "true" } else { "false" }
            class="md:hidden inline-flex h-9 w-9 items-center justify-center rounded-md hover:bg-accent"
            on:click=move |_| apply(menu, Action::OpenMenu)
        >
            <MenuIcon />
        </button>
        {drawer}
    }
}

/// Sticky top bar: brand, desktop links, then `children` (the theme toggle)
/// next to the mobile menu.
#[component]
pub fn Navbar(
    links: Vec<NavLink>,
    logo: AnyView,
    #[prop(into)] title: String,
    menu: RwSignal<MenuState>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let desktop = links
        .iter()
        .cloned()
        .map(|link| {
            view! {
                <li>
                    {nav_link(link, "text-gray-800 dark:text-gray-100 hover:underline font-medium", menu)}
                </li>
            }
        })
        .collect_view();
    let brand_title = title.clone();

    view! {
        <nav class="sticky top-0 z-50 w-full flex items-center justify-between py-4 px-6 border-b border-gray-200 dark:border-gray-700 bg-white dark:bg-black backdrop-blur">
            <a
                href="/"
                class="flex items-center gap-3 focus:outline-none focus-visible:ring-2 focus-visible:ring-blue-500 rounded"
                on:click=move |_| apply(menu, Action::FollowLink("/".to_string()))
            >
                {logo}
                <span class="text-xl font-semibold tracking-tight text-gray-900 dark:text-gray-100 select-none">
                    {brand_title}
                </span>
            </a>
            <ul class="hidden md:flex gap-6">{desktop}</ul>
            <div class="flex items-center gap-2">
                {children.map(|c| c())}
                <NavbarMobileMenu links=links title=title menu=menu />
            </div>
        </nav>
    }
}
