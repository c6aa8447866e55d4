pub mod columns;
pub mod config;
pub mod error;
pub mod icons;
pub mod navbar;
pub mod page;
pub mod product;
pub mod table;
pub mod theme;

pub use error::PcError;
pub use navbar::{Action, MenuState, NavLink, Navbar, NavbarMobileMenu};
pub use page::{render_to_html, Page, PageState};
pub use product::{get_products, Product};
pub use table::{render_table, DataTable, TableModel};
pub use theme::{DarkModeToggle, Theme, ThemePreference, ThemeSource, ThemeState, ThemeStore};
