use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use comfy_table::{presets, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::Style;
use tracing_subscriber::EnvFilter;

use plan_compare_core::{
    columns::{product_columns, Align},
    config::{self, SiteConfig},
    get_products,
    product::products_json,
    theme::{FallbackThemeStore, FileThemeStore, MemoryThemeStore, ThemeSource},
    PageState, TableModel, Theme, ThemePreference, ThemeState,
};

// ── Palette ──────────────────────────────────────────────────────────

fn s_header() -> Style { Style::new().color256(252).bold() }  // bright gray, bold
fn s_dim() -> Style    { Style::new().color256(248) }         // light gray
fn s_tree() -> Style   { Style::new().color256(245) }         // mid gray
fn s_accent() -> Style { Style::new().color256(109) }         // teal accent

fn sep(width: usize) -> String {
    s_tree().apply_to("\u{2500}".repeat(width)).to_string()
}

// The terminal has no color-scheme query; treat it like a browser
// without a dark preference.
const SYSTEM_THEME: Theme = Theme::Light;

// ── CLI Args ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "plan-compare",
    about = "Compare AI coding-assistant pricing plans",
    version,
    after_help = "examples:\n  \
        plan-compare table\n  \
        plan-compare table --json\n  \
        plan-compare render --out index.html\n  \
        plan-compare render --theme dark        (ignore the saved theme)\n  \
        plan-compare theme toggle"
)]
struct Cli {
    /// Site settings (defaults to the bundled site.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the comparison page as HTML.
    Render {
        /// Output file; stdout when omitted
        #[arg(long, short)]
        out: Option<PathBuf>,
        /// light, dark or system; overrides the saved theme
        #[arg(long)]
        theme: Option<String>,
    },
    /// Print the plan table.
    Table {
        #[arg(long, short)]
        json: bool,
    },
    /// Show or toggle the saved theme.
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum ThemeAction {
    Show,
    Toggle,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let site = load_config(cli.config.as_deref())?;
    tracing::debug!(title = %site.title, links = site.links.len(), "site config ready");

    match cli.command {
        Some(Commands::Render { out, theme }) => cmd_render(site, out.as_deref(), theme.as_deref())?,
        Some(Commands::Table { json }) => cmd_table(json)?,
        Some(Commands::Theme { action }) => cmd_theme(&site, action.unwrap_or(ThemeAction::Show))?,
        None => cmd_table(false)?,
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SiteConfig> {
    let site = match path {
        Some(p) => config::load_site_config(p)?,
        None => config::load_bundled_site_config()?,
    };
    Ok(site)
}

fn file_store() -> anyhow::Result<FileThemeStore> {
    FileThemeStore::in_cache_dir().context("cannot determine cache directory")
}

// ── render ───────────────────────────────────────────────────────────

fn cmd_render(site: SiteConfig, out: Option<&Path>, theme: Option<&str>) -> anyhow::Result<()> {
    let generated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
    // An explicit theme neither reads nor writes the saved one.
    let (preference, store) = match theme {
        Some(raw) => (raw.parse::<ThemePreference>()?, FallbackThemeStore::Memory(MemoryThemeStore::default())),
        None => (
            site.default_theme,
            FallbackThemeStore::new(FileThemeStore::in_cache_dir()),
        ),
    };
    let html = render_html(site, preference, store, &generated_at);

    match out {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!(
                "  {} {}",
                s_dim().apply_to("wrote"),
                s_accent().apply_to(path.display())
            );
        }
        None => print!("{html}"),
    }
    Ok(())
}

fn render_html(
    site: SiteConfig,
    preference: ThemePreference,
    store: FallbackThemeStore,
    generated_at: &str,
) -> String {
    let state = ThemeState::init(store, preference, SYSTEM_THEME);
    PageState::new(site, state).render_document(Some(generated_at))
}

// ── table ────────────────────────────────────────────────────────────

fn cmd_table(json: bool) -> anyhow::Result<()> {
    let products = get_products();
    if json {
        println!("{}", products_json()?);
        return Ok(());
    }

    let data = TableModel::new(product_columns(), products);
    let aligns = data.aligns();

    println!();
    println!("  {}", s_header().apply_to("coding assistant plans"));
    println!("  {}", sep(48));

    if data.is_empty() {
        println!("  {}", s_dim().apply_to("no plans in the catalog"));
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        data.header_texts()
            .iter()
            .zip(&aligns)
            .map(|(h, a)| aligned(Cell::new(h), *a).fg(Color::AnsiValue(243)))
            .collect::<Vec<_>>(),
    );
    for row in data.row_texts() {
        table.add_row(
            row.iter()
                .zip(&aligns)
                .map(|(v, a)| match a {
                    Align::Right => aligned(Cell::new(v), *a).fg(Color::AnsiValue(109)),
                    Align::Left => aligned(Cell::new(v), *a).fg(Color::AnsiValue(252)),
                })
                .collect::<Vec<_>>(),
        );
    }
    println!("{table}");
    println!();
    Ok(())
}

fn aligned(cell: Cell, align: Align) -> Cell {
    match align {
        Align::Left => cell.set_alignment(CellAlignment::Left),
        Align::Right => cell.set_alignment(CellAlignment::Right),
    }
}

// ── theme ────────────────────────────────────────────────────────────

fn cmd_theme(site: &SiteConfig, action: ThemeAction) -> anyhow::Result<()> {
    let store = file_store()?;
    let path = store.path().to_path_buf();
    let mut state = ThemeState::init(store, site.default_theme, SYSTEM_THEME);

    match action {
        ThemeAction::Show => {
            let source = match state.source() {
                ThemeSource::Saved => "saved",
                ThemeSource::Default => "default",
                ThemeSource::Unreadable => "saved theme unreadable",
            };
            println!(
                "  {} {}",
                s_accent().apply_to(state.resolved()),
                s_dim().apply_to(format!("({source})"))
            );
        }
        ThemeAction::Toggle => {
            let before = state.resolved();
            let after = state.toggle()?;
            println!(
                "  {} {} {}",
                s_dim().apply_to(before),
                s_tree().apply_to("\u{2192}"),
                s_accent().apply_to(after)
            );
            println!("  {}", s_dim().apply_to(path.display()));
        }
    }
    Ok(())
}
