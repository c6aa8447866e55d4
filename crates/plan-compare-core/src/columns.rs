use leptos::prelude::*;

use crate::product::Product;

/// Reads one display field out of a record.
pub type Accessor<R> = fn(&R) -> &str;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// How a column turns its field value into a cell.
#[derive(Clone, Copy)]
pub enum CellRenderer {
    /// The raw field value as text.
    Plain,
    Custom(fn(&str) -> AnyView),
}

impl CellRenderer {
    pub fn render(&self, value: &str) -> AnyView {
        match self {
            Self::Plain => value.to_string().into_any(),
            Self::Custom(f) => f(value),
        }
    }
}

/// Maps one record field to one displayed column.
pub struct ColumnDef<R> {
    pub key: &'static str,
    pub header: &'static str,
    pub accessor: Accessor<R>,
    pub align: Align,
    pub cell: CellRenderer,
}

impl<R> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ColumnDef<R> {}

impl<R> ColumnDef<R> {
    pub const fn plain(key: &'static str, header: &'static str, accessor: Accessor<R>) -> Self {
        Self {
            key,
            header,
            accessor,
            align: Align::Left,
            cell: CellRenderer::Plain,
        }
    }

    pub const fn custom(
        key: &'static str,
        header: &'static str,
        accessor: Accessor<R>,
        align: Align,
        render: fn(&str) -> AnyView,
    ) -> Self {
        Self {
            key,
            header,
            accessor,
            align,
            cell: CellRenderer::Custom(render),
        }
    }

    pub fn value<'r>(&self, record: &'r R) -> &'r str {
        (self.accessor)(record)
    }
}

fn provider(p: &Product) -> &str {
    p.provider
}

fn plan(p: &Product) -> &str {
    p.plan
}

fn price(p: &Product) -> &str {
    p.price
}

fn completions(p: &Product) -> &str {
    p.completions
}

/// Price cell: right-aligned, medium weight, text unchanged.
pub fn price_cell(value: &str) -> AnyView {
    let value = value.to_string();
    view! { <div class="text-right font-medium">{value}</div> }.into_any()
}

pub static PRODUCT_COLUMNS: &[ColumnDef<Product>] = &[
    ColumnDef::plain("provider", "Provider", provider),
    ColumnDef::plain("plan", "Plan", plan),
    ColumnDef::custom("price", "Price", price, Align::Right, price_cell),
    ColumnDef::plain("completions", "Completions", completions),
];

pub fn product_columns() -> &'static [ColumnDef<Product>] {
    PRODUCT_COLUMNS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::get_products;

    #[test]
    fn headers_in_display_order() {
        let headers: Vec<_> = product_columns().iter().map(|c| c.header).collect();
        assert_eq!(headers, ["Provider", "Plan", "Price", "Completions"]);
    }

    #[test]
    fn only_price_has_custom_renderer() {
        for col in product_columns() {
            let custom = matches!(col.cell, CellRenderer::Custom(_));
            assert_eq!(custom, col.key == "price", "{}: unexpected renderer", col.key);
        }
    }

    #[test]
    fn price_cell_is_right_aligned_whatever_the_value() {
        for value in ["Free", "$20/month", "Unlimited"] {
            let html = price_cell(value).to_html();
            let expected = format!(r#"<div class="text-right font-medium">{value}</div>"#);
            assert!(html.contains(&expected), "{html}");
        }
    }

    #[test]
    fn plain_cells_escape_their_value() {
        let html = CellRenderer::Plain.render("<b>&</b>").to_html();
        assert!(html.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
    }

    #[test]
    fn accessors_read_matching_fields() {
        let p = &get_products()[1];
        let values: Vec<_> = product_columns().iter().map(|c| c.value(p)).collect();
        assert_eq!(values, ["Cursor", "Pro", "$20/month", "Unlimited"]);
    }
}
