use leptos::prelude::*;

use crate::columns::{product_columns, Accessor, Align, CellRenderer, ColumnDef};
use crate::page::render_to_html;
use crate::product::get_products;

// Renderer resolved per column when the table is built, not per cell.
struct ResolvedColumn<R> {
    header: &'static str,
    accessor: Accessor<R>,
    align: Align,
    cell: CellRenderer,
}

/// Column definitions bound to a record slice.
///
/// No sorting, filtering or pagination: records are shown exactly in the
/// order given.
pub struct TableModel<'a, R> {
    columns: Vec<ResolvedColumn<R>>,
    records: &'a [R],
}

impl<'a, R> TableModel<'a, R> {
    pub fn new(columns: &[ColumnDef<R>], records: &'a [R]) -> Self {
        let columns = columns
            .iter()
            .map(|c| ResolvedColumn {
                header: c.header,
                accessor: c.accessor,
                align: c.align,
                cell: c.cell,
            })
            .collect();
        Self { columns, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn header_texts(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.header).collect()
    }

    pub fn aligns(&self) -> Vec<Align> {
        self.columns.iter().map(|c| c.align).collect()
    }

    /// Raw field values, one inner vec per record.
    pub fn row_texts(&self) -> Vec<Vec<&'a str>> {
        self.records
            .iter()
            .map(|r| self.columns.iter().map(|c| (c.accessor)(r)).collect())
            .collect()
    }
}

/// A header row plus one body row per record, columns in definition order.
#[component]
pub fn DataTable<R>(columns: &'static [ColumnDef<R>], records: &'static [R]) -> impl IntoView
where
    R: Send + Sync + 'static,
{
    let model = TableModel::new(columns, records);

    let headers = model
        .columns
        .iter()
        .map(|c| {
            let header = c.header;
            view! {
                <th class="h-10 px-2 text-left align-middle font-medium text-muted-foreground">
                    {header}
                </th>
            }
        })
        .collect_view();

    let rows = model
        .records
        .iter()
        .map(|record| {
            let cells = model
                .columns
                .iter()
                .map(|c| {
                    let cell = c.cell.render((c.accessor)(record));
                    view! { <td class="p-2 align-middle">{cell}</td> }
                })
                .collect_view();
            view! { <tr class="border-b transition-colors hover:bg-muted/50">{cells}</tr> }
        })
        .collect_view();

    view! {
        <div class="rounded-md border">
            <table class="w-full caption-bottom text-sm">
                <thead>
                    <tr class="border-b transition-colors">{headers}</tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

/// Markup of the plan table on its own.
pub fn render_table() -> String {
    render_to_html(|| view! { <DataTable columns=product_columns() records=get_products() /> })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Product;

    fn product_table(records: &'static [Product]) -> String {
        render_to_html(move || view! { <DataTable columns=product_columns() records=records /> })
    }

    #[test]
    fn one_row_per_record_in_order() {
        let products = get_products();
        let html = render_table();

        assert_eq!(html.matches("<tr class").count(), products.len() + 1);
        assert_eq!(html.matches("<td class").count(), products.len() * 4);
        let pro = html.find(">Pro<").unwrap();
        let business = html.find(">Business<").unwrap();
        assert!(pro < business);
    }

    #[test]
    fn headers_in_column_order() {
        let html = product_table(get_products());
        let positions: Vec<_> = ["Provider", "Plan", "Price", "Completions"]
            .iter()
            .map(|h| html.find(&format!(">{h}<")).expect("header missing"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_records_render_header_only() {
        let html = product_table(&[]);
        assert_eq!(html.matches("<tr class").count(), 1);
        assert_eq!(html.matches("<th class").count(), 4);
        assert_eq!(html.matches("<td").count(), 0);
        assert!(html.contains("<table"));
    }

    #[test]
    fn price_cells_use_custom_renderer() {
        let products = get_products();
        let html = product_table(products);
        assert_eq!(html.matches("text-right font-medium").count(), products.len());
        assert!(html.contains(r#"<div class="text-right font-medium">$40/month</div>"#));
    }

    #[test]
    fn row_texts_match_columns() {
        let table = TableModel::new(product_columns(), get_products());
        assert_eq!(table.header_texts(), ["Provider", "Plan", "Price", "Completions"]);
        assert_eq!(table.row_texts()[0], ["Cursor", "Free", "Free", "2000"]);
        assert_eq!(table.aligns()[2], Align::Right);
    }

    struct Pair(&'static str, &'static str);

    fn left(p: &Pair) -> &str {
        p.0
    }

    fn right(p: &Pair) -> &str {
        p.1
    }

    static PAIR_COLUMNS: [ColumnDef<Pair>; 2] =
        [ColumnDef::plain("l", "L", left), ColumnDef::plain("r", "R", right)];
    static PAIRS: [Pair; 2] = [Pair("a", "b"), Pair("c", "d")];

    #[test]
    fn works_for_any_record_type() {
        let table = TableModel::new(&PAIR_COLUMNS, &PAIRS);
        assert_eq!(table.len(), 2);
        assert_eq!(table.row_texts(), vec![vec!["a", "b"], vec!["c", "d"]]);

        let html = render_to_html(|| view! { <DataTable columns=&PAIR_COLUMNS[..] records=&PAIRS[..] /> });
        assert_eq!(html.matches("<td class").count(), 4);
        assert!(!html.contains("text-right"));
    }
}
