//! Table output formatting

use tabled::{
    Table, Tabled,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format rows as a table, one row per item
pub fn format_table<T: Tabled>(rows: &[T]) -> String {
    if rows.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Format a single item as a two-column FIELD/VALUE table
pub fn format_record<T: Tabled>(item: &T) -> String {
    let mut builder = Builder::default();
    for (field, value) in T::headers().into_iter().zip(item.fields()) {
        builder.push_record([field.to_string(), value.to_string()]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}
