//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// One evaluated line of a batch file.
pub struct BatchRow {
    /// The expression as written.
    pub expression: String,
    /// Postfix rendering, or `-` when tokenization failed.
    pub postfix: String,
    /// Formatted value or the specific error.
    pub outcome: String,
}

/// Format batch results as an ASCII table.
pub fn format_batch_table(rows: &[BatchRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Expression", "Postfix", "Result"]);

    for row in rows {
        table.add_row(vec![
            row.expression.clone(),
            row.postfix.clone(),
            row.outcome.clone(),
        ]);
    }

    table
}
