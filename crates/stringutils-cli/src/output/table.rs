//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Format split pieces as a table of index, length and text.
pub fn format_pieces_table(pieces: &[String]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Length", "Piece"]);

    for (i, piece) in pieces.iter().enumerate() {
        table.add_row(vec![
            i.to_string(),
            piece.chars().count().to_string(),
            format!("{:?}", piece),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_row_per_piece() {
        let pieces = vec!["a".to_string(), String::new()];
        let table = format_pieces_table(&pieces);
        assert_eq!(table.row_count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("\"a\""));
        assert!(rendered.contains("\"\""));
    }
}
