//! Removal of header-less columns from point-of-sale style sheets.

use crate::table::{is_unnamed_label, Table};
use std::collections::HashSet;

/// Sheet name fragment that marks a sheet as point-of-sale style.
const POS_SHEET_MARKER: &str = "BU POS";

/// Strips columns whose label was synthesized for a missing header cell.
///
/// Applies only when the sheet is listed in `pos_sheets` or its name
/// contains `"BU POS"` (case-sensitive). Both predicates are honored
/// independently; an empty configured set does not disable the name match.
/// Returns the reduced table and the number of columns removed (0 when the
/// sheet does not qualify or has no such columns).
pub fn strip_unnamed_columns(
    table: &Table,
    sheet: &str,
    pos_sheets: &HashSet<String>,
) -> (Table, usize) {
    if !pos_sheets.contains(sheet) && !sheet.contains(POS_SHEET_MARKER) {
        return (table.to_owned(), 0);
    }

    let kept: Vec<_> = table
        .columns()
        .iter()
        .filter(|column| !is_unnamed_label(&column.label))
        .cloned()
        .collect();
    let removed = table.column_count() - kept.len();
    (Table::new(kept), removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spreadsheet::cell::CellValue;
    use crate::table::{unnamed_label, Column};

    fn pos_table() -> Table {
        Table::new(vec![
            Column::new("Code", vec![CellValue::Text("X1".to_owned())]),
            Column::new(unnamed_label(1), vec![CellValue::Text("stray".to_owned())]),
            Column::new("Qty", vec![CellValue::Int(5)]),
        ])
    }

    #[test]
    fn name_fragment_triggers_removal() {
        let (table, removed) = strip_unnamed_columns(&pos_table(), "BU POS SPE", &HashSet::new());

        assert_eq!(removed, 1);
        assert_eq!(table.labels().collect::<Vec<_>>(), vec!["Code", "Qty"]);
    }

    #[test]
    fn configured_set_triggers_removal() {
        let pos_sheets = HashSet::from(["Inventory".to_owned()]);
        let (table, removed) = strip_unnamed_columns(&pos_table(), "Inventory", &pos_sheets);

        assert_eq!(removed, 1);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn other_sheets_are_untouched() {
        let (table, removed) = strip_unnamed_columns(&pos_table(), "Orders", &HashSet::new());

        assert_eq!(removed, 0);
        assert_eq!(table, pos_table());
    }

    #[test]
    fn qualifying_sheet_without_unnamed_columns() {
        let table = Table::new(vec![Column::new("Code", vec![CellValue::Int(1)])]);
        let (kept, removed) = strip_unnamed_columns(&table, "BU POS", &HashSet::new());

        assert_eq!(removed, 0);
        assert_eq!(kept, table);
    }
}
