use crate::dom::Element;
use crate::model::TableSnapshot;

pub(crate) const DATA_ROW_ATTRIBUTE: &str = "data-table-target";
pub(crate) const DATA_ROW_VALUE: &str = "row";
pub(crate) const HEADER_TEXT_ATTRIBUTE: &str = "data-role";
pub(crate) const HEADER_TEXT_VALUE: &str = "header-text";
pub(crate) const ACCORDION_ATTRIBUTE: &str = "data-accordion-content";
pub(crate) const EXCLUDED_BODY_CLASS: &str = "contents";

pub(crate) fn extract_snapshot<E: Element>(table: &E) -> TableSnapshot {
    TableSnapshot {
        headers: extract_headers(table),
        rows: extract_rows(table),
    }
}

fn extract_headers<E: Element>(table: &E) -> Vec<String> {
    let Some(thead) = table
        .descendants()
        .into_iter()
        .find(|node| node.tag_name() == "thead")
    else {
        return Vec::new();
    };

    thead
        .descendants()
        .into_iter()
        .filter(|node| node.tag_name() == "th")
        .map(|cell| header_label(&cell))
        .collect()
}

// A cell's own text wins; a cell that renders none falls back to its nested
// header-text marker element.
fn header_label<E: Element>(cell: &E) -> String {
    let own = cell.own_text();
    if !own.trim().is_empty() {
        return own;
    }

    cell.descendants()
        .into_iter()
        .find(|node| node.attribute(HEADER_TEXT_ATTRIBUTE).as_deref() == Some(HEADER_TEXT_VALUE))
        .map_or(own, |marker| marker.text())
}

fn extract_rows<E: Element>(table: &E) -> Vec<Vec<String>> {
    let marked: Vec<E> = table
        .children()
        .into_iter()
        .filter(|node| node.tag_name() == "tbody" && !node.has_class(EXCLUDED_BODY_CLASS))
        .flat_map(|body| body.descendants())
        .filter(|node| {
            node.tag_name() == "tr"
                && node.attribute(DATA_ROW_ATTRIBUTE).as_deref() == Some(DATA_ROW_VALUE)
        })
        .collect();

    let top_level: Vec<E> = marked
        .iter()
        .filter(|row| !inside_accordion_content(*row, table))
        .cloned()
        .collect();

    // The accordion filter degrades to a no-op rather than eliminating every row.
    let rows = if top_level.is_empty() && !marked.is_empty() {
        tracing::debug!(
            rows = marked.len(),
            "every data row sits in accordion content; keeping all of them"
        );
        marked
    } else {
        top_level
    };

    rows.iter().map(row_cells).collect()
}

fn row_cells<E: Element>(row: &E) -> Vec<String> {
    row.children()
        .into_iter()
        .filter(|node| node.tag_name() == "td")
        .map(|cell| cell.text())
        .collect()
}

// A row sits in accordion content when, between it and the resolved table, a
// table element lies below an ancestor carrying the accordion marker.
fn inside_accordion_content<E: Element>(row: &E, table: &E) -> bool {
    let mut crossed_table = false;
    let mut cursor = row.parent();

    while let Some(node) = cursor {
        if node == *table {
            return false;
        }
        if node.attribute(ACCORDION_ATTRIBUTE).is_some() {
            return crossed_table;
        }
        if node.tag_name() == "table" {
            crossed_table = true;
        }
        cursor = node.parent();
    }

    false
}
