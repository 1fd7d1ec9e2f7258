//! Tabular sort and pagination.
//!
//! Every list view in the application funnels its records through
//! [`view`]: an optional stable sort by a named field, then a page
//! slice.  Records can be any serialisable type; the sort key is
//! looked up in the record's JSON form, so the utility works equally
//! for typed structs and for loosely shaped imported rows.
//!
//! Field values have no single natural order across types, so the
//! comparison uses an explicit total-order policy: two numbers compare
//! numerically, two strings lexicographically, and anything else
//! (mixed types, booleans, nulls, nested values) falls back to
//! comparing the JSON renderings of the values.  Records missing the
//! sort key compare as nulls.

use crate::models::{Page, SortDirection, SortSpec};
use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;

/// Sorts and paginates `records` into one page of a tabular view.
///
/// With `sort` of `None` the input order is preserved.  `page_number`
/// is 1-based; a page beyond the last yields empty `items` rather
/// than an error, which is what lets the UI disable its "next"
/// button by comparing `page_number` against `total_pages`.
/// `total_pages` is at least 1 even for an empty record set.
/// A `page_number` of 0 and a `page_size` of 0 are normalised to 1.
pub fn view<T: Serialize + Clone>(
    records: &[T],
    sort: Option<&SortSpec>,
    page_number: usize,
    page_size: usize,
) -> Page<T> {
    let page_number = page_number.max(1);
    let page_size = page_size.max(1);

    let ordered: Vec<T> = match sort {
        None => records.to_vec(),
        Some(spec) => {
            let mut keyed: Vec<(Value, T)> = records
                .iter()
                .map(|record| (field_value(record, &spec.key), record.clone()))
                .collect();
            // sort_by is stable, and ties compare Equal in either
            // direction, so duplicates keep their input order.
            keyed.sort_by(|a, b| match spec.direction {
                SortDirection::Ascending => compare_values(&a.0, &b.0),
                SortDirection::Descending => compare_values(&a.0, &b.0).reverse(),
            });
            keyed.into_iter().map(|(_, record)| record).collect()
        }
    };

    let total_pages = ordered.len().div_ceil(page_size).max(1);
    let start = (page_number - 1) * page_size;
    let items = if start >= ordered.len() {
        Vec::new()
    } else {
        let end = (start + page_size).min(ordered.len());
        ordered[start..end].to_vec()
    };

    Page {
        items,
        page_number,
        total_pages,
    }
}

/// The named field of `record`'s JSON form, or `Null` when the record
/// is not an object or lacks the field.
fn field_value<T: Serialize>(record: &T, key: &str) -> Value {
    match serde_json::to_value(record) {
        Ok(Value::Object(mut map)) => map.remove(key).unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

/// Total order over JSON values for sorting purposes.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Row {
        name: &'static str,
        quantity: i64,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "bolts", quantity: 40 },
            Row { name: "anchors", quantity: 15 },
            Row { name: "clamps", quantity: 15 },
            Row { name: "washers", quantity: 7 },
        ]
    }

    fn sort(key: &str, direction: SortDirection) -> SortSpec {
        SortSpec {
            key: key.to_string(),
            direction,
        }
    }

    #[test]
    fn no_sort_preserves_input_order() {
        let records = rows();
        let page = view(&records, None, 1, 10);
        assert_eq!(page.items, records);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn sorts_strings_lexicographically() {
        let page = view(&rows(), Some(&sort("name", SortDirection::Ascending)), 1, 10);
        let names: Vec<&str> = page.items.iter().map(|r| r.name).collect();
        assert_eq!(names, ["anchors", "bolts", "clamps", "washers"]);
    }

    #[test]
    fn sorts_numbers_numerically() {
        let page = view(&rows(), Some(&sort("quantity", SortDirection::Descending)), 1, 10);
        let quantities: Vec<i64> = page.items.iter().map(|r| r.quantity).collect();
        assert_eq!(quantities, [40, 15, 15, 7]);
    }

    #[test]
    fn ties_keep_their_original_order() {
        let ascending = view(&rows(), Some(&sort("quantity", SortDirection::Ascending)), 1, 10);
        let names: Vec<&str> = ascending.items.iter().map(|r| r.name).collect();
        // anchors appeared before clamps in the input and both have
        // quantity 15, so anchors stays first.
        assert_eq!(names, ["washers", "anchors", "clamps", "bolts"]);

        let descending = view(&rows(), Some(&sort("quantity", SortDirection::Descending)), 1, 10);
        let names: Vec<&str> = descending.items.iter().map(|r| r.name).collect();
        assert_eq!(names, ["bolts", "anchors", "clamps", "washers"]);
    }

    #[test]
    fn pages_slice_and_overflow_to_empty() {
        let records: Vec<Row> = (0..15)
            .map(|i| Row { name: "item", quantity: i })
            .collect();
        let page = view(&records, None, 1, 7);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 7);

        let last = view(&records, None, 3, 7);
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0].quantity, 14);

        let beyond = view(&records, None, 4, 7);
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total_pages, 3);
        assert_eq!(beyond.page_number, 4);
    }

    #[test]
    fn empty_records_still_have_one_page() {
        let page = view(&[] as &[Row], None, 1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn zero_page_inputs_are_normalised() {
        let records = rows();
        let page = view(&records, None, 0, 0);
        assert_eq!(page.page_number, 1);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 4);
    }

    #[test]
    fn mixed_value_types_fall_back_to_rendered_order() {
        let records = vec![
            json!({"id": 1, "value": "10"}),
            json!({"id": 2, "value": 9}),
            json!({"id": 3}),
        ];
        // Renderings: "\"10\"", "9", null -> "null"; the exact order
        // matters less than it being total and deterministic.
        let page = view(&records, Some(&sort("value", SortDirection::Ascending)), 1, 10);
        assert_eq!(page.items.len(), 3);
        let rerun = view(&records, Some(&sort("value", SortDirection::Ascending)), 1, 10);
        assert_eq!(page.items, rerun.items);
    }

    #[test]
    fn missing_sort_key_does_not_panic() {
        let page = view(&rows(), Some(&sort("no_such_field", SortDirection::Ascending)), 1, 10);
        assert_eq!(page.items, rows());
    }
}
