//! Category index: deduplicated, case-insensitive, sorted grouping of the
//! catalog for menu rendering.

use std::collections::HashMap;

use crate::catalog::product::ProductRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryIndexEntry {
    /// Display label: the first-seen original casing, trimmed.
    pub category: String,
    /// `{id, name}` per product, in encounter order.
    pub items: Vec<CategoryItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryItem {
    pub id: String,
    pub name: String,
}

/// Build the category index from a flat product collection.
///
/// One pass over the input; buckets keyed by the lower-cased trimmed
/// category so `"Dimension"` and `"dimension"` collapse to one entry.
/// Output sorted ascending by case-folded label; ties keep encounter order.
/// Never fails: an empty input yields an empty index.
pub fn build_index(products: &[ProductRecord]) -> Vec<CategoryIndexEntry> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<CategoryIndexEntry> = Vec::new();

    for product in products {
        let label = product.category.trim();
        let key = label.to_lowercase();
        let position = *positions.entry(key).or_insert_with(|| {
            entries.push(CategoryIndexEntry {
                category: label.to_string(),
                items: Vec::new(),
            });
            entries.len() - 1
        });
        entries[position].items.push(CategoryItem {
            id: product.id.clone(),
            name: product.name.clone(),
        });
    }

    entries.sort_by(|a, b| a.category.to_lowercase().cmp(&b.category.to_lowercase()));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::normalize;
    use crate::catalog::raw::RawProduct;

    fn product(id: &str, name: &str, category: &str) -> ProductRecord {
        let json = format!(
            r#"{{"id": "{}", "name": "{}", "category": "{}"}}"#,
            id, name, category
        );
        normalize(serde_json::from_str::<RawProduct>(&json).unwrap())
    }

    #[test]
    fn test_empty_input_yields_empty_index() {
        assert!(build_index(&[]).is_empty());
    }

    #[test]
    fn test_case_insensitive_dedupe_keeps_first_seen_label() {
        let products = vec![
            product("1", "Caliper", "dimension"),
            product("2", "Multimeter", "Electrical"),
            product("3", "Micrometer", "DIMENSION"),
        ];
        let index = build_index(&products);
        assert_eq!(index.len(), 2);
        assert_eq!(index[0].category, "dimension");
        assert_eq!(index[0].items.len(), 2);
        assert_eq!(index[1].category, "Electrical");
    }

    #[test]
    fn test_item_encounter_order_is_preserved() {
        let products = vec![
            product("1", "B-item", "Tools"),
            product("2", "A-item", "Tools"),
        ];
        let index = build_index(&products);
        assert_eq!(index[0].items[0].name, "B-item");
        assert_eq!(index[0].items[1].name, "A-item");
    }

    #[test]
    fn test_sorted_ascending_by_label() {
        let products = vec![
            product("1", "x", "Material Testing"),
            product("2", "y", "dimension"),
            product("3", "z", "Environment"),
        ];
        let labels: Vec<String> = build_index(&products)
            .into_iter()
            .map(|e| e.category)
            .collect();
        assert_eq!(labels, vec!["dimension", "Environment", "Material Testing"]);
    }

    #[test]
    fn test_idempotence() {
        let products = vec![
            product("1", "a", "B"),
            product("2", "b", "a"),
            product("3", "c", "b"),
        ];
        assert_eq!(build_index(&products), build_index(&products));
    }

    #[test]
    fn test_uncategorized_products_get_their_own_bucket() {
        let record = normalize(serde_json::from_str::<RawProduct>(r#"{"id":"9"}"#).unwrap());
        let index = build_index(&[record]);
        assert_eq!(index.len(), 1);
        assert_eq!(index[0].category, "Uncategorized");
    }
}
