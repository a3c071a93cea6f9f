//! Category filtering and subcategory grouping for the catalog view.

use crate::catalog::product::ProductRecord;

pub const NO_SUBCATEGORY: &str = "No Subcategory";

#[derive(Debug, Clone, PartialEq)]
pub struct SubcategoryGroup {
    pub label: String,
    pub products: Vec<ProductRecord>,
}

/// Exact-match, case-insensitive category filter over trimmed labels.
pub fn filter_by_category(products: &[ProductRecord], category: &str) -> Vec<ProductRecord> {
    let wanted = category.trim().to_lowercase();
    products
        .iter()
        .filter(|p| p.category.trim().to_lowercase() == wanted)
        .cloned()
        .collect()
}

/// Group a filtered set by subcategory.
///
/// Returns `None` when no product carries a non-empty subcategory, in which
/// case the view renders one flat grid. Otherwise every product lands in exactly one
/// group, blanks under [`NO_SUBCATEGORY`], groups in first-encounter order.
pub fn group_by_subcategory(products: &[ProductRecord]) -> Option<Vec<SubcategoryGroup>> {
    if products.iter().all(|p| p.subcategory.is_none()) {
        return None;
    }

    let mut groups: Vec<SubcategoryGroup> = Vec::new();
    for product in products {
        let label = product
            .subcategory
            .as_deref()
            .unwrap_or(NO_SUBCATEGORY);
        let key = label.to_lowercase();
        match groups
            .iter_mut()
            .find(|g| g.label.to_lowercase() == key)
        {
            Some(group) => group.products.push(product.clone()),
            None => groups.push(SubcategoryGroup {
                label: label.to_string(),
                products: vec![product.clone()],
            }),
        }
    }
    Some(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::normalize;
    use crate::catalog::raw::RawProduct;

    fn product(id: &str, category: &str, subcategory: Option<&str>) -> ProductRecord {
        let json = match subcategory {
            Some(sub) => format!(
                r#"{{"id":"{}","name":"p{}","category":"{}","subcategory":"{}"}}"#,
                id, id, category, sub
            ),
            None => format!(
                r#"{{"id":"{}","name":"p{}","category":"{}"}}"#,
                id, id, category
            ),
        };
        normalize(serde_json::from_str::<RawProduct>(&json).unwrap())
    }

    #[test]
    fn test_filter_is_case_insensitive_and_trims() {
        let products = vec![product("1", "dimension ", None), product("2", "Electrical", None)];
        let filtered = filter_by_category(&products, "Dimension");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn test_filter_no_match_is_empty_not_error() {
        let products = vec![product("1", "Dimension", None)];
        assert!(filter_by_category(&products, "Acoustics").is_empty());
    }

    #[test]
    fn test_no_subcategories_means_flat_grid() {
        let products = vec![
            product("1", "Dimension", None),
            product("2", "Dimension", None),
            product("3", "Dimension", None),
        ];
        assert_eq!(group_by_subcategory(&products), None);
    }

    #[test]
    fn test_single_subcategory_triggers_grouping() {
        let products = vec![
            product("1", "Dimension", None),
            product("2", "Dimension", Some("Laser")),
            product("3", "Dimension", None),
        ];
        let groups = group_by_subcategory(&products).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, NO_SUBCATEGORY);
        assert_eq!(groups[0].products.len(), 2);
        assert_eq!(groups[1].label, "Laser");
        assert_eq!(groups[1].products.len(), 1);
    }

    #[test]
    fn test_groups_in_first_encounter_order() {
        let products = vec![
            product("1", "Dimension", Some("Laser")),
            product("2", "Dimension", Some("Optical")),
            product("3", "Dimension", Some("laser")),
        ];
        let groups = group_by_subcategory(&products).unwrap();
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Laser", "Optical"]);
        assert_eq!(groups[0].products.len(), 2);
    }

    #[test]
    fn test_empty_input_is_flat() {
        assert_eq!(group_by_subcategory(&[]), None);
    }
}
