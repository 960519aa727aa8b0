//! Facet extraction: distinct values with counts per filterable attribute.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::Product;
use crate::filter::tokens::FacetKey;

/// One selectable option in a facet dropdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub count: usize,
}

/// Derives the option list for one categorical facet from the collection.
///
/// Values are trimmed; blank values are dropped entirely rather than counted
/// as an "unlabeled" option. Options come back ascending by value,
/// case-insensitively. An empty collection yields an empty list.
pub fn extract(products: &[Product], key: FacetKey) -> Vec<FacetOption> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for product in products {
        if let Some(value) = product.facet_value(key) {
            *counts.entry(value).or_default() += 1;
        }
    }
    let mut options: Vec<FacetOption> = counts
        .into_iter()
        .map(|(value, count)| FacetOption {
            value: value.to_string(),
            count,
        })
        .collect();
    options.sort_by(|a, b| a.value.to_lowercase().cmp(&b.value.to_lowercase()));
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(ty: &str, color: &str) -> Product {
        Product {
            id: format!("{ty}-{color}"),
            title: ty.to_string(),
            product_type: Some(ty.to_string()),
            color: (!color.is_empty()).then(|| color.to_string()),
            ..Product::default()
        }
    }

    #[test]
    fn counts_distinct_values() {
        let products = vec![
            product("Mat", "Red"),
            product("Mat", "Blue"),
            product("Rug", "Red"),
        ];
        let options = extract(&products, FacetKey::Type);
        assert_eq!(
            options,
            vec![
                FacetOption { value: "Mat".into(), count: 2 },
                FacetOption { value: "Rug".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn blank_values_are_excluded() {
        let mut blank = product("Mat", "");
        blank.color = Some(String::new());
        let products = vec![blank, product("Mat", "Red")];
        let options = extract(&products, FacetKey::Color);
        assert_eq!(
            options,
            vec![FacetOption { value: "Red".into(), count: 1 }]
        );
    }

    #[test]
    fn options_sorted_case_insensitively() {
        let products = vec![
            product("rug", "x"),
            product("Mat", "x"),
            product("Blanket", "x"),
        ];
        let values: Vec<_> = extract(&products, FacetKey::Type)
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(values, vec!["Blanket", "Mat", "rug"]);
    }

    #[test]
    fn empty_collection_yields_empty_list() {
        assert!(extract(&[], FacetKey::Size).is_empty());
    }

    #[test]
    fn variant_fallback_feeds_the_size_facet() {
        let with_variant = Product {
            id: "v".into(),
            title: "Mat".into(),
            variants: vec![crate::catalog::Variant {
                size: Some("XL".into()),
                ..Default::default()
            }],
            ..Product::default()
        };
        let options = extract(&[with_variant], FacetKey::Size);
        assert_eq!(
            options,
            vec![FacetOption { value: "XL".into(), count: 1 }]
        );
    }
}
