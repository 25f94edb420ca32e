//! Product catalog used for display names and grouping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCategory {
    pub id: u32,
    pub name: String,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    pub category_id: u32,
    /// Whether the product has a configurator.
    pub configurable: bool,
}

/// A named group of products inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    pub product_ids: Vec<u32>,
}

/// Products of one subcategory, or of no subcategory when `subcategory` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductGroup<'a> {
    pub subcategory: Option<Subcategory>,
    pub products: Vec<&'a CatalogEntry>,
}

/// Source of product and category data.
pub trait Catalog {
    fn categories(&self) -> &[CatalogCategory];

    fn products(&self) -> &[CatalogEntry];

    fn subcategories(&self, category_id: u32) -> &[Subcategory];

    fn product(&self, id: u32) -> Option<&CatalogEntry> {
        self.products().iter().find(|p| p.id == id)
    }

    fn category(&self, id: u32) -> Option<&CatalogCategory> {
        self.categories().iter().find(|c| c.id == id)
    }

    fn products_in_category(&self, category_id: u32) -> Vec<&CatalogEntry> {
        self.products()
            .iter()
            .filter(|p| p.category_id == category_id)
            .collect()
    }

    /// Group a category's products by subcategory.
    ///
    /// Without subcategories everything lands in one unnamed group. Products
    /// outside every subcategory are collected under "Other".
    fn group_by_subcategory(&self, category_id: u32) -> Vec<ProductGroup<'_>> {
        let products = self.products_in_category(category_id);
        let subcategories = self.subcategories(category_id);
        if subcategories.is_empty() {
            return vec![ProductGroup {
                subcategory: None,
                products,
            }];
        }

        let mut groups: Vec<ProductGroup<'_>> = subcategories
            .iter()
            .filter_map(|sub| {
                let members: Vec<&CatalogEntry> = products
                    .iter()
                    .copied()
                    .filter(|p| sub.product_ids.contains(&p.id))
                    .collect();
                (!members.is_empty()).then(|| ProductGroup {
                    subcategory: Some(sub.clone()),
                    products: members,
                })
            })
            .collect();

        let uncategorized: Vec<&CatalogEntry> = products
            .iter()
            .copied()
            .filter(|p| !subcategories.iter().any(|s| s.product_ids.contains(&p.id)))
            .collect();
        if !uncategorized.is_empty() {
            groups.push(ProductGroup {
                subcategory: Some(Subcategory {
                    id: "other".to_string(),
                    name: "Other".to_string(),
                    product_ids: uncategorized.iter().map(|p| p.id).collect(),
                }),
                products: uncategorized,
            });
        }

        groups
    }
}

/// Compiled-in catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCatalog {
    categories: Vec<CatalogCategory>,
    products: Vec<CatalogEntry>,
    /// Subcategories keyed by category id.
    subcategories: BTreeMap<u32, Vec<Subcategory>>,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StaticCatalog {
    pub fn new(
        categories: Vec<CatalogCategory>,
        products: Vec<CatalogEntry>,
        subcategories: BTreeMap<u32, Vec<Subcategory>>,
    ) -> Self {
        Self {
            categories,
            products,
            subcategories,
        }
    }

    /// The catalog shipped with the configurator.
    pub fn builtin() -> Self {
        let category = |id: u32, name: &str| CatalogCategory {
            id,
            name: name.to_string(),
        };
        let product = |id: u32, name: &str, category_id: u32, configurable: bool| CatalogEntry {
            id,
            name: name.to_string(),
            category_id,
            configurable,
        };

        Self {
            categories: vec![
                category(1, "Τέντες"),
                category(2, "Πέργκολες"),
                category(3, "Κάθετα συστήματα"),
                category(4, "Αυτοματισμοί"),
            ],
            products: vec![
                product(12, "Κασέτα 530", 1, true),
                product(13, "Κασέτα 732", 1, true),
                product(16, "Epica", 1, true),
                product(18, "Πέργκολα Pro 100", 2, true),
                product(19, "Πέργκολα Pro 150", 2, true),
                product(20, "Πέργκολα Pro Mega", 2, true),
                product(21, "Σύστημα Πέργκολας Curved", 2, false),
                product(22, "Πέργκολα Στάνταρ Μοτέρ Κουτί", 2, true),
                product(23, "Πέργκολα Κρεμαστή", 2, true),
                product(24, "Πέργκολα Flat", 2, true),
                product(25, "Πέργκολα Βιοκλιματική", 2, true),
                product(26, "Πέργκολα Open Sky", 2, true),
                product(27, "Πέργκολα Open Roof", 2, true),
                product(28, "Πέργκολα Σταθερές Περσίδες", 2, true),
                product(29, "Πέργκολα Balloon", 2, true),
                product(30, "Πέργκολα Δανάη", 2, true),
                product(31, "Zip Screen", 3, true),
                product(33, "Κασονέτο Φ10", 3, true),
                product(34, "Κασονέτο Συρματόσχοινο Cabrio", 3, true),
                product(35, "Κασονέτο Φ10 Cabrio", 3, true),
                product(36, "Κάθετη VT", 3, true),
            ],
            subcategories: BTreeMap::from([(
                1,
                vec![Subcategory {
                    id: "cassette".to_string(),
                    name: "Τέντα Κασέτα".to_string(),
                    product_ids: vec![12, 13, 14, 15, 16, 17],
                }],
            )]),
        }
    }
}

impl Catalog for StaticCatalog {
    fn categories(&self) -> &[CatalogCategory] {
        &self.categories
    }

    fn products(&self) -> &[CatalogEntry] {
        &self.products
    }

    fn subcategories(&self, category_id: u32) -> &[Subcategory] {
        self.subcategories
            .get(&category_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_lookup() {
        let catalog = StaticCatalog::builtin();
        assert_eq!(catalog.product(18).unwrap().name, "Πέργκολα Pro 100");
        assert!(catalog.product(99).is_none());
        assert_eq!(catalog.category(2).unwrap().name, "Πέργκολες");
    }

    #[test]
    fn test_products_in_category() {
        let catalog = StaticCatalog::builtin();
        let pergolas = catalog.products_in_category(2);
        assert_eq!(pergolas.len(), 13);
        assert!(pergolas.iter().any(|p| p.id == 21 && !p.configurable));
    }

    #[test]
    fn test_group_without_subcategories() {
        let catalog = StaticCatalog::builtin();
        let groups = catalog.group_by_subcategory(2);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].subcategory.is_none());
        assert_eq!(groups[0].products.len(), 13);
    }

    #[test]
    fn test_group_by_subcategory_collects_others() {
        let mut products = StaticCatalog::builtin().products().to_vec();
        products.push(CatalogEntry {
            id: 40,
            name: "Awning bar".to_string(),
            category_id: 1,
            configurable: false,
        });
        let builtin = StaticCatalog::builtin();
        let catalog = StaticCatalog::new(
            builtin.categories().to_vec(),
            products,
            BTreeMap::from([(1, builtin.subcategories(1).to_vec())]),
        );

        let groups = catalog.group_by_subcategory(1);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].products.len(), 3);
        let other = &groups[1];
        assert_eq!(other.subcategory.as_ref().unwrap().id, "other");
        assert_eq!(other.products[0].id, 40);
    }
}
