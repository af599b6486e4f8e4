//! The `Product` value record and its construction rules.

use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, InventoryError, InventoryResult, ProductId};

/// Product category. Closed set; grows by adding variants here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Product1,
    Product2,
}

/// An immutable, validated product record.
///
/// All fields are fixed at construction; there are no setters. "Modifying" a
/// product means constructing a new one and handing it to the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<Category>,
    price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    discount: Option<f64>,
}

impl Product {
    /// Build a validated product.
    ///
    /// Mandatory fields must carry a usable value: a blank name or a
    /// non-finite price fails with [`InventoryError::BadArguments`] before any
    /// `Product` exists. A discount, when present, must be finite and strictly
    /// positive; `None` means "no discount".
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Option<Category>,
        price: f64,
        discount: Option<f64>,
    ) -> InventoryResult<Self> {
        let name = name.into();
        if name.trim().is_empty() || !price.is_finite() {
            return Err(InventoryError::bad_arguments("mandatory args are missing"));
        }
        if let Some(d) = discount {
            if !d.is_finite() || d <= 0.0 {
                return Err(InventoryError::bad_arguments(
                    "discount must be finite and positive",
                ));
            }
        }
        Ok(Self {
            id,
            name,
            category,
            price,
            discount,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Discount fraction, absent when the product carries no discount.
    pub fn discount(&self) -> Option<f64> {
        self.discount
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(value: i64) -> ProductId {
        ProductId::new(value)
    }

    #[test]
    fn valid_product_with_discount_echoes_inputs() {
        let product =
            Product::new(pid(1), "Computer", Some(Category::Product1), 1000.0, Some(0.05))
                .unwrap();
        assert_eq!(product.id(), pid(1));
        assert_eq!(product.name(), "Computer");
        assert_eq!(product.category(), Some(Category::Product1));
        assert_eq!(product.price(), 1000.0);
        assert_eq!(product.discount(), Some(0.05));
    }

    #[test]
    fn valid_product_without_discount_has_absent_discount() {
        let product =
            Product::new(pid(1), "Computer", Some(Category::Product1), 1000.0, None).unwrap();
        assert_eq!(product.discount(), None);
    }

    #[test]
    fn entity_id_matches_inherent_id() {
        let product = Product::new(pid(3), "Monitor", None, 250.0, None).unwrap();
        assert_eq!(Entity::id(&product), &product.id());
    }

    #[test]
    fn category_is_optional() {
        let product = Product::new(pid(2), "Keyboard", None, 45.0, None).unwrap();
        assert_eq!(product.category(), None);
    }

    #[test]
    fn blank_name_fails_construction() {
        let err = Product::new(pid(1), "   ", Some(Category::Product1), 1000.0, None).unwrap_err();
        assert_eq!(
            err,
            InventoryError::bad_arguments("mandatory args are missing")
        );
    }

    #[test]
    fn non_finite_price_fails_construction() {
        let err = Product::new(pid(1), "Computer", None, f64::NAN, None).unwrap_err();
        assert!(matches!(err, InventoryError::BadArguments(_)));
        let err = Product::new(pid(1), "Computer", None, f64::INFINITY, None).unwrap_err();
        assert!(matches!(err, InventoryError::BadArguments(_)));
    }

    #[test]
    fn non_positive_discount_fails_construction() {
        let err = Product::new(pid(1), "Computer", None, 1000.0, Some(0.0)).unwrap_err();
        assert!(matches!(err, InventoryError::BadArguments(_)));
        let err = Product::new(pid(1), "Computer", None, 1000.0, Some(-0.1)).unwrap_err();
        assert!(matches!(err, InventoryError::BadArguments(_)));
        let err = Product::new(pid(1), "Computer", None, 1000.0, Some(f64::NAN)).unwrap_err();
        assert!(matches!(err, InventoryError::BadArguments(_)));
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let product = Product::new(pid(7), "Mouse", None, 19.9, None).unwrap();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "name": "Mouse", "price": 19.9 })
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: valid constructions echo their inputs exactly.
            #[test]
            fn accessors_echo_inputs(
                id in any::<i64>(),
                name in "[A-Za-z][A-Za-z0-9 ]{0,99}",
                price in 0.01f64..100_000.0,
                discount in proptest::option::of(0.001f64..0.95)
            ) {
                let product = Product::new(
                    ProductId::new(id),
                    name.clone(),
                    Some(Category::Product2),
                    price,
                    discount,
                ).unwrap();
                prop_assert_eq!(product.id(), ProductId::new(id));
                prop_assert_eq!(product.name(), name.as_str());
                prop_assert_eq!(product.price(), price);
                prop_assert_eq!(product.discount(), discount);
            }

            /// Property: whitespace-only names never construct.
            #[test]
            fn blank_names_always_fail(name in "[ \t]{0,8}") {
                let result = Product::new(ProductId::new(1), name, None, 10.0, None);
                prop_assert!(result.is_err());
            }
        }
    }
}
