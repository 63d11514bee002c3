//! Partial-update payload and merge rules.
//!
//! Every plain product attribute is an `Option` here: a present value
//! overwrites the stored one, an absent value leaves it untouched. The
//! category relation is deliberately not part of [`ProductPatch::apply_to`] —
//! replacing a category means resolving (or implicitly creating) a row by
//! title, which is the service's job. Keeping the field out of the struct
//! makes that exclusion a compile-time fact.

use serde::{Deserialize, Serialize};

use super::product::Product;

/// Sparse update for a product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    /// Title of the replacement category, when the update carries one.
    /// Consumed by the service, never by [`ProductPatch::apply_to`].
    pub category_title: Option<String>,
}

impl ProductPatch {
    /// True when the patch carries no plain-field changes and no category
    /// replacement.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.image_url.is_none()
            && self.category_title.is_none()
    }

    /// Overwrite the plain attributes of `product` with the present fields.
    ///
    /// The category reference is left exactly as it was.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(title) = &self.title {
            product.title = title.clone();
        }
        if let Some(description) = &self.description {
            product.description = Some(description.clone());
        }
        if let Some(price) = self.price {
            product.price = Some(price);
        }
        if let Some(image_url) = &self.image_url {
            product.image_url = Some(image_url.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::Category;

    fn existing_product() -> Product {
        Product {
            id: 1,
            title: "Phone".to_owned(),
            description: Some("A phone".to_owned()),
            price: Some(499.0),
            image_url: Some("https://img.example/phone.png".to_owned()),
            is_deleted: false,
            created_on: None,
            last_updated_on: None,
            category: Category::from_title("electronics"),
        }
    }

    #[test]
    fn present_fields_overwrite() {
        let mut product = existing_product();
        let patch = ProductPatch {
            title: Some("Phone XL".to_owned()),
            price: Some(599.0),
            ..ProductPatch::default()
        };

        patch.apply_to(&mut product);

        assert_eq!(product.title, "Phone XL");
        assert_eq!(product.price, Some(599.0));
    }

    #[test]
    fn absent_fields_keep_prior_values() {
        let mut product = existing_product();
        let patch = ProductPatch {
            description: Some("A bigger phone".to_owned()),
            ..ProductPatch::default()
        };

        patch.apply_to(&mut product);

        assert_eq!(product.title, "Phone");
        assert_eq!(product.price, Some(499.0));
        assert_eq!(product.description.as_deref(), Some("A bigger phone"));
        assert_eq!(
            product.image_url.as_deref(),
            Some("https://img.example/phone.png")
        );
    }

    #[test]
    fn category_is_never_touched_by_the_generic_merge() {
        let mut product = existing_product();
        let patch = ProductPatch {
            title: Some("Phone XL".to_owned()),
            category_title: Some("gadgets".to_owned()),
            ..ProductPatch::default()
        };

        patch.apply_to(&mut product);

        assert_eq!(product.category.title, "electronics");
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut product = existing_product();
        let patch = ProductPatch::default();
        assert!(patch.is_empty());

        patch.apply_to(&mut product);

        assert_eq!(product, existing_product());
    }
}
