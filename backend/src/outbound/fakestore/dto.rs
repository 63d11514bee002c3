//! Wire types for the remote catalogue API.
//!
//! The remote service models a product as a flat object with a bare category
//! title and every attribute optional in practice, so the DTO mirrors that
//! instead of the domain shape.

use serde::{Deserialize, Serialize};

use crate::domain::patch::ProductPatch;
use crate::domain::product::{Category, Product};

/// A product as the remote catalogue sends and accepts it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteProductDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl RemoteProductDto {
    /// Convert to the domain aggregate. `None` when the remote row carries no
    /// id, which the domain cannot represent.
    pub fn into_product(self) -> Option<Product> {
        let id = self.id?;
        Some(Product {
            id,
            title: self.title.unwrap_or_default(),
            description: self.description,
            price: self.price,
            image_url: self.image,
            is_deleted: false,
            created_on: None,
            last_updated_on: None,
            category: Category::from_title(self.category.unwrap_or_default()),
        })
    }

    /// Merge a partial update into this remote row.
    ///
    /// The remote category is a plain string, so a patched category title
    /// replaces it directly; no resolve-or-create step applies out here.
    pub fn merged_with(mut self, patch: &ProductPatch) -> Self {
        if let Some(title) = &patch.title {
            self.title = Some(title.clone());
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(price) = patch.price {
            self.price = Some(price);
        }
        if let Some(image) = &patch.image_url {
            self.image = Some(image.clone());
        }
        if let Some(category) = &patch.category_title {
            self.category = Some(category.clone());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote_phone() -> RemoteProductDto {
        RemoteProductDto {
            id: Some(7),
            title: Some("Phone".to_owned()),
            price: Some(499.0),
            description: Some("A phone".to_owned()),
            category: Some("electronics".to_owned()),
            image: Some("https://img.example/phone.png".to_owned()),
        }
    }

    #[test]
    fn dto_converts_to_a_title_only_category() {
        let product = remote_phone().into_product().expect("has id");

        assert_eq!(product.id, 7);
        assert_eq!(product.category.title, "electronics");
        assert_eq!(product.category.id, None);
        assert_eq!(product.image_url.as_deref(), Some("https://img.example/phone.png"));
    }

    #[test]
    fn dto_without_an_id_cannot_become_a_product() {
        let dto = RemoteProductDto {
            id: None,
            ..remote_phone()
        };
        assert!(dto.into_product().is_none());
    }

    #[test]
    fn merge_overwrites_present_fields_and_keeps_the_rest() {
        let patch = ProductPatch {
            title: Some("Phone XL".to_owned()),
            price: Some(599.0),
            ..ProductPatch::default()
        };

        let merged = remote_phone().merged_with(&patch);

        assert_eq!(merged.title.as_deref(), Some("Phone XL"));
        assert_eq!(merged.price, Some(599.0));
        assert_eq!(merged.description.as_deref(), Some("A phone"));
        assert_eq!(merged.category.as_deref(), Some("electronics"));
    }

    #[test]
    fn merge_replaces_the_category_title_directly() {
        let patch = ProductPatch {
            category_title: Some("gadgets".to_owned()),
            ..ProductPatch::default()
        };

        let merged = remote_phone().merged_with(&patch);
        assert_eq!(merged.category.as_deref(), Some("gadgets"));
    }
}
