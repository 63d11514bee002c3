//! Remote catalogue adapter over the public fake-store API.
//!
//! This adapter owns transport details only: URL construction, JSON codec,
//! and error mapping. The remote service persists nothing, so writes are
//! fire-and-echo: the request is sent, transport failures propagate, and the
//! caller gets back the request-shaped result rather than a re-read.

mod dto;

use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use crate::domain::catalogue::CatalogueService;
use crate::domain::error::Error;
use crate::domain::patch::ProductPatch;
use crate::domain::product::{Category, PageRequest, Product, ProductDraft};

use self::dto::RemoteProductDto;

/// Catalogue backend proxying the remote fake-store API.
pub struct FakeStoreCatalogueService {
    client: Client,
    base_url: String,
}

impl FakeStoreCatalogueService {
    /// Create an adapter over `base_url` using the given client.
    ///
    /// The client is injected so callers control timeouts and TLS setup and
    /// tests can point the adapter at a local server.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Build the category listing URL with `title` as a single, properly
    /// percent-encoded path segment (titles may contain spaces or slashes).
    fn category_url(&self, title: &str) -> Result<String, Error> {
        let mut url = reqwest::Url::parse(&self.url("products/category"))
            .map_err(|err| Error::internal(format!("invalid remote catalogue URL: {err}")))?;
        url.path_segments_mut()
            .map_err(|()| Error::internal("remote catalogue URL cannot carry path segments"))?
            .push(title);
        Ok(url.into())
    }

    fn transport_error(operation: &str, err: &reqwest::Error) -> Error {
        Error::internal(format!("remote catalogue {operation} failed: {err}"))
    }

    fn unsupported(operation: &str) -> Error {
        Error::internal(format!(
            "operation {operation} is not supported by the remote catalogue"
        ))
    }

    /// Fetch one remote product. The remote API answers missing ids with an
    /// empty body rather than a 404, so any unusable response maps to
    /// absence.
    async fn fetch_product(&self, id: i64) -> Result<RemoteProductDto, Error> {
        let response = self
            .client
            .get(self.url(&format!("products/{id}")))
            .send()
            .await
            .map_err(|err| Self::transport_error("lookup", &err))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| Self::transport_error("lookup", &err))?;

        if !status.is_success() {
            warn!(product_id = id, %status, "remote catalogue lookup failed");
            return Err(Error::product_not_found(id));
        }
        match serde_json::from_str::<RemoteProductDto>(&body) {
            Ok(dto) if dto.id.is_some() => Ok(dto),
            Ok(_) | Err(_) => {
                warn!(product_id = id, "remote catalogue returned no usable product");
                Err(Error::product_not_found(id))
            }
        }
    }
}

#[async_trait]
impl CatalogueService for FakeStoreCatalogueService {
    async fn list_categories(&self) -> Result<Vec<Category>, Error> {
        let titles: Vec<String> = self
            .client
            .get(self.url("products/categories"))
            .send()
            .await
            .map_err(|err| Self::transport_error("category listing", &err))?
            .json()
            .await
            .map_err(|err| Self::transport_error("category listing", &err))?;
        Ok(titles.into_iter().map(Category::from_title).collect())
    }

    async fn get_product(&self, id: i64) -> Result<Product, Error> {
        let dto = self.fetch_product(id).await?;
        dto.into_product()
            .ok_or_else(|| Error::product_not_found(id))
    }

    async fn list_products(&self) -> Result<Vec<Product>, Error> {
        let dtos: Vec<RemoteProductDto> = self
            .client
            .get(self.url("products"))
            .send()
            .await
            .map_err(|err| Self::transport_error("listing", &err))?
            .json()
            .await
            .map_err(|err| Self::transport_error("listing", &err))?;
        Ok(dtos
            .into_iter()
            .filter_map(RemoteProductDto::into_product)
            .collect())
    }

    async fn list_products_in_category(&self, title: &str) -> Result<Vec<Product>, Error> {
        let dtos: Vec<RemoteProductDto> = self
            .client
            .get(self.category_url(title)?)
            .send()
            .await
            .map_err(|err| Self::transport_error("category listing", &err))?
            .json()
            .await
            .map_err(|err| Self::transport_error("category listing", &err))?;
        Ok(dtos
            .into_iter()
            .filter_map(RemoteProductDto::into_product)
            .collect())
    }

    async fn search_products_by_title(&self, _fragment: &str) -> Result<Vec<Product>, Error> {
        Err(Self::unsupported("search_products_by_title"))
    }

    async fn list_products_paged(&self, _page: PageRequest) -> Result<Vec<Product>, Error> {
        Err(Self::unsupported("list_products_paged"))
    }

    async fn create_product(&self, draft: ProductDraft) -> Result<Product, Error> {
        let payload = RemoteProductDto {
            id: None,
            title: Some(draft.title),
            price: draft.price,
            description: draft.description,
            category: Some(draft.category_title),
            image: draft.image_url,
        };
        let echo: RemoteProductDto = self
            .client
            .post(self.url("products"))
            .json(&payload)
            .send()
            .await
            .map_err(|err| Error::creation_failed(format!("remote create failed: {err}")))?
            .json()
            .await
            .map_err(|err| Error::creation_failed(format!("remote create failed: {err}")))?;

        // The remote echo is sparse; keep the submitted attributes and take
        // the assigned id.
        let id = echo
            .id
            .ok_or_else(|| Error::creation_failed("remote create returned no id"))?;
        let created = RemoteProductDto {
            id: Some(id),
            ..payload
        };
        created
            .into_product()
            .ok_or_else(|| Error::creation_failed("remote create returned no id"))
    }

    async fn update_product(&self, id: i64, patch: ProductPatch) -> Result<Product, Error> {
        let existing = self.fetch_product(id).await?;
        let merged = existing.merged_with(&patch);

        // Write the merge back; the response body is ignored because the
        // remote store never persists it anyway.
        self.client
            .put(self.url(&format!("products/{id}")))
            .json(&merged)
            .send()
            .await
            .map_err(|err| Self::transport_error("update", &err))?;

        merged
            .into_product()
            .ok_or_else(|| Error::product_not_found(id))
    }

    async fn delete_product(&self, id: i64) -> Result<i64, Error> {
        self.client
            .delete(self.url(&format!("products/{id}")))
            .send()
            .await
            .map_err(|err| Self::transport_error("delete", &err))?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalised() {
        let service =
            FakeStoreCatalogueService::new(Client::new(), "https://fakestoreapi.com/");
        assert_eq!(
            service.url("products/categories"),
            "https://fakestoreapi.com/products/categories"
        );
    }

    #[test]
    fn category_titles_are_percent_encoded_in_urls() {
        let service = FakeStoreCatalogueService::new(Client::new(), "https://fakestoreapi.com");
        let url = service
            .category_url("men's clothing / formal")
            .expect("base URL is valid");
        assert_eq!(
            url,
            "https://fakestoreapi.com/products/category/men's%20clothing%20%2F%20formal"
        );
    }

    #[test]
    fn unsupported_operations_surface_as_internal_errors() {
        let error = FakeStoreCatalogueService::unsupported("list_products_paged");
        assert_eq!(error.code(), crate::domain::ErrorCode::InternalError);
        assert!(error.message().contains("list_products_paged"));
    }
}
