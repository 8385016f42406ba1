//! # Catalog Client
//!
//! Provides a high‑level API for interacting with the catalog actor.
//! It wraps a `ResourceClient<CatalogItem>` and exposes domain‑specific methods.
use crate::catalog_actor::CatalogError;
use crate::model::{CatalogFilter, CatalogItem, CatalogItemCreate, CatalogItemUpdate, ItemId, ALL_CATEGORIES};
use resource_actor::{ActorClient, FrameworkError, ListOrder, ResourceClient, ResourceEvent};
use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::{debug, instrument};

/// Client for interacting with the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<CatalogItem>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<CatalogItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<CatalogItem> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<CatalogItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<CatalogError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => CatalogError::NotFound(id),
            Err(other) => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CatalogClient {
    /// Adds a dish. Fails with `Validation` if a field is missing or the price is not a
    /// non-negative number.
    #[instrument(skip(self))]
    pub async fn create_item(&self, params: CatalogItemCreate) -> Result<CatalogItem, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Edits a dish. Either every supplied field is applied or none is.
    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: ItemId,
        update: CatalogItemUpdate,
    ) -> Result<CatalogItem, CatalogError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Removes a dish. Carts and orders that copied it are unaffected.
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: ItemId) -> Result<(), CatalogError> {
        self.delete(id).await
    }

    /// Items accepted by `filter`, in the order they were added.
    #[instrument(skip(self))]
    pub async fn list(&self, filter: CatalogFilter) -> Result<Vec<CatalogItem>, CatalogError> {
        self.inner
            .list(filter, ListOrder::Insertion)
            .await
            .map_err(Self::map_error)
    }

    /// `"All"` followed by each distinct category, in first-seen order.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        let items = self.list(CatalogFilter::all()).await?;
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for item in items {
            if !categories.contains(&item.category) {
                categories.push(item.category);
            }
        }
        Ok(categories)
    }

    /// Change notifications for the catalog.
    pub fn subscribe(&self) -> broadcast::Receiver<ResourceEvent<ItemId>> {
        self.inner.subscribe()
    }
}
