//! ActorEntity trait implementation for the CatalogItem domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`CatalogItem`] to be managed by the generic [`resource_actor::ResourceActor`].
//!
//! Field validation is shared between create and update, so an edit is held to the same
//! rules as the form that created the item.

use std::convert::Infallible;
use std::str::FromStr;

use async_trait::async_trait;
use resource_actor::ActorEntity;
use rust_decimal::Decimal;

use super::error::CatalogError;
use crate::model::{
    CatalogFilter, CatalogItem, CatalogItemCreate, CatalogItemUpdate, ItemId, DEFAULT_CATEGORY,
    DEFAULT_IMAGE,
};

/// Parses operator-entered price text such as `"45.00"`.
pub fn parse_price(text: &str) -> Result<Decimal, CatalogError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CatalogError::validation("price", "is required"));
    }
    let price = Decimal::from_str(text)
        .map_err(|_| CatalogError::validation("price", format!("'{text}' is not a number")))?;
    if price < Decimal::ZERO {
        return Err(CatalogError::validation("price", "must not be negative"));
    }
    Ok(price)
}

fn required(field: &'static str, value: &str) -> Result<String, CatalogError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CatalogError::validation(field, "is required"));
    }
    Ok(value.to_string())
}

fn or_default(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

#[async_trait]
impl ActorEntity for CatalogItem {
    type Id = ItemId;
    type Create = CatalogItemCreate;
    type Update = CatalogItemUpdate;
    type Action = Infallible;
    type ActionResult = Infallible;
    type Filter = CatalogFilter;
    type Context = ();
    type Error = CatalogError;

    /// Validates the form fields and builds the item.
    fn from_create_params(id: ItemId, params: CatalogItemCreate) -> Result<Self, Self::Error> {
        let name = required("name", &params.name)?;
        let description = required("description", &params.description)?;
        let price = parse_price(&params.price)?;
        Ok(Self::new(
            id,
            name,
            description,
            price,
            or_default(&params.category, DEFAULT_CATEGORY),
            or_default(&params.image, DEFAULT_IMAGE),
        ))
    }

    /// Applies the supplied fields.
    ///
    /// Every supplied field is validated before any is written.
    async fn on_update(&mut self, update: CatalogItemUpdate, _ctx: &()) -> Result<(), Self::Error> {
        let name = update.name.as_deref().map(|v| required("name", v)).transpose()?;
        let description = update
            .description
            .as_deref()
            .map(|v| required("description", v))
            .transpose()?;
        let price = update.price.as_deref().map(parse_price).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = or_default(&category, DEFAULT_CATEGORY);
        }
        if let Some(image) = update.image {
            self.image = or_default(&image, DEFAULT_IMAGE);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<Infallible, Self::Error> {
        match action {}
    }

    fn matches(&self, filter: &CatalogFilter) -> bool {
        filter.accepts(self)
    }
}
