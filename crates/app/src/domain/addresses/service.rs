//! Addresses service.

use std::path::PathBuf;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use storefront::checkout::{NewOrder, OrderId, OrderRecord};
use tracing::info;

use crate::{
    collection::JsonFileCollection,
    domain::addresses::{
        data::{AddressUpdate, new_record},
        errors::AddressesServiceError,
    },
};

#[derive(Debug)]
pub struct JsonAddressesService {
    collection: JsonFileCollection<OrderRecord>,
}

impl JsonAddressesService {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonFileCollection::new(path),
        }
    }
}

#[async_trait]
impl AddressesService for JsonAddressesService {
    async fn list_addresses(&self) -> Result<Vec<OrderRecord>, AddressesServiceError> {
        Ok(self.collection.list().await?)
    }

    async fn get_address(&self, address: OrderId) -> Result<OrderRecord, AddressesServiceError> {
        self.collection
            .get(address)
            .await?
            .ok_or(AddressesServiceError::NotFound)
    }

    async fn create_address(&self, order: NewOrder) -> Result<OrderRecord, AddressesServiceError> {
        let now = Timestamp::now();

        let created = self
            .collection
            .insert_with(|id| new_record(id, order, now))
            .await?;

        info!(
            address_id = %created.id,
            items = created.cart_items.len(),
            total = %created.total,
            "stored order address"
        );

        Ok(created)
    }

    async fn update_address(
        &self,
        address: OrderId,
        update: AddressUpdate,
    ) -> Result<OrderRecord, AddressesServiceError> {
        let now = Timestamp::now();

        self.collection
            .update_with(address, |existing| update.apply(existing, now))
            .await?
            .ok_or(AddressesServiceError::NotFound)
    }

    async fn delete_address(&self, address: OrderId) -> Result<OrderRecord, AddressesServiceError> {
        let deleted = self
            .collection
            .delete(address)
            .await?
            .ok_or(AddressesServiceError::NotFound)?;

        info!(address_id = %deleted.id, "deleted order address");

        Ok(deleted)
    }
}

#[automock]
#[async_trait]
pub trait AddressesService: Send + Sync {
    /// Retrieve every stored address.
    async fn list_addresses(&self) -> Result<Vec<OrderRecord>, AddressesServiceError>;

    /// Retrieve a single address.
    async fn get_address(&self, address: OrderId) -> Result<OrderRecord, AddressesServiceError>;

    /// Stores a submitted order, assigning the next free id.
    async fn create_address(&self, order: NewOrder) -> Result<OrderRecord, AddressesServiceError>;

    /// Updates the given address with the fields present in `update`.
    async fn update_address(
        &self,
        address: OrderId,
        update: AddressUpdate,
    ) -> Result<OrderRecord, AddressesServiceError>;

    /// Deletes an address, returning it.
    async fn delete_address(&self, address: OrderId) -> Result<OrderRecord, AddressesServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use storefront::checkout::DeliveryForm;
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn order() -> NewOrder {
        NewOrder {
            delivery: DeliveryForm {
                full_name: "Asha Rao".to_string(),
                email: "asha@example.com".to_string(),
                city: "Pune".to_string(),
                ..DeliveryForm::default()
            },
            total: Decimal::new(20, 0),
            ..NewOrder::default()
        }
    }

    #[tokio::test]
    async fn create_address_assigns_ids_and_timestamps() -> TestResult {
        let ctx = TestContext::new()?;

        let first = ctx.addresses.create_address(order()).await?;
        let second = ctx.addresses.create_address(order()).await?;

        assert_eq!(first.id, OrderId::new(1));
        assert_eq!(second.id, OrderId::new(2));
        assert!(first.updated_at.is_none());
        assert_eq!(first.order_date, first.created_at);

        Ok(())
    }

    #[tokio::test]
    async fn update_address_sets_updated_at_and_keeps_id() -> TestResult {
        let ctx = TestContext::new()?;

        let created = ctx.addresses.create_address(order()).await?;

        let updated = ctx
            .addresses
            .update_address(
                created.id,
                AddressUpdate {
                    mobile: Some("9876543210".to_string()),
                    ..AddressUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.delivery.mobile, "9876543210");
        assert_eq!(updated.delivery.full_name, "Asha Rao");
        assert!(updated.updated_at.is_some());

        assert_eq!(ctx.addresses.get_address(created.id).await?, updated);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_address_returns_not_found() -> TestResult {
        let ctx = TestContext::new()?;

        let get = ctx.addresses.get_address(OrderId::new(3)).await;
        let update = ctx
            .addresses
            .update_address(OrderId::new(3), AddressUpdate::default())
            .await;
        let delete = ctx.addresses.delete_address(OrderId::new(3)).await;

        assert!(
            matches!(get, Err(AddressesServiceError::NotFound)),
            "expected NotFound, got {get:?}"
        );
        assert!(
            matches!(update, Err(AddressesServiceError::NotFound)),
            "expected NotFound, got {update:?}"
        );
        assert!(
            matches!(delete, Err(AddressesServiceError::NotFound)),
            "expected NotFound, got {delete:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_address_returns_the_record() -> TestResult {
        let ctx = TestContext::new()?;

        let created = ctx.addresses.create_address(order()).await?;
        let deleted = ctx.addresses.delete_address(created.id).await?;

        assert_eq!(deleted, created);
        assert!(ctx.addresses.list_addresses().await?.is_empty());

        Ok(())
    }
}
