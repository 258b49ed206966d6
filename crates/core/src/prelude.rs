//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    api::{ApiConfig, ApiError, StorefrontClient},
    cart::{CART_STORAGE_KEY, Cart, CartItem, CartStore, ListenerKey, OrderSummary},
    checkout::{
        CheckoutCoordinator, CheckoutError, CheckoutOutcome, CheckoutState, DeliveryForm,
        EmailNotifier, FormField, NewOrder, Notification, NotificationError, OrderConfirmation,
        OrderId, OrderPersistence, OrderPersistenceError, OrderRecord, ValidationError, validate,
    },
    ids::TypedId,
    products::{PLACEHOLDER_IMAGE, Product, ProductDraft, ProductId},
    storage::{FileStorage, LocalStorage, MemoryStorage, StorageError},
};
