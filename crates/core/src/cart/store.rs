//! Cart Store

use std::fmt::{Debug, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use slotmap::{SlotMap, new_key_type};
use tracing::{debug, warn};

use crate::{
    cart::Cart,
    products::{Product, ProductId},
    storage::LocalStorage,
};

/// Key the cart is persisted under.
pub const CART_STORAGE_KEY: &str = "cart";

new_key_type! {
    /// Listener Key
    pub struct ListenerKey;
}

type Listener = Box<dyn FnMut(&Cart)>;

/// Single source of truth for the current session's cart.
///
/// Every mutation rewrites the whole cart to local storage under
/// [`CART_STORAGE_KEY`] and then notifies subscribed listeners. The store is
/// meant to be owned by one UI event loop and passed to the screens that need
/// it; mutation takes `&mut self`, so there is no locking.
pub struct CartStore<S> {
    cart: Cart,
    storage: S,
    listeners: SlotMap<ListenerKey, Listener>,
}

impl<S: LocalStorage> CartStore<S> {
    /// Restore the persisted cart from `storage`.
    ///
    /// A missing entry yields an empty cart, as does an entry that cannot be
    /// read or parsed (logged and discarded).
    pub fn load(storage: S) -> Self {
        let cart = match storage.get(CART_STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Cart>(&json) {
                Ok(cart) => Cart::from_items(cart.items),
                Err(error) => {
                    warn!("discarding unreadable persisted cart: {error}");

                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(error) => {
                warn!("failed to read persisted cart: {error}");

                Cart::new()
            }
        };

        debug!(items = cart.len(), "loaded cart");

        Self {
            cart,
            storage,
            listeners: SlotMap::with_key(),
        }
    }

    /// Current cart contents.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store, returning the backing storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Add one unit of `product`.
    pub fn add_to_cart(&mut self, product: Product) {
        self.cart.add(product);
        self.commit();
    }

    /// Remove the line for `product`. Absent products are ignored.
    pub fn remove_from_cart(&mut self, product: ProductId) {
        if self.cart.remove(product).is_some() {
            self.commit();
        }
    }

    /// Set the quantity of `product`, clamped to a minimum of one. Absent
    /// products are ignored.
    pub fn update_quantity(&mut self, product: ProductId, quantity: i64) {
        if self.cart.update_quantity(product, quantity) {
            self.commit();
        }
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.commit();
    }

    /// Sum of price × quantity, recomputed on every call.
    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    /// Register `listener` to be called with the cart after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&Cart) + 'static) -> ListenerKey {
        self.listeners.insert(Box::new(listener))
    }

    /// Remove a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        self.listeners.remove(key).is_some()
    }

    fn commit(&mut self) {
        self.persist();

        for listener in self.listeners.values_mut() {
            listener(&self.cart);
        }
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.cart) {
            Ok(json) => json,
            Err(error) => {
                warn!("failed to serialize cart: {error}");

                return;
            }
        };

        if let Err(error) = self.storage.set(CART_STORAGE_KEY, &json) {
            warn!("failed to persist cart: {error}");
        }
    }
}

impl<S: Debug> Debug for CartStore<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("storage", &self.storage)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
