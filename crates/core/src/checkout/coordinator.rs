//! Checkout Coordinator

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
    time::Duration,
};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::{
    api::ApiError,
    cart::Cart,
    checkout::{
        DeliveryForm, NewOrder, OrderConfirmation, OrderId, OrderRecord, ValidationError, validate,
    },
};

/// How long a completed checkout reports the order as placed.
pub const ORDER_PLACED_DISPLAY: Duration = Duration::from_secs(3);

/// Saving the order failed.
#[derive(Debug, Error)]
pub enum OrderPersistenceError {
    /// The persistence service rejected or did not answer the request.
    #[error("failed to save address: {0}")]
    Api(#[from] ApiError),
}

/// Sending the confirmation email failed.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The notification service rejected or did not answer the request.
    #[error("failed to send order confirmation: {0}")]
    Api(#[from] ApiError),
}

/// Checkout submission failed; nothing was saved or sent.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The delivery form is incomplete or malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The order could not be saved.
    #[error(transparent)]
    OrderPersistence(#[from] OrderPersistenceError),
}

/// Stores submitted orders.
#[automock]
#[async_trait]
pub trait OrderPersistence: Send + Sync {
    /// Save `order`, returning the stored record with its assigned id.
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrderPersistenceError>;
}

/// Delivers order confirmations.
#[automock]
#[async_trait]
pub trait EmailNotifier: Send + Sync {
    /// Send the confirmation for a saved order.
    async fn send_confirmation(
        &self,
        confirmation: OrderConfirmation,
    ) -> Result<(), NotificationError>;
}

/// Checkout progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckoutState {
    /// Waiting for a submission.
    #[default]
    Idle,

    /// Checking the delivery form.
    Validating,

    /// Saving the order.
    Submitting,

    /// The order was saved.
    Completed {
        /// Id assigned to the saved order
        order_id: OrderId,
    },

    /// The last submission was rejected.
    Failed {
        /// User-facing explanation
        reason: String,
    },
}

/// Outcome of the confirmation email for a saved order.
#[derive(Debug)]
pub enum Notification {
    /// The confirmation was accepted for delivery.
    Sent,

    /// The confirmation could not be sent. The order stays saved.
    Failed(NotificationError),
}

impl Notification {
    /// Whether the confirmation went out.
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Result of a successful checkout.
#[derive(Debug)]
pub struct CheckoutOutcome {
    /// The saved order
    pub order: OrderRecord,

    /// What happened to the confirmation email
    pub notification: Notification,
}

/// Drives one delivery form from submission to a saved order and a
/// confirmation email.
pub struct CheckoutCoordinator {
    persistence: Arc<dyn OrderPersistence>,
    notifier: Arc<dyn EmailNotifier>,
    form: DeliveryForm,
    state: CheckoutState,
    placed_at: Option<Instant>,
}

impl CheckoutCoordinator {
    /// Create a coordinator with an empty form.
    pub fn new(persistence: Arc<dyn OrderPersistence>, notifier: Arc<dyn EmailNotifier>) -> Self {
        Self {
            persistence,
            notifier,
            form: DeliveryForm::default(),
            state: CheckoutState::Idle,
            placed_at: None,
        }
    }

    /// The delivery form as currently filled in.
    pub fn form(&self) -> &DeliveryForm {
        &self.form
    }

    /// Edit the delivery form.
    pub fn form_mut(&mut self) -> &mut DeliveryForm {
        &mut self.form
    }

    /// Replace the delivery form.
    pub fn set_form(&mut self, form: DeliveryForm) {
        self.form = form;
    }

    /// Current state. A completed checkout reads as idle once
    /// [`ORDER_PLACED_DISPLAY`] has passed.
    pub fn state(&self) -> CheckoutState {
        match (&self.state, self.placed_at) {
            (CheckoutState::Completed { .. }, Some(at)) if at.elapsed() >= ORDER_PLACED_DISPLAY => {
                CheckoutState::Idle
            }
            (state, _) => state.clone(),
        }
    }

    /// Whether the "order placed" confirmation should be shown.
    pub fn is_order_placed(&self) -> bool {
        matches!(self.state(), CheckoutState::Completed { .. })
    }

    /// Hide the confirmation or failure message and return to idle.
    pub fn dismiss(&mut self) {
        self.state = CheckoutState::Idle;
        self.placed_at = None;
    }

    /// Validate the form, save the order for `cart` and send the confirmation.
    ///
    /// The cart itself is left untouched; clearing it after a successful
    /// checkout is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] when the form is invalid or the order could
    /// not be saved. The form is kept in both cases so it can be corrected and
    /// resubmitted. A failed confirmation email is not an error; it is reported
    /// through [`CheckoutOutcome::notification`].
    pub async fn submit(&mut self, cart: &Cart) -> Result<CheckoutOutcome, CheckoutError> {
        self.placed_at = None;
        self.state = CheckoutState::Validating;

        if let Err(error) = validate(&self.form) {
            debug!("rejected delivery form: {error}");

            return Err(self.fail(error.into()));
        }

        self.state = CheckoutState::Submitting;

        let order = NewOrder::from_cart(self.form.clone(), cart, Timestamp::now());

        let record = match self.persistence.create_order(order).await {
            Ok(record) => record,
            Err(error) => {
                warn!("failed to save order: {error}");

                return Err(self.fail(error.into()));
            }
        };

        info!(order_id = %record.id, total = %record.total, "order saved");

        let confirmation = OrderConfirmation::new(&record, &self.form);

        let notification = match self.notifier.send_confirmation(confirmation).await {
            Ok(()) => Notification::Sent,
            Err(error) => {
                warn!(order_id = %record.id, "order saved but confirmation email failed: {error}");

                Notification::Failed(error)
            }
        };

        self.form = DeliveryForm::default();
        self.state = CheckoutState::Completed {
            order_id: record.id,
        };
        self.placed_at = Some(Instant::now());

        Ok(CheckoutOutcome {
            order: record,
            notification,
        })
    }

    fn fail(&mut self, error: CheckoutError) -> CheckoutError {
        self.state = CheckoutState::Failed {
            reason: error.to_string(),
        };

        error
    }
}

impl Debug for CheckoutCoordinator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CheckoutCoordinator")
            .field("form", &self.form)
            .field("state", &self.state)
            .field("placed_at", &self.placed_at)
            .finish_non_exhaustive()
    }
}
