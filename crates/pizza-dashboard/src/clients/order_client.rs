//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` store actor.
//! It wraps a `StoreClient<Order>` and exposes order-specific methods;
//! `get`, `remove` and `snapshot` come from [`StoreHandle`].
use crate::model::{Order, OrderNumber, OrderStatus};
use crate::order_actor::OrderError;
use crate::view::OrderFilter;
use async_trait::async_trait;
use order_store::{Snapshot, StoreClient, StoreError, StoreHandle};
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreHandle<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::NotFound(number) => OrderError::NotFound(number),
            StoreError::DuplicateKey(number) => {
                OrderError::ValidationError(format!("Order number {number} already exists"))
            }
            StoreError::Record(inner) => match inner.downcast::<OrderError>() {
                Ok(order_error) => *order_error,
                Err(other) => OrderError::ValidationError(other.to_string()),
            },
            e @ (StoreError::ActorClosed | StoreError::ActorDropped) => {
                OrderError::ActorCommunicationError(e.to_string())
            }
        }
    }
}

impl OrderClient {
    /// Append a complete order at the end of the collection.
    #[instrument(skip(self, order), fields(order_number = %order.order_number))]
    pub async fn append(&self, order: Order) -> Result<OrderNumber, OrderError> {
        debug!("Sending request");
        self.inner.insert(order).await.map_err(Self::map_error)
    }

    /// Change the status of one order, returning the updated order.
    ///
    /// Position and every other field are left as they were.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        order_number: OrderNumber,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .patch(order_number, status)
            .await
            .map_err(Self::map_error)
    }

    /// Orders admitted by `filter`, in store order.
    #[instrument(skip(self))]
    pub async fn filter(&self, filter: OrderFilter) -> Result<Snapshot<Order>, OrderError> {
        debug!("Sending request");
        self.inner.select(filter).await.map_err(Self::map_error)
    }

    /// Current store revision; it moves on every successful mutation.
    pub async fn revision(&self) -> Result<u64, OrderError> {
        self.inner.revision().await.map_err(Self::map_error)
    }
}
