//! [`Record`] implementation for [`Order`].
//!
//! The order number is the key. The only patch is a status change, so
//! every other field of a stored order is fixed at insert time.

use crate::model::{Order, OrderNumber, OrderStatus};
use crate::order_actor::OrderError;
use crate::view::OrderFilter;
use order_store::Record;

impl Record for Order {
    type Key = OrderNumber;
    type Patch = OrderStatus;
    type Query = OrderFilter;
    type Error = OrderError;

    fn key(&self) -> &OrderNumber {
        &self.order_number
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.order_number.is_empty() {
            return Err(OrderError::ValidationError(
                "order number must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn apply(&mut self, status: OrderStatus) -> Result<(), OrderError> {
        self.status = status;
        Ok(())
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        filter.matches(self)
    }
}
