use crate::clients::{OrderClient, StoreHandle};
use crate::model::{Order, OrderNumber, OrderRow, OrderStatus};
use crate::order_actor::OrderError;
use crate::pages::Notice;
use crate::view::{OrderFilter, OrderView};
use tracing::{info, instrument, warn};

/// The orders table: a filtered view plus the row actions.
///
/// Every mutation made here is followed by a re-derivation, so the rows
/// always reflect the store as of the last action.
pub struct OrdersPage {
    client: OrderClient,
    view: OrderView,
}

impl OrdersPage {
    /// Open the page with the pass-through filter.
    pub async fn open(client: OrderClient) -> Result<Self, OrderError> {
        let mut view = OrderView::new();
        view.refresh(&client).await?;
        Ok(Self { client, view })
    }

    pub fn view(&self) -> &OrderView {
        &self.view
    }

    pub fn orders(&self) -> &[Order] {
        self.view.orders()
    }

    pub fn rows(&self) -> Vec<OrderRow> {
        self.view.rows()
    }

    pub async fn apply_filter(&mut self, filter: OrderFilter) -> Result<&[Order], Notice> {
        self.view
            .apply(filter, &self.client)
            .await
            .map_err(Notice::from)
    }

    /// Apply the raw values of the filter form.
    pub async fn apply_filter_form(
        &mut self,
        status: &str,
        start: &str,
        end: &str,
    ) -> Result<&[Order], Notice> {
        let filter = OrderFilter::from_form(status, start, end).map_err(Notice::from)?;
        self.apply_filter(filter).await
    }

    #[instrument(skip(self))]
    pub async fn update_status(&mut self, order_number: OrderNumber, status: OrderStatus) -> Notice {
        match self.client.update_status(order_number.clone(), status).await {
            Ok(_) => {
                info!("Status updated");
                self.rederive(Notice::info(format!(
                    "Order {order_number} status updated to {status}"
                )))
                .await
            }
            Err(e) => {
                warn!(error = %e, "Status update failed");
                Notice::from(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_order(&mut self, order_number: OrderNumber) -> Notice {
        match self.client.remove(order_number.clone()).await {
            Ok(_) => {
                info!("Order deleted");
                self.rederive(Notice::info(format!("Order {order_number} has been deleted")))
                    .await
            }
            Err(e) => {
                warn!(error = %e, "Delete failed");
                Notice::from(e)
            }
        }
    }

    async fn rederive(&mut self, success: Notice) -> Notice {
        match self.view.refresh(&self.client).await {
            Ok(_) => success,
            Err(e) => Notice::from(e),
        }
    }
}
