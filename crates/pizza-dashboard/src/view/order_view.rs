use crate::clients::OrderClient;
use crate::model::{Order, OrderRow};
use crate::order_actor::OrderError;
use crate::view::OrderFilter;
use tracing::debug;

/// The filtered projection of the order store that the table renders.
///
/// The view is derived on demand: [`apply`](Self::apply) and
/// [`refresh`](Self::refresh) ask the store for the orders matching the
/// current filter and remember the revision they saw. A mutation made
/// through any other client leaves the view as it was until the next
/// refresh; [`is_stale`](Self::is_stale) reports that case.
#[derive(Debug, Default)]
pub struct OrderView {
    filter: OrderFilter,
    rows: Vec<Order>,
    derived_at: Option<u64>,
}

impl OrderView {
    /// A view with the pass-through filter that has not been derived yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the filter and re-derive.
    pub async fn apply(
        &mut self,
        filter: OrderFilter,
        client: &OrderClient,
    ) -> Result<&[Order], OrderError> {
        self.filter = filter;
        self.refresh(client).await
    }

    /// Re-derive with the current filter.
    pub async fn refresh(&mut self, client: &OrderClient) -> Result<&[Order], OrderError> {
        let snapshot = client.filter(self.filter.clone()).await?;
        debug!(
            matched = snapshot.len(),
            revision = snapshot.revision,
            "View derived"
        );
        self.rows = snapshot.records;
        self.derived_at = Some(snapshot.revision);
        Ok(&self.rows)
    }

    /// Whether the store has changed since the view was last derived.
    pub async fn is_stale(&self, client: &OrderClient) -> Result<bool, OrderError> {
        match self.derived_at {
            None => Ok(true),
            Some(seen) => Ok(client.revision().await? != seen),
        }
    }

    pub fn filter(&self) -> &OrderFilter {
        &self.filter
    }

    pub fn orders(&self) -> &[Order] {
        &self.rows
    }

    pub fn rows(&self) -> Vec<OrderRow> {
        self.rows.iter().map(OrderRow::from).collect()
    }

    /// Store revision the current rows were derived at.
    pub fn derived_at(&self) -> Option<u64> {
        self.derived_at
    }
}
