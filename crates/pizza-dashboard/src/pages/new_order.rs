use crate::clients::{OrderClient, StoreHandle};
use crate::composer::{
    submission_summary, ComposerDraft, OrderComposer, OrderNumberSource, Suggestions,
};
use crate::model::{Menu, Money, OrderNumber};
use crate::order_actor::OrderError;
use crate::pages::Notice;
use chrono::NaiveDate;
use tracing::{info, instrument, warn};

/// The "new order" form.
///
/// Wraps an [`OrderComposer`] and submits finished drafts to the store.
/// After a successful submission a fresh draft is opened straight away.
pub struct NewOrderForm {
    composer: OrderComposer,
    client: OrderClient,
    numbers: Box<dyn OrderNumberSource>,
    attempts: usize,
}

impl NewOrderForm {
    /// Create the form with an open draft.
    pub async fn open(
        menu: Menu,
        client: OrderClient,
        numbers: Box<dyn OrderNumberSource>,
        attempts: usize,
    ) -> Result<Self, Notice> {
        let mut form = Self {
            composer: OrderComposer::new(menu),
            client,
            numbers,
            attempts,
        };
        form.reset().await?;
        Ok(form)
    }

    async fn reset(&mut self) -> Result<(), Notice> {
        self.composer
            .open(self.numbers.as_mut(), &self.client, self.attempts)
            .await?;
        Ok(())
    }

    /// Move the draft off `taken` if the store now holds that number.
    async fn renumber(&mut self, taken: &OrderNumber) -> Result<(), Notice> {
        if self.client.get(taken.clone()).await?.is_none() {
            return Ok(());
        }
        self.composer
            .renumber(self.numbers.as_mut(), &self.client, self.attempts)
            .await?;
        Ok(())
    }

    pub fn draft(&self) -> Option<&ComposerDraft> {
        self.composer.draft()
    }

    pub fn set_customer_name(&mut self, name: &str) -> Result<(), Notice> {
        Ok(self.composer.set_customer_name(name)?)
    }

    pub fn set_phone_number(&mut self, phone: &str) -> Result<(), Notice> {
        Ok(self.composer.set_phone_number(phone)?)
    }

    pub fn type_pizza(&self, input: &str) -> Suggestions {
        self.composer.search(input)
    }

    pub fn select_pizza(&mut self, name: &str) -> Result<Money, Notice> {
        Ok(self.composer.add_pizza(name)?)
    }

    pub fn remove_pizza(&mut self, index: usize) -> Result<Money, Notice> {
        Ok(self.composer.remove_pizza(index)?)
    }

    /// Drop the current draft and start over with a new number.
    pub async fn clear(&mut self) -> Result<(), Notice> {
        self.composer.abandon();
        self.reset().await
    }

    /// Validate, append to the store and report the summary.
    ///
    /// On any failure the draft stays open with everything entered. If the
    /// store already holds the draft's number, the draft is given a fresh one
    /// so the next submit can go through.
    #[instrument(skip(self))]
    pub async fn submit(&mut self, today: NaiveDate) -> Notice {
        let order = match self.composer.candidate(today) {
            Ok(order) => order,
            Err(e) => return e.into(),
        };
        match self.client.append(order.clone()).await {
            Ok(_) => {}
            Err(e @ OrderError::ValidationError(_)) => {
                warn!(order_number = %order.order_number, error = %e, "Append rejected");
                return match self.renumber(&order.order_number).await {
                    Ok(()) => e.into(),
                    Err(notice) => notice,
                };
            }
            Err(e) => return e.into(),
        }
        if let Err(e) = self.composer.submit(today) {
            return e.into();
        }
        info!(order_number = %order.order_number, "Order submitted");

        let summary = Notice::info(submission_summary(&order));
        match self.reset().await {
            Ok(()) => summary,
            Err(e) => e,
        }
    }
}
