use crate::clients::{OrderClient, StoreHandle};
use crate::composer::{ComposerDraft, ComposerError, OrderNumberSource};
use crate::model::{Menu, Money, Order, OrderNumber, PizzaMenuItem};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Lifecycle of one composer instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ComposerState {
    #[default]
    Idle,
    Drafting(ComposerDraft),
    Submitted(OrderNumber),
    Abandoned,
}

/// Autocomplete result for the pizza input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    pub items: Vec<PizzaMenuItem>,
    /// False when the input is empty or nothing matched.
    pub visible: bool,
}

/// Builds one order at a time against a menu.
///
/// ```text
/// Idle ──open──▶ Drafting ──submit──▶ Submitted
///                    │
///                    └──abandon──▶ Abandoned
/// ```
///
/// `open` may be called again from any state to start over with a fresh
/// number. Draft operations outside `Drafting` fail with
/// [`ComposerError::NotDrafting`].
#[derive(Debug, Clone, Default)]
pub struct OrderComposer {
    menu: Menu,
    state: ComposerState,
}

impl OrderComposer {
    pub fn new(menu: Menu) -> Self {
        Self {
            menu,
            state: ComposerState::Idle,
        }
    }

    pub fn state(&self) -> &ComposerState {
        &self.state
    }

    pub fn draft(&self) -> Option<&ComposerDraft> {
        match &self.state {
            ComposerState::Drafting(draft) => Some(draft),
            _ => None,
        }
    }

    fn draft_mut(&mut self) -> Result<&mut ComposerDraft, ComposerError> {
        match &mut self.state {
            ComposerState::Drafting(draft) => Ok(draft),
            _ => Err(ComposerError::NotDrafting),
        }
    }

    /// Start a draft with a number that is not yet in the store.
    ///
    /// Draws up to `attempts` numbers from `numbers`, skipping any the
    /// store already holds.
    pub async fn open(
        &mut self,
        numbers: &mut dyn OrderNumberSource,
        client: &OrderClient,
        attempts: usize,
    ) -> Result<OrderNumber, ComposerError> {
        let number = free_number(numbers, client, attempts).await?;
        self.open_with_number(number.clone());
        Ok(number)
    }

    /// Give the open draft a new free number, keeping everything entered so
    /// far. Used when the draft's number was taken after it was opened.
    pub async fn renumber(
        &mut self,
        numbers: &mut dyn OrderNumberSource,
        client: &OrderClient,
        attempts: usize,
    ) -> Result<OrderNumber, ComposerError> {
        // Fail before drawing if there is nothing to renumber.
        self.draft_mut()?;
        let number = free_number(numbers, client, attempts).await?;
        let draft = self.draft_mut()?;
        debug!(from = %draft.order_number, to = %number, "Draft renumbered");
        draft.order_number = number.clone();
        Ok(number)
    }

    /// Start a draft with a caller-chosen number, without consulting the store.
    pub fn open_with_number(&mut self, order_number: OrderNumber) {
        if let ComposerState::Drafting(previous) = &self.state {
            debug!(order_number = %previous.order_number, "Discarding open draft");
        }
        debug!(%order_number, "Draft opened");
        self.state = ComposerState::Drafting(ComposerDraft::new(order_number));
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) -> Result<(), ComposerError> {
        self.draft_mut()?.customer_name = name.into();
        Ok(())
    }

    pub fn set_phone_number(&mut self, phone: impl Into<String>) -> Result<(), ComposerError> {
        self.draft_mut()?.phone_number = phone.into();
        Ok(())
    }

    /// Menu entries matching the typed input.
    pub fn search(&self, input: &str) -> Suggestions {
        let items: Vec<PizzaMenuItem> = self.menu.suggest(input).into_iter().cloned().collect();
        Suggestions {
            visible: !items.is_empty(),
            items,
        }
    }

    /// Add one menu entry by exact name; returns the new total.
    pub fn add_pizza(&mut self, name: &str) -> Result<Money, ComposerError> {
        let pizza = self
            .menu
            .find(name)
            .cloned()
            .ok_or_else(|| ComposerError::UnknownPizza(name.to_string()))?;
        let draft = self.draft_mut()?;
        draft.push(pizza);
        Ok(draft.total())
    }

    /// Remove the pizza at `index`; returns the new total.
    pub fn remove_pizza(&mut self, index: usize) -> Result<Money, ComposerError> {
        let draft = self.draft_mut()?;
        draft.remove(index)?;
        Ok(draft.total())
    }

    pub fn total(&self) -> Result<Money, ComposerError> {
        self.draft()
            .map(ComposerDraft::total)
            .ok_or(ComposerError::NotDrafting)
    }

    /// The order the open draft would produce, leaving the draft open.
    pub fn candidate(&self, today: NaiveDate) -> Result<Order, ComposerError> {
        self.draft().ok_or(ComposerError::NotDrafting)?.to_order(today)
    }

    /// Finish the draft. The returned order is dated `today` and `preparing`.
    pub fn submit(&mut self, today: NaiveDate) -> Result<Order, ComposerError> {
        let order = self.candidate(today)?;
        info!(order_number = %order.order_number, total = %order.total(), "Order composed");
        self.state = ComposerState::Submitted(order.order_number.clone());
        Ok(order)
    }

    /// Drop the open draft. Returns false if there was none.
    pub fn abandon(&mut self) -> bool {
        match &self.state {
            ComposerState::Drafting(draft) => {
                debug!(order_number = %draft.order_number, "Draft abandoned");
                self.state = ComposerState::Abandoned;
                true
            }
            _ => false,
        }
    }
}

async fn free_number(
    numbers: &mut dyn OrderNumberSource,
    client: &OrderClient,
    attempts: usize,
) -> Result<OrderNumber, ComposerError> {
    for _ in 0..attempts {
        let candidate = numbers.next_number();
        if client.get(candidate.clone()).await?.is_none() {
            return Ok(candidate);
        }
        debug!(order_number = %candidate, "Order number taken, drawing another");
    }
    warn!(attempts, "No free order number");
    Err(ComposerError::NumbersExhausted(attempts))
}
