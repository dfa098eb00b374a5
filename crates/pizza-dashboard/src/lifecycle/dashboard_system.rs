use crate::clients::OrderClient;
use crate::composer::{OrderNumberSource, RandomOrderNumbers};
use crate::config::DashboardConfig;
use crate::forecast::HttpForecastClient;
use crate::model::{sample_orders, Menu};
use crate::order_actor::{self, OrderError};
use crate::pages::{NewOrderForm, Notice, OrdersPage, SummaryCards};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Owns the running order store and the clients the pages use.
///
/// # Example
///
/// ```rust
/// use pizza_dashboard::config::DashboardConfig;
/// use pizza_dashboard::lifecycle::DashboardSystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = DashboardSystem::new(DashboardConfig::default())?;
///     let page = system.orders_page().await?;
///     assert_eq!(page.rows().len(), 4);
///
///     drop(page);
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct DashboardSystem {
    pub order_client: OrderClient,
    pub forecast: HttpForecastClient,
    pub config: DashboardConfig,
    menu: Menu,
    handles: Vec<JoinHandle<()>>,
}

impl DashboardSystem {
    /// Spawns the order store, seeded unless the config says otherwise.
    ///
    /// Must be called inside a Tokio runtime. Configs that fail
    /// [`DashboardConfig::validate`] are rejected before anything is spawned.
    pub fn new(config: DashboardConfig) -> Result<Self, OrderError> {
        config
            .validate()
            .map_err(|e| OrderError::ValidationError(e.to_string()))?;
        let menu = Menu::standard();
        let seed = if config.seed_orders {
            sample_orders(&menu)
        } else {
            Vec::new()
        };

        let (order_actor, store_client) = order_actor::seeded(config.store_buffer, seed)?;
        let order_client = OrderClient::new(store_client);
        let order_handle = tokio::spawn(order_actor.run());

        let forecast = HttpForecastClient::new(config.forecast_url.clone());
        info!(forecast_url = %config.forecast_url, "Dashboard started");

        Ok(Self {
            order_client,
            forecast,
            config,
            menu,
            handles: vec![order_handle],
        })
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub async fn orders_page(&self) -> Result<OrdersPage, OrderError> {
        OrdersPage::open(self.order_client.clone()).await
    }

    /// A new-order form drawing random order numbers.
    pub async fn new_order_form(&self) -> Result<NewOrderForm, Notice> {
        self.new_order_form_with(Box::new(RandomOrderNumbers)).await
    }

    pub async fn new_order_form_with(
        &self,
        numbers: Box<dyn OrderNumberSource>,
    ) -> Result<NewOrderForm, Notice> {
        NewOrderForm::open(
            self.menu.clone(),
            self.order_client.clone(),
            numbers,
            self.config.order_number_attempts,
        )
        .await
    }

    /// Summary cards with the forecast for the configured date.
    pub async fn summary_cards(&self) -> SummaryCards {
        SummaryCards::load(&self.forecast, self.config.forecast_date).await
    }

    /// Drops the system's client and waits for the store actor to finish.
    ///
    /// Clients cloned out of the system keep the actor alive; drop them first.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down dashboard...");
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("Dashboard shutdown complete.");
        Ok(())
    }
}
