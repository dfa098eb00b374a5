//! Walks through one shift at the counter against a live store: filter the
//! table, take an order, move it along, delete an old one, then ask the
//! forecast service for the week.

use chrono::Local;
use order_store::telemetry::setup_tracing;
use pizza_dashboard::config::DashboardConfig;
use pizza_dashboard::lifecycle::DashboardSystem;
use pizza_dashboard::model::OrderStatus;
use pizza_dashboard::pages::{Notice, SalesPage};
use std::error::Error;
use tracing::{info, warn, Instrument};

fn show(notice: &Notice) {
    if notice.is_error() {
        warn!(%notice, "Notice");
    } else {
        info!(%notice, "Notice");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = DashboardConfig::from_env()?;
    info!(?config, "Starting pizza dashboard");
    let system = DashboardSystem::new(config)?;
    for pizza in system.menu().items() {
        info!(%pizza, "On the menu");
    }

    let mut orders = system.orders_page().await?;
    println!("{}", serde_json::to_string_pretty(&orders.rows())?);

    let span = tracing::info_span!("filtering");
    async {
        match orders.apply_filter_form("preparing", "", "").await {
            Ok(rows) => info!(matched = rows.len(), "Preparing orders"),
            Err(notice) => show(&notice),
        }
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("new_order");
    let submitted = async {
        let mut form = system.new_order_form().await?;
        form.set_customer_name("Meera")?;
        form.set_phone_number("555-010-2020")?;
        let suggestions = form.type_pizza("pep");
        if let Some(pizza) = suggestions.items.first() {
            form.select_pizza(&pizza.name)?;
        }
        form.select_pizza("Veggie")?;
        let number = form.draft().map(|draft| draft.order_number.clone());
        let notice = form.submit(Local::now().date_naive()).await;
        show(&notice);
        Ok::<_, Notice>(number.filter(|_| !notice.is_error()))
    }
    .instrument(span)
    .await;

    match submitted {
        Ok(Some(number)) => {
            show(&orders.update_status(number, OrderStatus::Ready).await);
        }
        Ok(None) => {}
        Err(notice) => show(&notice),
    }
    show(&orders.delete_order("ORD-12347".into()).await);

    orders.apply_filter(Default::default()).await?;
    println!("{}", serde_json::to_string_pretty(&orders.rows())?);

    let cards = system.summary_cards().await;
    for card in cards.cards() {
        info!(title = card.title, value = %card.value, trend = card.trend, "Summary card");
    }

    let sales = SalesPage::open(false);
    info!(range = sales.range().label(), "Daily sales");
    println!("{}", serde_json::to_string_pretty(&sales.daily_sales())?);

    drop(orders);
    system.shutdown().await?;
    Ok(())
}
