use pizza_dashboard::analytics::{daily_sales_walk, TimeRange};
use pizza_dashboard::clients::StoreHandle;
use pizza_dashboard::composer::SequentialOrderNumbers;
use pizza_dashboard::config::DashboardConfig;
use pizza_dashboard::lifecycle::DashboardSystem;
use pizza_dashboard::order_actor::OrderError;
use pizza_dashboard::pages::SalesPage;

#[tokio::test]
async fn test_seeded_system_round_trip() {
    let system = DashboardSystem::new(DashboardConfig::default()).unwrap();

    let mut form = system
        .new_order_form_with(Box::new(SequentialOrderNumbers::starting_at(40000)))
        .await
        .unwrap();
    form.set_customer_name("Ira").unwrap();
    form.set_phone_number("555-4444").unwrap();
    form.select_pizza("Margherita").unwrap();
    let today = chrono::NaiveDate::from_ymd_opt(2025, 3, 27).unwrap();
    assert!(!form.submit(today).await.is_error());
    drop(form);

    let page = system.orders_page().await.unwrap();
    assert_eq!(page.rows().len(), 5);
    drop(page);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unseeded_system_starts_empty() {
    let config = DashboardConfig::from_yaml_str("seed_orders: false\nstore_buffer: 2\n").unwrap();
    let system = DashboardSystem::new(config).unwrap();

    let snapshot = system.order_client.snapshot().await.unwrap();
    assert!(snapshot.is_empty());

    let form = system.new_order_form().await.unwrap();
    assert!(form.draft().unwrap().order_number.as_str().starts_with("ORD-"));
    drop(form);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_zero_buffer_config_is_rejected() {
    let config = DashboardConfig {
        store_buffer: 0,
        ..DashboardConfig::default()
    };

    let result = DashboardSystem::new(config);
    assert!(matches!(result, Err(OrderError::ValidationError(_))));
}

#[test]
fn test_sales_page_range_switch() {
    let start = chrono::NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    let end = chrono::NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let mut page = SalesPage::with_daily(daily_sales_walk(start, end, || 10), TimeRange::default());

    assert_eq!(page.daily_sales().points.len(), 31);
    page.set_range(TimeRange::Last90Days);
    assert_eq!(page.daily_sales().points.len(), 91);
    page.set_range("7d".parse().unwrap());
    assert_eq!(page.daily_sales().points.len(), 8);

    assert_eq!(page.pizza_sales().points.len(), 4);
    assert_eq!(page.size_sales().total(), 100);
    assert_eq!(page.monthly_sales().value_of("April"), Some(81));

    assert_eq!(SalesPage::open(true).range(), TimeRange::Last7Days);
}
