use chrono::NaiveDate;
use pizza_dashboard::clients::{OrderClient, StoreHandle};
use pizza_dashboard::model::{sample_orders, Menu, OrderStatus};
use pizza_dashboard::order_actor::{self, OrderError};
use pizza_dashboard::pages::{Notice, OrdersPage};
use pizza_dashboard::view::OrderFilter;

// --- Helpers ---

fn spawn_store() -> OrderClient {
    let (actor, client) = order_actor::seeded(16, sample_orders(&Menu::standard())).unwrap();
    tokio::spawn(actor.run());
    OrderClient::new(client)
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

fn numbers(page: &OrdersPage) -> Vec<String> {
    page.orders()
        .iter()
        .map(|order| order.order_number.to_string())
        .collect()
}

// --- Tests ---

#[tokio::test]
async fn test_open_shows_whole_store_in_order() {
    let page = OrdersPage::open(spawn_store()).await.unwrap();
    assert_eq!(
        numbers(&page),
        vec!["ORD-12345", "ORD-12346", "ORD-12347", "ORD-12348"]
    );

    let totals: Vec<String> = page.rows().into_iter().map(|row| row.total_price).collect();
    assert_eq!(totals, vec!["$10", "$22", "$13", "$23"]);
}

#[tokio::test]
async fn test_preparing_within_range() {
    let mut page = OrdersPage::open(spawn_store()).await.unwrap();

    page.apply_filter(
        OrderFilter::all()
            .with_status(OrderStatus::Preparing)
            .between(date(17), date(19)),
    )
    .await
    .unwrap();

    assert_eq!(numbers(&page), vec!["ORD-12345", "ORD-12348"]);
}

#[tokio::test]
async fn test_filter_form_with_one_date_ignores_range() {
    let mut page = OrdersPage::open(spawn_store()).await.unwrap();

    page.apply_filter_form("all", "", "2025-03-18").await.unwrap();
    assert_eq!(numbers(&page).len(), 4);

    let notice = page.apply_filter_form("shipped", "", "").await.unwrap_err();
    assert!(notice.is_error());
    // A rejected filter leaves the previous result on screen.
    assert_eq!(numbers(&page).len(), 4);
}

#[tokio::test]
async fn test_status_update_rederives_view() {
    let mut page = OrdersPage::open(spawn_store()).await.unwrap();
    page.apply_filter(OrderFilter::all().with_status(OrderStatus::Ready))
        .await
        .unwrap();
    assert_eq!(numbers(&page), vec!["ORD-12346"]);

    let notice = page
        .update_status("ORD-12345".into(), OrderStatus::Ready)
        .await;

    assert_eq!(
        notice,
        Notice::Info("Order ORD-12345 status updated to ready".to_string())
    );
    assert_eq!(numbers(&page), vec!["ORD-12345", "ORD-12346"]);
    assert_eq!(page.view().derived_at(), Some(1));
}

#[tokio::test]
async fn test_status_update_changes_only_status() {
    let client = spawn_store();
    let before = client.get("ORD-12348".into()).await.unwrap().unwrap();

    let mut page = OrdersPage::open(client.clone()).await.unwrap();
    page.update_status("ORD-12348".into(), OrderStatus::Cancelled)
        .await;

    let after = client.get("ORD-12348".into()).await.unwrap().unwrap();
    assert_eq!(after.status, OrderStatus::Cancelled);
    assert_eq!(after.customer_name, before.customer_name);
    assert_eq!(after.phone_number, before.phone_number);
    assert_eq!(after.lines, before.lines);
    assert_eq!(after.date, before.date);
    // Still last.
    assert_eq!(numbers(&page).last().map(String::as_str), Some("ORD-12348"));
}

#[tokio::test]
async fn test_delete_removes_and_rederives() {
    let mut page = OrdersPage::open(spawn_store()).await.unwrap();

    let notice = page.delete_order("ORD-12347".into()).await;

    assert_eq!(
        notice,
        Notice::Info("Order ORD-12347 has been deleted".to_string())
    );
    assert_eq!(numbers(&page), vec!["ORD-12345", "ORD-12346", "ORD-12348"]);
}

#[tokio::test]
async fn test_missing_order_surfaces_error_notice() {
    let client = spawn_store();
    let mut page = OrdersPage::open(client.clone()).await.unwrap();

    let update = page
        .update_status("ORD-00000".into(), OrderStatus::Ready)
        .await;
    assert_eq!(update, Notice::Error("Order not found: ORD-00000".to_string()));

    let delete = page.delete_order("ORD-00000".into()).await;
    assert!(delete.is_error());

    assert_eq!(client.revision().await.unwrap(), 0);
    assert_eq!(numbers(&page).len(), 4);
}

#[tokio::test]
async fn test_duplicate_append_leaves_store_unchanged() {
    let client = spawn_store();
    let duplicate = sample_orders(&Menu::standard()).remove(0);

    let result = client.append(duplicate).await;

    assert!(matches!(result, Err(OrderError::ValidationError(_))));
    let snapshot = client.snapshot().await.unwrap();
    assert_eq!(snapshot.len(), 4);
    assert_eq!(snapshot.revision, 0);
}

#[tokio::test]
async fn test_direct_mutation_leaves_page_stale() {
    let client = spawn_store();
    let mut page = OrdersPage::open(client.clone()).await.unwrap();

    client.remove("ORD-12345".into()).await.unwrap();

    assert!(page.view().is_stale(&client).await.unwrap());
    assert_eq!(numbers(&page).len(), 4);

    page.apply_filter(OrderFilter::all()).await.unwrap();
    assert!(!page.view().is_stale(&client).await.unwrap());
    assert_eq!(numbers(&page).len(), 3);
}

#[tokio::test]
async fn test_failed_rederive_is_reported() {
    use order_store::mock::MockStore;
    use order_store::{Snapshot, StoreError};
    use pizza_dashboard::model::Order;

    let seed = sample_orders(&Menu::standard());
    let mut patched = seed[0].clone();
    patched.status = OrderStatus::Cancelled;

    let mut mock = MockStore::<Order>::new();
    mock.expect_select().return_ok(Snapshot {
        revision: 0,
        records: seed,
    });
    mock.expect_patch("ORD-12345".into()).return_ok(patched);
    mock.expect_select().return_err(StoreError::ActorDropped);

    let mut page = OrdersPage::open(OrderClient::new(mock.client())).await.unwrap();
    let notice = page
        .update_status("ORD-12345".into(), OrderStatus::Cancelled)
        .await;

    assert!(notice.is_error());
    assert_eq!(
        notice.message(),
        "Actor communication error: Store actor dropped response channel"
    );
    mock.verify();
}
