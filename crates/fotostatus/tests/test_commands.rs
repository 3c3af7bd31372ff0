use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::time::Duration;

use base::entities::{OrderNumber, OrderStatusInfo, ShopId};
use base::errors::{TrackerError, TrackerResult};
use fotostatus::cli::Command;
use fotostatus::commands::run;
use fotostatus::AppContext;
use order_store::{
    InMemoryOrderStorage, JsonFileOrderStorage, OrderStorage, TrackedOrder, TrackedOrders,
};
use status_api::OrderStatusApi;

#[derive(Default)]
struct FakeStatusApi {
    statuses: HashMap<OrderNumber, &'static str>,
    requested: RefCell<Vec<(ShopId, OrderNumber)>>,
}

impl FakeStatusApi {
    fn new(statuses: &[(OrderNumber, &'static str)]) -> Self {
        Self {
            statuses: statuses.iter().copied().collect(),
            ..Default::default()
        }
    }
}

impl OrderStatusApi for FakeStatusApi {
    fn get_order_status(
        &self,
        shop: ShopId,
        order: OrderNumber,
    ) -> TrackerResult<OrderStatusInfo> {
        self.requested.borrow_mut().push((shop, order));

        match self.statuses.get(&order) {
            Some(status) => Ok(OrderStatusInfo {
                status: status.to_string(),
                last_update: String::from("2022-05-17T13:05:00"),
                price: String::from("3,45 €"),
                order_no: order,
            }),
            None => Err(TrackerError::Network {
                shop,
                order,
                source: anyhow::anyhow!("connection refused"),
            }),
        }
    }
}

type TestContext = AppContext<InMemoryOrderStorage, FakeStatusApi, Vec<u8>>;

fn context(orders: Vec<TrackedOrder>, api: FakeStatusApi) -> TestContext {
    AppContext {
        storage: InMemoryOrderStorage::new(TrackedOrders::from(orders)),
        status_api: api,
        out: Vec::new(),
        request_delay: Duration::ZERO,
        show_progress: false,
    }
}

fn output(ctx: &TestContext) -> String {
    String::from_utf8(ctx.out.clone()).unwrap()
}

fn named(shop: ShopId, order: OrderNumber, name: &str) -> TrackedOrder {
    TrackedOrder::new(shop, order, Some(String::from(name)))
}

fn status_command() -> Command {
    Command::Status {
        shop: None,
        order: None,
    }
}

#[test]
fn status_should_refresh_save_and_render_all_orders() {
    let mut ctx = context(
        vec![named(123, 456, "Vacation"), TrackedOrder::new(123, 789, None)],
        FakeStatusApi::new(&[(456, "DELIVERED"), (789, "PROCESSING")]),
    );

    run(status_command(), &mut ctx).unwrap();

    assert_eq!(
        *ctx.status_api.requested.borrow(),
        vec![(123, 456), (123, 789)]
    );
    assert_eq!(ctx.storage.number_of_saves(), 1);

    let saved = ctx.storage.orders();
    assert!(saved.find(123, 456).unwrap().is_delivered());
    assert_eq!(
        saved.find(123, 789).unwrap().status_info().unwrap().status,
        "PROCESSING"
    );

    let out = output(&ctx);
    assert!(out.contains("Vacation"));
    assert!(out.contains("789"));
    assert!(out.contains("DELIVERED"));
    assert!(out.contains("17.05.2022 13:05"));
    assert!(out.contains("3,45 €"));
}

#[test]
fn status_should_abort_without_saving_on_failed_refresh() {
    let mut ctx = context(
        vec![TrackedOrder::new(1, 1, None), TrackedOrder::new(1, 2, None)],
        FakeStatusApi::new(&[(1, "PROCESSING")]),
    );

    let res = run(status_command(), &mut ctx);

    assert!(res.is_err());
    assert_eq!(ctx.storage.number_of_saves(), 0);
    assert!(ctx
        .storage
        .orders()
        .iter()
        .all(|order| order.status_info().is_none()));
    assert!(output(&ctx).is_empty());
}

#[test]
fn status_without_orders_should_print_hint() {
    let mut ctx = context(vec![], FakeStatusApi::default());

    run(status_command(), &mut ctx).unwrap();

    assert!(output(&ctx).contains("keine Aufträge"));
    assert!(ctx.status_api.requested.borrow().is_empty());
    assert_eq!(ctx.storage.number_of_saves(), 0);
}

#[test]
fn status_of_single_order_should_not_be_persisted() {
    let mut ctx = context(vec![], FakeStatusApi::new(&[(42, "IN_SHOP")]));

    run(
        Command::Status {
            shop: Some(7),
            order: Some(42),
        },
        &mut ctx,
    )
    .unwrap();

    assert_eq!(*ctx.status_api.requested.borrow(), vec![(7, 42)]);
    assert_eq!(ctx.storage.number_of_saves(), 0);
    assert!(ctx.storage.orders().is_empty());
    assert!(output(&ctx).contains("IN_SHOP"));
}

#[test]
fn add_should_append_unrefreshed_order() {
    let mut ctx = context(vec![named(1, 1, "First")], FakeStatusApi::default());

    run(
        Command::Add {
            shop: 1,
            order: 2,
            name: Some(String::from("Second")),
        },
        &mut ctx,
    )
    .unwrap();

    let saved = ctx.storage.orders();
    let last = saved.iter().last().unwrap();
    assert_eq!(saved.len(), 2);
    assert_eq!(last.display_name(), "Second");
    assert!(last.status_info().is_none());
    assert!(ctx.status_api.requested.borrow().is_empty());
    assert!(output(&ctx).contains("hinzugefügt"));
}

#[test]
fn add_duplicate_order_should_print_message_and_keep_store() {
    let mut ctx = context(vec![named(1, 2, "A")], FakeStatusApi::default());

    run(
        Command::Add {
            shop: 1,
            order: 2,
            name: Some(String::from("B")),
        },
        &mut ctx,
    )
    .unwrap();

    assert_eq!(ctx.storage.number_of_saves(), 0);
    assert_eq!(ctx.storage.orders().len(), 1);
    assert!(ctx.storage.orders().find_by_name("A").is_some());
    assert!(output(&ctx).contains("unter dem Namen A"));
}

#[test]
fn add_duplicate_name_should_be_rejected() {
    let mut ctx = context(vec![named(1, 2, "A")], FakeStatusApi::default());

    run(
        Command::Add {
            shop: 1,
            order: 3,
            name: Some(String::from("A")),
        },
        &mut ctx,
    )
    .unwrap();

    assert_eq!(ctx.storage.number_of_saves(), 0);
    assert_eq!(ctx.storage.orders().len(), 1);
    assert!(output(&ctx).contains("anderen Namen"));
}

#[test]
fn remove_should_delete_order_by_display_name() {
    let mut ctx = context(
        vec![named(1, 1, "A"), TrackedOrder::new(1, 2, None)],
        FakeStatusApi::default(),
    );

    run(
        Command::Remove {
            name: String::from("2"),
        },
        &mut ctx,
    )
    .unwrap();

    let saved = ctx.storage.orders();
    assert_eq!(saved.len(), 1);
    assert!(saved.find_by_name("A").is_some());
    assert!(output(&ctx).contains("gelöscht"));
}

#[test]
fn remove_unknown_name_should_leave_store_untouched() {
    let mut ctx = context(vec![named(1, 1, "A")], FakeStatusApi::default());

    run(
        Command::Remove {
            name: String::from("X"),
        },
        &mut ctx,
    )
    .unwrap();

    assert_eq!(ctx.storage.number_of_saves(), 0);
    assert_eq!(ctx.storage.orders().len(), 1);
    assert!(output(&ctx).contains("nicht gefunden"));
}

#[test]
fn cleanup_should_report_number_of_removed_orders() {
    let api = FakeStatusApi::new(&[(1, "DELIVERED"), (2, "DELIVERED"), (3, "PROCESSING")]);
    let mut orders = TrackedOrders::from(vec![
        named(5, 1, "A"),
        named(5, 2, "B"),
        named(5, 3, "C"),
    ]);
    orders.refresh_all(&api, Duration::ZERO, |_| {}).unwrap();
    let mut ctx = context(orders.as_slice().to_vec(), FakeStatusApi::default());

    run(Command::Cleanup, &mut ctx).unwrap();

    let saved = ctx.storage.orders();
    assert_eq!(saved.len(), 1);
    assert!(saved.find_by_name("C").is_some());
    assert!(output(&ctx).contains("2 Aufträge"));
}

#[test]
fn cleanup_without_delivered_orders_should_not_save() {
    let mut ctx = context(vec![named(5, 1, "A")], FakeStatusApi::default());

    run(Command::Cleanup, &mut ctx).unwrap();

    assert_eq!(ctx.storage.number_of_saves(), 0);
    assert!(output(&ctx).contains("keinen Auftrag"));
}

#[test]
fn commands_should_work_against_json_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fotoparadies-status").join("orders.json");
    let mut ctx = AppContext {
        storage: JsonFileOrderStorage::new(&path),
        status_api: FakeStatusApi::new(&[(456, "DELIVERED")]),
        out: Vec::new(),
        request_delay: Duration::ZERO,
        show_progress: false,
    };

    run(
        Command::Add {
            shop: 123,
            order: 456,
            name: Some(String::from("Vacation")),
        },
        &mut ctx,
    )
    .unwrap();
    run(status_command(), &mut ctx).unwrap();
    run(Command::Cleanup, &mut ctx).unwrap();

    assert!(ctx.storage.load().unwrap().is_empty());
    assert!(fs::read_to_string(&path).unwrap().contains("\"schemaVersion\": 1"));
}

#[test]
fn corrupt_store_should_fail_the_command() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.json");
    fs::write(&path, "not json").unwrap();
    let mut ctx = AppContext {
        storage: JsonFileOrderStorage::new(&path),
        status_api: FakeStatusApi::default(),
        out: Vec::new(),
        request_delay: Duration::ZERO,
        show_progress: false,
    };

    let err = run(Command::Cleanup, &mut ctx).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<TrackerError>(),
        Some(TrackerError::CorruptStore { .. })
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
}
