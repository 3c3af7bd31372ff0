use std::io::Write;

use anyhow::{Context, Result};

use base::entities::{OrderNumber, ShopId};
use base::errors::TrackerError;
use order_store::{OrderStorage, TrackedOrder, TrackedOrders};
use status_api::OrderStatusApi;

use crate::cli::Command;
use crate::context::AppContext;
use crate::presentation::{refresh_progress_bar, render_orders_table};

const LOAD_ERROR: &str = "could not load the tracked orders";
const SAVE_ERROR: &str = "could not save the tracked orders";

pub fn run<S, A, W>(command: Command, ctx: &mut AppContext<S, A, W>) -> Result<()>
where
    S: OrderStorage,
    A: OrderStatusApi,
    W: Write,
{
    match command {
        Command::Status {
            shop: Some(shop),
            order: Some(order),
        } => show_single_order(ctx, shop, order),
        Command::Status { .. } => show_tracked_orders(ctx),
        Command::Add { shop, order, name } => add_order(ctx, shop, order, name),
        Command::Remove { name } => remove_order(ctx, &name),
        Command::Cleanup => cleanup_delivered_orders(ctx),
    }
}

fn load_orders<S: OrderStorage>(storage: &S) -> Result<TrackedOrders> {
    storage.load().context(LOAD_ERROR)
}

/// Refreshes every tracked order and saves them only if all refreshes succeeded.
pub fn show_tracked_orders<S, A, W>(ctx: &mut AppContext<S, A, W>) -> Result<()>
where
    S: OrderStorage,
    A: OrderStatusApi,
    W: Write,
{
    let mut orders = load_orders(&ctx.storage)?;

    if orders.is_empty() {
        writeln!(ctx.out, "Es werden noch keine Aufträge verfolgt.")?;
        return Ok(());
    }

    let progress = refresh_progress_bar(orders.len(), ctx.show_progress)?;

    let refreshed = orders.refresh_all(&ctx.status_api, ctx.request_delay, |order| {
        log::info!("refreshed {}", order.display_name());
        progress.inc(1);
    });
    progress.finish_and_clear();

    refreshed.context("refreshing the orders failed, nothing was saved")?;

    ctx.storage.save(&orders).context(SAVE_ERROR)?;
    writeln!(ctx.out, "{}", render_orders_table(orders.iter()))?;

    Ok(())
}

/// Looks an order up without tracking it.
pub fn show_single_order<S, A, W>(
    ctx: &mut AppContext<S, A, W>,
    shop: ShopId,
    order: OrderNumber,
) -> Result<()>
where
    S: OrderStorage,
    A: OrderStatusApi,
    W: Write,
{
    let mut tracked = TrackedOrder::new(shop, order, None);
    tracked
        .refresh(&ctx.status_api)
        .context(format!("could not get the status of order {}", order))?;

    writeln!(ctx.out, "{}", render_orders_table([&tracked]))?;

    Ok(())
}

pub fn add_order<S, A, W>(
    ctx: &mut AppContext<S, A, W>,
    shop: ShopId,
    order: OrderNumber,
    name: Option<String>,
) -> Result<()>
where
    S: OrderStorage,
    A: OrderStatusApi,
    W: Write,
{
    let mut orders = load_orders(&ctx.storage)?;

    match orders.add(TrackedOrder::new(shop, order, name)) {
        Ok(()) => {}
        Err(TrackerError::DuplicateOrder { name, .. }) => {
            log::warn!("order {} of shop {} is already tracked", order, shop);
            writeln!(
                ctx.out,
                "✘ Der Auftrag befindet sich bereits unter dem Namen {} in der Liste!",
                name
            )?;
            return Ok(());
        }
        Err(TrackerError::DuplicateName(name)) => {
            log::warn!("an order named {} is already tracked", name);
            writeln!(
                ctx.out,
                "✘ Ein Auftrag mit dem Namen {} befindet sich bereits in der Liste. \
                 Ein weiterer Auftrag muss einen anderen Namen haben.",
                name
            )?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    ctx.storage.save(&orders).context(SAVE_ERROR)?;
    writeln!(ctx.out, "✔ Der Auftrag wurde hinzugefügt.")?;

    Ok(())
}

pub fn remove_order<S, A, W>(ctx: &mut AppContext<S, A, W>, name: &str) -> Result<()>
where
    S: OrderStorage,
    A: OrderStatusApi,
    W: Write,
{
    let mut orders = load_orders(&ctx.storage)?;

    if orders.remove_by_name(name).is_none() {
        writeln!(ctx.out, "✘ Der Auftrag {} wurde nicht gefunden.", name)?;
        return Ok(());
    }

    ctx.storage.save(&orders).context(SAVE_ERROR)?;
    writeln!(ctx.out, "✔ Der Auftrag {} wurde gelöscht!", name)?;

    Ok(())
}

pub fn cleanup_delivered_orders<S, A, W>(ctx: &mut AppContext<S, A, W>) -> Result<()>
where
    S: OrderStorage,
    A: OrderStatusApi,
    W: Write,
{
    let mut orders = load_orders(&ctx.storage)?;

    let removed = orders.cleanup_delivered();
    if removed == 0 {
        writeln!(ctx.out, "✘ Es gab keinen Auftrag, der gelöscht werden konnte.")?;
        return Ok(());
    }

    ctx.storage.save(&orders).context(SAVE_ERROR)?;
    writeln!(
        ctx.out,
        "✔ Es wurde(n) {} Aufträge, die bereits geliefert wurden, gelöscht.",
        removed
    )?;

    Ok(())
}
