use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use base::helpers::format_last_update;
use order_store::TrackedOrder;

const MISSING_VALUE: &str = "-";
const PROGRESS_TEMPLATE: &str = "{msg} [{bar:30}] {pos}/{len}";

#[derive(Tabled, Debug, PartialEq, Eq)]
struct OrderRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Letztes Update")]
    last_update: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Preis")]
    price: String,
}

impl From<&TrackedOrder> for OrderRow {
    fn from(order: &TrackedOrder) -> Self {
        let status_info = order.status_info();

        Self {
            name: order.display_name(),
            last_update: status_info
                .map(|info| format_last_update(&info.last_update))
                .unwrap_or_else(|| String::from(MISSING_VALUE)),
            status: status_info
                .map(|info| info.status.clone())
                .unwrap_or_else(|| String::from(MISSING_VALUE)),
            price: status_info
                .map(|info| info.price.clone())
                .unwrap_or_else(|| String::from(MISSING_VALUE)),
        }
    }
}

pub fn render_orders_table<'a, I>(orders: I) -> String
where
    I: IntoIterator<Item = &'a TrackedOrder>,
{
    let rows: Vec<OrderRow> = orders.into_iter().map(OrderRow::from).collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn refresh_progress_bar(number_of_orders: usize, visible: bool) -> Result<ProgressBar> {
    if !visible {
        return Ok(ProgressBar::hidden());
    }

    let progress = ProgressBar::new(number_of_orders as u64);
    progress.set_style(ProgressStyle::with_template(PROGRESS_TEMPLATE)?.progress_chars("=> "));
    progress.set_message("Aufträge werden aktualisiert");

    Ok(progress)
}
