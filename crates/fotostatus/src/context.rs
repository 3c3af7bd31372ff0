use std::io::Write;
use std::time::Duration;

use order_store::OrderStorage;
use status_api::OrderStatusApi;

/// Everything a command needs, handed over explicitly instead of globals.
pub struct AppContext<S, A, W>
where
    S: OrderStorage,
    A: OrderStatusApi,
    W: Write,
{
    pub storage: S,
    pub status_api: A,
    pub out: W,
    /// Pause between two requests to the vendor.
    pub request_delay: Duration,
    pub show_progress: bool,
}
