use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::entities::{OrderNumber, ShopId};

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("network error on requesting order {order} of shop {shop}")]
    Network {
        shop: ShopId,
        order: OrderNumber,
        #[source]
        source: anyhow::Error,
    },
    #[error("malformed status response for order {order} of shop {shop}: {reason}")]
    MalformedResponse {
        shop: ShopId,
        order: OrderNumber,
        reason: String,
    },
    #[error("order store {path} is corrupt: {reason}")]
    CorruptStore { path: PathBuf, reason: String },
    #[error("i/o error on accessing order store {path}")]
    StoreIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("order {order} of shop {shop} is already tracked under the name {name}")]
    DuplicateOrder {
        shop: ShopId,
        order: OrderNumber,
        name: String,
    },
    #[error("an order with the name {0} is already tracked")]
    DuplicateName(String),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
