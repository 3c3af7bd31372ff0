pub mod api;
pub mod photoprintit_status_api;

pub use crate::api::OrderStatusApi;
pub use crate::photoprintit_status_api::{PhotoprintitStatusApi, StatusApiSettings};
