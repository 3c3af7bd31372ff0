use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use base::entities::{
    ApiConfig, OrderNumber, OrderStatusInfo, ShopId, DEFAULT_API_CONFIG, DEFAULT_API_URL,
};
use base::errors::{TrackerError, TrackerResult};
use base::helpers::format_price;
use base::requests::api::SyncHttpRequest;
use base::requests::entities::HttpRequestData;
use base::requests::http_request;

use crate::OrderStatusApi;

pub type ApiUrl = String;

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum OrderNoJson {
    Number(OrderNumber),
    Text(String),
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct OrderInfoJson {
    summary_state_code: Option<String>,
    summary_date: Option<String>,
    summary_price_text: Option<String>,
    summary_price: Option<Value>,
    order_no: Option<OrderNoJson>,
}

/// Only consulted when the vendor sends no formatted price text.
fn parse_numeric_price(price: &Value) -> Result<Decimal, String> {
    let parsed = match price {
        Value::Number(number) => {
            let text = number.to_string();
            text.parse::<Decimal>()
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        Value::String(text) => text.trim().replace(',', ".").parse::<Decimal>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| format!("summaryPrice {} is not a price", price))
}

impl OrderInfoJson {
    fn into_status_info(self) -> Result<OrderStatusInfo, String> {
        let status = self
            .summary_state_code
            .ok_or("summaryStateCode is missing")?;
        let last_update = self.summary_date.ok_or("summaryDate is missing")?;

        // the text field is already formatted by the vendor, the numeric one is a fallback
        let price = match (self.summary_price_text, self.summary_price) {
            (Some(text), _) => text,
            (None, Some(price)) => format_price(parse_numeric_price(&price)?),
            (None, None) => {
                return Err(String::from(
                    "summaryPriceText and summaryPrice are missing",
                ))
            }
        };

        let order_no = match self.order_no.ok_or("orderNo is missing")? {
            OrderNoJson::Number(number) => number,
            OrderNoJson::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| format!("orderNo {} is not a number", text))?,
        };

        Ok(OrderStatusInfo {
            status,
            last_update,
            price,
            order_no,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusApiSettings {
    pub url: ApiUrl,
    pub config: ApiConfig,
}

impl Default for StatusApiSettings {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_API_URL),
            config: DEFAULT_API_CONFIG,
        }
    }
}

pub struct PhotoprintitStatusApi<R>
where
    R: SyncHttpRequest,
{
    settings: StatusApiSettings,
    request_api: R,
}

impl<R> PhotoprintitStatusApi<R>
where
    R: SyncHttpRequest,
{
    pub fn new(settings: StatusApiSettings, request_api: R) -> Self {
        Self {
            settings,
            request_api,
        }
    }
}

impl<R> OrderStatusApi for PhotoprintitStatusApi<R>
where
    R: SyncHttpRequest,
{
    fn get_order_status(
        &self,
        shop: ShopId,
        order: OrderNumber,
    ) -> TrackerResult<OrderStatusInfo> {
        let req_data = HttpRequestData::new(&self.settings.url)
            .with_query("config", self.settings.config)
            .with_query("shop", shop)
            .with_query("order", order);

        let body = http_request(
            req_data,
            &format!("the status of order {} of shop {}", order, shop),
            &self.request_api,
        )
        .map_err(|source| TrackerError::Network {
            shop,
            order,
            source,
        })?;

        let malformed = |reason: String| {
            log::error!(
                "malformed status response for order {} of shop {}: {}",
                order,
                shop,
                reason
            );

            TrackerError::MalformedResponse {
                shop,
                order,
                reason,
            }
        };

        let order_info: OrderInfoJson =
            serde_json::from_str(&body).map_err(|e| malformed(e.to_string()))?;

        order_info.into_status_info().map_err(malformed)
    }
}
