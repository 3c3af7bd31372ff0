use chrono::{DateTime, NaiveDateTime};
use rust_decimal::Decimal;

use crate::entities::order::PriceText;

const DISPLAY_TIME_FORMAT: &str = "%d.%m.%Y %H:%M";
const ISO_LOCAL_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub const PRICE_DECIMAL_PLACES: u32 = 2;
pub const CURRENCY_SIGN: &str = "€";

fn parse_vendor_time(time_str: &str) -> Option<NaiveDateTime> {
    if let Ok(time) = DateTime::parse_from_rfc3339(time_str) {
        return Some(time.naive_local());
    }

    ISO_LOCAL_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(time_str, format).ok())
}

/// Renders a vendor timestamp for humans, keeping unknown formats untouched.
pub fn format_last_update(time_str: &str) -> String {
    match parse_vendor_time(time_str) {
        Some(time) => time.format(DISPLAY_TIME_FORMAT).to_string(),
        None => time_str.to_string(),
    }
}

/// Formats like the vendor's own price text, with a decimal comma.
pub fn format_price(price: Decimal) -> PriceText {
    let amount = format!("{:.2}", price.round_dp(PRICE_DECIMAL_PLACES));

    format!("{} {}", amount.replace('.', ","), CURRENCY_SIGN)
}
