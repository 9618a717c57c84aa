use crate::domain::model::ConversionResult;
use std::net::Ipv6Addr;

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn max_range_size(&self) -> usize;

    fn bind_address(&self) -> String {
        // IPv6 位址需加上中括號
        if self.host().parse::<Ipv6Addr>().is_ok() {
            format!("[{}]:{}", self.host(), self.port())
        } else {
            format!("{}:{}", self.host(), self.port())
        }
    }
}

/// 數字轉羅馬數字。呼叫前必須先通過 `core::validator` 的檢查。
pub trait NumeralConverter: Send + Sync {
    fn convert(&self, number: u32) -> String;
    fn convert_range(&self, min: u32, max: u32) -> ConversionResult;
}
