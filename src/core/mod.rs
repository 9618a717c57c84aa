pub mod converter;
pub mod server;
pub mod validator;

pub use crate::domain::model::{ConversionPair, ConversionResponse, ConversionResult};
pub use crate::domain::ports::{ConfigProvider, NumeralConverter};
pub use crate::utils::error::Result;
