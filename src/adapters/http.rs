//! axum 路由與錯誤轉換。
//!
//! - `GET /romannumeral?query=N`       回傳純文字羅馬數字
//! - `GET /romannumeral?min=A&max=B`   回傳 `{"conversions": [...]}`
//! - `GET /health`                     存活檢查

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::converter::RomanConverter;
use crate::core::validator::{
    parse_bound, validate_and_parse_text, validate_range, validate_range_size,
};
use crate::domain::model::{ConversionResponse, MAX_VALUE};
use crate::domain::ports::NumeralConverter;
use crate::utils::error::RomanError;

pub const MISSING_PARAMETERS_MESSAGE: &str =
    "Either 'query' or both 'min' and 'max' parameters must be provided.";

#[derive(Clone)]
pub struct AppState {
    pub converter: Arc<dyn NumeralConverter>,
    pub max_range_size: usize,
}

impl AppState {
    pub fn new(converter: Arc<dyn NumeralConverter>, max_range_size: usize) -> Self {
        Self {
            converter,
            max_range_size,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(RomanConverter::new()), MAX_VALUE as usize)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RomanQuery {
    pub query: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<RomanError> for ApiErrorResponse {
    fn from(error: RomanError) -> Self {
        match error {
            RomanError::InvalidInput { message } => Self {
                status: StatusCode::BAD_REQUEST,
                error: ApiError {
                    code: "INVALID_INPUT".to_string(),
                    message,
                },
            },
            // 非輸入錯誤不對外揭露細節
            other => {
                tracing::error!("❌ Internal error while handling request: {}", other);
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError {
                        code: "INTERNAL_ERROR".to_string(),
                        message: "An internal error occurred".to_string(),
                    },
                }
            }
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/romannumeral", get(roman_numeral_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "roman-numeral",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

impl RomanQuery {
    /// 空白的區間參數視同未提供
    fn normalized(self) -> Self {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Self {
            query: self.query,
            min: present(self.min),
            max: present(self.max),
        }
    }
}

/// `query` 優先；否則需同時提供 `min` 與 `max`。
pub async fn roman_numeral_handler(
    State(state): State<AppState>,
    params: std::result::Result<Query<RomanQuery>, QueryRejection>,
) -> Result<Response, ApiErrorResponse> {
    let params = match params {
        Ok(Query(params)) => params.normalized(),
        Err(rejection) => {
            let message = format!("Invalid query parameters: {}", rejection.body_text());
            tracing::error!("❌ {}", message);
            return Err(RomanError::invalid_input(message).into());
        }
    };

    match params {
        RomanQuery {
            query: Some(query), ..
        } => convert_single(&state, &query)
            .map(IntoResponse::into_response)
            .map_err(|e| {
                tracing::error!("❌ Invalid input for query parameter '{}': {}", query, e);
                ApiErrorResponse::from(e)
            }),
        RomanQuery {
            min: Some(min),
            max: Some(max),
            ..
        } => convert_range(&state, &min, &max)
            .map(|response| Json(response).into_response())
            .map_err(|e| {
                tracing::error!("❌ Invalid range parameters min:{} max:{}: {}", min, max, e);
                ApiErrorResponse::from(e)
            }),
        _ => {
            tracing::error!("❌ Invalid input: {}", MISSING_PARAMETERS_MESSAGE);
            Err(RomanError::invalid_input(MISSING_PARAMETERS_MESSAGE).into())
        }
    }
}

fn convert_single(state: &AppState, query: &str) -> crate::Result<String> {
    let number = validate_and_parse_text(query)?;
    let numeral = state.converter.convert(number);
    tracing::info!("Converted number {} to Roman numeral {}", number, numeral);
    Ok(numeral)
}

fn convert_range(state: &AppState, min: &str, max: &str) -> crate::Result<ConversionResponse> {
    let min = parse_bound("min", min)?;
    let max = parse_bound("max", max)?;
    validate_range(min, max)?;
    validate_range_size(min, max, state.max_range_size)?;

    // 已通過 validate_range，兩端皆在 1..=3999
    let response = ConversionResponse::from(state.converter.convert_range(min as u32, max as u32));
    tracing::info!(
        "Converted range min:{} max:{} into {} Roman numerals",
        min,
        max,
        response.conversions.len()
    );
    tracing::debug!("Range conversion result: {:?}", response);
    Ok(response)
}
