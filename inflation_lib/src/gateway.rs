//! Serverless HTTP boundary.
//!
//! Accepts API Gateway proxy-style events, routes them by path, runs the
//! engine and wraps the outcome in a JSON response with CORS headers. Error
//! variants are mapped to status codes here and nowhere else.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::engine::InflationEngine;
use crate::error::{ErrorKind, InflationError};
use crate::types::{AdjustmentRequest, Direction};
use crate::validation;

/// Amount used when the request omits `amount`.
pub const DEFAULT_AMOUNT: &str = "100";

pub const AVAILABLE_ENDPOINTS: &[&str] = &[
    "/inflation/calc?amount=1000&start_date=2020-01-01&end_date=2025-01-01",
    "/inflation/reverse?amount=1000&start_date=2020-01-01&end_date=2025-01-01",
    "/inflation/rate?start_date=2020-01-01&end_date=2025-01-01",
];

const INVALID_PARAMETERS: &str = "Invalid parameter format. Please check your input values.";

/// Incoming request. Query parameter values may be strings or JSON numbers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEvent {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, Value>>,
}

impl GatewayEvent {
    pub fn get(path: &str) -> Self {
        Self {
            http_method: Some("GET".to_string()),
            path: path.to_string(),
            query_string_parameters: None,
        }
    }

    pub fn with_param(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.query_string_parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.to_string(), value.into());
        self
    }

    fn param(&self, name: &str) -> Option<String> {
        match self.query_string_parameters.as_ref()?.get(name)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl GatewayResponse {
    /// Parses the body back into JSON. Convenience for callers and tests.
    pub fn json_body(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Index,
    Calc,
    Reverse,
    Rate,
}

impl Route {
    fn from_path(path: &str) -> Option<Self> {
        match path {
            "/inflation" => Some(Route::Index),
            "/inflation/calc" => Some(Route::Calc),
            "/inflation/reverse" => Some(Route::Reverse),
            "/inflation/rate" => Some(Route::Rate),
            _ => None,
        }
    }
}

/// Handles a raw JSON event, rejecting payloads that are not events.
pub async fn handle_raw(raw: &str, engine: &InflationEngine) -> GatewayResponse {
    match serde_json::from_str::<GatewayEvent>(raw) {
        Ok(event) => handle(&event, engine).await,
        Err(e) => {
            tracing::warn!("Malformed event: {}", e);
            respond(
                400,
                &json!({ "message": "Malformed request event", "error": e.to_string() }),
            )
        }
    }
}

pub async fn handle(event: &GatewayEvent, engine: &InflationEngine) -> GatewayResponse {
    let method = event.http_method.as_deref().unwrap_or("");
    tracing::info!("Request path: {}, method: {}", event.path, method);

    let Some(route) = Route::from_path(&event.path) else {
        return respond(404, &json!({ "message": "Not Found", "path": event.path }));
    };
    if !(method.is_empty() || method.eq_ignore_ascii_case("GET")) {
        return respond(
            405,
            &json!({ "message": "Method Not Allowed", "method": method }),
        );
    }

    match route {
        Route::Index => respond(
            200,
            &json!({
                "message": "Welcome to the inflation API",
                "available_endpoints": AVAILABLE_ENDPOINTS,
            }),
        ),
        Route::Calc => adjustment(event, engine, Direction::Forward).await,
        Route::Reverse => adjustment(event, engine, Direction::Reverse).await,
        Route::Rate => rate(event, engine).await,
    }
}

async fn adjustment(
    event: &GatewayEvent,
    engine: &InflationEngine,
    direction: Direction,
) -> GatewayResponse {
    let request = match parse_request(event, direction) {
        Ok(request) => request,
        Err(e) => return error_response(&e),
    };
    match engine.adjust(&request).await {
        Ok(result) => respond(200, &result),
        Err(e) => error_response(&e),
    }
}

async fn rate(event: &GatewayEvent, engine: &InflationEngine) -> GatewayResponse {
    let (start, end) = match required_dates(event) {
        Ok(dates) => dates,
        Err(e) => return error_response(&e),
    };
    match engine.inflation_rate(&start, &end).await {
        Ok(result) => respond(200, &result),
        Err(e) => error_response(&e),
    }
}

fn parse_request(
    event: &GatewayEvent,
    direction: Direction,
) -> Result<AdjustmentRequest, InflationError> {
    let amount = event
        .param("amount")
        .unwrap_or_else(|| DEFAULT_AMOUNT.to_string());
    let amount = validation::parse_amount(&amount)?;
    let (start, end) = required_dates(event)?;
    Ok(AdjustmentRequest::new(amount, &start, &end, direction))
}

fn required_dates(event: &GatewayEvent) -> Result<(String, String), InflationError> {
    match (event.param("start_date"), event.param("end_date")) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(InflationError::Validation(
            "start_date and end_date are required".to_string(),
        )),
    }
}

/// Status code a boundary layer should answer with for this failure.
pub fn status_for(kind: ErrorKind) -> u16 {
    match kind {
        ErrorKind::Validation => 400,
        ErrorKind::EmptySeries => 404,
        ErrorKind::Provider => 502,
        ErrorKind::InsufficientData | ErrorKind::DivisionByZero | ErrorKind::AmountOutOfRange => {
            500
        }
    }
}

fn error_response(err: &InflationError) -> GatewayResponse {
    let status = status_for(err.kind());
    let message = match err.kind() {
        ErrorKind::Validation => INVALID_PARAMETERS,
        ErrorKind::EmptySeries => "No CPI data found for the given date range",
        ErrorKind::Provider => "CPI data provider request failed",
        _ => "Unable to compute the inflation adjustment",
    };
    if status >= 500 {
        tracing::error!("{}: {}", message, err);
    } else {
        tracing::warn!("{}: {}", message, err);
    }
    let detail = err.detail().unwrap_or_else(|| err.to_string());
    respond(status, &json!({ "message": message, "error": detail }))
}

fn respond<T: Serialize>(status_code: u16, data: &T) -> GatewayResponse {
    let (status_code, body) = match serde_json::to_string(data) {
        Ok(body) => (status_code, body),
        Err(e) => {
            tracing::error!("Failed to serialize response: {}", e);
            (500, r#"{"message":"Internal Server Error"}"#.to_string())
        }
    };
    GatewayResponse {
        status_code,
        headers: default_headers(),
        body,
    }
}

fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
    ])
}
