//! The `/add` endpoint.

use std::sync::Arc;

use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use axum::routing::get;
use axum::{Json, Router};

use super::service_registry::DiscoveryClient;
use crate::error::ServiceError;
use crate::utils::LogSink;

pub const ADD_ROUTE: &str = "/add";

/// Operands bound from the `/add` query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddParams {
    pub a: i32,
    pub b: i32,
}

impl AddParams {
    pub fn from_query(query: Option<&str>) -> Result<Self, ServiceError> {
        let mut a = None;
        let mut b = None;

        for (key, value) in url::form_urlencoded::parse(query.unwrap_or("").as_bytes()) {
            let (name, slot) = match &*key {
                "a" => ("a", &mut a),
                "b" => ("b", &mut b),
                _ => continue,
            };
            if slot.is_some() {
                return Err(ServiceError::InvalidParameter {
                    name,
                    value: value.into_owned(),
                });
            }
            *slot = Some(value.into_owned());
        }

        Ok(AddParams {
            a: parse_operand("a", a)?,
            b: parse_operand("b", b)?,
        })
    }
}

impl<S> FromRequestParts<S> for AddParams
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl core::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let params = AddParams::from_query(parts.uri.query());
        async move { params }
    }
}

fn parse_operand(name: &'static str, raw: Option<String>) -> Result<i32, ServiceError> {
    let raw = raw
        .filter(|v| !v.trim().is_empty())
        .ok_or(ServiceError::MissingParameter(name))?;
    parse_integer(raw.trim()).ok_or(ServiceError::InvalidParameter { name, value: raw })
}

/// Decimal with optional sign, or hex with a `0x`, `0X` or `#` prefix after the sign.
fn parse_integer(text: &str) -> Option<i32> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .or_else(|| unsigned.strip_prefix('#'))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    i32::try_from(if negative { -magnitude } else { magnitude }).ok()
}

pub struct AddService {
    discovery: Arc<dyn DiscoveryClient>,
    logger: Arc<dyn LogSink>,
}

impl AddService {
    pub fn new(discovery: Arc<dyn DiscoveryClient>, logger: Arc<dyn LogSink>) -> Self {
        AddService { discovery, logger }
    }

    pub fn add(&self, a: i32, b: i32) -> Result<i32, ServiceError> {
        let r = a.checked_add(b).ok_or(ServiceError::Overflow { a, b })?;
        let registration = self.discovery.local_registration()?;
        self.logger.info(&format!(
            "{}, host:{}, service_id:{}, result:{}",
            ADD_ROUTE, registration.host, registration.service_id, r
        ));
        Ok(r)
    }

    /// Adds the bound operands, logging a warning for any rejected request.
    pub fn handle(
        &self,
        params: Result<AddParams, ServiceError>,
    ) -> Result<Json<i32>, ServiceError> {
        params
            .and_then(|params| self.add(params.a, params.b))
            .map(Json)
            .inspect_err(|e| self.logger.warning(&format!("{} rejected: {}", ADD_ROUTE, e)))
    }

    /// Route table for this service: `GET /add` (HEAD is answered too).
    pub fn router(self: Arc<Self>) -> Router {
        Router::new().route(ADD_ROUTE, get(add_handler)).with_state(self)
    }
}

async fn add_handler(
    State(service): State<Arc<AddService>>,
    params: Result<AddParams, ServiceError>,
) -> Result<Json<i32>, ServiceError> {
    service.handle(params)
}
