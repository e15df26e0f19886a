//! OTLP JSON encoding of exported span batches.
//!
//! Each batch becomes one `{"resourceSpans": [...]}` document, the shape the
//! OTLP/HTTP JSON protocol and most trace viewers accept.

use opentelemetry::trace::{SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

pub const SCOPE_NAME: &str = "zunsplash";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtlpDocument {
    resource_spans: Vec<ResourceSpans>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceSpans {
    resource: OtlpResource,
    scope_spans: Vec<ScopeSpans>,
}

#[derive(Debug, Serialize)]
struct OtlpResource {
    attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
struct ScopeSpans {
    scope: Scope,
    spans: Vec<OtlpSpan>,
}

#[derive(Debug, Serialize)]
struct Scope {
    name: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OtlpSpan {
    trace_id: String,
    span_id: String,
    parent_span_id: String,
    name: String,
    kind: u8,
    start_time_unix_nano: String,
    end_time_unix_nano: String,
    attributes: Vec<Attribute>,
    events: Vec<OtlpEvent>,
    links: Vec<OtlpLink>,
    status: OtlpStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OtlpEvent {
    time_unix_nano: String,
    name: String,
    attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OtlpLink {
    trace_id: String,
    span_id: String,
    attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
struct OtlpStatus {
    code: u8,
    message: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Attribute {
    key: String,
    value: AttributeValue,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeValue {
    BoolValue(bool),
    /// OTLP JSON encodes 64-bit integers as strings.
    IntValue(String),
    DoubleValue(f64),
    StringValue(String),
}

pub struct SpanFormatter {
    resource: Resource,
}

impl SpanFormatter {
    pub const fn new(resource: Resource) -> Self {
        Self { resource }
    }

    pub fn format_batch(&self, batch: &[SpanData]) -> OtlpDocument {
        let attributes = self
            .resource
            .iter()
            .map(|(key, value)| attribute(key.to_string(), value))
            .collect();

        OtlpDocument {
            resource_spans: vec![ResourceSpans {
                resource: OtlpResource { attributes },
                scope_spans: vec![ScopeSpans {
                    scope: Scope { name: SCOPE_NAME },
                    spans: batch.iter().map(format_span).collect(),
                }],
            }],
        }
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter").finish_non_exhaustive()
    }
}

fn format_span(span: &SpanData) -> OtlpSpan {
    let (code, message) = status_code(&span.status);

    OtlpSpan {
        trace_id: format!("{:032x}", span.span_context.trace_id()),
        span_id: format!("{:016x}", span.span_context.span_id()),
        parent_span_id: if span.parent_span_id == SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", span.parent_span_id)
        },
        name: span.name.to_string(),
        kind: span_kind(&span.span_kind),
        start_time_unix_nano: unix_nanos(span.start_time),
        end_time_unix_nano: unix_nanos(span.end_time),
        attributes: attributes(&span.attributes),
        events: span
            .events
            .iter()
            .map(|event| OtlpEvent {
                time_unix_nano: unix_nanos(event.timestamp),
                name: event.name.to_string(),
                attributes: attributes(&event.attributes),
            })
            .collect(),
        links: span
            .links
            .iter()
            .map(|link| OtlpLink {
                trace_id: format!("{:032x}", link.span_context.trace_id()),
                span_id: format!("{:016x}", link.span_context.span_id()),
                attributes: attributes(&link.attributes),
            })
            .collect(),
        status: OtlpStatus { code, message },
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos().to_string()
}

const fn span_kind(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn status_code(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

fn attributes(values: &[KeyValue]) -> Vec<Attribute> {
    values.iter().map(|kv| attribute(kv.key.to_string(), &kv.value)).collect()
}

fn attribute(key: String, value: &Value) -> Attribute {
    let value = match value {
        Value::Bool(b) => AttributeValue::BoolValue(*b),
        Value::I64(i) => AttributeValue::IntValue(i.to_string()),
        Value::F64(f) => AttributeValue::DoubleValue(*f),
        Value::String(s) => AttributeValue::StringValue(s.to_string()),
        Value::Array(_) => AttributeValue::StringValue(value.to_string()),
    };
    Attribute { key, value }
}
