//! Span exporter writing OTLP JSON lines to a rotating file.
//!
//! The plugin sandbox has no network access, so each exported batch becomes one
//! OTLP `resourceSpans` document appended to the trace file.

use super::file_writer::FileWriter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status, TraceError};
use opentelemetry::{Key, KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as Json};
use std::time::{SystemTime, UNIX_EPOCH};

/// Exports every batch as a single OTLP JSON line.
#[derive(Debug)]
pub struct FileSpanExporter {
    writer: FileWriter,
    scope: &'static str,
    /// Resource attributes, rendered once when the provider hands them over.
    resource: Json,
    stopped: bool,
}

impl FileSpanExporter {
    pub fn new(writer: FileWriter, scope: &'static str) -> Self {
        Self {
            writer,
            scope,
            resource: json!([]),
            stopped: false,
        }
    }

    fn document(&self, batch: &[SpanData]) -> Json {
        json!({
            "resourceSpans": [{
                "resource": { "attributes": self.resource },
                "scopeSpans": [{
                    "scope": { "name": self.scope },
                    "spans": batch.iter().map(span_json).collect::<Vec<_>>(),
                }],
            }],
        })
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.stopped {
            Err(TraceError::from("exporter is shut down"))
        } else {
            self.writer
                .write_line(&self.document(&batch).to_string())
                .map_err(|e| TraceError::from(e.to_string()))
        };

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = attributes(resource.iter());
    }
}

fn span_json(span: &SpanData) -> Json {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": kind_code(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": key_values(&span.attributes),
        "events": span.events.iter().map(event_json).collect::<Vec<_>>(),
        "links": span.links.iter().map(link_json).collect::<Vec<_>>(),
        "status": status_json(&span.status),
    })
}

fn event_json(event: &Event) -> Json {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": key_values(&event.attributes),
    })
}

fn link_json(link: &Link) -> Json {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": key_values(&link.attributes),
    })
}

/// OTLP span kind: internal 1, server 2, client 3, producer 4, consumer 5.
const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn status_json(status: &Status) -> Json {
    match status {
        Status::Unset => json!({ "code": 0 }),
        Status::Ok => json!({ "code": 1 }),
        Status::Error { description } => json!({ "code": 2, "message": description }),
    }
}

fn key_values(pairs: &[KeyValue]) -> Json {
    attributes(pairs.iter().map(|kv| (&kv.key, &kv.value)))
}

fn attributes<'a>(pairs: impl Iterator<Item = (&'a Key, &'a Value)>) -> Json {
    pairs
        .map(|(key, value)| json!({ "key": key.as_str(), "value": attribute_value(value) }))
        .collect()
}

/// OTLP `AnyValue`. Integers are strings; arrays fall back to their display form.
fn attribute_value(value: &Value) -> Json {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        other => json!({ "stringValue": other.to_string() }),
    }
}

/// Nanoseconds since the Unix epoch, as the decimal string OTLP expects.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;
    use std::fs;

    fn exporter(dir: &tempfile::TempDir) -> FileSpanExporter {
        let mut exporter = FileSpanExporter::new(FileWriter::new(dir.path().join("trace.json")), "Zoutline");
        exporter.set_resource(&Resource::new(vec![KeyValue::new("service.name", "Zoutline")]));
        exporter
    }

    fn temp_dir() -> tempfile::TempDir {
        match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(e) => panic!("tempdir: {e}"),
        }
    }

    #[test]
    fn document_carries_resource_and_scope() {
        let dir = temp_dir();
        let json = exporter(&dir).document(&[]);

        let group = &json["resourceSpans"][0];
        assert_eq!(group["scopeSpans"][0]["scope"]["name"], "Zoutline");
        assert_eq!(group["scopeSpans"][0]["spans"], json!([]));
        let attrs = group["resource"]["attributes"].as_array().cloned().unwrap_or_default();
        assert!(attrs
            .iter()
            .any(|a| a["key"] == "service.name" && a["value"]["stringValue"] == "Zoutline"));
    }

    #[test]
    fn export_writes_one_line_until_shutdown() {
        let dir = temp_dir();
        let mut exporter = exporter(&dir);

        assert!(matches!(exporter.export(Vec::new()).now_or_never(), Some(Ok(()))));
        exporter.shutdown();
        assert!(matches!(exporter.export(Vec::new()).now_or_never(), Some(Err(_))));

        let contents = fs::read_to_string(dir.path().join("trace.json")).unwrap_or_default();
        assert_eq!(contents.lines().count(), 1);
    }

    #[test]
    fn attribute_values_use_otlp_shapes() {
        assert_eq!(attribute_value(&Value::I64(42)), json!({ "intValue": "42" }));
        assert_eq!(attribute_value(&Value::Bool(true)), json!({ "boolValue": true }));
        assert_eq!(attribute_value(&Value::from("Leaf 1")), json!({ "stringValue": "Leaf 1" }));
    }

    #[test]
    fn status_codes_follow_otlp() {
        assert_eq!(status_json(&Status::Unset), json!({ "code": 0 }));
        assert_eq!(
            status_json(&Status::error("render failed")),
            json!({ "code": 2, "message": "render failed" })
        );
    }

    #[test]
    fn nanos_before_epoch_clamp_to_zero() {
        assert_eq!(unix_nanos(UNIX_EPOCH), "0");
    }
}
