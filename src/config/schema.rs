use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "limits": {
                "type": "object",
                "properties": {
                    "max_ports": { "type": "integer", "minimum": 1 },
                    "max_pages": { "type": "integer", "minimum": 1 },
                    "max_alerts": { "type": "integer", "minimum": 1 }
                },
                "additionalProperties": false
            },
            "output": {
                "type": "object",
                "properties": {
                    "directory": { "type": "string" },
                    "format": { "type": "string", "enum": ["markdown", "json"] },
                    "include_graph": { "type": "boolean" },
                    "graph_format": { "type": "string", "enum": ["json", "dot"] }
                },
                "additionalProperties": false
            }
        },
        "additionalProperties": false
    })
});
