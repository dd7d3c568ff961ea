// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

use serde_json::{Map, Value};

/// Rewrite older settings layouts into the current one.
///
/// `quality.preset` was renamed to `quality.tier_override`; an explicit
/// `"auto"` meant no override.
pub(super) fn migrate_on_load(mut value: Value) -> Value {
    if let Some(quality) = value.get_mut("quality").and_then(Value::as_object_mut) {
        migrate_quality_preset(quality);
    }
    value
}

fn migrate_quality_preset(quality: &mut Map<String, Value>) {
    let Some(preset) = quality.remove("preset") else {
        return;
    };

    if quality.contains_key("tier_override") {
        tracing::debug!("ignoring legacy quality.preset, tier_override is set");
        return;
    }

    match preset {
        Value::String(ref tier) if tier.eq_ignore_ascii_case("auto") => {}
        Value::Null => {}
        preset => {
            tracing::debug!(%preset, "migrating quality.preset to quality.tier_override");
            quality.insert("tier_override".to_string(), preset);
        }
    }
}

/// Deep-merge two JSON values.
/// `base` is existing file content, `overlay` is serialized current struct.
/// Overlay values take priority.
pub(super) fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = if let Some(base_val) = base_map.remove(&key) {
                    deep_merge(base_val, overlay_val)
                } else {
                    overlay_val
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_base, overlay) => overlay,
    }
}
