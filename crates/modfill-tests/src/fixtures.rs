//! Canned CurseForge payloads and pack documents for E2E tests
//!
//! Response bodies follow the `{ data, pagination }` envelope the real API
//! returns, so mockito servers can serve them unchanged.

use serde_json::{Value, json};

/// Manifest template with an empty files list
pub fn manifest_template() -> Value {
    json!({
        "minecraft": {
            "version": "1.21.1",
            "modLoaders": [{"id": "neoforge-21.1.77", "primary": true}]
        },
        "manifestType": "minecraftModpack",
        "manifestVersion": 1,
        "name": "E2E Pack",
        "version": "1.0.0",
        "author": "modfill",
        "files": [],
        "overrides": "overrides"
    })
}

/// Mod list document for the given names
pub fn mod_list(names: &[&str]) -> Value {
    Value::Array(names.iter().map(|name| json!({"name": name})).collect())
}

/// Search hit as returned by `/v1/mods/search`
pub fn project_json(id: u32, name: &str, downloads: u64) -> Value {
    json!({
        "id": id,
        "gameId": 432,
        "name": name,
        "slug": name.to_lowercase().replace(' ', "-"),
        "downloadCount": downloads
    })
}

/// File entry as returned by `/v1/mods/{id}/files`
pub fn file_json(id: u32, file_name: &str, versions: &[&str], date: &str, downloads: u64) -> Value {
    json!({
        "id": id,
        "gameId": 432,
        "isAvailable": true,
        "displayName": file_name,
        "fileName": file_name,
        "fileDate": date,
        "downloadCount": downloads,
        "gameVersions": versions
    })
}

/// Wrap items in a single complete page
pub fn page_body(items: Vec<Value>) -> String {
    let count = items.len();
    json!({
        "data": items,
        "pagination": {
            "index": 0,
            "pageSize": count.max(1),
            "resultCount": count,
            "totalCount": count
        }
    })
    .to_string()
}
