use serde::Serialize;

use crate::{
    error::{DocsError, Result},
    index::ObjectGroupIndex,
};

/// Pretty-printed JSON view of the grouped members, for inspecting what the
/// stub emitter will see.
pub fn render_json(groups: &ObjectGroupIndex) -> Result<String> {
    let payload = JsonPayload {
        version: env!("CARGO_PKG_VERSION"),
        objects: groups,
    };

    serde_json::to_string_pretty(&payload).map_err(|error| DocsError::Serialize {
        what: "object groups",
        error,
    })
}

#[derive(Serialize)]
struct JsonPayload<'a> {
    version: &'static str,
    objects: &'a ObjectGroupIndex,
}
