//! Parsing the definition table.

use std::collections::BTreeMap;

use jq_ir::Query;
use tracing::trace;

use crate::GenError;

/// Parse every definition, keyed by name.
///
/// Stops at the first source that fails to parse or the first repeated
/// name.
#[tracing::instrument(level = "debug", skip_all, fields(definitions = table.len()))]
pub fn load<'a>(table: &[(&'a str, &str)]) -> Result<BTreeMap<&'a str, Query>, GenError> {
    let mut parsed = BTreeMap::new();
    for &(name, source) in table {
        if parsed.contains_key(name) {
            return Err(GenError::DuplicateDefinition {
                name: name.to_string(),
            });
        }
        let query = jq_parse::parse(source).map_err(|source| GenError::Parse {
            name: name.to_string(),
            source,
        })?;
        trace!(name, defs = query.func_defs.len(), "parsed definition");
        parsed.insert(name, query);
    }
    Ok(parsed)
}
