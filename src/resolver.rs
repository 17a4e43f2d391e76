//! Script specifier resolution through the import map.
//!
//! Resolution fails open: whenever the import map cannot (or does not need
//! to) rewrite the specifier, the argument is left exactly as typed.

use crate::config::LoadedImportMap;
use crate::invocation::Invocation;
use slog::debug;
use url::Url;

/// Resolve `specifier` through the import map.
///
/// Returns `None` when the original token should be kept: the resolver
/// rejected it, or it is a path or absolute URL the import map leaves where
/// plain URL resolution would put it.
#[must_use]
pub fn resolve_specifier(loaded: &LoadedImportMap, specifier: &str) -> Option<String> {
    let log = slog_scope::logger();

    let resolved = match loaded.import_map.resolve(specifier, &loaded.base_url) {
        Ok(url) => url,
        Err(e) => {
            debug!(log, "Keeping unresolved specifier"; "specifier" => specifier, "error" => %e);
            return None;
        }
    };

    if is_address_like(specifier)
        && loaded.base_url.join(specifier).ok().as_ref() == Some(&resolved)
    {
        debug!(log, "Specifier is not remapped"; "specifier" => specifier);
        return None;
    }

    debug!(log, "Resolved specifier"; "specifier" => specifier, "resolved" => %resolved);
    Some(resolved.into())
}

/// Substitute the script specifier of `invocation` in place.
///
/// Returns whether the argument was rewritten.
pub fn resolve_script(loaded: &LoadedImportMap, invocation: &mut Invocation) -> bool {
    let Some(index) = invocation.script_index() else {
        return false;
    };

    match resolve_specifier(loaded, &invocation.forwarded[index]) {
        Some(resolved) => {
            invocation.forwarded[index] = resolved;
            true
        }
        None => false,
    }
}

/// Whether the specifier is a relative path or an absolute URL rather than a
/// bare specifier.
fn is_address_like(specifier: &str) -> bool {
    specifier.starts_with('/')
        || specifier.starts_with("./")
        || specifier.starts_with("../")
        || Url::parse(specifier).is_ok()
}
