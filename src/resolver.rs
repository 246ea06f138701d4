//! Syscall entry-point resolution.
//!
//! Resolution is a two-stage whole-word search over the symbol-table text,
//! ordered, first success wins:
//!
//! 1. architecture-qualified: `__<tag>_sys_<name>` (kernels 4.17+ on
//!    64-bit x86)
//! 2. legacy: `sys_<name>` (older kernels)
//!
//! Both stages tolerate the historical `SyS_`/`Sys_` capitalizations (the
//! two `s` characters only) and are word-bounded, so resolving `open`
//! never matches `__x64_sys_openat`. When the table contains duplicate
//! entries the first occurrence in table order is returned; no attempt is
//! made to disambiguate by address or symbol type.

use log::debug;
use regex::Regex;

use crate::domain::{ArchTag, ResolveError};
use crate::kallsyms;

/// Resolve the kernel entry-point symbol for `name` against the live
/// kernel's symbol table.
///
/// Convenience wrapper around [`resolve_in`] that reads
/// [`kallsyms::KALLSYMS_PATH`] on every call.
///
/// # Errors
/// - [`ResolveError::SymbolTableUnreadable`] if the table cannot be read.
/// - Any error [`resolve_in`] returns.
pub fn resolve(name: &str, arch: ArchTag) -> Result<String, ResolveError> {
    let syms = kallsyms::read()?;
    resolve_in(name, &syms, arch)
}

/// Resolve the kernel entry-point symbol for `name` in the supplied
/// symbol-table text.
///
/// Pure function of its inputs: no I/O, no shared state, safe to call
/// concurrently. The syscall name is embedded literally (metacharacters
/// are escaped), so only exact tokens match.
///
/// # Errors
/// - [`ResolveError::SymbolNotFound`] if neither the qualified nor the
///   legacy entry point appears as a whole word.
/// - [`ResolveError::BadPattern`] if the search pattern cannot be
///   compiled (pathologically long names).
pub fn resolve_in(name: &str, kallsyms_text: &str, arch: ArchTag) -> Result<String, ResolveError> {
    let escaped = regex::escape(name);

    // Newer kernels qualify the entry point with the architecture tag,
    // e.g. "__x64_sys_open".
    let qualified = word_pattern(name, &format!("__{}_[Ss]y[sS]_{escaped}", arch.as_str()))?;
    if let Some(m) = qualified.find(kallsyms_text) {
        return Ok(m.as_str().to_owned());
    }

    // Older kernels export "sys_open" or "SyS_open"; either works, they
    // share an address.
    let legacy = word_pattern(name, &format!("[Ss]y[sS]_{escaped}"))?;
    match legacy.find(kallsyms_text) {
        Some(m) => {
            debug!("syscall '{name}' resolved via legacy entry point {}", m.as_str());
            Ok(m.as_str().to_owned())
        }
        None => Err(ResolveError::SymbolNotFound(name.to_owned())),
    }
}

/// Compile `body` as a word-bounded pattern.
fn word_pattern(name: &str, body: &str) -> Result<Regex, ResolveError> {
    Regex::new(&format!(r"\b{body}\b")).map_err(|source| ResolveError::BadPattern {
        name: name.to_owned(),
        source,
    })
}
