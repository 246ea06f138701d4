//! Core domain types for syscallfn

use std::fmt;
use std::str::FromStr;

/// Kernel syscall-naming convention for the current CPU architecture.
///
/// 64-bit x86 kernels export architecture-qualified entry points
/// (`__x64_sys_openat`); everything else is treated as the legacy 32-bit
/// style. The mapping is deliberately binary: unrecognized machines
/// (including arm64 hosts) collapse into [`ArchTag::Ia32`]. That is a known
/// limitation, not an oversight — expanding the mapping changes which
/// symbols resolve on those hosts.
///
/// A tag is computed once at startup and passed by value into every
/// resolver call, so resolvers can be exercised with synthetic tags
/// without touching process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchTag {
    /// 64-bit x86: entry points qualified as `__x64_sys_*`.
    X64,
    /// Legacy fallback: bare `sys_*` entry points.
    Ia32,
}

impl ArchTag {
    /// The tag text embedded in architecture-qualified symbol names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ArchTag::X64 => "x64",
            ArchTag::Ia32 => "ia32",
        }
    }

    /// Classify a machine hardware name (the `machine` field of `uname(2)`)
    /// into a tag.
    #[must_use]
    pub fn from_machine(machine: &str) -> Self {
        match machine {
            "x86_64" => ArchTag::X64,
            _ => ArchTag::Ia32,
        }
    }
}

impl fmt::Display for ArchTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x64" => Ok(ArchTag::X64),
            "ia32" => Ok(ArchTag::Ia32),
            other => Err(format!("unknown architecture tag '{other}' (expected 'x64' or 'ia32')")),
        }
    }
}
