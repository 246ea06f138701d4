//! # syscallfn - Kernel Syscall Symbol Resolution
//!
//! Resolves the kernel-internal symbol name of a syscall at runtime so that
//! instrumentation code (e.g. a kprobe attach call) hooks the correct kernel
//! function on whatever kernel it happens to run on. Syscall entry-point
//! names drifted across kernel versions and CPU architectures:
//!
//! ```text
//! kernel / arch                  entry point for open(2)
//! ─────────────────────────────  ───────────────────────
//! pre-4.17, any arch             sys_open (sometimes SyS_open)
//! 4.17+, x86_64                  __x64_sys_open
//! ```
//!
//! A probe compiled against one convention silently fails to attach on the
//! other, so the name must be resolved against the live kernel's symbol
//! table at load time rather than hard-coded at compile time.
//!
//! ## Module Structure
//!
//! - [`arch`]: one-shot host architecture detection via `uname(2)`
//! - [`kallsyms`]: symbol-table acquisition from `/proc/kallsyms`
//! - [`resolver`]: the two-stage whole-word search itself
//! - [`domain`]: the architecture tag and structured errors
//! - [`cli`]: command-line argument parsing
//!
//! ## Typical Usage
//!
//! ```no_run
//! use syscallfn::{arch, resolver};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tag = arch::detect()?;
//! let symbol = resolver::resolve("execve", tag)?;
//! // hand `symbol` to the probe-attach call as an opaque string
//! # Ok(())
//! # }
//! ```
//!
//! Resolution is read-only and side-effect free; nothing here validates
//! that the resolved function is actually attachable.

// Expose modules for testing
pub mod arch;
pub mod cli;
pub mod domain;
pub mod kallsyms;
pub mod resolver;
