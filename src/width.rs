//! Width classification: byte width + signedness → D alias name.
//!
//! Only the four standard widths have aliases. Anything else is reported
//! through [`Classifier`], which keeps going so one run surfaces every
//! offending type.

use std::fmt;
use std::io::Write;

use tracing::{trace, warn};

use crate::error::{GenError, Result};

/// Alias written in place of a type whose width has no mapping.
pub const PLACEHOLDER: &str = "???";

/// Whether a platform type is declared signed or unsigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signedness {
    Signed,
    Unsigned,
}

impl Signedness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signedness::Signed => "signed",
            Signedness::Unsigned => "unsigned",
        }
    }

    fn table(&self) -> &'static [(usize, &'static str)] {
        match self {
            Signedness::Signed => &SIGNED_ALIASES,
            Signedness::Unsigned => &UNSIGNED_ALIASES,
        }
    }
}

impl fmt::Display for Signedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const UNSIGNED_ALIASES: [(usize, &str); 4] =
    [(1, "ubyte"), (2, "ushort"), (4, "uint"), (8, "ulong")];

const SIGNED_ALIASES: [(usize, &str); 4] = [(1, "byte"), (2, "short"), (4, "int"), (8, "long")];

/// Look up the alias of exactly `width` bytes.
pub fn alias_for(width: usize, signedness: Signedness) -> Result<&'static str> {
    signedness
        .table()
        .iter()
        .find(|(w, _)| *w == width)
        .map(|(_, name)| *name)
        .ok_or_else(|| GenError::unsupported_width(width, signedness))
}

/// Classification context that accumulates unsupported-width errors.
///
/// Each miss writes one `Error: ...` line to `diagnostics`, bumps the count
/// and yields [`PLACEHOLDER`].
pub struct Classifier<W: Write> {
    diagnostics: W,
    errors: u32,
}

impl<W: Write> Classifier<W> {
    pub fn new(diagnostics: W) -> Self {
        Self {
            diagnostics,
            errors: 0,
        }
    }

    /// Classify one width. Only a failed diagnostic write is an `Err`.
    pub fn classify(&mut self, width: usize, signedness: Signedness) -> Result<&'static str> {
        match alias_for(width, signedness) {
            Ok(name) => {
                trace!(width, %signedness, name, "classified width");
                Ok(name)
            }
            Err(err) => {
                warn!(width, %signedness, "no alias for platform type width");
                writeln!(self.diagnostics, "Error: {err}")?;
                self.errors += 1;
                Ok(PLACEHOLDER)
            }
        }
    }

    pub fn unsigned(&mut self, width: usize) -> Result<&'static str> {
        self.classify(width, Signedness::Unsigned)
    }

    pub fn signed(&mut self, width: usize) -> Result<&'static str> {
        self.classify(width, Signedness::Signed)
    }

    /// Number of unsupported widths seen so far.
    pub fn error_count(&self) -> u32 {
        self.errors
    }

    pub fn into_inner(self) -> W {
        self.diagnostics
    }
}
