//! Streaming emitter for the generated D module.
//!
//! ## Output layout
//!
//! ```text
//! /**
//! File generated from C source to define types in D
//! */
//! module mar.linux.cthunk;
//!
//! alias mode_t = uint;
//! ...                                  (11 typedef aliases)
//! alias time_t = long;
//!
//! // important to make sure the size of the struct matches to prevent
//! // buffer overflows of stat buffers allocated on the stack
//! enum sizeofStructStat = 144;
//! struct kernel
//! {
//!     alias unsigned_int = uint;
//!     alias unsigned_long = ulong;
//! }
//! ```
//!
//! Lines are written as they are produced. Unsupported widths do not stop
//! emission; the returned count says how many there were.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::platform::PlatformLayout;
use crate::width::Classifier;

/// Shape of the generated module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitOptions {
    /// Name in the `module` declaration.
    pub module_name: String,
    /// Name of the struct grouping the C integer aliases.
    pub group_name: String,
    /// Pad alias names so the `=` signs line up within each block.
    pub align: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            module_name: "mar.linux.cthunk".to_string(),
            group_name: "kernel".to_string(),
            align: false,
        }
    }
}

/// Writes the module to `out`, reporting unsupported widths to `diagnostics`.
pub struct Emitter<O: Write, D: Write> {
    out: O,
    classifier: Classifier<D>,
    options: EmitOptions,
}

impl<O: Write, D: Write> Emitter<O, D> {
    pub fn new(out: O, diagnostics: D) -> Self {
        Self::with_options(out, diagnostics, EmitOptions::default())
    }

    pub fn with_options(out: O, diagnostics: D, options: EmitOptions) -> Self {
        Self {
            out,
            classifier: Classifier::new(diagnostics),
            options,
        }
    }

    /// Emit the whole module for `layout` and return the number of
    /// unsupported widths encountered.
    pub fn emit(&mut self, layout: &PlatformLayout) -> Result<u32> {
        writeln!(self.out, "/**")?;
        writeln!(self.out, "File generated from C source to define types in D")?;
        writeln!(self.out, "*/")?;
        writeln!(self.out, "module {};", self.options.module_name)?;
        writeln!(self.out)?;

        let pad = self.pad(layout.types.iter().map(|t| t.name));
        for ty in &layout.types {
            let alias = self.classifier.classify(ty.width, ty.signedness)?;
            debug!(name = ty.name, width = ty.width, alias, "emitting alias");
            writeln!(self.out, "alias {:<pad$} = {};", ty.name, alias)?;
        }

        writeln!(self.out)?;
        writeln!(
            self.out,
            "// important to make sure the size of the struct matches to prevent"
        )?;
        writeln!(
            self.out,
            "// buffer overflows of stat buffers allocated on the stack"
        )?;
        writeln!(self.out, "enum sizeofStructStat = {};", layout.stat_size)?;

        writeln!(self.out, "struct {}", self.options.group_name)?;
        writeln!(self.out, "{{")?;
        let nested = [
            ("unsigned_int", layout.unsigned_int),
            ("unsigned_long", layout.unsigned_long),
        ];
        let pad = self.pad(nested.iter().map(|(name, _)| *name));
        for (name, width) in nested {
            let alias = self.classifier.unsigned(width)?;
            writeln!(self.out, "    alias {:<pad$} = {};", name, alias)?;
        }
        writeln!(self.out, "}}")?;
        self.out.flush()?;

        let errors = self.classifier.error_count();
        debug!(errors, "module emitted");
        Ok(errors)
    }

    pub fn error_count(&self) -> u32 {
        self.classifier.error_count()
    }

    /// Give back the output and diagnostic writers.
    pub fn into_parts(self) -> (O, D) {
        (self.out, self.classifier.into_inner())
    }

    fn pad<'a>(&self, names: impl Iterator<Item = &'a str>) -> usize {
        if self.options.align {
            names.map(str::len).max().unwrap_or(0)
        } else {
            0
        }
    }
}

/// Emit the host's module to stdout, diagnostics to stderr.
pub fn emit_host() -> Result<u32> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    Emitter::new(stdout.lock(), stderr.lock()).emit(&PlatformLayout::host())
}

/// Write the host's module to `path`, e.g. from a build script into
/// `OUT_DIR`. Diagnostics still go to stderr.
pub fn generate_to_file(path: impl AsRef<Path>, options: EmitOptions) -> Result<u32> {
    let path = path.as_ref();
    let file = BufWriter::new(File::create(path)?);
    let errors = Emitter::with_options(file, io::stderr(), options).emit(&PlatformLayout::host())?;
    debug!(path = %path.display(), errors, "wrote generated module");
    Ok(errors)
}
