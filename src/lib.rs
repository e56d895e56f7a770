//! # cthunk-gen
//!
//! Build-time generator of D type aliases sized to the host's libc types.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! emit      → Streams the generated module, returns the error count
//!   ↓
//! platform  → Measured widths of the libc typedefs
//!   ↓
//! width     → Width + signedness → alias name, error accumulation
//!   ↓
//! error     → GenError
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use cthunk::{Emitter, PlatformLayout};
//!
//! let mut emitter = Emitter::new(std::io::stdout(), std::io::stderr());
//! let errors = emitter.emit(&PlatformLayout::host()).unwrap();
//! std::process::exit(errors as i32);
//! ```

pub mod emit;
pub mod error;
pub mod platform;
pub mod width;

pub use emit::{EmitOptions, Emitter, emit_host, generate_to_file};
pub use error::{GenError, Result};
pub use platform::{PlatformLayout, PlatformType};
pub use width::{Classifier, PLACEHOLDER, Signedness, alias_for};
