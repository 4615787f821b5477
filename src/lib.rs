//! pawn-scanner: declaration intel for Pawn sources.
//!
//! Extracts functions, `#define` macros and enumerations from Pawn source
//! text without tokenizing it. Comments are stripped and line
//! continuations collapsed first, and every declaration keeps the line it
//! started on in the original text.
//!
//! ```
//! use pawn_scanner::{scan, ScanOptions};
//!
//! let intel = scan("native Float:floatsqroot(Float:value);", &ScanOptions::default());
//! assert_eq!(intel.functions[0].name, "floatsqroot");
//! ```

pub mod error;
pub mod grammar;
pub mod lines;
pub mod model;
pub mod options;
pub mod render;
pub mod scanner;
pub mod source;
pub mod walk;

pub use error::{Result, ScanError};
pub use model::{
    Address, Argument, Dimension, EnumInfo, FunctionInfo, FunctionKind, Intel, MacroInfo, Tag,
};
pub use options::{ScanOptions, WalkOptions};
pub use scanner::{scan, scan_accumulate};
pub use walk::{scan_dir, scan_dir_into, scan_file, scan_file_into, source_files};
