//! Scan orchestration: rewrite the source, run every declaration scanner,
//! append the results to an [`Intel`].

pub mod enums;
pub mod function;
pub mod macros;

use crate::model::Intel;
use crate::options::ScanOptions;
use crate::source::Source;

/// Scan one source text.
pub fn scan(text: &str, options: &ScanOptions) -> Intel {
    scan_accumulate(text, options, Intel::default())
}

/// Scan one source text, appending to `intel`.
pub fn scan_accumulate(text: &str, options: &ScanOptions, mut intel: Intel) -> Intel {
    let source = Source::new(text, options.scan_comments);
    intel.append(scan_source(&source));
    intel
}

/// Run the declaration scanners over already rewritten source.
pub fn scan_source(source: &Source) -> Intel {
    let intel = Intel {
        functions: function::scan_functions(source),
        macros: macros::scan_macros(source),
        enums: enums::scan_enums(source),
    };
    tracing::trace!(
        lines = source.lines().line_count(),
        functions = intel.functions.len(),
        macros = intel.macros.len(),
        enums = intel.enums.len(),
        "scanned source"
    );
    intel
}
