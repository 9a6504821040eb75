//! Shared constants.

/// Name of the conventional root target whose dependencies are the top-level targets.
pub const DOCUMENT_ROOT: &str = "DOCUMENT";

/// Document file name used when none is given.
pub const DEFAULT_DOCUMENT_FILENAME: &str = "targets.yml";
