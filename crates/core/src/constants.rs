/// Prefix of files staged in the spool directory
pub const SPOOL_FILE_PREFIX: &str = "snapfolio-";

/// Spool directory name used by the default service setup, created under
/// the system temp directory
pub const DEFAULT_SPOOL_DIR_NAME: &str = "snapfolio-spool";
