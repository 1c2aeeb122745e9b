use tracing::Level;

/// Configuration for statement building.
///
/// Defaults: identifiers are checked, statements are logged at `DEBUG` and
/// truncated to 200 bytes in the log.
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Parse table, column and procedure names as identifiers before use.
    pub check_identifiers: bool,
    /// Whether built statements are emitted as `tracing` events.
    pub logging_enabled: bool,
    /// Tracing event level for built statements.
    pub log_level: Level,
    /// Truncate logged SQL (in bytes). `None` means no truncation.
    pub max_log_sql_length: Option<usize>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            check_identifiers: true,
            logging_enabled: true,
            log_level: Level::DEBUG,
            max_log_sql_length: Some(200),
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable identifier checks.
    ///
    /// With checks disabled, names are interpolated verbatim and only empty
    /// names are rejected.
    pub fn with_identifier_checks(mut self, enabled: bool) -> Self {
        self.check_identifiers = enabled;
        self
    }

    /// Override the tracing event level.
    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    /// Set maximum SQL length to log.
    pub fn with_max_log_sql_length(mut self, len: usize) -> Self {
        self.max_log_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in logs.
    pub fn no_truncate(mut self) -> Self {
        self.max_log_sql_length = None;
        self
    }

    /// Disable statement logging.
    pub fn disable_logging(mut self) -> Self {
        self.logging_enabled = false;
        self
    }
}
