use console::style;
use firemap_core::FiremapError;
use std::fmt;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for a document that fails validation
pub fn invalid_document(detail: &str) -> CliError {
    CliError::new("Not a usable GeoJSON document")
        .with_context(format!(
            "The document parsed as JSON but is not a GeoJSON object the normalizer accepts.\n\n{}",
            detail
        ))
        .with_suggestion("Make sure the top-level `type` is FeatureCollection, Feature, or a geometry type")
        .with_suggestion("A FeatureCollection needs a `features` array (it may be empty)")
        .with_help("Run: firemap validate <FILE>")
}

/// Create error for a file that is not JSON
pub fn parse_failed(detail: &str) -> CliError {
    CliError::new("File is not valid JSON")
        .with_context(format!("Error: {}", detail))
        .with_suggestion("Check the file for truncation or stray characters")
        .with_help("Run: firemap validate <FILE>")
}

/// Create error for a missing or unreadable file
pub fn file_not_found(detail: &str) -> CliError {
    CliError::new("File not found")
        .with_context(format!("Error: {}", detail))
        .with_suggestion("Check the file path and try again")
        .with_suggestion("Use absolute path or path relative to current directory")
}

/// Create error for invalid configuration
pub fn invalid_config(key: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid configuration: {}", key))
        .with_context(format!("Configuration value is invalid.\n\nReason: {}", reason))
        .with_suggestion("Check firemap.toml for syntax errors")
        .with_suggestion("Boolean settings accept true or false")
        .with_help("Run: firemap config")
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    let message = format!("{:#}", error);

    match error.downcast_ref::<FiremapError>() {
        Some(FiremapError::InvalidDocument { .. }) => invalid_document(&message),
        Some(FiremapError::Parse { .. }) => parse_failed(&message),
        Some(FiremapError::Io(_)) => file_not_found(&message),
        Some(FiremapError::ConfigInvalid { key, reason }) => invalid_config(key, reason),
        _ if message.contains("permission denied") => CliError::new("Permission denied")
            .with_context(format!("Error: {}", message))
            .with_suggestion("Check file permissions"),
        _ => CliError::new(message),
    }
}
