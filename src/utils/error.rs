use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("Missing input: {field} is required")]
    MissingInput { field: String },

    #[error("Invalid input for {field}: '{value}' ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidation { field: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PayrollError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PayrollError::MissingInput { .. } | PayrollError::InvalidInput { .. } => {
                ErrorCategory::Input
            }
            PayrollError::InvalidConfigValue { .. } | PayrollError::ConfigValidation { .. } => {
                ErrorCategory::Configuration
            }
            PayrollError::Io(_) | PayrollError::Serialization(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Input errors never abort a form session.
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PayrollError::MissingInput { field } => {
                format!("Please enter the {}.", field.replace('_', " "))
            }
            PayrollError::InvalidInput { field, .. } => format!(
                "Please enter a valid {} greater than zero.",
                field.replace('_', " ")
            ),
            PayrollError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            PayrollError::ConfigValidation { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            PayrollError::Io(e) => format!("Could not read or write a file: {}", e),
            PayrollError::Serialization(e) => format!("Could not render the result: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PayrollError::MissingInput { .. } => "Fill in the field and calculate again",
            PayrollError::InvalidInput { .. } => {
                "Use digits with an optional decimal point, e.g. 20000 or 18500.50"
            }
            PayrollError::InvalidConfigValue { .. } | PayrollError::ConfigValidation { .. } => {
                "Check the TOML configuration file or remove it to use the built-in table"
            }
            PayrollError::Io(_) => "Check that the file exists and is readable",
            PayrollError::Serialization(_) => "Try the text output format instead",
        }
    }

    /// Process exit code used by the binary.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PayrollError>;
