//! Configuration options for CSV to JSON conversion

/// Conversion configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Print each record to the echo sink as it is read
    pub echo: bool,
    /// Spaces per indentation level in the output file (0-8)
    pub output_indent: u8,
    /// Spaces per indentation level in echo blocks (0-8)
    pub echo_indent: u8,
    /// Largest input file accepted, in bytes
    pub max_input_bytes: usize,
    /// Re-read the produced JSON and check it against the parsed rows
    pub validate_output: bool,
    /// Create missing parent directories of the output path
    pub create_parent_dirs: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            echo: false,
            output_indent: 4,
            echo_indent: 2,
            max_input_bytes: 100 * 1024 * 1024, // 100MB
            validate_output: true,
            create_parent_dirs: true,
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration used by the dataset drivers
    pub fn for_datasets() -> Self {
        Self {
            echo: true,
            ..Default::default()
        }
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn with_output_indent(mut self, size: u8) -> Result<Self, String> {
        if size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }
        self.output_indent = size;
        Ok(self)
    }

    pub fn with_echo_indent(mut self, size: u8) -> Result<Self, String> {
        if size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }
        self.echo_indent = size;
        Ok(self)
    }

    pub fn with_max_input_bytes(mut self, limit_bytes: usize) -> Self {
        self.max_input_bytes = limit_bytes;
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate_output = validate;
        self
    }

    pub fn with_create_parent_dirs(mut self, create: bool) -> Self {
        self.create_parent_dirs = create;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.output_indent > 8 || self.echo_indent > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }

        if self.max_input_bytes < 1024 {
            return Err("Input size limit must be at least 1KB".to_string());
        }

        Ok(())
    }
}
