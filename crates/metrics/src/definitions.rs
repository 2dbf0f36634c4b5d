//! Metric name and label definitions.
//!
//! All metric names recorded by courier crates live here so the exported set
//! is documented in one place.

/// Tool result sanitization metrics
pub mod tool_results {
    /// Tool results passed through the sanitizer with a `content` array
    pub const SANITIZED_TOTAL: &str = "courier_tool_results_sanitized_total";
    /// Text content items cut down to the configured limit
    pub const TRUNCATED_TOTAL: &str = "courier_tool_results_truncated_total";
    /// Image content items whose encoded payload was dropped
    pub const IMAGES_OMITTED_TOTAL: &str = "courier_tool_result_images_omitted_total";
    /// Tool results classified as errors or timeouts
    pub const ERRORS_TOTAL: &str = "courier_tool_result_errors_total";
}

/// Messaging send-intent metrics
pub mod messaging {
    /// Tool calls recognized as message sends
    pub const SENDS_EXTRACTED_TOTAL: &str = "courier_messaging_sends_extracted_total";
    /// Plugin `extract_tool_send` calls that returned an error
    pub const PLUGIN_FAULTS_TOTAL: &str = "courier_messaging_plugin_faults_total";
}

/// Channel registry metrics
pub mod channels {
    /// Number of registered channel plugins
    pub const REGISTERED: &str = "courier_channels_registered";
}

/// Common label keys
pub mod labels {
    pub const PROVIDER: &str = "provider";
    pub const TOOL: &str = "tool";
}
