/// Limits applied while reading declaration text
///
/// Declarations are small in practice; these bounds only stop a malformed or
/// hostile input from producing an unbounded table.
#[derive(Debug, Clone)]
pub struct ResourceLimits {
    /// Maximum size of one declaration source in bytes
    pub max_source_bytes: usize,

    /// Maximum members in a single enumeration
    pub max_members: usize,

    /// Maximum length of an enumeration or member name
    pub max_name_length: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_source_bytes: 1024 * 1024, // 1 MiB
            max_members: 4096,
            max_name_length: 255,
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }
}
