// Constants module - centralized default values and wire tokens
//
// Tokens in this module are part of the proxy's URL grammar. Changing any
// of them breaks interoperability with the remote Thumbor server.

// =============================================================================
// URL grammar tokens
// =============================================================================

/// Path marker used in place of a signature when no secret is configured
pub const UNSAFE_MARKER: &str = "unsafe";

/// Token requesting image metadata instead of image bytes
pub const META_TOKEN: &str = "meta";

/// Token enabling the trim operation
pub const TRIM_TOKEN: &str = "trim";

/// Token selecting "fit inside bounding box" resize mode
pub const FIT_IN_TOKEN: &str = "fit-in";

/// Token enabling content-aware cropping
pub const SMART_TOKEN: &str = "smart";

/// Prefix of the filters block
pub const FILTERS_PREFIX: &str = "filters:";

/// Separator between filter invocations inside the filters block
pub const FILTER_SEPARATOR: &str = ":";

/// Separator between arguments of one filter invocation
pub const FILTER_ARG_SEPARATOR: char = ',';

/// Separator between path tokens
pub const PATH_SEPARATOR: &str = "/";

// =============================================================================
// Builder defaults
// =============================================================================

/// File extensions the proxy is known to handle
pub const DEFAULT_FILETYPES: [&str; 5] = ["webp", "jpeg", "jpg", "gif", "png"];

/// Name of the component that unknown dynamic calls are resolved against
pub const COMMAND_TARGET: &str = "CommandSet";
