/// String constants shared by discovery, completion, and configuration.
///
/// Patterns are kept as raw strings here and compiled once in the modules
/// that use them.
/// Source discovery patterns
pub mod discovery {
    /// Component source files, relative to a workspace root
    pub const COMPONENT_GLOB: &str = "app/components/**/*_component.rb";
    /// Class declaration whose superclass chain mentions `Component`
    pub const NAME_PATTERN: &str = r"class (.*?) < .*Component.*";
    /// First initializer parameter list in a source unit
    pub const ARGS_PATTERN: &str = r"def initialize\(([^)]+)\)?";
}

/// Completion trigger and presentation constants
pub mod completion {
    /// Active line text up to the cursor that opens the component list
    pub const TRIGGER_PATTERN: &str = r" render (?:[a-zA-Z:]+)?$";
    /// Character that re-triggers completion in the host editor
    pub const TRIGGER_CHARACTER: char = ' ';
    /// Sort key that pins components above other suggestions
    pub const SORT_TEXT: &str = "0000";
    /// Editable default for keyword parameters without a default value
    pub const FALLBACK_PLACEHOLDER: &str = "value";
}

/// Template language identifiers the trigger is registered for
pub mod languages {
    pub const ERB: &str = "erb";
    pub const HAML: &str = "haml";
    pub const SLIM: &str = "slim";

    pub const ALL: [&str; 3] = [ERB, HAML, SLIM];
}

/// Configuration file names and environment overrides
pub mod config_files {
    pub const APP_DIR: &str = "render-complete";
    pub const CONFIG_TOML: &str = "config.toml";
    pub const CONFIG_DIR_ENV: &str = "RENDER_COMPLETE_CONFIG_DIR";
}
