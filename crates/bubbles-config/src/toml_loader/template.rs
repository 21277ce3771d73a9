//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Bubbles Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[container]
# width = 800.0              # 1-10000
# height = 800.0             # 1-10000

[bubble]
# size = 100.0               # 1-1000

[engine]
# max_iterations = 15        # 1-100, collision passes per update
# max_placement_attempts = 100   # 1-10000, tries to find a free slot

[interaction]
# click_threshold_ms = 150   # 0-2000

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
