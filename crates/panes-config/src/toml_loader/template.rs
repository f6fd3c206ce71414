//! Default config file contents.

/// Generate the default TOML config content with comments.
pub(super) fn default_config_toml() -> String {
    r##"# Panes Configuration
# Only override what you want to change -- missing fields use defaults.

[keys]
# Each action takes a list of keys; any of them triggers it.
# Modifiers: ctrl, alt (option), shift, super (cmd, win, meta).
left = ["ctrl+h"]
right = ["ctrl+l"]
down = ["ctrl+j"]
up = ["ctrl+k"]
quit = ["ctrl+c"]

[styles]
# active_border = "rounded"     # normal | rounded | thick | double | hidden
# active_border_color = "#cba6f7"
# inactive_padding = 1          # 0-4
# horizontal_join = "top"       # top | center | bottom
# vertical_join = "left"        # left | center | right

[logging]
# level = "info"                # trace | debug | info | warn | error
# file = "/tmp/panes.log"
"##
    .to_string()
}
