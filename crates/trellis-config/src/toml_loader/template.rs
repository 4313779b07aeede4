//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Trellis Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layout]
# gutter = 1               # 0-32 px between adjacent panes
# resize_step = 0.05       # 0.01-0.5

[browser]
# home_url = "https://duckduckgo.com"
# search_url = "https://duckduckgo.com/?q={query}"
# user_agent = "..."
# devtools = false

[hints]
# alphabet = "asdghjkl"    # must not contain the toggle_hints key

[session]
# persist_debounce_ms = 1000
# search_debounce_ms = 450
# max_workspaces = 9       # 1-9
# max_live_workspaces = 3  # hidden workspaces kept alive
# restore = true

[window]
# width = 1280
# height = 800
# title = "Trellis"

[logging]
# level = "info"           # trace, debug, info, warn, error

[keybinds]
# Cmd is Super on macOS and Ctrl elsewhere.
# split_left = "Cmd+Shift+Left"
# focus_left = "Cmd+Alt+Left"
# resize_left = "Cmd+Alt+Shift+Left"
# close_pane = "Cmd+W"
# focus_next = "Ctrl+Tab"
# focus_prev = "Ctrl+Shift+Tab"
# toggle_overlay = "Cmd+L"
# overlay_commit = "Enter"
# overlay_cancel = "Escape"
# toggle_hints = "F"
# reload = "Cmd+R"
# hard_reload = "Cmd+Shift+R"
# back = "Cmd+["
# forward = "Cmd+]"
# scroll_down = "J"
# scroll_up = "K"
# new_workspace = "Cmd+Shift+N"
# close_workspace = "Cmd+Shift+W"
# switch_workspace = ["Cmd+1", "Cmd+2", "Cmd+3", "Cmd+4", "Cmd+5", "Cmd+6", "Cmd+7", "Cmd+8", "Cmd+9"]
# quit = "Cmd+Q"
"##
}
