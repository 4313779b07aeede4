//! IPC protocol between Rust and the pages hosted in surfaces.
//!
//! Messages flow in both directions as `{kind, payload}` JSON:
//! - **JS -> Rust**: pages call `window.trellis.ipc.send(kind, payload)`,
//!   which reaches the surface's IPC handler.
//! - **Rust -> JS**: [`OutboundMessage`]s are delivered by evaluating a
//!   call to `window.trellis.ipc._dispatch(kind, payload)`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use trellis_common::{BiscuitState, PaneState, SearchState, WorkspaceInfo};

/// A raw IPC message from a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Commands pages send to the session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum OverlayCommand {
    SearchInput {
        query: String,
    },
    SearchSubmit {
        query: String,
    },
    SearchBlur,
    SwitchWorkspace {
        id: String,
    },
    /// Whether the focused element accepts text.
    SetTyping {
        typing: bool,
    },
    /// A key press observed by the page before delivery.
    Key {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        alt: bool,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        meta: bool,
    },
    /// The page received focus.
    Focus,
    /// The overlay asked to be dismissed.
    CloseOverlay,
}

impl OverlayCommand {
    pub fn parse(raw: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(raw).ok()?;
        // Unit variants arrive with `payload: null` or no payload at all.
        let normalized = match value {
            Value::Object(mut map) => {
                if map.get("payload").is_some_and(Value::is_null) {
                    map.remove("payload");
                }
                Value::Object(map)
            }
            other => other,
        };
        serde_json::from_value(normalized).ok()
    }
}

/// Messages the session delivers to pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum OutboundMessage {
    Panes(Vec<PaneState>),
    /// Sent to the surface that just gained focus.
    #[serde(rename_all = "camelCase")]
    Focus { url_in_sync: bool },
    Search(SearchState),
    Workspaces(Vec<WorkspaceInfo>),
    Hints(BiscuitState),
    /// Find hintable elements and report their count.
    CollectHints,
    ShowHints { labels: Vec<String> },
    ActivateHint { index: usize },
    ClearHints,
    ScrollBy { dy: f64 },
    /// Key chords the page should stop from reaching the document.
    Keymap { reserved: Vec<String> },
    /// Swallow every plain key while hint mode is active.
    CaptureKeys { active: bool },
}

impl OutboundMessage {
    pub fn kind(&self) -> String {
        self.to_value()
            .get("kind")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string()
    }

    fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Script that hands this message to the page's IPC bridge.
    pub fn to_script(&self) -> String {
        let value = self.to_value();
        let kind = value.get("kind").and_then(Value::as_str).unwrap_or("unknown");
        let payload = value.get("payload").cloned().unwrap_or(Value::Null);
        js_dispatch_message(kind, &payload)
    }
}

/// Token identifying a key chord on both sides of the bridge: the modifier
/// bitmask (Ctrl=1, Alt=2, Shift=4, Super=8) and the normalized key name.
pub fn reserved_token(mods: u8, key: &str) -> String {
    format!("{mods}:{key}")
}

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.trellis && window.trellis.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

/// JavaScript that sets up the IPC bridge, key forwarding, typing detection,
/// metadata extraction and link hints. Injected into every surface.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    if (window.trellis) { return; }
    var t = window.trellis = { reserved: {}, capture: false, hintTargets: [], hintBadges: [] };

    t.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({ kind: kind, payload: payload === undefined ? null : payload }));
        },
        _handlers: {},
        on: function(kind, callback) { this._handlers[kind] = callback; },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) { handler(payload); }
        }
    };

    function editable(el) {
        if (!el) { return false; }
        if (el.isContentEditable) { return true; }
        var tag = (el.tagName || '').toLowerCase();
        if (tag === 'textarea' || tag === 'select') { return true; }
        if (tag !== 'input') { return false; }
        var type = (el.type || 'text').toLowerCase();
        return ['button', 'checkbox', 'radio', 'submit', 'reset', 'file', 'image', 'range', 'color'].indexOf(type) < 0;
    }

    var KEY_NAMES = { ' ': 'Space', ArrowLeft: 'Left', ArrowRight: 'Right', ArrowUp: 'Up', ArrowDown: 'Down', Esc: 'Escape' };
    function keyName(key) {
        if (KEY_NAMES[key]) { return KEY_NAMES[key]; }
        return key.length === 1 ? key.toUpperCase() : key;
    }

    document.addEventListener('keydown', function(e) {
        if (['Control', 'Alt', 'Shift', 'Meta'].indexOf(e.key) >= 0) { return; }
        var mods = (e.ctrlKey ? 1 : 0) | (e.altKey ? 2 : 0) | (e.shiftKey ? 4 : 0) | (e.metaKey ? 8 : 0);
        var plain = (mods & ~4) === 0;
        var token = mods + ':' + keyName(e.key);
        var typing = editable(document.activeElement);
        if ((t.capture && plain) || (t.reserved[token] && (!plain || !typing))) {
            e.preventDefault();
            e.stopPropagation();
        }
        t.ipc.send('key', { key: e.key, ctrl: e.ctrlKey, alt: e.altKey, shift: e.shiftKey, meta: e.metaKey });
    }, true);

    function reportTyping() { t.ipc.send('set_typing', { typing: editable(document.activeElement) }); }
    document.addEventListener('focusin', reportTyping, true);
    document.addEventListener('focusout', function() { setTimeout(reportTyping, 0); }, true);
    window.addEventListener('focus', function() { t.ipc.send('focus'); });

    t.ipc.on('keymap', function(p) {
        t.reserved = {};
        (p.reserved || []).forEach(function(token) { t.reserved[token] = true; });
    });
    t.ipc.on('capture_keys', function(p) { t.capture = !!p.active; });
    t.ipc.on('scroll_by', function(p) { window.scrollBy({ top: p.dy, behavior: 'smooth' }); });

    t.extractMetadata = function() {
        function meta(sel) { var el = document.querySelector(sel); return el ? el.getAttribute('content') : null; }
        var icon = document.querySelector('link[rel~="icon"]');
        var body = document.body ? getComputedStyle(document.body) : null;
        t.ipc.send('metadata', {
            url: location.href,
            title: document.title || null,
            favicon: icon ? icon.href : null,
            description: meta('meta[name="description"]') || meta('meta[property="og:description"]'),
            backgroundColor: meta('meta[name="theme-color"]') || (body ? body.backgroundColor : null),
            textColor: body ? body.color : null,
            image: meta('meta[property="og:image"]')
        });
    };
    document.addEventListener('DOMContentLoaded', function() { t.extractMetadata(); });

    function clearHints() {
        t.hintBadges.forEach(function(b) { b.remove(); });
        t.hintBadges = [];
    }
    t.ipc.on('collect_hints', function() {
        clearHints();
        var sel = 'a[href], button, input, textarea, select, [role="button"], [onclick], [tabindex]';
        t.hintTargets = Array.prototype.filter.call(document.querySelectorAll(sel), function(el) {
            var r = el.getBoundingClientRect();
            return r.width > 0 && r.height > 0 && r.bottom > 0 && r.right > 0 &&
                r.top < window.innerHeight && r.left < window.innerWidth;
        });
        t.ipc.send('hint_targets', { count: t.hintTargets.length });
    });
    t.ipc.on('show_hints', function(p) {
        clearHints();
        (p.labels || []).forEach(function(label, i) {
            var el = t.hintTargets[i];
            if (!el || !label) { return; }
            var r = el.getBoundingClientRect();
            var badge = document.createElement('div');
            badge.textContent = label;
            badge.style.cssText = 'position:fixed;z-index:2147483647;padding:1px 4px;font:bold 11px monospace;' +
                'background:#ffd84d;color:#222;border:1px solid #a88a00;border-radius:3px;' +
                'left:' + Math.max(0, r.left) + 'px;top:' + Math.max(0, r.top) + 'px;';
            document.documentElement.appendChild(badge);
            t.hintBadges.push(badge);
        });
    });
    t.ipc.on('activate_hint', function(p) {
        var el = t.hintTargets[p.index];
        clearHints();
        if (!el) { return; }
        el.focus();
        if (!editable(el)) { el.click(); }
    });
    t.ipc.on('clear_hints', clearHints);
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_common::PaneId;

    #[test]
    fn parses_search_commands() {
        assert_eq!(
            OverlayCommand::parse(r#"{"kind":"search_input","payload":{"query":"exa"}}"#),
            Some(OverlayCommand::SearchInput {
                query: "exa".into()
            })
        );
        assert_eq!(
            OverlayCommand::parse(r#"{"kind":"search_blur","payload":null}"#),
            Some(OverlayCommand::SearchBlur)
        );
        assert_eq!(
            OverlayCommand::parse(r#"{"kind":"focus"}"#),
            Some(OverlayCommand::Focus)
        );
    }

    #[test]
    fn parses_key_with_missing_flags() {
        assert_eq!(
            OverlayCommand::parse(r#"{"kind":"key","payload":{"key":"j","ctrl":false}}"#),
            Some(OverlayCommand::Key {
                key: "j".into(),
                ctrl: false,
                alt: false,
                shift: false,
                meta: false,
            })
        );
    }

    #[test]
    fn rejects_unknown_or_malformed() {
        assert_eq!(OverlayCommand::parse(r#"{"kind":"explode"}"#), None);
        assert_eq!(OverlayCommand::parse("[]"), None);
        assert_eq!(
            OverlayCommand::parse(r#"{"kind":"set_typing","payload":{}}"#),
            None
        );
    }

    #[test]
    fn outbound_script_dispatches_kind_and_payload() {
        let script = OutboundMessage::Focus { url_in_sync: false }.to_script();
        assert_eq!(
            script,
            r#"window.trellis && window.trellis.ipc._dispatch("focus", {"urlInSync":false});"#
        );
        let script = OutboundMessage::ClearHints.to_script();
        assert!(script.contains(r#"_dispatch("clear_hints", null)"#));
    }

    #[test]
    fn outbound_kind_is_snake_case() {
        assert_eq!(OutboundMessage::CollectHints.kind(), "collect_hints");
        assert_eq!(
            OutboundMessage::Search(SearchState {
                pane_id: PaneId(2),
                query: "q".into(),
                is_focused: true,
            })
            .kind(),
            "search"
        );
    }

    #[test]
    fn dispatch_escapes_kind() {
        let script = js_dispatch_message("a\"b", &Value::Null);
        assert!(script.contains(r#""a\"b""#));
    }

    #[test]
    fn reserved_token_format() {
        assert_eq!(reserved_token(9, "W"), "9:W");
    }
}
