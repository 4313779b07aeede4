//! Diagnostic page shown in place of a document that failed to load.

/// Error code reported when a load is superseded by a newer navigation.
pub const ABORTED: i32 = -3;

pub fn is_aborted(code: i32) -> bool {
    code == ABORTED
}

/// Render the page for a failed load of `url`.
pub fn render(code: i32, description: &str, url: &str) -> String {
    let url = escape(url);
    let description = escape(description);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Failed to load</title>
<style>
body {{ font-family: system-ui, sans-serif; margin: 15vh auto; max-width: 40em; color: #333; }}
code {{ word-break: break-all; }}
</style>
</head>
<body>
<h1>This page could not be loaded</h1>
<p><code>{url}</code></p>
<p>{description} (error {code})</p>
<p><a href="{url}">Try again</a></p>
</body>
</html>"#
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
