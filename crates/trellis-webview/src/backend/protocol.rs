use std::borrow::Cow;
use std::sync::Arc;

use tracing::warn;
use wry::http::Response;
use wry::WebViewBuilder;

use crate::content::{request_path, ContentProvider, PROTOCOL};

pub(super) fn attach_custom_protocol<'a>(
    builder: WebViewBuilder<'a>,
    provider: Arc<ContentProvider>,
) -> WebViewBuilder<'a> {
    builder.with_custom_protocol(PROTOCOL.to_string(), move |_webview_id, request| {
        let uri = request.uri().to_string();
        // WebView2 rewrites `trellis://host/path` to `http://trellis.host/path`.
        let path = request_path(&uri)
            .or_else(|| uri.strip_prefix("http://trellis.").map(str::to_string))
            .unwrap_or_default();

        let response = match provider.resolve(path) {
            Some((mime, data)) => Response::builder()
                .status(200)
                .header("Content-Type", mime.as_ref())
                .body(Cow::Owned(data.into_owned())),
            None => {
                warn!(path = %path, "custom protocol: asset not found");
                Response::builder()
                    .status(404)
                    .body(Cow::Borrowed(&b"Not Found"[..]))
            }
        };
        response.unwrap_or_else(|_| Response::new(Cow::Borrowed(&b""[..])))
    })
}
