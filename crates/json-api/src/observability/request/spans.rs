//! HTTP span helpers.

/// Route label used for span names and metrics.
#[derive(Debug, Clone)]
pub(super) struct RequestRoute {
    pub(super) route: String,
    pub(super) span_name: String,
}

pub(super) fn request_route(method: &str, path: &str) -> RequestRoute {
    let route = normalise_path(path);
    let span_name = format!("{method} {route}");

    RequestRoute { route, span_name }
}

/// Collapse numeric path segments into `{id}` to keep label cardinality bounded.
fn normalise_path(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}
