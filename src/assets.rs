use rust_embed::RustEmbed;

/// Embedded web shell assets (HTML, CSS, JS, manifest)
#[derive(RustEmbed)]
#[folder = "static/"]
#[prefix = "static/"]
pub struct StaticAssets;

impl StaticAssets {
    /// Get a static asset by path
    pub fn get_asset(path: &str) -> Option<rust_embed::EmbeddedFile> {
        Self::get(path)
    }

    /// Get the content type for a given file extension
    pub fn get_content_type(path: &str) -> &'static str {
        match path.split('.').next_back() {
            Some("html") => "text/html; charset=utf-8",
            Some("css") => "text/css; charset=utf-8",
            Some("js") => "application/javascript; charset=utf-8",
            Some("json") => "application/json; charset=utf-8",
            Some("webmanifest") => "application/manifest+json; charset=utf-8",
            Some("png") => "image/png",
            Some("svg") => "image/svg+xml; charset=utf-8",
            Some("ico") => "image/x-icon",
            _ => "application/octet-stream",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_assets_are_embedded() {
        for path in [
            "static/index.html",
            "static/style.css",
            "static/app.js",
            "static/sw.js",
            "static/manifest.webmanifest",
        ] {
            assert!(StaticAssets::get_asset(path).is_some(), "missing {}", path);
        }
    }

    #[test]
    fn test_content_types() {
        assert_eq!(
            StaticAssets::get_content_type("static/index.html"),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            StaticAssets::get_content_type("static/manifest.webmanifest"),
            "application/manifest+json; charset=utf-8"
        );
        assert_eq!(
            StaticAssets::get_content_type("static/unknown.bin"),
            "application/octet-stream"
        );
    }
}
