use std::sync::OnceLock;

use rust_embed::RustEmbed;

/// Embed the `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

/// Contents of `assets/main.css`.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

/// Inline data URI for the favicon, so the webview needs no file URL.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| {
            let svg = load_text("favicon.svg");
            let encoded = svg.replace('#', "%23").replace(['\n', '\r'], " ");
            format!("data:image/svg+xml,{encoded}")
        })
        .as_str()
}

fn load_text(path: &str) -> String {
    let asset = EmbeddedAssets::get(path)
        .map(|file| file.data)
        .unwrap_or_else(|| panic!("missing embedded asset: {path}"));
    String::from_utf8(asset.into_owned())
        .unwrap_or_else(|_| panic!("embedded asset {path} is not valid UTF-8"))
}
