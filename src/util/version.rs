pub const APP_NAME: &str = "House Price Predictor";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version label shown in the shell footer.
pub fn version_label() -> String {
    format!("v{APP_VERSION}")
}
