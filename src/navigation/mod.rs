use log::info;

/// Capability to send the user to a resolved download link.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, url: &str) -> std::io::Result<()>;
}

/// Opens links in the system's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate_to(&self, url: &str) -> std::io::Result<()> {
        info!("Opening download link in browser");
        webbrowser::open(url)
    }
}
