use tracing::info;

/// Performs the "open the apply URL in a new navigation context" side effect.
/// Fire-and-forget: nothing is read back.
pub trait ApplyLauncher: Send + Sync {
    fn open(&self, url: &str);
}

/// Hands the URL to the connected front end, which opens it in a new tab.
/// The URL travels back in the swipe response, so all that is left here is the log line.
pub struct ClientLauncher;

impl ApplyLauncher for ClientLauncher {
    fn open(&self, url: &str) {
        info!("Opening application page: {url}");
    }
}
