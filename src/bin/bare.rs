//! Launches the demo composition on a headless platform and prints the resulting tree.
//!
//! Set `RUST_LOG=bare=debug` to watch views being attached.

use bare::{AsView, BareApp, HeadlessPlatform, Host, LifecycleEvent, Rect};
use std::process::exit;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let host = Host::new(HeadlessPlatform::new(Rect::from_xywh(0., 0., 375., 667.)));
    let mut app = BareApp::new();

    if !host.launch(&mut app) {
        error!("launch failed");
        exit(1);
    }

    if let Some(window) = host.platform().key_window() {
        print!("{}", window.as_view().describe());
    }

    let events = host.events();
    for event in [
        LifecycleEvent::DidBecomeActive,
        LifecycleEvent::WillResignActive,
        LifecycleEvent::DidEnterBackground,
        LifecycleEvent::WillTerminate,
    ] {
        if let Err(err) = events.send(event) {
            error!(%err, "failed to post lifecycle event");
            exit(1);
        }
    }
    host.poll(&mut app);
}
