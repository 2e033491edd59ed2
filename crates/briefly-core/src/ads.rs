//! Ad-provider seam.
//!
//! The coordinator never assumes ads exist: readiness is learned only from
//! [`AdEvent::Loaded`], and any provider failure degrades to the no-ad
//! unlock path. SDK internals stay entirely behind this interface.

/// Lifecycle events the host forwards from the ad SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdEvent {
    /// An interstitial finished loading and can be shown.
    Loaded,
    /// The interstitial was dismissed by the user.
    Closed,
}

/// The two calls the coordinator makes into the ad SDK.
pub trait AdProvider: Send + 'static {
    /// Begin loading an interstitial. Failures surface as the absence of a
    /// later [`AdEvent::Loaded`], never as an error.
    fn request(&mut self);

    /// Show the loaded interstitial. Returns false if nothing could be
    /// shown, in which case the unlock degrades to a direct reveal.
    fn show(&mut self) -> bool;
}

/// Null provider: never loads, never shows. The unlock path works without
/// ads by design, so this is also the CLI's provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAds;

impl AdProvider for NoAds {
    fn request(&mut self) {}

    fn show(&mut self) -> bool {
        false
    }
}
