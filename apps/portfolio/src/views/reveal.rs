use serde::Serialize;

pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Reveal-on-view settings handed to the page script.
///
/// The browser owns the transition: a region animates in the first time its
/// visible ratio reaches `threshold` and is never hidden again.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevealOnce {
    pub threshold: f32,
}

impl Default for RevealOnce {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}
