//! Clipboard seam for the "Copy Code" action on project code samples.

use std::sync::Mutex;

use crate::models::project::Project;
use crate::notify::Notification;

pub const COPIED_MESSAGE: &str = "Code copied to clipboard!";

/// Receives text to place on the user's clipboard. Failures are not reported.
pub trait Clipboard {
    fn write_text(&self, text: &str);
}

/// Holds the last copied text. The HTTP layer returns its contents to the
/// browser, which performs the actual copy.
#[derive(Debug, Default)]
pub struct CapturedClipboard {
    text: Mutex<Option<String>>,
}

impl CapturedClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Option<String> {
        self.text.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl Clipboard for CapturedClipboard {
    fn write_text(&self, text: &str) {
        if let Ok(mut slot) = self.text.lock() {
            *slot = Some(text.to_string());
        }
    }
}

/// Copies the project's code sample. Projects without one copy nothing.
pub fn copy_code_sample(clipboard: &dyn Clipboard, project: &Project) -> Option<Notification> {
    let snippet = project.code_snippet.as_deref()?;
    clipboard.write_text(snippet);
    Some(Notification::success(COPIED_MESSAGE))
}
