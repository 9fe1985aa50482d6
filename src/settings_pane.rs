/// Deep link into System Settings → Privacy & Security → Full Disk Access.
pub(crate) const PRIVACY_PANE_URL: &str =
    "x-apple.systempreferences:com.apple.preference.security?Privacy_AllFiles";

pub(crate) trait SettingsOpener {
    fn open_settings(&self);
}

/// Production opener. Fire-and-forget: a failed launch is logged and dropped.
pub(crate) struct SystemOpener;

impl SettingsOpener for SystemOpener {
    fn open_settings(&self) {
        if let Err(e) = imp::open_privacy_pane() {
            log::warn!("failed to open Full Disk Access settings: {e}");
        }
    }
}

#[cfg(target_os = "macos")]
mod imp {
    use super::PRIVACY_PANE_URL;
    use std::process::Command;

    pub(super) fn open_privacy_pane() -> Result<(), String> {
        let status = Command::new("open")
            .arg(PRIVACY_PANE_URL)
            .status()
            .map_err(|e| format!("failed to run `open`: {e}"))?;

        if status.success() {
            Ok(())
        } else {
            Err(format!("`open` exited with status: {status}"))
        }
    }
}

#[cfg(not(target_os = "macos"))]
mod imp {
    pub(super) fn open_privacy_pane() -> Result<(), String> {
        Ok(())
    }
}
