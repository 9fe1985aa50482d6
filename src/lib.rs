//! Detect and request the macOS "Full Disk Access" (FDA) privacy permission.
//!
//! Three operations: [`is_granted`] probes whether the permission is currently
//! held, [`open_system_settings`] jumps to the relevant System Settings pane,
//! and [`prompt_if_not_granted`] shows a blocking dialog guiding the user
//! there, with an optional one-time "do not ask again" opt-out
//! ([`reset_prompt_suppression`] clears it).
//!
//! ```no_run
//! use full_disk_access::PromptConfig;
//!
//! if !full_disk_access::is_granted() {
//!     full_disk_access::prompt_if_not_granted(
//!         PromptConfig::new(
//!             "MyApp needs Full Disk Access",
//!             "Grant Full Disk Access in System Settings so MyApp can index your files.",
//!         )
//!         .suppressible(true),
//!     );
//! }
//! ```
//!
//! On non-macOS targets everything compiles and degrades: the permission
//! reports granted and the prompt never shows.

// The injectable core is compiled on every platform; only macOS wires it to
// the live OS facilities.
#![cfg_attr(not(target_os = "macos"), allow(dead_code))]

mod icon;
mod os_release;
mod probe;
mod prompt;
mod settings_pane;
mod suppression;

pub use icon::PromptIcon;
pub use prompt::PromptConfig;

use settings_pane::{SettingsOpener, SystemOpener};
use suppression::{PreferenceStore, SuppressionStore};

/// Reports whether the current process holds Full Disk Access.
///
/// Recomputed on every call by listing an OS-version-specific directory that
/// is only readable with the permission granted; any failure reads as not
/// granted. Sandboxed processes (detected via `APP_SANDBOX_CONTAINER_ID`)
/// always report `false` without touching the disk.
///
/// On Monterey and newer the probe itself makes macOS add the calling app to
/// the Full Disk Access list in System Settings, unchecked. That is an OS
/// side effect of asking, not something this crate controls.
pub fn is_granted() -> bool {
    probe::granted_on_this_system()
}

/// Opens System Settings at Privacy & Security → Full Disk Access.
///
/// Fire-and-forget: a failed launch is logged at `warn` and otherwise ignored.
pub fn open_system_settings() {
    SystemOpener.open_settings();
}

/// Clears the "do not ask again" choice so suppressible prompts show again.
pub fn reset_prompt_suppression() {
    PreferenceStore.set_suppressed(false);
}

/// Shows a blocking dialog asking the user to enable Full Disk Access, unless
/// the prompt is suppressed, the process is sandboxed, or the permission is
/// already granted. The settings button opens System Settings; any other
/// dismissal does nothing further.
pub fn prompt_if_not_granted(config: PromptConfig) {
    dispatch_prompt(&config, None);
}

/// Like [`prompt_if_not_granted`], additionally invoking `on_skip` when the
/// user dismisses the dialog without opening System Settings. The callback
/// does not fire when the prompt is skipped silently.
pub fn prompt_if_not_granted_or_skip(config: PromptConfig, on_skip: impl FnOnce()) {
    dispatch_prompt(&config, Some(Box::new(on_skip)));
}

fn dispatch_prompt(config: &PromptConfig, on_skip: Option<Box<dyn FnOnce() + '_>>) {
    #[cfg(target_os = "macos")]
    {
        let granted = || probe::granted_on_this_system();
        let env = prompt::PromptEnv {
            sandboxed: probe::is_sandboxed(),
            granted: &granted,
            store: &PreferenceStore,
            dialogs: &prompt::ModalAlert,
            settings: &SystemOpener,
        };
        prompt::run_prompt(config, &env, on_skip);
    }
    #[cfg(not(target_os = "macos"))]
    {
        let _ = (config, on_skip);
    }
}
