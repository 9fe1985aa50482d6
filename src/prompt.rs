use crate::icon::PromptIcon;
use crate::settings_pane::SettingsOpener;
use crate::suppression::SuppressionStore;

pub(crate) const DEFAULT_SETTINGS_BUTTON: &str = "Open Settings";
pub(crate) const DEFAULT_SKIP_BUTTON: &str = "Later";
pub(crate) const SUPPRESSION_CHECKBOX_TITLE: &str = "Do not ask again";

/// Configuration for one prompt invocation. Built once, consumed by
/// [`crate::prompt_if_not_granted`]; nothing here is persisted.
pub struct PromptConfig {
    pub(crate) title: String,
    pub(crate) message: String,
    pub(crate) settings_button_title: String,
    pub(crate) skip_button_title: String,
    pub(crate) can_be_suppressed: bool,
    pub(crate) icon: Option<PromptIcon>,
}

impl PromptConfig {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            settings_button_title: DEFAULT_SETTINGS_BUTTON.to_string(),
            skip_button_title: DEFAULT_SKIP_BUTTON.to_string(),
            can_be_suppressed: false,
            icon: None,
        }
    }

    pub fn settings_button_title(mut self, title: impl Into<String>) -> Self {
        self.settings_button_title = title.into();
        self
    }

    pub fn skip_button_title(mut self, title: impl Into<String>) -> Self {
        self.skip_button_title = title.into();
        self
    }

    /// When enabled, the dialog grows a "do not ask again" checkbox and the
    /// persisted suppression flag is honored before showing anything.
    pub fn suppressible(mut self, can_be_suppressed: bool) -> Self {
        self.can_be_suppressed = can_be_suppressed;
        self
    }

    /// Replaces the default icon (the app icon with a badge overlay).
    pub fn icon(mut self, icon: PromptIcon) -> Self {
        self.icon = Some(icon);
        self
    }
}

pub(crate) struct AlertRequest<'a> {
    pub(crate) title: &'a str,
    pub(crate) message: &'a str,
    pub(crate) settings_button: &'a str,
    pub(crate) skip_button: &'a str,
    pub(crate) wants_suppression_checkbox: bool,
    pub(crate) icon: Option<&'a PromptIcon>,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct AlertResponse {
    /// The user pressed the settings button (first button). Every other
    /// dismissal path counts as a skip.
    pub(crate) open_settings: bool,
    /// The suppression checkbox was visible and checked at dismissal.
    pub(crate) suppress_future: bool,
}

pub(crate) trait DialogPresenter {
    /// Blocks the calling thread until the user dismisses the dialog.
    fn present(&self, request: AlertRequest<'_>) -> AlertResponse;
}

pub(crate) struct PromptEnv<'a> {
    pub(crate) sandboxed: bool,
    pub(crate) granted: &'a dyn Fn() -> bool,
    pub(crate) store: &'a dyn SuppressionStore,
    pub(crate) dialogs: &'a dyn DialogPresenter,
    pub(crate) settings: &'a dyn SettingsOpener,
}

/// Prompt flow against injected capabilities. Preconditions are checked in
/// order and short-circuit: user suppression, sandbox, then the live grant
/// check. The dialog is never constructed when any of them holds.
pub(crate) fn run_prompt(
    config: &PromptConfig,
    env: &PromptEnv<'_>,
    on_skip: Option<Box<dyn FnOnce() + '_>>,
) {
    if config.can_be_suppressed && env.store.is_suppressed() {
        log::debug!("full disk access prompt skipped: suppressed by user preference");
        return;
    }
    if env.sandboxed {
        log::debug!("full disk access prompt skipped: sandboxed apps cannot be granted");
        return;
    }
    if (env.granted)() {
        return;
    }

    let response = env.dialogs.present(AlertRequest {
        title: &config.title,
        message: &config.message,
        settings_button: &config.settings_button_title,
        skip_button: &config.skip_button_title,
        wants_suppression_checkbox: config.can_be_suppressed,
        icon: config.icon.as_ref(),
    });

    // The checkbox wins regardless of which button dismissed the dialog.
    if response.suppress_future {
        env.store.set_suppressed(true);
    }

    if response.open_settings {
        env.settings.open_settings();
    } else if let Some(skip) = on_skip {
        skip();
    }
}

/// Production presenter wrapping a modal `NSAlert`.
#[cfg(target_os = "macos")]
pub(crate) struct ModalAlert;

#[cfg(target_os = "macos")]
impl DialogPresenter for ModalAlert {
    fn present(&self, request: AlertRequest<'_>) -> AlertResponse {
        imp::present_modal(request)
    }
}

#[cfg(target_os = "macos")]
mod imp {
    use super::{AlertRequest, AlertResponse, SUPPRESSION_CHECKBOX_TITLE};
    use crate::icon;
    use cocoa::base::{id, nil, YES};
    use cocoa::foundation::NSString;
    use objc::{class, msg_send, sel, sel_impl};

    const ALERT_FIRST_BUTTON: i64 = 1000;
    const CONTROL_STATE_ON: i64 = 1;

    unsafe fn nsstring(value: &str) -> id {
        let s = NSString::alloc(nil).init_str(value);
        msg_send![s, autorelease]
    }

    pub(super) fn present_modal(request: AlertRequest<'_>) -> AlertResponse {
        unsafe {
            let pool: id = msg_send![class!(NSAutoreleasePool), new];

            let alert: id = msg_send![class!(NSAlert), new];
            let alert: id = msg_send![alert, autorelease];
            let _: () = msg_send![alert, setMessageText: nsstring(request.title)];
            let _: () = msg_send![alert, setInformativeText: nsstring(request.message)];
            // Button order fixes the response codes: settings first, skip second.
            let _: id = msg_send![alert, addButtonWithTitle: nsstring(request.settings_button)];
            let _: id = msg_send![alert, addButtonWithTitle: nsstring(request.skip_button)];

            if request.wants_suppression_checkbox {
                let _: () = msg_send![alert, setShowsSuppressionButton: YES];
                let checkbox: id = msg_send![alert, suppressionButton];
                let _: () = msg_send![checkbox, setTitle: nsstring(SUPPRESSION_CHECKBOX_TITLE)];
            }

            let image = match request.icon {
                Some(icon) => icon.image,
                None => icon::composed_app_icon(),
            };
            if image != nil {
                let _: () = msg_send![alert, setIcon: image];
            }

            let response: i64 = msg_send![alert, runModal];

            let suppress_future = if request.wants_suppression_checkbox {
                let checkbox: id = msg_send![alert, suppressionButton];
                let state: i64 = msg_send![checkbox, state];
                state == CONTROL_STATE_ON
            } else {
                false
            };

            let open_settings = response == ALERT_FIRST_BUTTON;

            let _: () = msg_send![pool, drain];

            AlertResponse {
                open_settings,
                suppress_future,
            }
        }
    }
}
