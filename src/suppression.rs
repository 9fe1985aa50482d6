/// Preference key holding the user's "do not ask again" choice.
pub(crate) const SUPPRESSION_KEY: &str = "fda_suppressed";

/// Persisted boolean gating whether the prompt may show at all.
pub(crate) trait SuppressionStore {
    fn is_suppressed(&self) -> bool;
    fn set_suppressed(&self, suppressed: bool);
}

/// Production store backed by the app's standard preference storage
/// (`NSUserDefaults` on macOS, a process-local flag elsewhere). Missing key
/// reads as `false`.
pub(crate) struct PreferenceStore;

impl SuppressionStore for PreferenceStore {
    fn is_suppressed(&self) -> bool {
        imp::read_flag()
    }

    fn set_suppressed(&self, suppressed: bool) {
        imp::write_flag(suppressed);
    }
}

#[cfg(target_os = "macos")]
mod imp {
    use super::SUPPRESSION_KEY;
    use cocoa::base::{id, nil, BOOL, NO, YES};
    use cocoa::foundation::NSString;
    use objc::{class, msg_send, sel, sel_impl};

    pub(super) fn read_flag() -> bool {
        unsafe {
            let key = NSString::alloc(nil).init_str(SUPPRESSION_KEY);
            let defaults: id = msg_send![class!(NSUserDefaults), standardUserDefaults];
            let value: BOOL = msg_send![defaults, boolForKey: key];
            let _: () = msg_send![key, release];
            value != NO
        }
    }

    pub(super) fn write_flag(suppressed: bool) {
        unsafe {
            let key = NSString::alloc(nil).init_str(SUPPRESSION_KEY);
            let defaults: id = msg_send![class!(NSUserDefaults), standardUserDefaults];
            let value = if suppressed { YES } else { NO };
            let _: () = msg_send![defaults, setBool:value forKey:key];
            let _: () = msg_send![key, release];
        }
    }
}

#[cfg(not(target_os = "macos"))]
mod imp {
    use std::sync::atomic::{AtomicBool, Ordering};

    static FLAG: AtomicBool = AtomicBool::new(false);

    pub(super) fn read_flag() -> bool {
        FLAG.load(Ordering::Relaxed)
    }

    pub(super) fn write_flag(suppressed: bool) {
        FLAG.store(suppressed, Ordering::Relaxed);
    }
}

#[cfg(test)]
pub(crate) struct MemoryStore {
    flag: std::sync::atomic::AtomicBool,
}

#[cfg(test)]
impl MemoryStore {
    pub(crate) fn new(suppressed: bool) -> Self {
        Self {
            flag: std::sync::atomic::AtomicBool::new(suppressed),
        }
    }
}

#[cfg(test)]
impl SuppressionStore for MemoryStore {
    fn is_suppressed(&self) -> bool {
        self.flag.load(std::sync::atomic::Ordering::Relaxed)
    }

    fn set_suppressed(&self, suppressed: bool) {
        self.flag.store(suppressed, std::sync::atomic::Ordering::Relaxed);
    }
}
