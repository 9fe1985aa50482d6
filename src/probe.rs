use crate::os_release::MacosRelease;
use std::path::{Path, PathBuf};

/// Set by macOS on every process running inside an App Sandbox container.
pub(crate) const SANDBOX_CONTAINER_ENV: &str = "APP_SANDBOX_CONTAINER_ID";

/// Lists a directory and reports whether the listing succeeded.
pub(crate) trait DirectoryProber {
    fn can_list(&self, path: &Path) -> bool;
}

pub(crate) struct FsProber;

impl DirectoryProber for FsProber {
    fn can_list(&self, path: &Path) -> bool {
        std::fs::read_dir(path).is_ok()
    }
}

pub(crate) fn is_sandboxed() -> bool {
    std::env::var_os(SANDBOX_CONTAINER_ENV).is_some()
}

/// Replaces a leading `~/` with the given home directory. Paths without the
/// shorthand pass through unchanged.
pub(crate) fn expand_tilde(path: &str, home: &Path) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Core grant check against injected state. Every probe failure collapses to
/// `false`; causes are deliberately not distinguished.
pub(crate) fn check_granted(
    sandboxed: bool,
    release: MacosRelease,
    home: Option<&Path>,
    prober: &dyn DirectoryProber,
) -> bool {
    if sandboxed {
        // Sandboxed processes cannot hold Full Disk Access; don't touch the disk.
        return false;
    }

    let Some(home) = home else {
        log::debug!("full disk access check: no home directory for the current user");
        return false;
    };

    let target = expand_tilde(release.probe_dir(), home);
    prober.can_list(&target)
}

pub(crate) fn granted_on_this_system() -> bool {
    #[cfg(target_os = "macos")]
    {
        check_granted(
            is_sandboxed(),
            crate::os_release::current(),
            imp::account_home(),
            &FsProber,
        )
    }
    #[cfg(not(target_os = "macos"))]
    {
        true
    }
}

#[cfg(target_os = "macos")]
mod imp {
    use once_cell::sync::Lazy;
    use std::ffi::CStr;
    use std::path::{Path, PathBuf};

    // Prefer the user database over $HOME; the env var can be absent or stale
    // when the process was not launched from a login shell.
    static ACCOUNT_HOME: Lazy<Option<PathBuf>> = Lazy::new(|| {
        unsafe {
            let record = libc::getpwuid(libc::getuid());
            if !record.is_null() {
                let dir = (*record).pw_dir;
                if !dir.is_null() {
                    let home = CStr::from_ptr(dir).to_string_lossy().into_owned();
                    if !home.is_empty() {
                        return Some(PathBuf::from(home));
                    }
                }
            }
        }
        std::env::var_os("HOME").map(PathBuf::from)
    });

    pub(super) fn account_home() -> Option<&'static Path> {
        ACCOUNT_HOME.as_deref()
    }
}
