/// macOS release bands that matter for picking the probe directory.
///
/// Anything newer than the last band classifies into the last band; anything
/// older than Mojave (where Full Disk Access first appeared) falls back to
/// the Mojave band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MacosRelease {
    Mojave,
    Catalina,
    BigSur,
    Monterey,
    Ventura,
    Sonoma,
}

// Ordered newest-first; the first threshold at or below the running version wins.
const RELEASE_BANDS: [(u64, u64, MacosRelease); 6] = [
    (14, 0, MacosRelease::Sonoma),
    (13, 0, MacosRelease::Ventura),
    (12, 0, MacosRelease::Monterey),
    (11, 0, MacosRelease::BigSur),
    (10, 15, MacosRelease::Catalina),
    (10, 14, MacosRelease::Mojave),
];

pub(crate) fn classify(major: u64, minor: u64) -> MacosRelease {
    RELEASE_BANDS
        .iter()
        .find(|&&(band_major, band_minor, _)| (major, minor) >= (band_major, band_minor))
        .map(|&(_, _, release)| release)
        .unwrap_or(MacosRelease::Mojave)
}

impl MacosRelease {
    /// Directory owned by another application that is only listable with
    /// Full Disk Access granted. Monterey moved the reliable probe target
    /// from Safari's support directory to the Stocks container.
    pub(crate) fn probe_dir(self) -> &'static str {
        match self {
            Self::Mojave | Self::Catalina | Self::BigSur => "~/Library/Safari",
            Self::Monterey | Self::Ventura | Self::Sonoma => {
                "~/Library/Containers/com.apple.stocks"
            }
        }
    }
}

/// Classifies the running OS. Recomputed per call; nothing is cached.
#[cfg(target_os = "macos")]
pub(crate) fn current() -> MacosRelease {
    let (major, minor) = imp::version();
    classify(major, minor)
}

#[cfg(target_os = "macos")]
mod imp {
    use cocoa::base::id;
    use cocoa::foundation::NSOperatingSystemVersion;
    use objc::{class, msg_send, sel, sel_impl};

    pub(super) fn version() -> (u64, u64) {
        unsafe {
            let process_info: id = msg_send![class!(NSProcessInfo), processInfo];
            let version: NSOperatingSystemVersion = msg_send![process_info, operatingSystemVersion];
            (version.majorVersion, version.minorVersion)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_release_band() {
        assert_eq!(classify(10, 14), MacosRelease::Mojave);
        assert_eq!(classify(10, 15), MacosRelease::Catalina);
        assert_eq!(classify(11, 0), MacosRelease::BigSur);
        assert_eq!(classify(11, 7), MacosRelease::BigSur);
        assert_eq!(classify(12, 3), MacosRelease::Monterey);
        assert_eq!(classify(13, 1), MacosRelease::Ventura);
        assert_eq!(classify(14, 0), MacosRelease::Sonoma);
    }

    #[test]
    fn newer_releases_stay_in_the_last_band() {
        assert_eq!(classify(15, 0), MacosRelease::Sonoma);
        assert_eq!(classify(26, 1), MacosRelease::Sonoma);
    }

    #[test]
    fn releases_older_than_mojave_use_the_oldest_band() {
        assert_eq!(classify(10, 13), MacosRelease::Mojave);
        assert_eq!(classify(9, 0), MacosRelease::Mojave);
    }

    #[test]
    fn probe_dirs_partition_into_two_groups() {
        for release in [
            MacosRelease::Mojave,
            MacosRelease::Catalina,
            MacosRelease::BigSur,
        ] {
            assert_eq!(release.probe_dir(), "~/Library/Safari");
        }
        for release in [
            MacosRelease::Monterey,
            MacosRelease::Ventura,
            MacosRelease::Sonoma,
        ] {
            assert_eq!(release.probe_dir(), "~/Library/Containers/com.apple.stocks");
        }
    }
}
