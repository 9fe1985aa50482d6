use crate::os_release::MacosRelease;

/// Caller-supplied alert icon. Wraps a platform image; on macOS this is an
/// `NSImage`.
pub struct PromptIcon {
    #[cfg(target_os = "macos")]
    pub(crate) image: cocoa::base::id,
    #[cfg(not(target_os = "macos"))]
    pub(crate) _opaque: (),
}

#[cfg(target_os = "macos")]
impl PromptIcon {
    /// Wraps an existing `NSImage` for use as the prompt icon.
    ///
    /// # Safety
    ///
    /// `image` must point to a valid `NSImage` that outlives the prompt call.
    pub unsafe fn from_ns_image(image: cocoa::base::id) -> Self {
        Self { image }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BadgeKind {
    /// The system "hand raised" privacy symbol, available since Big Sur.
    PrivacySymbol,
    /// The stock info badge, for releases without system symbol images.
    InfoBadge,
}

pub(crate) fn badge_kind(release: MacosRelease) -> BadgeKind {
    match release {
        MacosRelease::Mojave | MacosRelease::Catalina => BadgeKind::InfoBadge,
        _ => BadgeKind::PrivacySymbol,
    }
}

/// Composes the running app's icon with a corner badge. Returns `nil` when
/// there is no app icon to draw on.
#[cfg(target_os = "macos")]
pub(crate) fn composed_app_icon() -> cocoa::base::id {
    imp::composed_app_icon()
}

#[cfg(target_os = "macos")]
mod imp {
    use super::{badge_kind, BadgeKind};
    use crate::os_release;
    use cocoa::base::{id, nil};
    use cocoa::foundation::{NSPoint, NSRect, NSSize, NSString};
    use objc::{class, msg_send, sel, sel_impl};

    const CANVAS_POINTS: f64 = 256.0;
    const BADGE_FRACTION: f64 = 0.5;
    const PRIVACY_SYMBOL: &str = "hand.raised.circle.fill";
    const INFO_BADGE_NAME: &str = "NSInfo";
    const COMPOSITE_SOURCE_OVER: u64 = 2;

    unsafe fn nsstring(value: &str) -> id {
        let s = NSString::alloc(nil).init_str(value);
        msg_send![s, autorelease]
    }

    unsafe fn badge_image() -> id {
        if badge_kind(os_release::current()) == BadgeKind::PrivacySymbol {
            let symbol: id = msg_send![
                class!(NSImage),
                imageWithSystemSymbolName: nsstring(PRIVACY_SYMBOL)
                accessibilityDescription: nil
            ];
            if symbol != nil {
                return symbol;
            }
        }
        msg_send![class!(NSImage), imageNamed: nsstring(INFO_BADGE_NAME)]
    }

    pub(super) fn composed_app_icon() -> id {
        unsafe {
            let app: id = msg_send![class!(NSApplication), sharedApplication];
            let base: id = msg_send![app, applicationIconImage];
            if base == nil {
                return nil;
            }

            let badge = badge_image();
            if badge == nil {
                return base;
            }

            let canvas_size = NSSize::new(CANVAS_POINTS, CANVAS_POINTS);
            let canvas: id = msg_send![class!(NSImage), alloc];
            let canvas: id = msg_send![canvas, initWithSize: canvas_size];
            let canvas: id = msg_send![canvas, autorelease];

            let zero = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(0.0, 0.0));
            let full = NSRect::new(NSPoint::new(0.0, 0.0), canvas_size);
            let badge_side = CANVAS_POINTS * BADGE_FRACTION;
            // AppKit's origin is bottom-left, so this is the bottom-right corner.
            let corner = NSRect::new(
                NSPoint::new(CANVAS_POINTS - badge_side, 0.0),
                NSSize::new(badge_side, badge_side),
            );

            let _: () = msg_send![canvas, lockFocus];
            let _: () = msg_send![
                base,
                drawInRect: full
                fromRect: zero
                operation: COMPOSITE_SOURCE_OVER
                fraction: 1.0f64
            ];
            let _: () = msg_send![
                badge,
                drawInRect: corner
                fromRect: zero
                operation: COMPOSITE_SOURCE_OVER
                fraction: 1.0f64
            ];
            let _: () = msg_send![canvas, unlockFocus];

            canvas
        }
    }
}
