use std::time::Duration;

/// Delay before a freshly created toast slides into view.
pub const SLIDE_IN_DELAY: Duration = Duration::from_millis(100);
/// How long a toast stays up before it starts sliding out.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(4000);
/// Length of the slide-out transition; the toast is removed afterwards.
pub const SLIDE_OUT_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "notification-success",
            Self::Error => "notification-error",
            Self::Info => "notification-info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Mounted off-screen, waiting to slide in.
    Entering,
    Shown,
    /// Sliding out, removed once the transition ends.
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
}

impl Notification {
    pub fn on_screen(&self) -> bool {
        self.phase == Phase::Shown
    }
}

/// Holds the single current toast.
///
/// A new toast always replaces the previous one. Timers scheduled for a
/// replaced toast still fire, but every transition is keyed by id and is a
/// no-op when that id is no longer current.
#[derive(Debug, Clone, Default)]
pub struct Toaster {
    current: Option<Notification>,
    next_id: u64,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Notification {
            id,
            message: message.into(),
            severity,
            phase: Phase::Entering,
        });
        id
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Identity of the toast on screen; phase changes keep it, a replacement
    /// does not.
    pub fn current_id(&self) -> Option<u64> {
        self.current.as_ref().map(|n| n.id)
    }

    pub fn reveal(&mut self, id: u64) -> bool {
        self.transition(id, Phase::Entering, Phase::Shown)
    }

    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.current.as_mut() {
            Some(n) if n.id == id && n.phase != Phase::Leaving => {
                n.phase = Phase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    fn transition(&mut self, id: u64, from: Phase, to: Phase) -> bool {
        match self.current.as_mut() {
            Some(n) if n.id == id && n.phase == from => {
                n.phase = to;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_starts_entering() {
        let mut t = Toaster::new();
        let id = t.show("hello", Severity::Info);
        let n = t.current().unwrap();
        assert_eq!(n.id, id);
        assert_eq!(n.phase, Phase::Entering);
        assert!(!n.on_screen());
    }

    #[test]
    fn second_show_replaces_first() {
        let mut t = Toaster::new();
        let first = t.show("first", Severity::Success);
        let second = t.show("second", Severity::Error);
        assert_ne!(first, second);
        let n = t.current().unwrap();
        assert_eq!(n.id, second);
        assert_eq!(n.message, "second");
        assert_eq!(n.severity, Severity::Error);
    }

    #[test]
    fn full_lifecycle() {
        let mut t = Toaster::new();
        let id = t.show("done", Severity::Success);
        assert!(t.reveal(id));
        assert!(t.current().unwrap().on_screen());
        assert!(t.begin_dismiss(id));
        assert_eq!(t.current().unwrap().phase, Phase::Leaving);
        assert!(t.remove(id));
        assert!(t.current().is_none());
    }

    #[test]
    fn stale_timers_do_not_touch_newer_toast() {
        let mut t = Toaster::new();
        let old = t.show("old", Severity::Info);
        t.reveal(old);
        let new = t.show("new", Severity::Info);

        assert!(!t.reveal(old));
        assert!(!t.begin_dismiss(old));
        assert!(!t.remove(old));

        let n = t.current().unwrap();
        assert_eq!(n.id, new);
        assert_eq!(n.phase, Phase::Entering);
    }

    #[test]
    fn identity_survives_phases_but_not_replacement() {
        let mut t = Toaster::new();
        assert_eq!(t.current_id(), None);
        let first = t.show("first", Severity::Info);
        t.reveal(first);
        assert_eq!(t.current_id(), Some(first));
        t.begin_dismiss(first);
        assert_eq!(t.current_id(), Some(first));

        let second = t.show("second", Severity::Info);
        assert_eq!(t.current_id(), Some(second));
        assert_ne!(t.current_id(), Some(first));
        t.remove(second);
        assert_eq!(t.current_id(), None);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut t = Toaster::new();
        let id = t.show("x", Severity::Info);
        assert!(t.begin_dismiss(id));
        assert!(!t.begin_dismiss(id));
        assert!(!t.reveal(id));
    }

    #[test]
    fn severity_classes_differ() {
        let classes = [Severity::Success, Severity::Error, Severity::Info].map(Severity::class);
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
        assert_ne!(classes[0], classes[2]);
    }
}
