use std::time::Duration;

/// Extra delay per card within a group, so cards settle one after another.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);
/// Delay between a progress bar becoming visible and it starting to fill.
pub const PROGRESS_DELAY: Duration = Duration::from_millis(200);

pub const CARD_THRESHOLD: f64 = 0.1;
pub static CARD_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const PROGRESS_THRESHOLD: f64 = 0.5;

pub fn stagger_delay(index: usize) -> Duration {
    STAGGER_STEP * u32::try_from(index).unwrap_or(u32::MAX)
}

/// One-shot visibility state of an animated element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Returns true only for the first call, which is when the transition
    /// should be scheduled.
    pub fn reveal(&mut self) -> bool {
        match self {
            Self::Hidden => {
                *self = Self::Revealed;
                true
            }
            Self::Revealed => false,
        }
    }

    pub fn card_class(self) -> &'static str {
        match self {
            Self::Hidden => "reveal reveal-hidden",
            Self::Revealed => "reveal reveal-shown",
        }
    }
}

/// Target fill of a progress bar, clamped to a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percent(u8);

impl Percent {
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Inline width for a bar that is either still empty or filled.
    pub fn width(self, state: RevealState) -> String {
        match state {
            RevealState::Hidden => "0%".to_string(),
            RevealState::Revealed => format!("{}%", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_linearly() {
        assert_eq!(stagger_delay(0), Duration::ZERO);
        assert_eq!(stagger_delay(1), Duration::from_millis(100));
        assert_eq!(stagger_delay(4), Duration::from_millis(400));
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut s = RevealState::default();
        assert_eq!(s, RevealState::Hidden);
        assert!(s.reveal());
        assert!(!s.reveal());
        assert_eq!(s, RevealState::Revealed);
    }

    #[test]
    fn percent_clamps() {
        assert_eq!(Percent::new(85).get(), 85);
        assert_eq!(Percent::new(250).get(), 100);
    }

    #[test]
    fn width_follows_state() {
        let p = Percent::new(75);
        assert_eq!(p.width(RevealState::Hidden), "0%");
        assert_eq!(p.width(RevealState::Revealed), "75%");
    }

    #[test]
    fn card_classes() {
        assert!(RevealState::Hidden.card_class().contains("reveal-hidden"));
        assert!(RevealState::Revealed.card_class().contains("reveal-shown"));
    }
}
