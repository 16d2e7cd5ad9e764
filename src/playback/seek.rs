/// Whether the seek bar follows the element or the user's pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SeekCoordinator {
    #[default]
    Live,
    /// `percent` is the last pointer position, committed on release.
    Dragging { percent: f64 },
}

impl SeekCoordinator {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Enter the drag state. Returns false if a drag was already running.
    pub fn begin(&mut self, percent: f64) -> bool {
        if self.is_dragging() {
            return false;
        }
        *self = Self::Dragging {
            percent: clamp_percent(percent),
        };
        true
    }

    /// Track the pointer. Ignored outside a drag.
    pub fn update(&mut self, percent: f64) -> bool {
        match self {
            Self::Dragging { percent: current } => {
                *current = clamp_percent(percent);
                true
            }
            Self::Live => false,
        }
    }

    /// Leave the drag state, handing back the release position.
    pub fn release(&mut self) -> Option<f64> {
        match std::mem::take(self) {
            Self::Dragging { percent } => Some(percent),
            Self::Live => None,
        }
    }
}

pub(crate) fn clamp_percent(percent: f64) -> f64 {
    if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_lifecycle() {
        let mut seek = SeekCoordinator::default();
        assert!(!seek.update(40.0));
        assert!(seek.begin(10.0));
        assert!(!seek.begin(20.0));
        assert!(seek.update(75.0));
        assert_eq!(seek.release(), Some(75.0));
        assert_eq!(seek, SeekCoordinator::Live);
        assert_eq!(seek.release(), None);
    }

    #[test]
    fn pointer_positions_are_clamped() {
        let mut seek = SeekCoordinator::default();
        seek.begin(-5.0);
        assert_eq!(seek, SeekCoordinator::Dragging { percent: 0.0 });
        seek.update(f64::NAN);
        assert_eq!(seek.release(), Some(0.0));
    }
}
