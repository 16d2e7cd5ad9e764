/// Hover-revealed volume slider with a debounced hide.
///
/// `H` is the handle of the pending hide timer. The popover never cancels
/// anything itself: handles it gives back must be cancelled by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumePopover<H> {
    visible: bool,
    pending_hide: Option<H>,
}

impl<H> Default for VolumePopover<H> {
    fn default() -> Self {
        Self {
            visible: false,
            pending_hide: None,
        }
    }
}

impl<H> VolumePopover<H> {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the slider. Returns the hide timer to cancel, if one was pending.
    pub fn hover_enter(&mut self) -> Option<H> {
        self.visible = true;
        self.pending_hide.take()
    }

    /// Remember the freshly scheduled hide timer. Returns a replaced timer to cancel.
    pub fn hover_leave(&mut self, hide_timer: H) -> Option<H> {
        self.pending_hide.replace(hide_timer)
    }

    /// The hide timer fired.
    pub fn hide_elapsed(&mut self) {
        self.pending_hide = None;
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_shows_immediately() {
        let mut popover = VolumePopover::<u32>::default();
        assert!(!popover.is_visible());
        assert_eq!(popover.hover_enter(), None);
        assert!(popover.is_visible());
    }

    #[test]
    fn leave_then_elapse_hides() {
        let mut popover = VolumePopover::default();
        popover.hover_enter();
        assert_eq!(popover.hover_leave(1), None);
        assert!(popover.is_visible());
        assert!(popover.pending_hide.is_some());
        popover.hide_elapsed();
        assert!(!popover.is_visible());
        assert!(popover.pending_hide.is_none());
    }

    #[test]
    fn reentering_hands_back_pending_timer() {
        let mut popover = VolumePopover::default();
        popover.hover_enter();
        popover.hover_leave(7);
        assert_eq!(popover.hover_enter(), Some(7));
        assert!(popover.is_visible());
        assert!(popover.pending_hide.is_none());
    }

    #[test]
    fn second_leave_replaces_timer() {
        let mut popover = VolumePopover::default();
        popover.hover_leave(1);
        assert_eq!(popover.hover_leave(2), Some(1));
        assert_eq!(popover.hover_enter(), Some(2));
    }
}
