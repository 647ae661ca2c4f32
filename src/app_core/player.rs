use crate::app_core::Encore;

// Mouse scrubbing on the progress bar. Ratios are relative to the bar width.
impl Encore {
    pub(crate) fn scrub_start(&mut self, ratio: f64) {
        self.controller.display_mut().display_state.scrubbing = true;
        self.controller.seek_begin();
        self.scrub_to(ratio);
    }

    pub(crate) fn scrub_to(&mut self, ratio: f64) {
        if let Some(duration) = self.controller.duration() {
            self.controller.seek_to(ratio * duration);
        }
    }

    pub(crate) fn scrub_end(&mut self) {
        self.controller.display_mut().display_state.scrubbing = false;
        self.controller.seek_end();
    }
}
