/// State of the staged login verification overlay.
///
/// `begin` runs optimistically on submit; the backend then drives the step
/// counter, the success marker, and finally the reset on completion.
#[derive(Debug, Clone, Default)]
pub struct VerificationEntity {
    pub running: bool,
    pub succeeded: bool,
    pub step: usize,
    pub total: usize,
    /// Labels of the stages that already completed, in order.
    pub completed_stages: Vec<&'static str>,
}

impl VerificationEntity {
    pub fn begin(&mut self) {
        *self = Self {
            running: true,
            ..Self::default()
        };
    }

    pub fn progress(&mut self, step: usize, total: usize, stage: &'static str) {
        self.running = true;
        self.step = step;
        self.total = total;
        self.completed_stages.push(stage);
    }

    pub fn succeed(&mut self) {
        self.succeeded = true;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Progress fraction for the segmented bar.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.step as f32 / self.total as f32
        }
    }
}
