/// State of the AI sector-match panel on the NGO registration form.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisEntity {
    pub analyzing: bool,
    pub percent: u8,
    /// Catalog id of the suggested sector, once the reveal delay has run.
    pub suggested_sector: Option<&'static str>,
}

impl AnalysisEntity {
    pub fn begin(&mut self) {
        *self = Self {
            analyzing: true,
            ..Self::default()
        };
    }

    pub fn progress(&mut self, percent: u8) {
        self.analyzing = true;
        self.percent = percent;
    }

    pub fn complete(&mut self, sector_id: &'static str) {
        self.analyzing = false;
        self.percent = 100;
        self.suggested_sector = Some(sector_id);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
