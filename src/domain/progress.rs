use log::info;

/// Track progress through the roster
pub struct PlayerProgress {
    total: usize,
    rated: usize,
    invalid: usize,
}

impl PlayerProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            rated: 0,
            invalid: 0,
        }
    }

    pub fn increment_rated(&mut self) {
        self.rated += 1;
        self.log_progress();
    }

    pub fn increment_invalid(&mut self) {
        self.invalid += 1;
        self.log_progress();
    }

    pub fn current_count(&self) -> usize {
        self.rated + self.invalid
    }

    fn log_progress(&self) {
        let current = self.current_count();
        if should_log(current, self.total) {
            info!(
                "  → Progress: {}/{} ({} rated, {} invalid)",
                current, self.total, self.rated, self.invalid
            );
        }
    }
}

fn should_log(current: usize, total: usize) -> bool {
    is_milestone(current) || is_complete(current, total)
}

fn is_milestone(count: usize) -> bool {
    count % 10 == 0
}

fn is_complete(current: usize, total: usize) -> bool {
    current == total
}
