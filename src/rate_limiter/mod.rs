use std::time::Duration;
use tokio::time::sleep;

/// Spaces out requests so the ratings site is not hammered
pub struct RateLimiter {
    delay: Duration,
    request_count: usize,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            request_count: 0,
        }
    }

    pub async fn wait(&mut self) {
        if self.should_wait() {
            self.apply_delay().await;
        }
        self.increment();
    }

    #[cfg(test)]
    pub fn request_count(&self) -> usize {
        self.request_count
    }

    fn should_wait(&self) -> bool {
        self.request_count > 0 && !self.delay.is_zero()
    }

    async fn apply_delay(&self) {
        sleep(self.delay).await;
    }

    fn increment(&mut self) {
        self.request_count += 1;
    }
}
