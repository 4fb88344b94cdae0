use std::time::Duration;

#[derive(Debug, Copy, Clone)]
pub struct Config {
    pub advance_interval: Duration,
    pub port: u16,
}
