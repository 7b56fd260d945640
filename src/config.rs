use chrono::Offset;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub logger_timezone: chrono::FixedOffset,
    /// `None` keeps every distinct image ever selected.
    pub history_capacity: Option<usize>,
    pub classify_top_k: usize,
    pub fake_model_load_duration: Duration,
    pub fake_classify_duration: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logger_timezone: local_timezone(),
            history_capacity: None,
            classify_top_k: 3,
            fake_model_load_duration: Duration::from_secs(2),
            fake_classify_duration: Duration::from_millis(750),
        }
    }
}

fn local_timezone() -> chrono::FixedOffset {
    chrono::Local::now().offset().fix()
}
