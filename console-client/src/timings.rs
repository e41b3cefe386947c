use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnTimings {
    pub ai_total: Duration,
    pub player_total: Duration,
    pub ai_turns: u32,
    pub player_turns: u32,
}

impl TurnTimings {
    pub fn record_ai(&mut self, elapsed: Duration) {
        self.ai_total += elapsed;
        self.ai_turns += 1;
    }

    /// Rejected inputs count as turns too.
    pub fn record_player(&mut self, elapsed: Duration) {
        self.player_total += elapsed;
        self.player_turns += 1;
    }
}

pub fn format_seconds(elapsed: Duration, precision: usize) -> String {
    format!("{:.*}", precision, elapsed.as_secs_f64())
}
