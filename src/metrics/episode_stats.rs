/// Aggregate statistics over completed episodes
///
/// Used by the demo CLI to summarize a batch of rollouts.
#[derive(Debug, Clone, Default)]
pub struct EpisodeStats {
    pub episodes: u32,
    pub high_score: u32,
    pub total_steps: u64,
    pub total_reward: f64,
}

impl EpisodeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished episode
    pub fn on_episode_end(&mut self, score: u32, steps: u32, reward: f32) {
        self.episodes += 1;
        self.total_steps += u64::from(steps);
        self.total_reward += f64::from(reward);
        if score > self.high_score {
            self.high_score = score;
        }
    }

    pub fn mean_steps(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.total_steps as f64 / f64::from(self.episodes)
    }

    pub fn mean_reward(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.total_reward / f64::from(self.episodes)
    }

    /// Multi-line human-readable summary
    pub fn format_summary(&self) -> String {
        format!(
            "Episodes:    {}\nHigh score:  {}\nMean steps:  {:.1}\nMean reward: {:.2}",
            self.episodes,
            self.high_score,
            self.mean_steps(),
            self.mean_reward()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_score_tracking() {
        let mut stats = EpisodeStats::new();

        stats.on_episode_end(10, 50, 8.0);
        assert_eq!(stats.high_score, 10);
        assert_eq!(stats.episodes, 1);

        stats.on_episode_end(5, 30, 3.0);
        assert_eq!(stats.high_score, 10); // Should not decrease

        stats.on_episode_end(15, 80, 13.0);
        assert_eq!(stats.high_score, 15);
        assert_eq!(stats.episodes, 3);
    }

    #[test]
    fn test_means() {
        let mut stats = EpisodeStats::new();
        assert_eq!(stats.mean_steps(), 0.0);
        assert_eq!(stats.mean_reward(), 0.0);

        stats.on_episode_end(1, 10, 1.0);
        stats.on_episode_end(3, 30, 2.0);
        assert_eq!(stats.mean_steps(), 20.0);
        assert_eq!(stats.mean_reward(), 1.5);
    }

    #[test]
    fn test_summary_formatting() {
        let mut stats = EpisodeStats::new();
        stats.on_episode_end(2, 40, 1.0);
        let summary = stats.format_summary();
        assert!(summary.contains("Episodes:    1"));
        assert!(summary.contains("High score:  2"));
    }
}
