use anyhow::Result;
use clap::Parser;
use rand::Rng;

use snake_gym::env::SnakeEnv;
use snake_gym::game::GameConfig;
use snake_gym::metrics::EpisodeStats;

#[derive(Parser)]
#[command(name = "snake-gym")]
#[command(version, about = "Run random-policy snake episodes and report statistics")]
struct Cli {
    /// Side length of the square grid
    #[arg(long, default_value = "40")]
    grid_size: usize,

    /// Seed for the environment RNG; omit for an entropy seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of episodes to run
    #[arg(long, default_value = "5")]
    episodes: u32,

    /// Step cap per episode
    #[arg(long, default_value = "500")]
    max_steps: u32,

    /// Print the final board of each episode
    #[arg(long)]
    show_board: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        grid_size: cli.grid_size,
        seed: cli.seed,
    };
    let mut env = SnakeEnv::new(config)?;
    let mut action_rng = rand::thread_rng();
    let mut stats = EpisodeStats::new();

    for episode in 1..=cli.episodes {
        env.reset();
        let mut episode_reward = 0.0f32;
        let mut steps = 0;

        while steps < cli.max_steps {
            let action = action_rng.gen_range(0..3);
            let (_obs, reward, done, _info) = env.step(action);
            episode_reward += reward;
            steps += 1;
            if done {
                break;
            }
        }

        let score = env.state().score;
        println!(
            "Episode {episode}: score {score}, steps {steps}, reward {episode_reward:.1}"
        );
        if cli.show_board {
            println!("{}", env.render_ascii());
        }
        stats.on_episode_end(score, steps, episode_reward);
    }

    println!("\n{}", stats.format_summary());
    Ok(())
}
