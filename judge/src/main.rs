use std::path::PathBuf;

use clap::Parser;
use judge::{play_game, BotProcess, GameResult, PlayerConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use stackconquer::Rules;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Paths to the config JSON files of the two players
    #[clap(num_args(2), value_delimiter = ' ')]
    player_configs: Vec<PathBuf>,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a JSON file with the rules. Unspecified rules take their default values.
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Stop as soon as one player makes an illegal move
    #[arg(short, long, default_value_t = false)]
    stop_on_illegal_move: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct MatchScore {
    wins: [usize; 2],
    illegal_moves: [usize; 2],
    ties: usize,
}

fn play_matchup(
    players: [&mut BotProcess; 2],
    num_games: usize,
    rng: &mut StdRng,
    rules: &Rules,
    stop_on_illegal_move: bool,
) -> anyhow::Result<MatchScore> {
    let [player_1, player_2] = players;
    let player_names = [player_1.name.clone(), player_2.name.clone()];
    let mut match_score = MatchScore::default();

    for game_idx in 0..num_games {
        match play_game(rng, [&mut *player_1, &mut *player_2], rules)? {
            GameResult::WonByPlayer { player_idx } => {
                debug!(winner = player_names[player_idx], game_idx);
                match_score.wins[player_idx] += 1;
            }
            GameResult::Tie => {
                debug!(game_idx, "Tie");
                match_score.ties += 1;
            }
            GameResult::IllegalMoveByPlayer { player_idx, err } => {
                info!(
                    player = player_names[player_idx],
                    game_idx, "Illegal move by player: {}", err
                );
                if stop_on_illegal_move {
                    break;
                } else {
                    match_score.wins[1 - player_idx] += 1;
                    match_score.illegal_moves[player_idx] += 1;
                }
            }
        }
    }

    Ok(match_score)
}

fn print_match_score(player_names: &[String; 2], match_score: &MatchScore) {
    let paren = |loser_idx: usize| {
        if match_score.illegal_moves[loser_idx] > 0 {
            format!(
                " ({} through illegal moves by player {})",
                match_score.illegal_moves[loser_idx],
                loser_idx + 1
            )
        } else {
            String::new()
        }
    };
    eprintln!(
        "End result:\n- {} wins by {}{}\n- {} wins by {}{}\n- {} ties",
        match_score.wins[0],
        player_names[0],
        paren(1),
        match_score.wins[1],
        player_names[1],
        paren(0),
        match_score.ties
    );
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let rules = match &args.rules {
        Some(path) => Rules::load(path)?,
        None => Rules::default(),
    };
    debug!(?rules);

    let player_configs = args
        .player_configs
        .iter()
        .map(|path| PlayerConfig::load(path))
        .collect::<Result<Vec<PlayerConfig>, anyhow::Error>>()?;
    let [config_1, config_2] = &player_configs[..] else {
        anyhow::bail!("Exactly two player configs are needed");
    };

    let mut player_1 = BotProcess::from_config(config_1)?;
    let mut player_2 = BotProcess::from_config(config_2)?;
    let player_names = [player_1.name.clone(), player_2.name.clone()];

    let match_score = play_matchup(
        [&mut player_1, &mut player_2],
        args.num_games,
        &mut rng,
        &rules,
        args.stop_on_illegal_move,
    )?;
    print_match_score(&player_names, &match_score);

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
