use clap::Parser;
use draw_poker::agents::{BotProfile, Strategy};
use draw_poker::engine::{format_currency, EngineConfig, PokerEngine, Showdown, MAX_PLAYERS};
use draw_poker::hand::Hand;
use std::error::Error;

/// Play one seeded hand of five-card draw between bots and print the showdown.
#[derive(Parser, Debug)]
#[command(name = "draw-poker", version, about, long_about = None)]
struct Args {
    /// Number of seats (2-7)
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=MAX_PLAYERS as i64))]
    players: u8,

    /// Ante collected from every seat before the deal
    #[arg(long, default_value_t = 10.0)]
    ante: f64,

    /// Starting balance for every seat
    #[arg(long, default_value_t = 100.0)]
    balance: f64,

    /// Bot strategies, comma separated and assigned round-robin
    /// (conservative, balanced, aggressive). Defaults to all three.
    #[arg(long, value_delimiter = ',')]
    strategy: Vec<Strategy>,

    /// Seed for a reproducible hand
    #[arg(long)]
    seed: Option<u64>,
}

fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,draw_poker=info"));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn print_showdown(engine: &PokerEngine, showdown: &Showdown) {
    println!();
    println!("==============================");
    println!("Showdown:");
    println!("==============================");
    println!();
    println!("{:<20}{:<10}{:<20}{:<25}{:<50}", "Name", "Balance", "Hand Type", "Hand Score", "Cards");

    let mut rows: Vec<_> = showdown.outcomes.iter().collect();
    rows.sort_by(|a, b| b.hand.score().cmp(&a.hand.score()));
    for o in rows {
        println!(
            "{:<20}{:<10}{:<20}{:<25}{:<50}",
            o.name,
            format_currency(o.balance),
            o.hand.description(),
            o.hand.score().raw(),
            o.hand.describe(false)
        );
    }
    println!();

    let names: Vec<&str> = showdown.winners.iter().filter_map(|&s| engine.player(s)).map(|p| p.name()).collect();
    match names.as_slice() {
        [] => println!("No winners found."),
        [one] => {
            let category = engine.players()[showdown.winners[0]].hand().description();
            println!("Winner is: {one} with {category}");
        }
        many => {
            let category = engine.players()[showdown.winners[0]].hand().description();
            println!("Winners are: {} with {category}", many.join(" and "));
        }
    }
    println!("Winning Pot is: {}", format_currency(showdown.pot));
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let args = Args::parse();

    let mut config = EngineConfig::default().with_ante(args.ante).with_starting_balance(args.balance);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let strategies = if args.strategy.is_empty() { Strategy::ALL.to_vec() } else { args.strategy };

    let mut engine = PokerEngine::new(config);
    for strategy in strategies.iter().cycle().take(usize::from(args.players)) {
        engine.seat_bot(BotProfile::for_strategy(*strategy))?;
    }

    engine.start_game()?;
    let showdown = engine.end_game()?;
    print_showdown(&engine, &showdown);
    Ok(())
}
