//! Terminal runner: plays one category deck, one card per Enter.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use party_game::telemetry::{self, LogFormat};
use party_game::{
    build_game, ActiveTurn, ApiConfig, FixtureGameApi, GameApi, GameCard, GameState, HttpGameApi,
    Locale, SessionSettings,
};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "party-game")]
#[command(about = "Play a party card deck from the terminal")]
struct Args {
    /// Category id to play
    #[arg(short, long)]
    category: String,

    /// Read cards from a JSON fixture instead of the remote API
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Player name (repeat for each player, in turn order)
    #[arg(short = 'p', long = "player")]
    players: Vec<String>,

    /// Content language (defaults to GAME_LOCALE / LANG)
    #[arg(long)]
    locale: Option<LocaleArg>,

    /// Shuffle seed for a reproducible deck
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Write logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LocaleArg {
    Es,
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Es => Locale::Spanish,
            LocaleArg::En => Locale::English,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let format = if args.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    telemetry::init_tracing(format, args.verbose);

    let locale = args.locale.map(Locale::from).unwrap_or_else(Locale::from_env);
    let api: Arc<dyn GameApi> = match &args.fixture {
        Some(path) => Arc::new(FixtureGameApi::new(path.clone())),
        None => Arc::new(HttpGameApi::new(&ApiConfig::from_env()?)?),
    };
    let game = build_game(api)
        .with_locale(locale)
        .with_players(&args.players)
        .with_settings(SessionSettings::from_env())
        .with_seed(args.seed)
        .build()
        .await?;
    let controller = game.controller;

    let mut states = controller.subscribe();
    controller.load(&args.category).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut turn = 1usize;
    loop {
        match controller.current_state() {
            GameState::Loading => states.changed().await?,
            GameState::Active(active) => {
                print_turn(turn, &active);
                if active.has_more {
                    println!("(Enter for the next card, Ctrl-D to quit)");
                } else {
                    println!("(Last card. Enter to finish)");
                }
                if lines.next_line().await?.is_none() {
                    break;
                }
                controller.advance();
                turn += 1;
            }
            GameState::Empty { .. } => {
                if turn == 1 {
                    println!("No cards in category '{}'.", args.category);
                } else {
                    println!("No more cards. Thanks for playing!");
                }
                break;
            }
            GameState::Failed { reason } => {
                return Err(
                    format!("Unable to load category '{}': {reason}", args.category).into(),
                );
            }
        }
    }

    Ok(())
}

fn print_turn(turn: usize, active: &ActiveTurn) {
    println!();
    match &active.player {
        Some(player) => println!("#{turn} · {}'s turn", player.name),
        None => println!("#{turn}"),
    }
    if let Some(style) = &active.style_key {
        println!("Style: {style}");
    }
    if let Some(title) = active.card.title() {
        println!("[{}] {title}", active.card.kind().as_str());
    } else {
        println!("[{}]", active.card.kind().as_str());
    }
    println!("{}", active.card.description());
    match &active.card {
        GameCard::Trivia {
            options, answer, ..
        } => {
            if !options.is_empty() {
                println!("Options: {}", options.join(" / "));
            }
            println!("Answer: {answer}");
        }
        GameCard::Rule {
            duration: Some(duration),
            ..
        } => println!("Duration: {duration}"),
        GameCard::Rule { .. } | GameCard::Challenge { .. } => {}
    }
    if active.card.penalty() > 0 {
        println!("Penalty: {} drink(s)", active.card.penalty());
    }
}
