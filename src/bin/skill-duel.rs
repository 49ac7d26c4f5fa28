//! Terminal front end for the skill card compendium.
//!
//! Reads one command per line from stdin. Logs go to stderr; set
//! `RUST_LOG=skill_duel=debug` to see every move.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use skill_duel::cards::{compendium, Card, CardId, Catalog};
use skill_duel::core::{DrawSource, DuelConfig};
use skill_duel::session::DuelSession;
use skill_duel::view::{gallery_caption, PillarFilter};

#[derive(Debug, Parser)]
#[command(name = "skill-duel", about = "Browse and duel with ML team skill cards")]
struct Args {
    /// Fix the draw seed (overrides SKILL_DUEL_SEED).
    #[arg(long)]
    seed: Option<u64>,

    /// Load the catalog from a JSON file instead of the built-in compendium.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Maximum cards on the field (overrides SKILL_DUEL_FIELD_CAPACITY).
    #[arg(long)]
    field_capacity: Option<usize>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Gallery(PillarFilter),
    Inspect(CardId),
    Draw,
    Play(CardId),
    Return(CardId),
    Reset,
    Show,
    Help,
    Quit,
}

const HELP: &str = "\
commands:
  gallery [PILLAR]   list cards (ALL, DELIVER, BUILD, OPERATE, GOVERN, CROSS-CUTTING)
  inspect <id>       show a card in full
  draw               draw a card from the deck
  play <id>          play a hand card to the field
  return <id>        return a field card to your hand
  reset              put every card back in the deck
  show               show deck, hand and field
  help               this text
  quit               exit";

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    match verb.as_str() {
        "gallery" | "g" => match args.as_slice() {
            [] => Ok(Command::Gallery(PillarFilter::All)),
            [raw] => raw
                .parse::<PillarFilter>()
                .map(Command::Gallery)
                .map_err(|e| e.to_string()),
            _ => Err("usage: gallery [PILLAR]".to_string()),
        },
        "inspect" | "i" => card_arg(&args, "inspect").map(Command::Inspect),
        "draw" | "d" => no_args(&args, "draw").map(|()| Command::Draw),
        "play" | "p" => card_arg(&args, "play").map(Command::Play),
        "return" | "r" => card_arg(&args, "return").map(Command::Return),
        "reset" => no_args(&args, "reset").map(|()| Command::Reset),
        "show" | "s" => no_args(&args, "show").map(|()| Command::Show),
        "help" | "?" => no_args(&args, "help").map(|()| Command::Help),
        "quit" | "exit" | "q" => no_args(&args, "quit").map(|()| Command::Quit),
        other => Err(format!("unknown command: {other} (try `help`)")),
    }
}

/// Exactly one numeric card id.
fn card_arg(args: &[&str], verb: &str) -> Result<CardId, String> {
    match args {
        [raw] => raw
            .parse::<u32>()
            .map(CardId::new)
            .map_err(|_| format!("not a card id: {raw}")),
        _ => Err(format!("usage: {verb} <id>")),
    }
}

fn no_args(args: &[&str], verb: &str) -> Result<(), String> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(format!("usage: {verb} (takes no arguments)"))
    }
}

fn card_line(card: &Card) -> String {
    format!(
        "[{:>2}] {} {:<28} {:<14} {:<17} {}",
        card.id.raw(),
        card.art,
        card.name,
        card.pillar,
        card.kind,
        card.rarity.label()
    )
}

fn card_detail(card: &Card) -> String {
    let mut out = format!(
        "{} {}\n{} PILLAR · {} {} · {}\n",
        card.art,
        card.name,
        card.pillar,
        card.kind.icon(),
        card.kind,
        card.rarity
    );
    if card.kind.is_monster() {
        out.push_str(&format!(
            "{} · Level {} · ATK/{} DEF/{}\n",
            card.attribute, card.stats.level, card.stats.atk, card.stats.def
        ));
    }
    out.push_str(&format!("skill: {}\n", card.skill));
    out.push_str(&format!("\"{}\"\n", card.flavor_text));
    out.push_str(&format!("EFFECT: {}\n", card.effect));
    out.push_str(&format!("tags: {}", card.tags.join(", ")));
    out
}

fn print_board<R: DrawSource>(session: &DuelSession<R>, out: &mut impl Write) -> io::Result<()> {
    let snapshot = session.snapshot();
    writeln!(out, "> {}", snapshot.last_message)?;
    writeln!(out, "{}", snapshot.draw_label())?;
    writeln!(out, "{}", snapshot.field_label())?;
    for card in &snapshot.field {
        writeln!(out, "  {}", card_line(card))?;
    }
    writeln!(out, "{}", snapshot.hand_label())?;
    for card in &snapshot.hand {
        writeln!(out, "  {}", card_line(card))?;
    }
    Ok(())
}

fn run<R: DrawSource>(
    session: &mut DuelSession<R>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "{}", HELP)?;
    print_board(session, out)?;

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                writeln!(out, "{msg}")?;
                continue;
            }
        };

        match command {
            Command::Gallery(filter) => {
                let cards = session.filtered_catalog(filter);
                writeln!(out, "{} · {}", filter, gallery_caption(cards.len()))?;
                for card in cards {
                    writeln!(out, "  {}", card_line(card))?;
                }
            }
            Command::Inspect(id) => match session.card(id) {
                Some(card) => writeln!(out, "{}", card_detail(card))?,
                None => writeln!(out, "no card with id {}", id.raw())?,
            },
            Command::Draw => {
                session.draw();
                print_board(session, out)?;
            }
            Command::Play(id) => {
                session.play(id);
                print_board(session, out)?;
            }
            Command::Return(id) => {
                session.return_to_hand(id);
                print_board(session, out)?;
            }
            Command::Reset => {
                session.reset();
                print_board(session, out)?;
            }
            Command::Show => print_board(session, out)?,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => break,
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = DuelConfig::from_env().context("invalid environment configuration")?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(capacity) = args.field_capacity {
        config = config.with_field_capacity(capacity);
    }

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => compendium(),
    };

    let mut session = DuelSession::new(Arc::new(catalog), &config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut session, stdin.lock(), &mut stdout.lock())
}
