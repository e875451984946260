use anyhow::{anyhow, bail, Context, Result};
use deckrun_core::{
    Card, Enhancement, Event, EventBus, GameConfig, Phase, Rank, RunState, Seal, Suit,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

mod persistence;

use persistence::{default_state_path, load_state_file, save_state_file, SavedAction};

const DEFAULT_RUN_SEED: u64 = 0xC0FFEE;

#[derive(Debug, Default)]
struct CliOptions {
    seed: Option<u64>,
    load: Option<PathBuf>,
}

impl CliOptions {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut options = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = args.next().ok_or_else(|| anyhow!("--seed needs a value"))?;
                    options.seed = Some(value.parse().context("--seed expects a number")?);
                }
                "--load" => {
                    let value = args.next().ok_or_else(|| anyhow!("--load needs a path"))?;
                    options.load = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => bail!("unknown argument: {other}"),
            }
        }
        Ok(options)
    }
}

fn print_usage() {
    println!("deckrun [--seed N] [--load PATH]");
    println!("  --seed N     start a new run from seed N");
    println!("  --load PATH  restore a saved run by replaying its action log");
}

/// A live run plus the action log that reproduces it. Every mutating intent
/// goes through `perform` so the log and the run can never diverge.
struct Session {
    run: RunState,
    events: EventBus,
    actions: Vec<SavedAction>,
}

impl Session {
    fn new(seed: u64) -> Self {
        let mut events = EventBus::default();
        let run = RunState::new(GameConfig::default(), seed, &mut events);
        Self {
            run,
            events,
            actions: Vec::new(),
        }
    }

    fn restore(path: &Path) -> Result<Self> {
        let saved = load_state_file(path)?;
        let mut session = Session::new(saved.seed);
        // Replay output is noise; drop the events from the fresh-run deal
        // and from each replayed step.
        session.events.drain().for_each(drop);
        for (step, action) in saved.actions.iter().enumerate() {
            apply_saved_action(&mut session.run, &mut session.events, action)
                .map_err(|err| anyhow!("replaying step {}: {err}", step + 1))?;
            session.events.drain().for_each(drop);
            session.actions.push(action.clone());
        }
        println!(
            "restored seed {} with {} actions from {}",
            saved.seed,
            session.actions.len(),
            path.display()
        );
        Ok(session)
    }

    /// Apply one intent and, if it succeeds, record it.
    fn perform(&mut self, action: SavedAction) {
        match apply_saved_action(&mut self.run, &mut self.events, &action) {
            Ok(()) => self.actions.push(action),
            Err(err) => println!("error: {err}"),
        }
        self.print_events();
    }

    fn print_events(&mut self) {
        for event in self.events.drain() {
            println!("* {}", format_event(&event));
        }
    }

    fn save(&self, path: &Path) -> Result<()> {
        save_state_file(self.run.rng.seed(), &self.actions, path)?;
        println!("saved {} actions to {}", self.actions.len(), path.display());
        Ok(())
    }
}

fn apply_saved_action(
    run: &mut RunState,
    events: &mut EventBus,
    action: &SavedAction,
) -> std::result::Result<(), String> {
    match action.action.as_str() {
        "play" => run
            .play_hand(&action.indices, events)
            .map(drop)
            .map_err(|err| err.to_string()),
        "discard" => run
            .discard_hand(&action.indices, events)
            .map_err(|err| err.to_string()),
        "buy" => {
            let section = action.target.as_deref().ok_or("missing buy target")?;
            let idx = *action.indices.first().ok_or("missing offer index")?;
            let shop = run.shop.as_ref().ok_or("shop not available")?;
            match section {
                "joker" => {
                    let kind = *shop.jokers.get(idx).ok_or("no such joker offer")?;
                    run.buy_joker(kind, events).map_err(|err| err.to_string())
                }
                "tarot" => {
                    let kind = *shop.tarots.get(idx).ok_or("no such tarot offer")?;
                    run.buy_tarot(kind, events).map_err(|err| err.to_string())
                }
                "planet" => {
                    let kind = *shop.planets.get(idx).ok_or("no such planet offer")?;
                    run.buy_planet(kind, events).map_err(|err| err.to_string())
                }
                other => Err(format!("unknown buy target: {other}")),
            }
        }
        "reroll" => run.reroll_shop(events).map_err(|err| err.to_string()),
        "next" => run
            .continue_to_next_blind(events)
            .map_err(|err| err.to_string()),
        other => Err(format!("unknown action: {other}")),
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = CliOptions::parse(std::env::args().skip(1))?;
    let mut session = match &options.load {
        Some(path) => Session::restore(path)?,
        None => {
            let seed = options.seed.unwrap_or(DEFAULT_RUN_SEED);
            println!("new run, seed {seed}");
            Session::new(seed)
        }
    };
    session.print_events();
    print_status(&session.run);
    print_hand(&session.run);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            continue;
        };
        match command {
            "help" | "?" => print_help(),
            "hand" | "h" => print_hand(&session.run),
            "status" | "s" => print_status(&session.run),
            "shop" => print_shop(&session.run),
            "play" | "p" => match parse_indices(args) {
                Ok(indices) => {
                    session.perform(SavedAction {
                        action: "play".to_string(),
                        indices,
                        target: None,
                    });
                    after_action(&session.run);
                }
                Err(err) => println!("error: {err}"),
            },
            "discard" | "d" => match parse_indices(args) {
                Ok(indices) => {
                    session.perform(SavedAction {
                        action: "discard".to_string(),
                        indices,
                        target: None,
                    });
                    after_action(&session.run);
                }
                Err(err) => println!("error: {err}"),
            },
            "preview" => match parse_indices(args) {
                Ok(indices) => match session.run.preview_score(&indices) {
                    Ok(breakdown) => println!(
                        "{}: {} chips x {} mult = {}",
                        breakdown.hand_name(),
                        breakdown.score.chips,
                        breakdown.score.mult,
                        breakdown.total()
                    ),
                    Err(err) => println!("error: {err}"),
                },
                Err(err) => println!("error: {err}"),
            },
            "buy" | "b" => {
                let (section, rest) = match args.split_first() {
                    Some(split) => split,
                    None => {
                        println!("usage: buy joker|tarot|planet INDEX");
                        continue;
                    }
                };
                match parse_indices(rest) {
                    Ok(indices) if indices.len() == 1 => {
                        session.perform(SavedAction {
                            action: "buy".to_string(),
                            indices,
                            target: Some(section.to_string()),
                        });
                        print_shop(&session.run);
                    }
                    Ok(_) => println!("error: buy takes exactly one index"),
                    Err(err) => println!("error: {err}"),
                }
            }
            "reroll" | "r" => {
                session.perform(SavedAction {
                    action: "reroll".to_string(),
                    indices: Vec::new(),
                    target: None,
                });
                print_shop(&session.run);
            }
            "next" | "n" => {
                session.perform(SavedAction {
                    action: "next".to_string(),
                    indices: Vec::new(),
                    target: None,
                });
                after_action(&session.run);
            }
            "save" => {
                let result = match save_path(args) {
                    Some(path) => session.save(&path),
                    None => Err(anyhow!("no save path; pass one or set DECKRUN_SAVE")),
                };
                if let Err(err) = result {
                    println!("error: {err:#}");
                }
            }
            "quit" | "exit" | "x" => break,
            other => println!("unknown command: {other} (try 'help')"),
        }
        if session.run.phase().is_terminal() {
            print_status(&session.run);
        }
    }
    Ok(())
}

fn after_action(run: &RunState) {
    match run.phase() {
        Phase::Playing => print_hand(run),
        Phase::Shop => print_shop(run),
        Phase::Won => println!("run won!"),
        Phase::Lost => println!("run lost."),
    }
}

fn save_path(args: &[&str]) -> Option<PathBuf> {
    args.first()
        .map(|path| PathBuf::from(*path))
        .or_else(default_state_path)
}

fn print_help() {
    println!("hand | h              show hand and held cards");
    println!("status | s            show run counters");
    println!("play | p IDX...       play up to five hand cards");
    println!("discard | d IDX...    discard up to five hand cards");
    println!("preview IDX...        score a selection without playing it");
    println!("shop                  show current offers");
    println!("buy | b SECTION IDX   buy a joker/tarot/planet offer");
    println!("reroll | r            reroll all shop offers");
    println!("next | n              leave the shop for the next blind");
    println!("save [PATH]           write seed + action log");
    println!("quit | exit | x       leave");
}

fn print_status(run: &RunState) {
    let state = &run.state;
    let blind = run.current_blind();
    println!(
        "[{:?}] blind {} \"{}\" target {} | score {} | ${} | hands {} discards {}",
        state.phase,
        state.blind_index + 1,
        blind.name,
        blind.target_chips,
        state.round_score,
        state.money,
        state.hands_left,
        state.discards_left
    );
    if !run.jokers.is_empty() {
        let names: Vec<&str> = run.jokers.iter().map(|kind| kind.name()).collect();
        println!("jokers: {}", names.join(", "));
    }
}

fn print_hand(run: &RunState) {
    for (idx, card) in run.hand.iter().enumerate() {
        println!("{idx:>2}: {}", format_card(card));
    }
    if !run.held.is_empty() {
        let held: Vec<String> = run.held.iter().map(format_card).collect();
        println!("held: {}", held.join(" "));
    }
}

fn print_shop(run: &RunState) {
    let Some(shop) = &run.shop else {
        println!("shop not available");
        return;
    };
    println!("shop (reroll ${}):", shop.reroll_cost);
    for (idx, kind) in shop.jokers.iter().enumerate() {
        println!(
            "  joker  {idx}: {:<14} ${} [{:?}]",
            kind.name(),
            kind.cost(),
            kind.rarity()
        );
    }
    for (idx, kind) in shop.tarots.iter().enumerate() {
        println!("  tarot  {idx}: {:<14} ${}", kind.name(), kind.cost());
    }
    for (idx, kind) in shop.planets.iter().enumerate() {
        println!(
            "  planet {idx}: {:<14} ${} ({})",
            kind.name(),
            kind.cost(),
            kind.hand().name()
        );
    }
}

fn format_event(event: &Event) -> String {
    match event {
        Event::BlindStarted {
            index,
            name,
            target,
        } => format!("blind {} \"{name}\": target {target}", index + 1),
        Event::HandDealt { count } => format!("dealt {count} cards"),
        Event::HandScored {
            hand,
            chips,
            mult,
            total,
            round_score,
        } => format!("{hand:?}: {chips} x {mult} = {total} (round {round_score})"),
        Event::Discarded {
            count,
            discards_left,
        } => format!("discarded {count}, {discards_left} discards left"),
        Event::BlindCleared {
            score,
            reward,
            interest,
            money,
        } => format!("blind cleared at {score}: +${reward} reward +${interest} interest (${money})"),
        Event::ShopEntered { reroll_cost } => format!("shop open, reroll ${reroll_cost}"),
        Event::ShopRerolled { cost, money } => format!("rerolled for ${cost} (${money})"),
        Event::JokerBought { kind, cost, money } => {
            format!("bought {} for ${cost} (${money})", kind.name())
        }
        Event::TarotUsed { kind, cost, money } => {
            format!("used {} for ${cost} (${money})", kind.name())
        }
        Event::PlanetUsed { kind, cost, money } => {
            format!("used {} for ${cost} (${money})", kind.name())
        }
        Event::RunWon { money } => format!("run won with ${money}"),
        Event::RunLost { score, target } => format!("run lost at {score} of {target}"),
    }
}

fn format_card(card: &Card) -> String {
    let rank = match card.rank {
        Rank::Ace => "A",
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
    };
    let suit = match card.suit {
        Suit::Hearts => '♥',
        Suit::Diamonds => '♦',
        Suit::Clubs => '♣',
        Suit::Spades => '♠',
    };
    let mut label = format!("{rank}{suit}");
    if let Some(enhancement) = card.enhancement {
        let tag = match enhancement {
            Enhancement::Mult => "Mult",
            Enhancement::Chips => "Chips",
            Enhancement::Glass => "Glass",
            Enhancement::Steel => "Steel",
            Enhancement::Bonus => "Bonus",
            Enhancement::Wild => "Wild",
            Enhancement::RedMult => "RedMult",
            Enhancement::BlueChip => "BlueChip",
        };
        label.push_str(&format!(" [{tag}]"));
    }
    if let Some(seal) = card.seal {
        let tag = match seal {
            Seal::Red => "red",
            Seal::Blue => "blue",
            Seal::Gold => "gold",
            Seal::Purple => "purple",
        };
        label.push_str(&format!(" {{{tag} seal}}"));
    }
    label
}

fn parse_indices(args: &[&str]) -> std::result::Result<Vec<usize>, String> {
    if args.is_empty() {
        return Err("missing indices".to_string());
    }
    let mut indices = Vec::new();
    for arg in args {
        for part in arg.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let idx = part
                .parse::<usize>()
                .map_err(|_| format!("invalid index: {part}"))?;
            indices.push(idx);
        }
    }
    Ok(indices)
}
