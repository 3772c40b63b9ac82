//! Terminal table
//!
//! Sit in seat 2 against three scripted opponents. Bots think, streets
//! are dealt and cards turned over on a cosmetic clock; the human gets a
//! turn timer and is folded when it runs out.
//!
//! Options: --seed, --stack, --fast, --hands, --autopilot, --timer, --json

use clap::Parser;
use colored::Colorize;
use holdem_arena::*;
use holdem_arena::gameplay::Action;
use holdem_arena::gameplay::Decision;
use holdem_arena::gameplay::Event;
use holdem_arena::players::Bot;
use holdem_arena::players::Human;
use holdem_arena::players::Player;
use holdem_arena::session::Pending;
use holdem_arena::session::Session;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Four-seat No-Limit Hold'em in the terminal", long_about = None)]
struct Args {
    /// Seed every shuffle and bot roll for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
    /// Starting stack for every seat
    #[arg(long, default_value_t = STACK)]
    stack: Chips,
    /// Skip all cosmetic pauses
    #[arg(long)]
    fast: bool,
    /// Stop after this many hands
    #[arg(long)]
    hands: Option<u64>,
    /// Let a bot play the human seat
    #[arg(long)]
    autopilot: bool,
    /// Turn timer in seconds (0 disables it)
    #[arg(long, value_name = "SECS")]
    timer: Option<u64>,
    /// Print events as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> config::Config {
        let mut config = config::Config::default();
        config.stack = self.stack;
        config.seed = self.seed;
        if self.fast {
            config.pace = config::Pace::instant();
        }
        match self.timer {
            Some(0) => config.timer = None,
            Some(secs) => config.timer = Some(Duration::from_secs(secs)),
            None => {}
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log();
    let config = args.config();
    let mut session = Session::new(config);
    let mut proxy = args
        .autopilot
        .then(|| Bot::new(1.0, config.seed.unwrap_or_default()));
    let mut console = Console::default();
    let mut played = 0;
    while args.hands.map_or(true, |n| played < n) {
        session.start_hand()?;
        played += 1;
        loop {
            report(&mut session, args.json)?;
            match session.pending() {
                Pending::Idle => break,
                Pending::Human { seat, .. } => match proxy.as_mut() {
                    Some(bot) => {
                        let decision = bot.decide(session.game(), seat);
                        session.submit(decision)?;
                    }
                    None => {
                        if !args.json {
                            println!("\n{}", session.snapshot());
                        }
                        human(&mut session, &mut console, config.timer).await?;
                    }
                },
                pending => {
                    tokio::time::sleep(session.delay(&pending)).await;
                    if let Some(ticket) = pending.ticket() {
                        session.resume(ticket)?;
                    }
                }
            }
        }
        if !args.json {
            println!("{}", standings(&session));
        }
        if proxy.is_none() && args.hands.is_none() && !another(&mut console).await? {
            break;
        }
    }
    Ok(())
}

/// Owns the terminal. At most one prompt thread reads stdin at a time; a
/// prompt abandoned by the turn timer is waited out, and its answer
/// dropped, before the next one is shown.
#[derive(Debug, Default)]
struct Console {
    stray: Option<tokio::sync::oneshot::Receiver<Decision>>,
}

impl Console {
    async fn settle(&mut self) {
        if let Some(stray) = self.stray.take() {
            let late = stray.await;
            log::debug!("[holdem] discarded late answer {:?}", late);
        }
    }

    /// Runs `prompt` on its own thread so the timer can fire while it
    /// blocks on stdin. `None` means the timer won.
    async fn ask<F>(&mut self, prompt: F, limit: Option<Duration>) -> anyhow::Result<Option<Decision>>
    where
        F: FnOnce() -> Decision + Send + 'static,
    {
        self.settle().await;
        let (tx, mut rx) = tokio::sync::oneshot::channel();
        std::thread::spawn(move || tx.send(prompt()));
        match limit {
            None => Ok(Some(rx.await?)),
            Some(limit) => match tokio::time::timeout(limit, &mut rx).await {
                Ok(decision) => Ok(Some(decision?)),
                Err(_) => {
                    self.stray = Some(rx);
                    Ok(None)
                }
            },
        }
    }
}

/// Puts the human on the clock.
async fn human(session: &mut Session, console: &mut Console, timer: Option<Duration>) -> anyhow::Result<()> {
    let ticket = session.ticket();
    let hole = session.game().seat(HUMAN).hole();
    let bounds = session
        .bounds()
        .ok_or_else(|| anyhow::anyhow!("human has no legal moves"))?;
    match console.ask(move || Human::prompt(hole, bounds), timer).await? {
        Some(decision) => {
            if let Err(rejection) = session.submit(decision) {
                log::warn!("[holdem] {} rejected: {}", decision, rejection);
                println!("{}", rejection.to_string().red());
            }
        }
        None => {
            session.timeout(ticket)?;
            println!("{}", "time's up, you fold (answer the open prompt to continue)".red().bold());
        }
    }
    Ok(())
}

async fn another(console: &mut Console) -> anyhow::Result<bool> {
    console.settle().await;
    Ok(dialoguer::Confirm::new()
        .with_prompt("Deal the next hand?")
        .default(true)
        .interact()?)
}

fn report(session: &mut Session, json: bool) -> anyhow::Result<()> {
    for event in session.drain() {
        if json {
            println!("{}", serde_json::to_string(&event)?);
            continue;
        }
        let line = render(&event);
        if !line.is_empty() {
            println!("{}", line);
        }
    }
    Ok(())
}

fn render(event: &Event) -> String {
    let name = |p: &Position| NAMES[*p];
    match event {
        Event::HandStart { .. } => format!("\n{}", event.to_string().bold()),
        Event::HoleCards { hole: None, .. } => String::new(),
        Event::HoleCards { hole: Some(hole), .. } => {
            format!("{} {}", "You hold".bold(), hole.to_string().yellow())
        }
        Event::Action { seat, action, pot, .. } => {
            let label = match action {
                Action::Fold => action.label().red(),
                Action::Bet(_) | Action::Raise(_) | Action::Shove(_) => action.label().green(),
                _ => action.label().normal(),
            };
            format!("{:>6}: {} (pot {})", name(seat), label, pot)
        }
        Event::Board { street, board, .. } => {
            format!("{} {}", street.label().cyan().bold(), board.to_string().cyan())
        }
        Event::Reveal {
            seat,
            hole,
            strength,
            ..
        } => format!("{:>6}: shows {} ({})", name(seat), hole, strength.ranking()).yellow().to_string(),
        Event::Award { award, .. } => award
            .winners
            .iter()
            .map(|(p, chips)| format!("{} wins {}", name(p), chips))
            .collect::<Vec<_>>()
            .join(", ")
            .green()
            .bold()
            .to_string(),
        Event::HandEnd { .. } => String::new(),
        Event::LevelUp { .. } | Event::StageUp { .. } | Event::TableReset { .. } => {
            event.to_string().magenta().bold().to_string()
        }
    }
}

fn standings(session: &Session) -> String {
    let snapshot = session.snapshot();
    snapshot
        .seats
        .iter()
        .map(|seat| format!("{} {}", seat.name, seat.stack))
        .collect::<Vec<_>>()
        .join(" | ")
        .dimmed()
        .to_string()
}
