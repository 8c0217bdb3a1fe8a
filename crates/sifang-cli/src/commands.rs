use std::io::{self, Write};

use anyhow::{bail, Context};
use colored::Colorize;

use sifang_app::{AlwaysConfirm, ConfirmPrompt, ScoreKeeper};
use sifang_ledger::Round;
use sifang_store::JsonFileStore;
use sifang_types::{PlayerId, RoundId, PLAYER_COUNT};

use crate::cli::{Cli, Command};

/// Largest magnitude enterable on the keypad (five digits plus sign).
const MAX_SCORE: i64 = 99_999;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let store = JsonFileStore::new(&cli.file);
    let mut keeper = ScoreKeeper::load_or_default(Box::new(store));
    let confirm: Box<dyn ConfirmPrompt> = if cli.yes {
        Box::new(AlwaysConfirm)
    } else {
        Box::new(StdinConfirm)
    };

    match cli.command {
        Command::Init(args) => init(&mut keeper, args.names),
        Command::Status => status(&keeper),
        Command::Score(args) => score(&mut keeper, &args.values),
        Command::History => history(&keeper),
        Command::Delete(args) => delete(&mut keeper, &args.round, confirm.as_ref()),
        Command::Rename(args) => rename(&mut keeper, args.seat, &args.name),
        Command::Dealer(args) => dealer(&mut keeper, args.seat),
        Command::Draw => draw(&mut keeper),
        Command::Export(args) => export(&keeper, args.out, args.json),
        Command::ClearHistory => clear_history(&mut keeper, confirm.as_ref()),
        Command::Reset => reset(&mut keeper, confirm.as_ref()),
    }
}

/// Reads a y/n answer from stdin for destructive operations.
struct StdinConfirm;

impl ConfirmPrompt for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

fn init(keeper: &mut ScoreKeeper, names: Vec<String>) -> anyhow::Result<()> {
    if names.len() > PLAYER_COUNT {
        bail!("at most {PLAYER_COUNT} seat names, got {}", names.len());
    }
    let mut seat_names: [String; PLAYER_COUNT] = Default::default();
    for (seat, name) in names.into_iter().enumerate() {
        seat_names[seat] = name;
    }
    keeper.start_game(&seat_names);

    println!("{}", "Game started.".green().bold());
    status(keeper)
}

fn status(keeper: &ScoreKeeper) -> anyhow::Result<()> {
    let ledger = keeper.ledger();
    println!("mode: {}", keeper.mode());
    println!("rounds: {}", ledger.round_count());
    let leader = ledger.leader();

    for player in ledger.players() {
        let dealer_mark = if ledger.dealer() == player.id {
            "莊".yellow().bold().to_string()
        } else {
            "  ".to_string()
        };
        let trophy = if leader == Some(player.id) { " ★" } else { "" };
        println!(
            "  {} {:<8} {}{}",
            dealer_mark,
            player.name,
            format_score(player.total_score),
            trophy,
        );
    }
    Ok(())
}

fn score(keeper: &mut ScoreKeeper, values: &[i64]) -> anyhow::Result<()> {
    if keeper.mode().is_setup() {
        bail!("no game in progress; run `sifang init` first");
    }
    for value in values {
        if value.abs() > MAX_SCORE {
            bail!("score {value} exceeds the keypad limit of ±{MAX_SCORE}");
        }
    }

    // Drive the entry machine the way the keypad would: select each seat,
    // type the digits (negative-biased), and flip the sign for winners.
    for (seat, value) in values.iter().enumerate() {
        keeper.select_player(PlayerId::from_seat(seat)?);
        keeper.clear_active();
        for d in value.unsigned_abs().to_string().chars() {
            keeper.press_digit(d);
        }
        if *value > 0 {
            keeper.toggle_sign();
        }
    }

    // With three seats entered, selecting the last one smart-balances it.
    if values.len() == PLAYER_COUNT - 1 {
        let last = PlayerId::from_seat(PLAYER_COUNT - 1)?;
        keeper.select_player(last);
        println!(
            "seat 4 balanced to {}",
            format_score(keeper.entry().value(last)),
        );
    }

    let id = keeper
        .submit_round()
        .context("round rejected: the four scores must sum to zero")?;
    println!("{} {}", "Round committed:".green().bold(), id);
    status(keeper)
}

fn history(keeper: &ScoreKeeper) -> anyhow::Result<()> {
    let ledger = keeper.ledger();
    if ledger.round_count() == 0 {
        println!("no rounds recorded");
        return Ok(());
    }

    let names: Vec<&str> = ledger
        .players()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    println!("{:<10} {:<9} {}", "id", "round", names.join("  "));

    let total = ledger.round_count();
    for (i, round) in ledger.rounds().iter().enumerate() {
        print_round(round, total - i);
    }
    Ok(())
}

fn print_round(round: &Round, number: usize) {
    let scores = round
        .scores
        .as_array()
        .iter()
        .map(|&s| format_score(s))
        .collect::<Vec<_>>()
        .join("  ");
    println!(
        "{:<10} {:<9} {}",
        round.id.short_id().dimmed(),
        format!("Round {number}"),
        scores,
    );
}

fn delete(
    keeper: &mut ScoreKeeper,
    round: &str,
    confirm: &dyn ConfirmPrompt,
) -> anyhow::Result<()> {
    let id = resolve_round_id(keeper, round)?;
    if keeper.delete_round(id, confirm)? {
        println!("{} {}", "Round deleted:".green().bold(), id.short_id());
    } else {
        println!("aborted");
    }
    Ok(())
}

/// Accept a full round id or a unique prefix of one.
fn resolve_round_id(keeper: &ScoreKeeper, needle: &str) -> anyhow::Result<RoundId> {
    if let Ok(id) = RoundId::parse(needle) {
        return Ok(id);
    }
    let matches: Vec<RoundId> = keeper
        .ledger()
        .rounds()
        .iter()
        .map(|r| r.id)
        .filter(|id| id.to_string().starts_with(needle))
        .collect();
    match matches.as_slice() {
        [id] => Ok(*id),
        [] => bail!("no round matches '{needle}'"),
        _ => bail!("'{needle}' is ambiguous; give more of the id"),
    }
}

fn rename(keeper: &mut ScoreKeeper, seat: u8, name: &str) -> anyhow::Result<()> {
    let id = PlayerId::new(seat)?;
    if keeper.rename_player(id, name) {
        println!("seat {seat} is now {}", keeper.ledger().player(id).name.bold());
    } else {
        println!("name unchanged (blank names are rejected)");
    }
    Ok(())
}

fn dealer(keeper: &mut ScoreKeeper, seat: u8) -> anyhow::Result<()> {
    let id = PlayerId::new(seat)?;
    keeper.set_dealer(id);
    println!(
        "{} {}",
        "dealer:".yellow().bold(),
        keeper.ledger().player(id).name,
    );
    Ok(())
}

fn draw(keeper: &mut ScoreKeeper) -> anyhow::Result<()> {
    let outcome = keeper.draw_dealer();
    println!(
        "wheel spins {}° over {}ms…",
        outcome.rotation_degrees, outcome.duration_ms,
    );
    println!(
        "{} {}",
        "dealer:".yellow().bold(),
        keeper.ledger().player(outcome.winner).name.bold(),
    );
    Ok(())
}

fn export(
    keeper: &ScoreKeeper,
    out: Option<std::path::PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let sheet = keeper.export_sheet();
    match out {
        Some(path) => {
            sheet
                .write_to_file(&path, json)
                .with_context(|| format!("cannot write {}", path.display()))?;
            println!("sheet written to {}", path.display());
        }
        None => {
            let rendered = if json {
                sheet.to_json()?
            } else {
                sheet.render_text()
            };
            print!("{rendered}");
        }
    }
    Ok(())
}

fn clear_history(
    keeper: &mut ScoreKeeper,
    confirm: &dyn ConfirmPrompt,
) -> anyhow::Result<()> {
    if keeper.clear_history(confirm) {
        println!("{}", "History cleared, scores zeroed.".green().bold());
    } else {
        println!("aborted");
    }
    Ok(())
}

fn reset(keeper: &mut ScoreKeeper, confirm: &dyn ConfirmPrompt) -> anyhow::Result<()> {
    if keeper.full_reset(confirm) {
        println!("{}", "Game reset. Run `sifang init` to start over.".green().bold());
    } else {
        println!("aborted");
    }
    Ok(())
}

fn format_score(score: i64) -> String {
    if score > 0 {
        format!("+{score}").red().to_string()
    } else if score < 0 {
        score.to_string().green().to_string()
    } else {
        score.to_string()
    }
}
