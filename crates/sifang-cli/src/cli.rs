use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sifang",
    about = "sifang — four-player score keeper for the mahjong table",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// State file holding the game snapshot.
    #[arg(long, global = true, default_value = "sifang.json")]
    pub file: PathBuf,

    /// Answer yes to every confirmation prompt.
    #[arg(short, long, global = true)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start a new game, optionally naming the four seats
    Init(InitArgs),
    /// Show the table: totals, dealer, and pending state
    Status,
    /// Enter and commit one round of scores
    Score(ScoreArgs),
    /// Show the committed round history
    History,
    /// Delete one committed round by id (or unique id prefix)
    Delete(DeleteArgs),
    /// Rename one seat
    Rename(RenameArgs),
    /// Assign the dealer to a seat
    Dealer(DealerArgs),
    /// Spin the wheel for a random dealer
    Draw,
    /// Export the printable settlement sheet
    Export(ExportArgs),
    /// Clear all rounds and zero the scores, keeping names
    ClearHistory,
    /// Completely reset the game and return to setup
    Reset,
}

#[derive(Args)]
pub struct InitArgs {
    /// Seat names in seating order; omitted or blank seats keep defaults.
    pub names: Vec<String>,
}

#[derive(Args)]
pub struct ScoreArgs {
    /// Three or four signed scores in seating order. With three, the
    /// fourth seat is balanced automatically.
    #[arg(allow_hyphen_values = true, num_args = 3..=4, required = true)]
    pub values: Vec<i64>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Round id, or a unique prefix of it (see `history`).
    pub round: String,
}

#[derive(Args)]
pub struct RenameArgs {
    /// Seat number, 1..=4.
    pub seat: u8,
    /// New display name.
    pub name: String,
}

#[derive(Args)]
pub struct DealerArgs {
    /// Seat number, 1..=4.
    pub seat: u8,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Write the sheet to a file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Emit JSON instead of the plain-text sheet.
    #[arg(long)]
    pub json: bool,
}
