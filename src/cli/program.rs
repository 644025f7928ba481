use crate::app::BoardService;
use crate::app::runtime::today_local;
use crate::cli::action::{GlobalOpts, emit_error};
use crate::cli::commands::{board, meta};
use crate::cli::parsers::parse_day_arg;
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Debug, Parser)]
#[command(name = "tgs")]
#[command(version)]
#[command(about = "Classify, group and filter project tasks by status and deadline")]
pub struct Cli {
    #[arg(long, global = true)]
    pub json: bool,
    /// Pin "today" (YYYY-MM-DD) instead of reading the local clock.
    #[arg(long, global = true)]
    pub today: Option<String>,
    #[command(subcommand)]
    pub command: CommandKind,
}

#[derive(Debug, Subcommand)]
pub enum CommandKind {
    Init,
    Config,
    Classify(board::ClassifyArgs),
    List(board::SelectArgs),
    Group(board::SelectArgs),
    Summary(board::SourceArgs),
}

pub fn run_cli(repo_root: &Path) -> i32 {
    let cli = Cli::parse();
    let opts = GlobalOpts { json: cli.json };
    let command_line = format!("tgs {}", root_command_name(&cli.command));

    let repo_root = repo_root.to_string_lossy().to_string();
    let service = match cli.today.as_deref() {
        Some(raw) => match parse_day_arg("--today", raw) {
            Ok(today) => BoardService::new(repo_root, move || today),
            Err(error) => return emit_error(&command_line, opts, error),
        },
        None => BoardService::new(repo_root, today_local),
    };

    match cli.command {
        CommandKind::Init => meta::execute_init(&service, opts),
        CommandKind::Config => meta::execute_config(&service, opts),
        CommandKind::Classify(args) => board::execute_classify(&service, args, opts),
        CommandKind::List(args) => board::execute_list(&service, args, opts),
        CommandKind::Group(args) => board::execute_group(&service, args, opts),
        CommandKind::Summary(args) => board::execute_summary(&service, args, opts),
    }
}

fn root_command_name(command: &CommandKind) -> &'static str {
    match command {
        CommandKind::Init => "init",
        CommandKind::Config => "config",
        CommandKind::Classify(_) => "classify",
        CommandKind::List(_) => "list",
        CommandKind::Group(_) => "group",
        CommandKind::Summary(_) => "summary",
    }
}
