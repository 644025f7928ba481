use crate::app::BoardService;
use crate::app::service_types::{ClassifyInput, ListInput};
use crate::cli::action::{GlobalOpts, emit_error, run_action};
use crate::cli::parsers::{
    as_optional_string, parse_deadline_range, parse_direction, parse_optional_day, parse_sort_key,
    parse_status, parse_status_filter, validate_window,
};
use crate::cli::render::{print_classification, print_groups, print_summary, print_task_list};
use crate::errors::TgsError;
use crate::types::{SortKey, StatusFilter};
use clap::Args;

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    #[arg(long)]
    pub status: String,
    #[arg(long = "end-date")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Task payload JSON; `-` reads stdin. Defaults to tasks_file from config.
    #[arg(long)]
    pub file: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct SelectArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub deadline: Option<String>,
    #[arg(long)]
    pub from: Option<String>,
    #[arg(long)]
    pub to: Option<String>,
    #[arg(long)]
    pub query: Option<String>,
    #[arg(long, default_value = "status")]
    pub sort: String,
    #[arg(long)]
    pub direction: Option<String>,
}

pub fn execute_classify(service: &BoardService, args: ClassifyArgs, opts: GlobalOpts) -> i32 {
    run_action(
        "tgs classify",
        opts,
        || {
            let status = parse_status(&args.status)?;
            let end_date = parse_optional_day("--end-date", args.end_date.as_deref())?;
            Ok(service.classify(&ClassifyInput { status, end_date }))
        },
        |result| result.clone(),
        |result| {
            print_classification(result);
            Ok(())
        },
    )
}

pub fn execute_list(service: &BoardService, args: SelectArgs, opts: GlobalOpts) -> i32 {
    let input = match parse_select_args(&args) {
        Ok(input) => input,
        Err(error) => return emit_error("tgs list", opts, error),
    };
    run_action(
        "tgs list",
        opts,
        || service.list(&input),
        |result| result.clone(),
        |result| {
            print_task_list(result);
            Ok(())
        },
    )
}

pub fn execute_group(service: &BoardService, args: SelectArgs, opts: GlobalOpts) -> i32 {
    let input = match parse_select_args(&args) {
        Ok(input) => input,
        Err(error) => return emit_error("tgs group", opts, error),
    };
    run_action(
        "tgs group",
        opts,
        || service.group(&input),
        |result| result.clone(),
        |result| {
            print_groups(result);
            Ok(())
        },
    )
}

pub fn execute_summary(service: &BoardService, args: SourceArgs, opts: GlobalOpts) -> i32 {
    run_action(
        "tgs summary",
        opts,
        || service.summary(as_optional_string(args.file.as_deref()).as_deref()),
        |result| result.clone(),
        |result| {
            print_summary(result);
            Ok(())
        },
    )
}

fn parse_select_args(args: &SelectArgs) -> Result<ListInput, TgsError> {
    let status = match args.status.as_deref() {
        Some(raw) => parse_status_filter(raw)?,
        None => StatusFilter::All,
    };
    let deadline_range = args
        .deadline
        .as_deref()
        .map(parse_deadline_range)
        .transpose()?;
    let from = parse_optional_day("--from", args.from.as_deref())?;
    let to = parse_optional_day("--to", args.to.as_deref())?;
    validate_window(from, to)?;
    let sort_key: SortKey = parse_sort_key(&args.sort)?;
    let direction = args.direction.as_deref().map(parse_direction).transpose()?;
    Ok(ListInput {
        source: as_optional_string(args.source.file.as_deref()),
        status,
        deadline_range,
        from,
        to,
        query: as_optional_string(args.query.as_deref()),
        sort_key,
        direction,
    })
}
