use crate::demo::{run_demo, DemoArgs};
use crate::render::{render_question_banks, render_report, ReportFormat};
use crate::session::{Session, SessionEnd};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use counselor_assessment::assessment::domain::SectionId;
use counselor_assessment::assessment::{AssessmentFlow, AssessmentSnapshot, ResultsMode};
use counselor_assessment::config::AppConfig;
use counselor_assessment::error::AppError;
use counselor_assessment::telemetry;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "Counselor Career Assessment",
    about = "Take the mental health counselor career assessment from the terminal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer the assessment interactively (default command)
    Take(TakeArgs),
    /// List the questions of one or every section
    Questions(QuestionsArgs),
    /// Render the results report for a saved session
    Report(ReportArgs),
    /// Run a scripted session end to end and print its report
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct TakeArgs {
    /// Results mode override (static or computed)
    #[arg(long, value_parser = parse_mode)]
    pub(crate) mode: Option<ResultsMode>,
    /// Output format of the final report
    #[arg(long, value_enum, default_value_t)]
    pub(crate) format: ReportFormat,
    /// Write the answers to this snapshot file once the assessment is finished
    #[arg(long)]
    pub(crate) save: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct QuestionsArgs {
    /// Only list this section (psychometric, technical or wiscar)
    #[arg(long, value_parser = parse_section)]
    pub(crate) section: Option<SectionId>,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Snapshot file written by `take --save`
    #[arg(long)]
    pub(crate) snapshot: PathBuf,
    #[arg(long, value_enum, default_value_t)]
    pub(crate) format: ReportFormat,
    /// Results mode override (static or computed)
    #[arg(long, value_parser = parse_mode)]
    pub(crate) mode: Option<ResultsMode>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(
        environment = ?config.environment,
        mode = config.results.mode.label(),
        "configuration loaded"
    );

    let command = cli
        .command
        .unwrap_or_else(|| Command::Take(TakeArgs::default()));

    match command {
        Command::Take(args) => run_take(args, config.results.mode),
        Command::Questions(args) => {
            let stdout = io::stdout();
            let mut output = stdout.lock();
            render_question_banks(args.section, &mut output)
        }
        Command::Report(args) => run_report(args, config.results.mode),
        Command::Demo(args) => run_demo(args, config.results.mode),
    }
}

fn run_take(args: TakeArgs, configured_mode: ResultsMode) -> Result<(), AppError> {
    let TakeArgs { mode, format, save } = args;
    let mode = mode.unwrap_or(configured_mode);

    let mut flow = AssessmentFlow::standard();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let end = Session::new(stdin.lock(), &mut output).run(&mut flow)?;
    if end == SessionEnd::Quit {
        info!(
            answered = flow.answered_percent(),
            "assessment abandoned before results"
        );
        return Ok(());
    }

    render_report(&flow.results(mode), format, &mut output)?;

    if let Some(path) = save {
        AssessmentSnapshot::capture(&flow, Utc::now()).write_to(&path)?;
    }

    Ok(())
}

fn run_report(args: ReportArgs, configured_mode: ResultsMode) -> Result<(), AppError> {
    let ReportArgs {
        snapshot,
        format,
        mode,
    } = args;

    let flow = AssessmentSnapshot::read_from(&snapshot)?.restore()?;
    let report = flow.results(mode.unwrap_or(configured_mode));
    let stdout = io::stdout();
    let mut output = stdout.lock();
    render_report(&report, format, &mut output)
}

pub(crate) fn parse_mode(raw: &str) -> Result<ResultsMode, String> {
    raw.parse()
}

fn parse_section(raw: &str) -> Result<SectionId, String> {
    raw.parse()
}
