use crate::cli::parse_mode;
use crate::render::{render_report, ReportFormat};
use crate::session::{Session, SessionEnd};
use clap::Args;
use counselor_assessment::assessment::{AssessmentFlow, ResultsMode};
use counselor_assessment::error::AppError;
use std::io::{self, Cursor, Write};
use tracing::warn;

/// One line per question: psychometric, technical (one wrong answer), then WISCAR.
const DEMO_SCRIPT: &str = "\
5\n4\n4\n3\n1\n1\n\
1\n1\n2\n1\n1\n2\n\
5\n4\n85\n5\n4\n70\n1\n4\n4\n5\n2\n4\n";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Output format of the final report
    #[arg(long, value_enum, default_value_t)]
    pub(crate) format: ReportFormat,
    /// Results mode override (static or computed)
    #[arg(long, value_parser = parse_mode)]
    pub(crate) mode: Option<ResultsMode>,
    /// Hide the scripted questionnaire and only print the report
    #[arg(long)]
    pub(crate) quiet: bool,
}

pub(crate) fn run_demo(args: DemoArgs, configured_mode: ResultsMode) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut output = stdout.lock();
    write_demo(args, configured_mode, &mut output)
}

fn write_demo(
    args: DemoArgs,
    configured_mode: ResultsMode,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let DemoArgs {
        format,
        mode,
        quiet,
    } = args;

    let mut flow = AssessmentFlow::standard();
    let script = Cursor::new(DEMO_SCRIPT);
    let end = if quiet {
        Session::new(script, io::sink()).run(&mut flow)?
    } else {
        writeln!(out, "Counselor career assessment demo (scripted answers)")?;
        Session::new(script, &mut *out).echoing().run(&mut flow)?
    };

    if end != SessionEnd::Finished {
        warn!(step = %flow.current_step(), "demo script ended before the results step");
    }

    render_report(&flow.results(mode.unwrap_or(configured_mode)), format, out)
}
