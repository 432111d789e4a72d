//! exprlex 命令行入口

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use exprlex::batch::{parse_lines, BatchAnalyzer, BatchEntry};
use exprlex::cache::AnalysisCache;
use exprlex::config::{self, LexerConfig, TOOL_NAME, VERSION};
use exprlex::error::{CliError, LexResult};
use exprlex::i18n::{format_message, get_message, messages, Locale};
use exprlex::{analyze, report, Analysis};

#[derive(Parser)]
#[command(name = "exprlex", version)]
#[command(about = "Tokenize and structurally validate mathematical expressions")]
struct Cli {
    /// Output language (en or zh)
    #[arg(long, global = true, default_value = "en")]
    lang: Locale,

    /// Extra function name to recognize (repeatable)
    #[arg(long = "function", global = true, value_name = "NAME")]
    functions: Vec<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a single expression
    Analyze { expression: String },
    /// Analyze every non-empty line of a file in parallel
    Batch {
        file: PathBuf,
        /// Worker threads (defaults to the number of CPUs)
        #[arg(short, long)]
        workers: Option<usize>,
    },
    /// Start interactive mode
    Repl,
    /// Show version information
    Version,
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// 输出单个结果，返回是否成功
fn print_result(
    source: &str,
    result: &LexResult<Analysis>,
    json: bool,
    locale: Locale,
) -> Result<bool, CliError> {
    if json {
        println!("{}", report::to_json(result)?);
    } else {
        match result {
            Ok(analysis) => print!("{}", report::render_analysis(source, analysis, locale)),
            Err(error) => eprint!("{}", report::render_error(source, error, locale)),
        }
    }
    Ok(result.is_ok())
}

fn run_analyze(
    expression: &str,
    config: &LexerConfig,
    json: bool,
    locale: Locale,
) -> Result<ExitCode, CliError> {
    let result = analyze(expression, config);
    let ok = print_result(expression, &result, json, locale)?;
    Ok(exit_code(ok))
}

fn run_batch(
    file: PathBuf,
    workers: Option<usize>,
    config: LexerConfig,
    json: bool,
    locale: Locale,
) -> Result<ExitCode, CliError> {
    let content = fs::read_to_string(&file).map_err(|source| CliError::Read {
        path: file.display().to_string(),
        source,
    })?;

    let lines = parse_lines(&content);
    info!(file = %file.display(), expressions = lines.len(), "batch loaded");

    let cache = Arc::new(AnalysisCache::new(config));
    let workers = workers.unwrap_or_else(config::default_workers);
    let analyzer = BatchAnalyzer::new(workers, cache)?;
    let entries = analyzer.analyze_all(lines);
    let failed = entries.iter().filter(|entry| !entry.is_ok()).count();
    debug!(stats = ?analyzer.cache().stats(), "cache usage");

    if json {
        let records = entries
            .iter()
            .map(|entry| (entry.line, entry.source.as_str(), &*entry.result));
        println!("{}", report::batch_to_json(records)?);
    } else {
        for entry in &entries {
            print_batch_entry(entry, locale);
        }
        let total = entries.len().to_string();
        let failed = failed.to_string();
        println!("{}", format_message(messages::MSG_BATCH_SUMMARY, locale, &[&total, &failed]));
    }

    Ok(exit_code(failed == 0))
}

fn print_batch_entry(entry: &BatchEntry, locale: Locale) {
    let line = entry.line.to_string();
    println!("{}", format_message(messages::MSG_BATCH_LINE, locale, &[&line, &entry.source]));
    match &*entry.result {
        Ok(analysis) => {
            print!("{}", report::render_tokens(&analysis.tokens));
            println!("{}", get_message(messages::MSG_REPORT_SYMBOLS, locale));
            print!("{}", report::render_symbols(&analysis.symbols, locale));
        }
        Err(error) => print!("{}", report::render_error(&entry.source, error, locale)),
    }
    println!();
}

/// REPL 交互模式
fn repl(config: LexerConfig, json: bool, locale: Locale) -> Result<ExitCode, CliError> {
    println!("{}", format_message(messages::MSG_CLI_REPL_BANNER, locale, &[TOOL_NAME, VERSION]));
    println!("{}\n", get_message(messages::MSG_CLI_REPL_HINT, locale));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        let result = analyze(line, &config);
        print_result(line, &result, json, locale)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let locale = cli.lang;
    let config = if cli.functions.is_empty() {
        LexerConfig::default()
    } else {
        LexerConfig::with_functions(cli.functions)
    };
    debug!(functions = ?config.functions(), "lexer config");

    match cli.command {
        Some(Command::Analyze { expression }) => {
            run_analyze(&expression, &config, cli.json, locale)
        }
        Some(Command::Batch { file, workers }) => {
            run_batch(file, workers, config, cli.json, locale)
        }
        Some(Command::Version) => {
            let version = format_message(messages::MSG_CLI_VERSION, locale, &[TOOL_NAME, VERSION]);
            println!("{}", version);
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Repl) | None => repl(config, cli.json, locale),
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let locale = cli.lang;

    match run(cli) {
        Ok(code) => code,
        Err(CliError::Read { path, source }) => {
            let reason = source.to_string();
            let message =
                format_message(messages::MSG_CLI_CANNOT_READ_FILE, locale, &[&path, &reason]);
            eprintln!("{}", message);
            ExitCode::from(2)
        }
        Err(error) => {
            let message = error.to_string();
            eprintln!("{}", format_message(messages::MSG_REPORT_ERROR, locale, &[&message]));
            ExitCode::from(2)
        }
    }
}
