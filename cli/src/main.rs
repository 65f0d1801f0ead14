mod check;
mod test_runner;

use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use log::{LevelFilter, debug, info};

use mdfmt::parser::ParseError;

const SUBCOMMANDS: &[&str] = &["fmt", "test", "help"];

#[derive(Parser)]
#[command(name = "mdfmt", version, about = "Markdown block formatter")]
struct Cli {
    /// Disable colored diagnostic output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log scanner decisions (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a file in canonical form
    Fmt(FmtArgs),

    /// Run .test.md fixture files
    Test(TestArgs),
}

#[derive(clap::Args)]
struct FmtArgs {
    /// Markdown source file to format
    file: String,

    /// Exit 1 if the file is not already in canonical form
    #[arg(long)]
    check: bool,

    /// Rewrite the file in place
    #[arg(short, long, conflicts_with_all = ["check", "ast"])]
    write: bool,

    /// Report `#` lines that were kept as paragraph text
    #[arg(long)]
    lint: bool,

    /// Dump the parsed document
    #[arg(long)]
    ast: bool,
}

#[derive(clap::Args)]
struct TestArgs {
    /// Path to a .test.md file or directory containing them
    path: String,

    /// Run only fixtures in these categories (subfolder names). Repeatable.
    #[arg(short, long)]
    category: Vec<String>,

    /// List available categories and exit
    #[arg(long)]
    list_categories: bool,
}

fn main() {
    // `mdfmt file.md` is shorthand for `mdfmt fmt file.md`.
    let mut args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args
        .iter()
        .skip(1)
        .position(|a| !a.starts_with('-'))
        .map(|p| p + 1)
    {
        if !SUBCOMMANDS.contains(&args[pos].as_str()) {
            args.insert(pos, "fmt".to_string());
        }
    }

    let cli = Cli::parse_from(&args);

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Command::Fmt(fmt_args) => process::exit(do_fmt(fmt_args, cli.no_color)),
        Command::Test(test_args) => {
            let path = Path::new(&test_args.path);
            if test_args.list_categories {
                test_runner::list_categories(path);
                return;
            }
            let exit_code = test_runner::run_tests(path, cli.no_color, &test_args.category);
            process::exit(exit_code);
        }
    }
}

fn do_fmt(args: FmtArgs, no_color: bool) -> i32 {
    let color_choice = if no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    let source = match std::fs::read_to_string(&args.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", args.file, e);
            return 1;
        }
    };

    // Set up codespan file database
    let mut files = SimpleFiles::new();
    let file_id = files.add(args.file.clone(), source.clone());

    let parser = mdfmt::parser::Parser::new(&source, file_id);
    let (document, warnings) = parser.parse_with_diagnostics();
    debug!(
        "{}: {} block(s), {} heading fallback(s)",
        args.file,
        document.len(),
        warnings.len()
    );

    let writer = StandardStream::stderr(color_choice);
    let config = term::Config::default();

    if args.lint {
        emit_diagnostics(&writer, &config, &files, &warnings);
    }

    if args.ast {
        println!("{:#?}", document);
        return 0;
    }

    let formatted = format!("{}\n", document);

    if args.check {
        return match check::check_formatted(&source, &formatted, file_id) {
            None => {
                info!("{} is formatted", args.file);
                0
            }
            Some(error) => {
                emit_diagnostics(&writer, &config, &files, &[error]);
                1
            }
        };
    }

    if args.write {
        if formatted == source {
            info!("{} already formatted", args.file);
            return 0;
        }
        if let Err(e) = std::fs::write(&args.file, &formatted) {
            eprintln!("error: cannot write '{}': {}", args.file, e);
            return 1;
        }
        info!("rewrote {}", args.file);
        return 0;
    }

    print!("{}", formatted);
    0
}

fn emit_diagnostics(
    writer: &StandardStream,
    config: &term::Config,
    files: &SimpleFiles<String, String>,
    diagnostics: &[ParseError],
) {
    for diag in diagnostics {
        let _ = term::emit_to_write_style(&mut writer.lock(), config, files, &diag.to_diagnostic());
    }
}
