//! treewalk - list or delete files under a directory by extension and size

use std::io::{self, Write};
use std::process;
use treewalk::cli::args::{Command, WalkArgs, parse_args};
use treewalk::cli::output::format_summary_text;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let walk_args = match parse_args(&args) {
        Ok(Command::Walk(a)) => a,
        Ok(Command::Help) => {
            print_help();
            return;
        }
        Ok(Command::Version) => {
            print_version();
            return;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    // Controlled by RUST_LOG; --log redirects records to a file at info level.
    if let Err(e) = init_logging(walk_args.log_file.as_deref()) {
        eprintln!("Error: Failed to open log file: {e}");
        process::exit(4);
    }

    process::exit(handle_walk(&walk_args));
}

fn init_logging(log_file: Option<&str>) -> io::Result<()> {
    let Some(path) = log_file else {
        env_logger::init();
        return Ok(());
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .write_style(env_logger::WriteStyle::Never)
        .init();

    Ok(())
}

fn handle_walk(args: &WalkArgs) -> i32 {
    let config = args.to_config();
    log::debug!("Walking {} with {config:?}", args.root);

    // Stdout is line-buffered, so a failed write surfaces before the delete
    // that follows it in the plan.
    let mut out = io::stdout().lock();
    let summary = match treewalk::run(&args.root, &mut out, &config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            return match e {
                treewalk::Error::InvalidInput(_) => 2,
                _ => 1,
            };
        }
    };

    if let Err(e) = out.flush() {
        eprintln!("Error: Output error: {e}");
        return 1;
    }

    if let Some(report_path) = &args.report
        && let Err(e) = treewalk::io::report::write_report(report_path, &summary)
    {
        eprintln!("Error: Failed to write report: {e}");
        return 4;
    }

    if !args.quiet {
        eprintln!("{}", format_summary_text(&summary));
    }

    0
}

fn print_help() {
    println!("treewalk - List or delete files under a directory tree");
    println!();
    println!("USAGE:");
    println!("    treewalk [ROOT] [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --root <DIR>        Root directory to walk (default: .)");
    println!("    --ext <EXT>         Only match file names ending in EXT, e.g. .log");
    println!("    --size <BYTES>      Only match files larger than BYTES (default: 0, any)");
    println!("    --list              Print matching paths (default unless --del is given)");
    println!("    --del, --delete     Delete matching files");
    println!("    --report <FILE>     Write a JSON summary of the walk to FILE");
    println!("    --log <FILE>        Append log records, including deletions, to FILE");
    println!("    --quiet             Suppress the completion note on stderr");
    println!("    -h, --help          Show this help message");
    println!("    -v, --version       Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    treewalk /var/tmp --ext .log --size 10");
    println!("    treewalk /var/tmp --ext .log --del --list --log deleted.log");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DATE: &str = env!("GIT_DATE");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("treewalk {VERSION}");
    println!("Commit: {GIT_HASH} ({GIT_DATE})");
    println!("Target: {BUILD_TARGET}");
}
