//! Irkalla - embedded-HTML tag inspector
//!
//! Usage: irkalla [OPTIONS] <FILE>

mod error;
mod report;

use std::env;
use std::fs;
use std::io::Read;
use std::process::ExitCode;

use error::{ToolError, ToolResult};
use report::{scan_tags, TagReport};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut json = false;
    let mut sanitize = false;
    let mut input: Option<String> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage(&args[0]);
                return ExitCode::SUCCESS;
            }
            "--version" | "-V" => {
                println!("Irkalla {}", VERSION);
                return ExitCode::SUCCESS;
            }
            "--json" => json = true,
            "--sanitize" => sanitize = true,
            other => {
                if input.is_some() {
                    eprintln!("Unexpected argument: {}", other);
                    print_usage(&args[0]);
                    return ExitCode::FAILURE;
                }
                input = Some(other.to_string());
            }
        }
    }

    let Some(path) = input else {
        print_usage(&args[0]);
        return ExitCode::FAILURE;
    };

    match run(&path, json, sanitize) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage(program: &str) {
    println!(
        r#"Irkalla {} - embedded-HTML tag inspector

USAGE:
    {} [OPTIONS] <FILE>

A FILE of "-" reads from standard input.

OPTIONS:
    -h, --help        Print this help message
    -V, --version     Print version information
    --json            Emit the tag report as JSON
    --sanitize        Print the safe-mode sanitized buffer instead

EXAMPLES:
    {} page.html
    {} --json page.html
    echo '<b>hi</b><script>x</script>' | {} --sanitize -

"#,
        VERSION, program, program, program, program
    );
}

fn run(path: &str, json: bool, sanitize: bool) -> ToolResult<()> {
    let text = read_input(path)?;
    log::debug!("read {} bytes from {}", text.len(), path);

    if sanitize {
        print!("{}", irkalla_html::sanitize(&text));
        return Ok(());
    }

    let tags = scan_tags(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
    } else {
        print_report(&tags);
    }

    Ok(())
}

fn read_input(path: &str) -> ToolResult<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| ToolError::Read {
                path: "<stdin>".to_string(),
                source,
            })?;
        Ok(buf)
    } else {
        fs::read_to_string(path).map_err(|source| ToolError::Read {
            path: path.to_string(),
            source,
        })
    }
}

fn print_report(tags: &[TagReport]) {
    if tags.is_empty() {
        println!("No tags recognized.");
        return;
    }

    for t in tags {
        let verdict = if t.safe { "safe" } else { "UNSAFE" };
        print!(
            "{:>6}..{:<6} {:<12} {:<12} {:<18} {:<6}",
            t.start, t.end, t.name, t.kind, t.classification, verdict
        );
        for (k, v) in &t.attributes {
            print!(" {}={:?}", k, v);
        }
        println!();
    }

    let safe = tags.iter().filter(|t| t.safe).count();
    println!();
    println!("{} tag(s), {} safe, {} unsafe", tags.len(), safe, tags.len() - safe);
}
