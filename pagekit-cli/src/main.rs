// Command-line interface for pagekit
//
// This binary is a thin shell over pagekit-babel: it reads files, picks formats and
// options from the command line and configuration, and writes the result.
//
// Converting:
//
// A conversion needs a from and to pair. The from format is auto-detected from the file
// extension, and can be overridden with an explicit --from flag. When converting from
// text, --previous points at the last known JSON forest so the edit keeps its markup.
// Usage:
//  pagekit <input> --to <format> [--from <format>] [--previous <json>] [-o <file>]  - Convert (default)
//  pagekit convert <input> --to <format> ...                                        - Same as above
//  pagekit import <file.html> [--url <url>] [--keep-<region>]                      - Clean a fetched page into a record
//  pagekit render <page.json> [--to html|text|json|view]                           - Regenerate views of a record
//  pagekit stats <page.json>                                                       - Word count of a record
//
// Configuration is layered as embedded defaults, then ./pagekit.toml if present, then
// --config, then command-line flags.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use pagekit_babel::convert::nodes_from_json;
use pagekit_babel::import::{import_html, ImportOptions};
use pagekit_babel::page::PageRecord;
use pagekit_babel::{ContentFormat, ContentNode, ConvertOptions, Converter};
use pagekit_config::{Loader, PagekitConfig};
use serde::Serialize;
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "import", "render", "stats", "help"];

const RENDER_TARGETS: &[&str] = &["html", "text", "json", "view"];

/// Region flags of `import`, paired with the config key each one turns off.
const KEEP_FLAGS: &[(&str, &str)] = &[
    ("keep-header", "import.remove_header"),
    ("keep-footer", "import.remove_footer"),
    ("keep-navigation", "import.remove_navigation"),
    ("keep-sidebar", "import.remove_sidebar"),
];

fn build_cli() -> Command {
    Command::new("pagekit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert page content between HTML, text and JSON")
        .long_about(
            "pagekit converts page content between the three views an editor works with:\n\
            HTML, plain text and a JSON node forest.\n\n\
            Commands:\n  \
            - convert: Transform between html, text and json (default command)\n  \
            - import:  Clean a fetched HTML page into a page record\n  \
            - render:  Regenerate the views of a stored page record\n  \
            - stats:   Word count of a stored page record\n\n\
            Examples:\n  \
            pagekit page.html --to json                 # HTML to JSON forest (stdout)\n  \
            pagekit page.html --to text -o page.txt     # HTML to text file\n  \
            pagekit edit.txt --to html --previous page.json\n  \
            pagekit import saved.html --url https://example.com/about",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a pagekit.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between html, text and json (default command)")
                .long_about(
                    "Convert page content between formats.\n\n\
                    Supported formats:\n  \
                    - html: HTML fragment or document (.html, .htm)\n  \
                    - text: Plain text (.txt, .text)\n  \
                    - json: Node forest (.json)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Converting from text without --previous wraps every paragraph in <p>.\n\
                    With --previous, edited words are poured back into that forest.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_parser(clap::value_parser!(ContentFormat))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_parser(clap::value_parser!(ContentFormat))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("previous")
                        .long("previous")
                        .value_name("JSON")
                        .help("Last known JSON forest, reused when converting from text")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Clean a fetched HTML page into a page record")
                .long_about(
                    "Extract title, meta description and keywords from a saved HTML page,\n\
                    strip scripts, styles and page chrome, and print the page record as JSON.\n\n\
                    Header, footer, navigation and sidebar regions are removed by default;\n\
                    use the --keep-* flags (or the [import] config table) to keep them.\n\
                    Pages that look client-rendered are rejected.",
                )
                .arg(
                    Arg::new("input")
                        .help("Saved HTML page")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("url")
                        .long("url")
                        .help("Address the page was fetched from, used to derive the slug")
                        .value_hint(ValueHint::Url),
                )
                .arg(
                    Arg::new("keep-header")
                        .long("keep-header")
                        .help("Keep <header> elements")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("keep-footer")
                        .long("keep-footer")
                        .help("Keep <footer> elements")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("keep-navigation")
                        .long("keep-navigation")
                        .help("Keep <nav> and menu blocks")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("keep-sidebar")
                        .long("keep-sidebar")
                        .help("Keep <aside> and sidebar blocks")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Regenerate the views of a stored page record")
                .arg(
                    Arg::new("input")
                        .help("Page record (JSON)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("View to print; 'view' prints the record with every view as JSON")
                        .default_value("html")
                        .value_parser(clap::builder::PossibleValuesParser::new(RENDER_TARGETS)),
                ),
        )
        .subcommand(
            Command::new("stats")
                .about("Word count of a stored page record")
                .arg(
                    Arg::new("input")
                        .help("Page record (JSON)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    init_tracing();

    // If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            if args.len() > 1 && !args[1].starts_with('-') && !SUBCOMMANDS.contains(&args[1].as_str())
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let explicit_config = matches.get_one::<String>("config").map(|s| s.as_str());

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let config = load_cli_config(explicit_config, &[]);
            handle_convert_command(sub_matches, &config);
        }
        Some(("import", sub_matches)) => {
            let overrides: Vec<&str> = KEEP_FLAGS
                .iter()
                .filter(|(flag, _)| sub_matches.get_flag(flag))
                .map(|(_, key)| *key)
                .collect();
            let config = load_cli_config(explicit_config, &overrides);
            handle_import_command(sub_matches, &config);
        }
        Some(("render", sub_matches)) => {
            let config = load_cli_config(explicit_config, &[]);
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").expect("to has a default");
            handle_render_command(input, to, &config);
        }
        Some(("stats", sub_matches)) => {
            let config = load_cli_config(explicit_config, &[]);
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_stats_command(input, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so they never mix with converted output. `RUST_LOG` overrides
/// the default level.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the convert command
fn handle_convert_command(sub_matches: &ArgMatches, config: &PagekitConfig) {
    let input = sub_matches
        .get_one::<String>("input")
        .expect("input is required");
    let to = *sub_matches
        .get_one::<ContentFormat>("to")
        .expect("to is required");

    let from = match sub_matches.get_one::<ContentFormat>("from") {
        Some(from) => *from,
        None => ContentFormat::detect_from_filename(input).unwrap_or_else(|| {
            eprintln!("Error: Could not detect format from filename '{input}'");
            eprintln!("Please specify --from explicitly");
            std::process::exit(1);
        }),
    };

    let source = read_file(input);
    let previous: Option<Vec<ContentNode>> = sub_matches.get_one::<String>("previous").map(|path| {
        nodes_from_json(&read_file(path)).unwrap_or_else(|e| {
            eprintln!("Error: Invalid previous forest '{path}': {e}");
            std::process::exit(1);
        })
    });

    let converter = converter_from_config(config);
    debug!(%from, %to, parser = converter.parser().name(), "converting");
    let result = converter
        .try_convert(&source, from, to, previous.as_deref())
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    write_output(sub_matches.get_one::<String>("output").map(|s| s.as_str()), &result);
}

/// Handle the import command
fn handle_import_command(sub_matches: &ArgMatches, config: &PagekitConfig) {
    let input = sub_matches
        .get_one::<String>("input")
        .expect("input is required");
    let url = sub_matches.get_one::<String>("url").map(|s| s.as_str());
    let raw = read_file(input);

    let converter = converter_from_config(config);
    let options = ImportOptions::from(&config.import);
    let page = import_html(&raw, url, &options, &converter).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let json = to_json(&page.into_record(), config);
    write_output(sub_matches.get_one::<String>("output").map(|s| s.as_str()), &json);
}

/// Handle the render command
fn handle_render_command(input: &str, to: &str, config: &PagekitConfig) {
    let record = read_record(input);
    let converter = converter_from_config(config);
    let view = record.render(&converter);

    let output = match to {
        "html" => view.html,
        "text" => view.text,
        "json" => to_json(&view.json, config),
        _ => to_json(&view, config),
    };
    print!("{output}");
}

/// Handle the stats command
fn handle_stats_command(input: &str, config: &PagekitConfig) {
    let record = read_record(input);
    let stats = record.stats(&converter_from_config(config));
    println!("{}", to_json(&stats, config));
}

fn load_cli_config(explicit_path: Option<&str>, disabled: &[&str]) -> PagekitConfig {
    let loader = Loader::new().with_optional_file("pagekit.toml");
    let mut loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    for key in disabled {
        loader = loader.set_override(key, false).unwrap_or_else(|err| {
            eprintln!("Failed to apply '{key}': {err}");
            std::process::exit(1);
        });
    }

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn converter_from_config(config: &PagekitConfig) -> Converter {
    let options = ConvertOptions::try_from(config).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    });
    Converter::new(options)
}

fn read_record(path: &str) -> PageRecord {
    serde_json::from_str(&read_file(path)).unwrap_or_else(|e| {
        eprintln!("Error: Invalid page record '{path}': {e}");
        std::process::exit(1);
    })
}

fn read_file(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn write_output(output: Option<&str>, data: &str) {
    match output {
        Some(path) => fs::write(path, data).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            std::process::exit(1);
        }),
        None => print!("{data}"),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, config: &PagekitConfig) -> String {
    let json = if config.convert.pretty_json {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    })
}
