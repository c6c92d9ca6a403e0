use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the format and render names from pagekit-babel and src/main.rs.
// Build scripts can't depend on the crate they build, so these are duplicated.
const FORMATS: &[&str] = &["html", "text", "json"];
const RENDER_TARGETS: &[&str] = &["html", "text", "json", "view"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let input = || {
        Arg::new("input")
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath)
    };
    let output = || {
        Arg::new("output")
            .long("output")
            .short('o')
            .value_hint(ValueHint::FilePath)
    };
    let format = |name: &'static str| {
        Arg::new(name)
            .long(name)
            .value_parser(clap::builder::PossibleValuesParser::new(FORMATS))
    };
    let keep = |name: &'static str| Arg::new(name).long(name).action(ArgAction::SetTrue);

    let mut cmd = Command::new("pagekit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert page content between HTML, text and JSON")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .arg(input())
                .arg(format("from"))
                .arg(format("to"))
                .arg(
                    Arg::new("previous")
                        .long("previous")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(output()),
        )
        .subcommand(
            Command::new("import")
                .arg(input())
                .arg(Arg::new("url").long("url").value_hint(ValueHint::Url))
                .arg(keep("keep-header"))
                .arg(keep("keep-footer"))
                .arg(keep("keep-navigation"))
                .arg(keep("keep-sidebar"))
                .arg(output()),
        )
        .subcommand(
            Command::new("render").arg(input()).arg(
                Arg::new("to")
                    .long("to")
                    .value_parser(clap::builder::PossibleValuesParser::new(RENDER_TARGETS)),
            ),
        )
        .subcommand(Command::new("stats").arg(input()));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "pagekit", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "pagekit", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "pagekit", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
