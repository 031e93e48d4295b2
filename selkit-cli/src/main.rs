//! Selkit CLI
//!
//! Builds a CSS selector from fragment and combinator parts and prints it.

mod script;

use clap::Parser;
use owo_colors::OwoColorize;

/// Selkit — grammar-checked CSS selector builder
#[derive(Parser, Debug)]
#[command(name = "selkit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"PARTS:
    element=NAME  id=NAME  class=NAME  attr=CONDITION
    pseudo-class=NAME  pseudo-element=NAME
    Combinators: '>'  '+'  '~'  descendant

EXAMPLES:
    # #main.container.editable
    selkit id=main class=container class=editable

    # a[href$=".png"]:focus
    selkit element=a 'attr=href$=".png"' pseudo-class=focus

    # div#main + table#data
    selkit element=div id=main + element=table id=data

    # Structured output
    selkit --json element=ul '>' element=li
"#)]
struct Cli {
    /// Fragments (`kind=value`) and combinators, in order
    #[arg(value_name = "PART", required = true)]
    parts: Vec<String>,

    /// Print the selector structure as JSON instead of CSS text
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = render(&cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn render(cli: &Cli) -> anyhow::Result<()> {
    let built = script::run(&cli.parts)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&built)?);
    } else {
        println!("{}", built.stringify());
    }
    Ok(())
}
