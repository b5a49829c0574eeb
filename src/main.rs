use clap::{Arg, ArgAction, Command};
use reckon::{evaluating, parsing};

fn main() {
    tracing_subscriber::fmt::init();

    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("reckon")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("The reckon formula language.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("check")
                .about("Parse the given formula and print its expression tree")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the expression tree as JSON rather than in debug form."),
                )
                .arg(
                    Arg::new("formula")
                        .required(true)
                        .help("The formula to parse, for example \"1+3*2\" or \"SUM(A1,2)\"."),
                ),
        )
        .subcommand(
            Command::new("eval")
                .about("Evaluate the given formula and print the result")
                .arg(
                    Arg::new("formula")
                        .required(true)
                        .help("The formula to evaluate."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            if let Some(formula) = submatches.get_one::<String>("formula") {
                match parsing::parse(formula) {
                    Ok(expression) => {
                        if submatches.get_flag("json") {
                            let text = serde_json::to_string_pretty(&expression)
                                .expect("expression trees serialize cleanly");
                            println!("{}", text);
                        } else {
                            println!("{:#?}", expression);
                        }
                    }
                    Err(error) => {
                        eprintln!("error: {}", error);
                        std::process::exit(1);
                    }
                }
            }
        }
        Some(("eval", submatches)) => {
            if let Some(formula) = submatches.get_one::<String>("formula") {
                match evaluating::evaluate_str(formula) {
                    Ok(value) => {
                        println!("{}", value);
                    }
                    Err(error) => {
                        eprintln!("error: {}", error);
                        std::process::exit(1);
                    }
                }
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: reckon [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}
