use cssgen::{init_logging, parse_validate_args, run_validate};
use std::env;

fn main() {
    let args = parse_validate_args(env::args()).unwrap_or_else(|err| err.exit());
    init_logging(args.verbose);

    match run_validate(&args) {
        Ok(outcome) => {
            print!("{}", outcome.report);
            match outcome.update {
                Some(Ok(path)) => println!("Updated spec written to {}", path.display()),
                Some(Err(err)) => {
                    eprintln!("error: {}", err);
                    std::process::exit(1);
                }
                None => {}
            }
        }
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
