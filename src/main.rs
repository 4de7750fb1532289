use cssgen::{init_logging, parse_generate_args, run_generate};
use std::env;

fn main() {
    let args = parse_generate_args(env::args()).unwrap_or_else(|err| err.exit());
    init_logging(args.verbose);

    match run_generate(&args) {
        Ok(summary) => println!(
            "Generated CSS property definitions in {} ({} properties, {} keyword types)",
            summary.out_dir.display(),
            summary.properties,
            summary.keyword_types
        ),
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
