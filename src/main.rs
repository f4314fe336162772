use std::env;
use std::process;

use log::debug;

use quaternions::config::{Config, Source};
use quaternions::eval::{evaluate_file, Expression};
use quaternions::{Operand, QuatResult};

fn main() {
    env_logger::init();

    let cfg = match Config::new(env::args().skip(1).collect()) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    debug!("{cfg}");

    match run(&cfg) {
        Ok(results) => {
            for res in results.iter() {
                println!("{:.*}", cfg.precision, res);
            }
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn run(cfg: &Config) -> QuatResult<Vec<Operand>> {
    match &cfg.source {
        Source::Expression(tokens) => {
            let expr = Expression::parse(&tokens.join(" "))?;
            Ok(vec![expr.evaluate()?])
        }
        Source::File(path) => evaluate_file(path),
    }
}
