use clap::Parser;
use complexpr::{eval, Bindings};
use num_complex::Complex;

/// complexpr evaluates arithmetic expressions over complex numbers.
///
/// Without an expression it prints a few demonstration evaluations.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Binds a variable, e.g. `--var x=1+2i`. Repeatable.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, Complex<f64>)>,

    /// The expression to evaluate, e.g. "2 $x ^ (1 + i)".
    expression: Option<String>,
}

fn parse_binding(arg: &str) -> Result<(String, Complex<f64>), String> {
    let (name, value) = arg.split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{arg}'"))?;
    let value = value.trim().parse::<Complex<f64>>()
        .map_err(|e| format!("invalid complex value '{value}': {e}"))?;
    Ok((name.trim().trim_start_matches('$').to_string(), value))
}

fn run_demos() {
    let vars = Bindings::from_lists(&["x", "y"], &[Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)]);
    let demos = [
        ("log(-2) * i + 2 $x ^ ($y - 1)", &vars),
        ("-arcsin(2-i)", &Bindings::new()),
        ("abs(3 + 4i)", &Bindings::new()),
    ];

    for (expression, bindings) in demos {
        match eval(expression, bindings) {
            Ok(value) => println!("{expression} = {value}"),
            Err(e) => eprintln!("{expression}: {e}"),
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let Some(expression) = args.expression else {
        run_demos();
        return;
    };

    let mut bindings = Bindings::new();
    for (name, value) in &args.vars {
        bindings.push(name, *value);
    }

    match eval(&expression, &bindings) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
