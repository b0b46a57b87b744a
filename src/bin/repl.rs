use dice_stats::roll::{MarkdownStringifier, Stringify};
use dice_stats::stats::DEFAULT_HISTOGRAM_BINS;
use dice_stats::{Pick, RollConfig};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
r <expr>          roll once, e.g. `r 3d6 + 2`
rs [-a<k>] <expr> simulate, e.g. `rs -a3 4d6kh3`
e <n> <s> [h|l]   expected highest (default) or lowest of n dice with s sides";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dice_stats=info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = RollConfig::from_env();
    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match run(line.trim(), &config) {
            Ok(out) => println!("{}", out),
            Err(why) => eprintln!("Error: {}", why),
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}

fn run(line: &str, config: &RollConfig) -> Result<String, Box<dyn std::error::Error>> {
    let (command, body) = line.split_once(' ').unwrap_or((line, ""));
    let mut out = match command {
        "r" => {
            let roll = dice_stats::roll(body, config)?;
            MarkdownStringifier::new().stringify(&roll)
        }
        "rs" => {
            let dist = dice_stats::roll_stats(body, None, config)?;
            let mut out = format!(
                "{}\nmean {:.4}  variance {:.4}  stddev {:.4}",
                dist.title(),
                dist.mean(),
                dist.variance(),
                dist.stddev()
            );
            for bin in dist.histogram(DEFAULT_HISTOGRAM_BINS) {
                out.push_str(&format!(
                    "\n{:>9.2} .. {:<9.2} {:>7} {:.4}",
                    bin.lower, bin.upper, bin.count, bin.density
                ));
            }
            out
        }
        "e" => {
            let args: Vec<_> = body.split_whitespace().collect();
            let (n, s, pick) = match args.as_slice() {
                [n, s] => (n, s, Pick::Highest),
                [n, s, "h"] => (n, s, Pick::Highest),
                [n, s, "l"] => (n, s, Pick::Lowest),
                _ => return Err(HELP.into()),
            };
            dice_stats::expected_value(n.parse()?, s.parse()?, pick)?.to_string()
        }
        "" => return Ok(String::new()),
        _ => return Err(HELP.into()),
    };
    if let Some(credit) = &config.credit {
        out.push_str(&format!("\nPowered by {}", credit));
    }
    Ok(out)
}
