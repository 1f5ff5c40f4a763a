use clap::Parser;
use distinction_io::persistence;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Snapshot file to verify
    #[arg(short, long, default_value = "logs/universe.json")]
    input: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    println!("Verifying universe snapshot {}...", args.input);

    let file = persistence::load_snapshot(&args.input)?;
    println!("Format version: {}", file.format_version);
    println!("Saved at:       {}", file.saved_at);
    println!("Distinctions:   {}", file.snapshot.distinction_count());
    println!("Relations:      {}", file.snapshot.relation_count());

    match persistence::restore_engine(&args.input) {
        Ok(engine) => {
            println!("Fingerprint:    {}", engine.fingerprint());
            println!("\n✅ VERIFICATION SUCCESSFUL!");
            println!("All structural invariants hold and the fingerprint matches.");
        }
        Err(e) => {
            println!("\n❌ VERIFICATION FAILED!");
            println!("{e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing_defaults() {
        let args = Args::parse_from(["verify"]);
        assert_eq!(args.input, "logs/universe.json");
    }

    #[test]
    fn test_args_parsing_custom_input() {
        let args = Args::parse_from(["verify", "--input", "logs/other.json"]);
        assert_eq!(args.input, "logs/other.json");
    }
}
