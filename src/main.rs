use anyhow::Result;
use clap::Parser;
use distinction_core::{init_logging, PRIMORDIAL_ONE, PRIMORDIAL_ZERO};
use distinction_data::DistinctionId;
use distinction_lib::app::App;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run in
    #[arg(short, long, value_enum, default_value = "grow")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Snapshot path override (grow) or snapshot to read (inspect)
    #[arg(short, long)]
    snapshot: Option<String>,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Grow,
    Inspect,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    match args.mode {
        Mode::Grow => {
            let mut app = App::from_config_file(&args.config)?;
            if let Some(path) = args.snapshot {
                app.config.output.snapshot_path = path;
            }
            app.run()?;
            println!("Growth run finished.");
            println!("Distinctions: {}", app.engine.distinction_count());
            println!("Relations:    {}", app.engine.relation_count());
            println!("Fingerprint:  {}", app.engine.fingerprint());
            println!("Snapshot:     {}", app.config.output.snapshot_path);
        }
        Mode::Inspect => {
            let path = args
                .snapshot
                .unwrap_or_else(|| "logs/universe.json".to_string());
            let file = distinction_io::load_snapshot(&path)?;
            println!("Snapshot {path}");
            println!("Format version: {}", file.format_version);
            println!("Saved at:       {}", file.saved_at);
            println!("Fingerprint:    {}", file.fingerprint);
            println!("Distinctions:   {}", file.snapshot.distinction_count());
            println!("Relations:      {}", file.snapshot.relation_count());
            for primordial in [PRIMORDIAL_ZERO, PRIMORDIAL_ONE] {
                let present = file.snapshot.contains(&DistinctionId::new(primordial));
                println!(
                    "Primordial {primordial}:   {}",
                    if present { "present" } else { "MISSING" }
                );
            }
        }
    }

    Ok(())
}
