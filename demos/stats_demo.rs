use clap::Parser;
use clap::ValueEnum;
use robin_hash::AosStore;
use robin_hash::RobinHoodTable;
use robin_hash::SlotStore;
use robin_hash::SoaStore;
use robin_hash::TableConfig;
use robin_hash::TableError;
use robin_hash::strategy::Fnv1a;
use robin_hash::strategy::IntPrefixEq;
use robin_hash::strategy::LinearProbe;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Layout {
    Aos,
    Soa,
}

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'n', long = "entries", default_value_t = 100_000)]
    entries: u32,

    #[arg(long = "max-load", default_value_t = 0.75)]
    max_load_factor: f64,

    #[arg(long = "min-load", default_value_t = 0.25)]
    min_load_factor: f64,

    /// Fraction of entries removed again after filling.
    #[arg(short = 'r', long = "remove", default_value_t = 0.0)]
    remove_fraction: f64,

    #[arg(short = 'l', long = "layout", value_enum, default_value_t = Layout::Aos)]
    layout: Layout,
}

type DemoTable<S> = RobinHoodTable<[u8; 4], u32, Fnv1a, IntPrefixEq, LinearProbe, S>;

fn run<S: SlotStore<[u8; 4], u32>>(args: &Args) -> Result<(), TableError> {
    let config = TableConfig::new(args.max_load_factor, args.min_load_factor);
    let mut table: DemoTable<S> = RobinHoodTable::with_config(config)?;

    println!("Filling table with {} u32 keys...", args.entries);
    for k in 0..args.entries {
        table.insert(k.to_ne_bytes(), k)?;
    }
    println!(
        "Inserted {} entries, capacity {}, load factor {:.2}%",
        table.len(),
        table.capacity(),
        table.load_factor() * 100.0
    );

    let removals = (args.entries as f64 * args.remove_fraction.clamp(0.0, 1.0)) as u32;
    if removals > 0 {
        for k in 0..removals {
            table.remove(&k.to_ne_bytes())?;
        }
        println!(
            "Removed {} entries, capacity {}, load factor {:.2}%",
            removals,
            table.capacity(),
            table.load_factor() * 100.0
        );
    }

    table.print_probe_histogram();
    table.debug_stats().print();
    Ok(())
}

fn main() -> Result<(), TableError> {
    let args = Args::parse();

    match args.layout {
        Layout::Aos => run::<AosStore<[u8; 4], u32>>(&args),
        Layout::Soa => run::<SoaStore<[u8; 4], u32>>(&args),
    }
}
