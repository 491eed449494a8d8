use clap::{Parser, Subcommand};
use digest_bloom_rs::{
    BloomFilter, DIGEST_POOL, DigestAlgorithm, estimated_fpr,
    optimal_num_hashes, optimal_size_bits,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the canonical sample session (128 bits, 3 hash slots)
    Demo,

    /// Build a filter, insert items, then check items against it
    Run {
        /// Number of bit positions in the filter
        #[arg(short, long, default_value = "128")]
        size: usize,

        /// Number of hash evaluations per operation
        #[arg(long, default_value = "3")]
        hashes: usize,

        /// Items to insert
        #[arg(short, long)]
        add: Vec<String>,

        /// Items to check after the inserts
        #[arg(short, long)]
        query: Vec<String>,
    },

    /// Display derived statistics for a filter configuration
    Info {
        /// Number of bit positions in the filter
        #[arg(short, long, default_value = "128")]
        size: usize,

        /// Number of hash evaluations per operation
        #[arg(long, default_value = "3")]
        hashes: usize,

        /// Expected item count for the false-positive estimate
        #[arg(short, long)]
        items: Option<usize>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Demo => run_demo()?,
        Commands::Run {
            size,
            hashes,
            add,
            query,
        } => run_session(*size, *hashes, add, query)?,
        Commands::Info {
            size,
            hashes,
            items,
        } => print_info(*size, *hashes, *items),
    }

    Ok(())
}

fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    let mut filter = BloomFilter::with_params(128, 3)?;

    for item in ["apple", "banana", "cherry"] {
        filter.insert(item.as_bytes());
    }

    for item in ["apple", "banana", "cherry", "grape"] {
        report_membership(&filter, item);
    }

    Ok(())
}

fn run_session(
    size: usize,
    hashes: usize,
    add: &[String],
    query: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut filter = BloomFilter::with_params(size, hashes)?;

    for item in add {
        debug!("Inserting item: {}", item);
        filter.insert(item.as_bytes());
    }
    println!(
        "Inserted {} items into a {size}-bit filter with {hashes} hash slots",
        add.len()
    );

    for item in query {
        report_membership(&filter, item);
    }

    println!(
        "Bits set: {}/{} (fill ratio {:.2}%, estimated FPR {:.4}%)",
        filter.bits_set(),
        filter.size_bits(),
        filter.fill_ratio() * 100.0,
        filter.estimated_fpr() * 100.0
    );

    Ok(())
}

fn report_membership(filter: &BloomFilter, item: &str) {
    if filter.query(item.as_bytes()) {
        println!("'{item}' may be in the set.");
    } else {
        println!("'{item}' is definitely not in the set.");
    }
}

fn print_info(size: usize, hashes: usize, items: Option<usize>) {
    println!("Filter configuration:");
    println!("  Size: {size} bits");
    println!("  Buffer: {}", bytes2hr(size.div_ceil(8)));
    println!("  Hash slots: {hashes}");

    println!("  Slot to digest mapping:");
    for slot in 0..hashes.min(DIGEST_POOL.len()) {
        let algo = DigestAlgorithm::for_slot(slot);
        println!(
            "    slot {slot}: {} ({} byte digest)",
            algo.name(),
            algo.output_len()
        );
    }
    if hashes > DIGEST_POOL.len() {
        println!(
            "    slots {}..{} cycle back through the pool",
            DIGEST_POOL.len(),
            hashes
        );
    }

    if let Some(n) = items {
        println!("\nAt {n} inserted items:");
        println!(
            "  Estimated false-positive rate: {:.4}%",
            estimated_fpr(size, n, hashes) * 100.0
        );

        let optimal_m = optimal_size_bits(n, 0.01);
        let optimal_k = optimal_num_hashes(n, optimal_m);
        println!(
            "  For a 1% target rate: {optimal_m} bits ({}) with {optimal_k} hash slots",
            bytes2hr(optimal_m.div_ceil(8))
        );
    }
}

fn bytes2hr(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{bytes} bytes")
    } else if bytes < 1024 * 1024 {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
