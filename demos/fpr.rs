//! False-positive growth analysis: fill one filter in steps and compare
//! the measured rate against the theoretical estimate at each step.

use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Table,
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
};
use digest_bloom_rs::{BloomFilter, estimated_fpr};

const SIZE_BITS: usize = 100_000;
const NUM_HASHES: usize = 5;
const CAPACITY: usize = 10_000;
const TEST_SAMPLES: usize = 10_000;
const FILL_STEPS: usize = 10;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Bloom Filter FPR Growth Analysis\n");
    println!("Configuration:");
    println!("  • Size: {SIZE_BITS} bits");
    println!("  • Hash slots: {NUM_HASHES}");
    println!("  • Test samples for FPR measurement: {TEST_SAMPLES}");

    let mut filter = BloomFilter::with_params(SIZE_BITS, NUM_HASHES)?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Fill Ratio").set_alignment(CellAlignment::Center),
            Cell::new("Elements").set_alignment(CellAlignment::Center),
            Cell::new("Theoretical FPR").set_alignment(CellAlignment::Center),
            Cell::new("Measured FPR").set_alignment(CellAlignment::Center),
            Cell::new("FPR Ratio").set_alignment(CellAlignment::Center),
        ]);

    // Disjoint corpora by construction: inserted items and probe items
    // share no prefix.
    let all_elements: Vec<String> =
        (0..CAPACITY).map(|i| format!("element_{i:06}")).collect();
    let test_elements: Vec<String> =
        (0..TEST_SAMPLES).map(|i| format!("unknown_{i:06}")).collect();

    println!("Running tests for different fill ratios...");

    let mut inserted_count = 0;
    for step in 1..=FILL_STEPS {
        let fill_ratio = step as f64 / FILL_STEPS as f64;
        let total_elements = (CAPACITY as f64 * fill_ratio) as usize;

        for element in &all_elements[inserted_count..total_elements] {
            filter.insert(element.as_bytes());
        }
        inserted_count = total_elements;

        let theoretical_fpr =
            estimated_fpr(SIZE_BITS, total_elements, NUM_HASHES);

        let false_positives = test_elements
            .iter()
            .filter(|element| filter.query(element.as_bytes()))
            .count();
        let measured_fpr = false_positives as f64 / test_elements.len() as f64;

        let fpr_ratio = if theoretical_fpr > 0.0 {
            measured_fpr / theoretical_fpr
        } else {
            0.0
        };

        table.add_row(vec![
            Cell::new(format!("{:.0}%", fill_ratio * 100.0)),
            Cell::new(format!("{total_elements}")),
            Cell::new(format!("{:.6}%", theoretical_fpr * 100.0)),
            Cell::new(format!("{:.6}%", measured_fpr * 100.0)),
            Cell::new(format!("{fpr_ratio:.2}x")),
        ]);
    }

    println!("\nResults:");
    println!("{table}");

    println!("\nAnalysis:");
    println!(
        "1. As the fill ratio increases, the false positive rate grows exponentially"
    );
    println!(
        "2. The theoretical model generally predicts the measured behavior well"
    );
    println!(
        "3. Keeping the bit array several times larger than the item count keeps the rate low"
    );

    Ok(())
}
