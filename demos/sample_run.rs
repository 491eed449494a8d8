//! The canonical sample session: a small filter, three fruit inserted,
//! four membership checks.

use digest_bloom_rs::BloomFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut filter = BloomFilter::with_params(128, 3)?;

    for item in ["apple", "banana", "cherry"] {
        filter.insert(item.as_bytes());
    }

    for item in ["apple", "banana", "cherry", "grape"] {
        if filter.query(item.as_bytes()) {
            println!("'{item}' may be in the set.");
        } else {
            println!("'{item}' is definitely not in the set.");
        }
    }

    println!("\n{filter:?}");

    Ok(())
}
