//! Bucket occupancy report for the situation bucket index.

use std::path::Path;

use gridiron_analysis::session::PlaybookSession;
use gridiron_engine::{BUCKET_COUNT, SituationBucketIndex};
use gridiron_stats::{rate, summary::Summary};

use crate::data;

pub(crate) fn run(corpus: &Path) -> anyhow::Result<()> {
    let plays = data::read_corpus(corpus)?;
    let mut session = PlaybookSession::new(plays);
    let occupancy = Occupancy::new(session.index());

    println!("Bucket Index Occupancy ({BUCKET_COUNT} buckets)");
    println!("======================================\n");
    println!("Indexed plays:     {}", occupancy.plays);
    println!(
        "Occupied buckets:  {} ({:.2}%)",
        occupancy.occupied,
        rate::percentage(occupancy.occupied, occupancy.total())
    );
    println!("Empty buckets:     {}", occupancy.empty);
    match &occupancy.members {
        Some(members) => {
            println!("\nPlays per occupied bucket:");
            println!("    min:     {}", members.min);
            println!("    median:  {}", members.median);
            println!("    mean:    {:.2}", members.mean);
            println!("    max:     {}", members.max);
            println!("    std dev: {:.2}", members.std_dev);
        }
        None => println!("\nNo plays were indexed."),
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
struct Occupancy {
    plays: usize,
    occupied: u32,
    empty: u32,
    members: Option<Summary<u32>>,
}

impl Occupancy {
    fn new(index: &SituationBucketIndex) -> Self {
        let sizes = index
            .buckets()
            .map(|bucket| u32::try_from(bucket.len()).unwrap_or(u32::MAX))
            .collect::<Vec<_>>();
        let occupied = sizes.iter().filter(|&&size| size > 0).count();
        Self {
            plays: index.len(),
            occupied: u32::try_from(occupied).unwrap_or(u32::MAX),
            empty: u32::try_from(sizes.len() - occupied).unwrap_or(u32::MAX),
            members: Summary::new(sizes.into_iter().filter(|&size| size > 0)),
        }
    }

    fn total(&self) -> u32 {
        self.occupied + self.empty
    }
}
