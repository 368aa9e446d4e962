// crates/engine/src/stats.rs
use corpus_count_shared_kernel::UnitCount;
use hashbrown::{DefaultHashBuilder, HashMap};
use parking_lot::RwLock;
use std::cmp::Reverse;
use std::fmt;
use std::hash::BuildHasher;
use std::sync::atomic::{AtomicU64, Ordering};

const DEFAULT_SHARDS: usize = 32;

/// The four frequency views kept per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Every raw unit.
    Universal,
    /// Raw units whose token is not in the remove set.
    Removed,
    /// Every swapped unit.
    Swapped,
    /// Swapped units whose token is not in the remove set.
    Both,
}

impl View {
    pub const ALL: [Self; 4] = [Self::Universal, Self::Removed, Self::Swapped, Self::Both];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Universal => "raw",
            Self::Removed => "removed",
            Self::Swapped => "swapped",
            Self::Both => "both",
        }
    }
}

/// One ranked entry of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub key: String,
    pub count: u64,
}

/// A string -> count map that tolerates concurrent increments.
///
/// Keys are spread over independently locked shards. Existing keys are bumped
/// under a read lock; only the first insertion of a key takes the write lock.
pub struct FrequencyView {
    hasher: DefaultHashBuilder,
    shards: Box<[RwLock<HashMap<String, AtomicU64>>]>,
}

impl fmt::Debug for FrequencyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrequencyView")
            .field("shards", &self.shards.len())
            .field("keys", &self.len())
            .finish()
    }
}

impl Default for FrequencyView {
    fn default() -> Self {
        Self::with_shards(DEFAULT_SHARDS)
    }
}

impl FrequencyView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shards(shards: usize) -> Self {
        Self {
            hasher: DefaultHashBuilder::default(),
            shards: (0..shards.max(1))
                .map(|_| RwLock::new(HashMap::new()))
                .collect(),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn shard(&self, key: &str) -> &RwLock<HashMap<String, AtomicU64>> {
        let idx = self.hasher.hash_one(key) as usize % self.shards.len();
        &self.shards[idx]
    }

    /// Adds one to `key`. Empty keys are ignored.
    pub fn increment(&self, key: &str) {
        if key.is_empty() {
            return;
        }

        let shard = self.shard(key);
        if let Some(counter) = shard.read().get(key) {
            counter.fetch_add(1, Ordering::Relaxed);
            return;
        }

        // Another writer may have inserted the key between the two locks.
        shard
            .write()
            .entry(key.to_owned())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self, key: &str) -> u64 {
        self.shard(key)
            .read()
            .get(key)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.read().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|s| s.read().is_empty())
    }

    /// Sum of all counts in the view.
    pub fn sum(&self) -> u64 {
        self.shards
            .iter()
            .map(|s| {
                s.read()
                    .values()
                    .map(|c| c.load(Ordering::Relaxed))
                    .sum::<u64>()
            })
            .sum()
    }

    /// Entries by descending count, ties by ascending key.
    pub fn ranked(&self) -> Vec<Unit> {
        let mut units: Vec<Unit> = self
            .shards
            .iter()
            .flat_map(|s| {
                s.read()
                    .iter()
                    .map(|(k, c)| Unit {
                        key: k.clone(),
                        count: c.load(Ordering::Relaxed),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        units.sort_by(|a, b| {
            (Reverse(a.count), a.key.as_str()).cmp(&(Reverse(b.count), b.key.as_str()))
        });
        units
    }
}

/// Point-in-time totals of a [`Stats`] bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub universal: UnitCount,
    /// Raw units dropped because their token is in the remove set.
    pub filtered: UnitCount,
    pub swapped: UnitCount,
    pub both: UnitCount,
}

impl Totals {
    /// The denominator of each view's percentages.
    pub fn of(&self, view: View) -> UnitCount {
        match view {
            View::Universal => self.universal,
            View::Removed => self.universal - self.filtered,
            View::Swapped => self.swapped,
            View::Both => self.both,
        }
    }
}

/// Frequency views and running totals for one dimension (words or letters).
#[derive(Debug, Default)]
pub struct Stats {
    universal: FrequencyView,
    removed: FrequencyView,
    swapped: FrequencyView,
    both: FrequencyView,

    count: AtomicU64,
    count_filtered: AtomicU64,
    count_swapped: AtomicU64,
    count_both: AtomicU64,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of a unit.
    ///
    /// `raw` feeds the universal and removed views, `swapped` feeds the
    /// swapped and both views. Either may be empty, in which case its half is
    /// skipped, which lets letters count the raw and swapped character streams
    /// separately.
    pub fn increment(&self, raw: &str, swapped: &str, removed: bool) {
        if !raw.is_empty() {
            self.count.fetch_add(1, Ordering::Relaxed);
            self.universal.increment(raw);

            if removed {
                self.count_filtered.fetch_add(1, Ordering::Relaxed);
            } else {
                self.removed.increment(raw);
            }
        }

        if !swapped.is_empty() {
            self.count_swapped.fetch_add(1, Ordering::Relaxed);
            self.swapped.increment(swapped);

            if !removed {
                self.count_both.fetch_add(1, Ordering::Relaxed);
                self.both.increment(swapped);
            }
        }
    }

    pub fn view(&self, view: View) -> &FrequencyView {
        match view {
            View::Universal => &self.universal,
            View::Removed => &self.removed,
            View::Swapped => &self.swapped,
            View::Both => &self.both,
        }
    }

    pub fn totals(&self) -> Totals {
        Totals {
            universal: UnitCount::new(self.count.load(Ordering::Relaxed)),
            filtered: UnitCount::new(self.count_filtered.load(Ordering::Relaxed)),
            swapped: UnitCount::new(self.count_swapped.load(Ordering::Relaxed)),
            both: UnitCount::new(self.count_both.load(Ordering::Relaxed)),
        }
    }
}
