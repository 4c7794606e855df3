//! The suspect ledger: a chained hash table from clue to suspect
//!
//! Fixed bucket count, separate chaining. Entries are prepended to their
//! bucket chain, so when the same clue is linked twice the most recent
//! entry shadows the older one on lookup.

use serde::{Deserialize, Serialize};

/// Number of bucket slots. The table never resizes.
pub const BUCKET_COUNT: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LinkEntry {
    clue: String,
    suspect: String,
    next: Option<Box<LinkEntry>>,
}

/// Clue -> suspect relations for the case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspectLedger {
    buckets: Vec<Option<Box<LinkEntry>>>,
    len: usize,
}

/// How strongly one suspect is implicated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectTally {
    pub suspect: String,
    pub clue_count: usize,
}

/// Byte sum of the key, reduced modulo the bucket count
fn bucket_for(key: &str) -> usize {
    key.bytes().map(usize::from).sum::<usize>() % BUCKET_COUNT
}

impl Default for SuspectLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl SuspectLedger {
    pub fn new() -> Self {
        Self {
            buckets: (0..BUCKET_COUNT).map(|_| None).collect(),
            len: 0,
        }
    }

    /// Record that a clue implicates a suspect. No duplicate check: a
    /// re-linked clue shadows its older entry.
    pub fn insert(&mut self, clue: &str, suspect: &str) {
        let slot = &mut self.buckets[bucket_for(clue)];
        let next = slot.take();
        *slot = Some(Box::new(LinkEntry {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
            next,
        }));
        self.len += 1;
    }

    /// The suspect a clue points at, if the clue is on file
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        let mut entry = self.buckets[bucket_for(clue)].as_deref();
        while let Some(current) = entry {
            if current.clue == clue {
                return Some(current.suspect.as_str());
            }
            entry = current.next.as_deref();
        }
        None
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every (clue, suspect) link, bucket by bucket, most recent first
    /// within a bucket. Every call starts a fresh pass.
    pub fn iter(&self) -> Links<'_> {
        Links {
            buckets: &self.buckets,
            current: None,
            next_bucket: 0,
        }
    }

    /// Clue counts per suspect, in the order suspects first appear during
    /// a full scan of the table
    pub fn rank_suspects(&self) -> Vec<SuspectTally> {
        let mut tallies: Vec<SuspectTally> = Vec::new();
        for (_, suspect) in self.iter() {
            match tallies.iter_mut().find(|tally| tally.suspect == suspect) {
                Some(tally) => tally.clue_count += 1,
                None => tallies.push(SuspectTally {
                    suspect: suspect.to_string(),
                    clue_count: 1,
                }),
            }
        }
        tallies
    }

    /// The suspect with strictly the most clues. On a tie the suspect
    /// seen first keeps the title. None when nothing is on file.
    pub fn prime_suspect(&self) -> Option<SuspectTally> {
        let mut prime: Option<SuspectTally> = None;
        for tally in self.rank_suspects() {
            let ahead = prime
                .as_ref()
                .map_or(true, |current| tally.clue_count > current.clue_count);
            if ahead {
                prime = Some(tally);
            }
        }
        prime
    }
}

/// Lazy walk over all bucket chains
pub struct Links<'a> {
    buckets: &'a [Option<Box<LinkEntry>>],
    current: Option<&'a LinkEntry>,
    next_bucket: usize,
}

impl<'a> Iterator for Links<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current {
                self.current = entry.next.as_deref();
                return Some((entry.clue.as_str(), entry.suspect.as_str()));
            }
            if self.next_bucket >= self.buckets.len() {
                return None;
            }
            self.current = self.buckets[self.next_bucket].as_deref();
            self.next_bucket += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashing_is_deterministic() {
        assert_eq!(bucket_for("Veneno"), bucket_for("Veneno"));
        // V + e + n + e + n + o = 619
        assert_eq!(bucket_for("Veneno"), 9);
    }

    #[test]
    fn lookup_finds_exactly_what_was_linked() {
        let mut ledger = SuspectLedger::new();
        ledger.insert("Carta Rasgada", "Sr. Black");
        ledger.insert("Copo de Vinho", "Sra. Scarlet");

        assert_eq!(ledger.lookup("Carta Rasgada"), Some("Sr. Black"));
        assert_eq!(ledger.lookup("Copo de Vinho"), Some("Sra. Scarlet"));
        assert_eq!(ledger.lookup("Pista Inexistente"), None);
    }

    #[test]
    fn colliding_keys_share_a_bucket_most_recent_first() {
        // "abc" and "cab" have the same byte sum, so they must collide
        let mut ledger = SuspectLedger::new();
        assert_eq!(bucket_for("abc"), bucket_for("cab"));

        ledger.insert("abc", "Sr. Black");
        ledger.insert("cab", "Sra. Scarlet");

        assert_eq!(ledger.lookup("abc"), Some("Sr. Black"));
        assert_eq!(ledger.lookup("cab"), Some("Sra. Scarlet"));

        let chain: Vec<_> = ledger.iter().collect();
        assert_eq!(chain, [("cab", "Sra. Scarlet"), ("abc", "Sr. Black")]);
    }

    #[test]
    fn relinking_a_clue_shadows_the_older_entry() {
        let mut ledger = SuspectLedger::new();
        ledger.insert("Veneno", "Sra. Peacock");
        ledger.insert("Veneno", "Prof. Plum");

        assert_eq!(ledger.lookup("Veneno"), Some("Prof. Plum"));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn first_seen_suspect_keeps_the_title_on_a_tie() {
        // Single-letter clues land in distinct known buckets:
        // "d" -> 0, "a" -> 7, "b" -> 8, "c" -> 9, so the scan meets the
        // first suspect's clues before the second's.
        let mut ledger = SuspectLedger::new();
        ledger.insert("d", "Sr. Black");
        ledger.insert("b", "Sra. Scarlet");
        ledger.insert("a", "Sr. Black");
        ledger.insert("c", "Sra. Scarlet");

        let prime = ledger.prime_suspect().unwrap();
        assert_eq!(prime.suspect, "Sr. Black");
        assert_eq!(prime.clue_count, 2);
    }

    #[test]
    fn ranking_counts_in_first_seen_order() {
        let mut ledger = SuspectLedger::new();
        ledger.insert("d", "Sr. Black");
        ledger.insert("a", "Sra. Scarlet");
        ledger.insert("b", "Sr. Black");

        let tallies = ledger.rank_suspects();
        assert_eq!(tallies.len(), 2);
        assert_eq!(tallies[0].suspect, "Sr. Black");
        assert_eq!(tallies[0].clue_count, 2);
        assert_eq!(tallies[1].suspect, "Sra. Scarlet");
        assert_eq!(tallies[1].clue_count, 1);
    }

    #[test]
    fn empty_ledger_accuses_nobody() {
        let ledger = SuspectLedger::new();
        assert!(ledger.is_empty());
        assert!(ledger.rank_suspects().is_empty());
        assert_eq!(ledger.prime_suspect(), None);
    }
}
