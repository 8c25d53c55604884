//! `datacore::ranking` submodule implements [`Leaderboard`] - bounded table of best scores
//! that can be stored on disk.
//!

use log::warn;
use serde::{Deserialize, Serialize};

/// [`ScoreEntry`] struct is one line of [`Leaderboard`].
///
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScoreEntry {
    /// Name of player.
    ///
    pub name: String,
    /// Score of player.
    ///
    pub score: i64,
}

/// [`StoredLeaderboard`] struct is the form in which leaderboard is read from disk.
///
/// Stored data is not trusted: it is sorted and truncated before it becomes [`Leaderboard`].
///
#[derive(Deserialize)]
struct StoredLeaderboard {
    /// Maximal number of entries.
    ///
    capacity: usize,
    /// Entries in any order.
    ///
    entries: Vec<ScoreEntry>,
}

/// [`Leaderboard`] struct keeps the best scores in descending order.
///
/// Entries with equal scores keep the order in which they were submitted,
/// so the player who reached a score first stays above.
///
/// # Example
/// ```rust
/// # use ggpatterns::datacore::ranking::Leaderboard;
/// let mut leaderboard: Leaderboard = Leaderboard::new(3);
/// assert_eq!(leaderboard.submit("ann", 300), Some(0));
/// assert_eq!(leaderboard.submit("bob", 500), Some(0));
/// assert_eq!(leaderboard.submit("cid", 300), Some(2));
/// assert_eq!(leaderboard.submit("dan", 100), None);
///
/// assert_eq!(leaderboard.rank_of("ann"), Some(1));
/// assert_eq!(leaderboard.top(1)[0].name, "bob");
/// ```
///
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "StoredLeaderboard")]
pub struct Leaderboard {
    /// Maximal number of entries.
    ///
    capacity: usize,
    /// Entries sorted by descending score.
    ///
    entries: Vec<ScoreEntry>,
}
impl Leaderboard {
    /// Creates empty leaderboard that holds at most `capacity` entries.
    ///
    pub fn new(capacity: usize) -> Self {
        Leaderboard {
            capacity,
            entries: Vec::new(),
        }
    }

    /// Submits score and returns its rank (starting from 0) if it made it to the leaderboard.
    ///
    pub fn submit(&mut self, name: impl Into<String>, score: i64) -> Option<usize> {
        let rank: usize = self.entries.partition_point(|entry| entry.score >= score);
        if rank >= self.capacity {
            return None;
        }
        self.entries.insert(
            rank,
            ScoreEntry {
                name: name.into(),
                score,
            },
        );
        self.entries.truncate(self.capacity);
        Some(rank)
    }

    /// Returns all entries, the best first.
    ///
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }
    /// Returns at most `n` best entries.
    ///
    pub fn top(&self, n: usize) -> &[ScoreEntry] {
        &self.entries[..n.min(self.entries.len())]
    }
    /// Returns the best rank of player.
    ///
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }
    /// Returns the best score of player.
    ///
    pub fn best_of(&self, name: &str) -> Option<i64> {
        self.rank_of(name).map(|rank| self.entries[rank].score)
    }

    /// Returns maximal number of entries.
    ///
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    /// Returns number of entries.
    ///
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    /// Returns `true` if leaderboard has no entries, otherwise `false`.
    ///
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// Removes all entries.
    ///
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
impl From<StoredLeaderboard> for Leaderboard {
    fn from(stored: StoredLeaderboard) -> Self {
        let StoredLeaderboard {
            capacity,
            mut entries,
        } = stored;
        if !entries.windows(2).all(|pair| pair[0].score >= pair[1].score) {
            warn!("Stored leaderboard is not sorted, sorting it");
            entries.sort_by(|a, b| b.score.cmp(&a.score));
        }
        if entries.len() > capacity {
            warn!(
                "Stored leaderboard has {} entries but capacity of {}, truncating it",
                entries.len(),
                capacity
            );
            entries.truncate(capacity);
        }
        Leaderboard { capacity, entries }
    }
}
