use core_2048::{Board, Score};

pub const MAX_UNDO_DEPTH: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub score: Score,
}

/// Fixed-capacity ring of snapshots. Pushing past capacity overwrites the oldest entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    slots: Box<[Option<Snapshot>]>,
    /// Slot the next push writes to.
    head: usize,
    len: usize,
}

impl History {
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity.max(1)].into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the evicted snapshot when the ring was already full.
    pub fn push(&mut self, snapshot: Snapshot) -> Option<Snapshot> {
        let evicted = self.slots[self.head].replace(snapshot);

        self.head = (self.head + 1) % self.capacity();
        self.len = (self.len + 1).min(self.capacity());

        evicted
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        if self.len == 0 {
            return None;
        }

        self.head = (self.head + self.capacity() - 1) % self.capacity();
        self.len -= 1;

        self.slots[self.head].take()
    }

    /// Snapshots from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> + '_ {
        let capacity = self.capacity();

        (1..=self.len)
            .filter_map(move |back| self.slots[(self.head + capacity - back) % capacity].as_ref())
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(score: Score) -> Snapshot {
        Snapshot {
            board: Board::default(),
            score,
        }
    }

    fn scores(history: &History) -> Vec<Score> {
        history.iter().map(|snapshot| snapshot.score).collect()
    }

    #[test]
    fn pops_newest_first() {
        let mut history = History::with_capacity(3);

        history.push(snapshot(1));
        history.push(snapshot(2));

        assert_eq!(scores(&history), vec![2, 1]);
        assert_eq!(history.pop().map(|s| s.score), Some(2));
        assert_eq!(history.pop().map(|s| s.score), Some(1));
        assert_eq!(history.pop(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn evicts_oldest_at_capacity() {
        let mut history = History::with_capacity(2);

        assert_eq!(history.push(snapshot(1)), None);
        assert_eq!(history.push(snapshot(2)), None);
        assert_eq!(history.push(snapshot(3)).map(|s| s.score), Some(1));

        assert_eq!(history.len(), 2);
        assert_eq!(scores(&history), vec![3, 2]);
    }

    #[test]
    fn wraps_after_pops() {
        let mut history = History::with_capacity(3);

        for score in 1..=5 {
            history.push(snapshot(score));
        }
        history.pop();
        history.push(snapshot(6));
        history.push(snapshot(7));

        assert_eq!(scores(&history), vec![7, 6, 4]);
    }

    #[test]
    fn zero_capacity_keeps_one() {
        let mut history = History::with_capacity(0);

        history.push(snapshot(1));
        history.push(snapshot(2));

        assert_eq!(history.capacity(), 1);
        assert_eq!(scores(&history), vec![2]);
    }

    #[test]
    fn clear_empties_every_slot() {
        let mut history = History::with_capacity(2);

        history.push(snapshot(1));
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.pop(), None);
        assert_eq!(history, History::with_capacity(2));
    }
}
