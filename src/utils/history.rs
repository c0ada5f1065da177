/// Fixed-capacity FIFO ring buffer backing the point history and the
/// gesture-id history. Pushing at capacity evicts the oldest element;
/// there is no other removal operation. Single-writer by contract, the
/// orchestrator is the only mutator.
#[derive(Debug, Clone)]
pub struct HistoryBuffer<T> {
    items: Vec<T>,
    head: usize,
    capacity: usize,
}

impl<T: Clone> HistoryBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "history buffer capacity must be non-zero");
        HistoryBuffer {
            items: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        }
    }

    /// O(1); overwrites the oldest slot once the buffer is full.
    pub fn push(&mut self, item: T) {
        if self.items.len() < self.capacity {
            self.items.push(item);
        } else {
            self.items[self.head] = item;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    /// Current contents, oldest to newest.
    pub fn snapshot(&self) -> Vec<T> {
        let mut ordered = Vec::with_capacity(self.items.len());
        ordered.extend_from_slice(&self.items[self.head..]);
        ordered.extend_from_slice(&self.items[..self.head]);
        ordered
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
