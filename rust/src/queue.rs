//! Circular FIFO queue.
//!
//! The ring doubles when fewer than two slots are free and halves once it is
//! less than a quarter full; an emptied queue drops back to [`INIT_SIZE`].

/// Capacity of a new or emptied queue.
pub const INIT_SIZE: usize = 10;

/// First-in first-out queue over a ring buffer.
///
/// # Examples
///
/// ```
/// use primehash::Queue;
///
/// let mut q = Queue::new();
/// q.enqueue(1);
/// q.enqueue(2);
/// assert_eq!(q.peek_front(), Some(&1));
/// assert_eq!(q.dequeue(), Some(1));
/// assert_eq!(q.dequeue(), Some(2));
/// assert_eq!(q.dequeue(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Queue<T> {
    slots: Vec<Option<T>>,
    front: usize,
    len: usize,
}

impl<T> Queue<T> {
    /// Creates an empty queue with [`INIT_SIZE`] slots.
    pub fn new() -> Self {
        Self {
            slots: empty_slots(INIT_SIZE),
            front: 0,
            len: 0,
        }
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the ring.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Appends `value` at the back.
    pub fn enqueue(&mut self, value: T) {
        if self.capacity() - self.len <= 1 {
            self.resize(self.capacity() * 2);
        }
        let rear = (self.front + self.len) % self.capacity();
        self.slots[rear] = Some(value);
        self.len += 1;
    }

    /// Removes and returns the front element.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        self.try_shrink();
        value
    }

    /// Returns the front element without removing it.
    pub fn peek_front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    /// Drops every element and returns to [`INIT_SIZE`] slots.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.front = 0;
        self.len = 0;
        self.try_shrink();
    }

    /// Iterates front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let capacity = self.capacity();
        (0..self.len).filter_map(move |i| self.slots[(self.front + i) % capacity].as_ref())
    }

    fn try_shrink(&mut self) {
        if self.is_empty() {
            self.resize(INIT_SIZE);
        } else if self.capacity() > INIT_SIZE && self.capacity() / 4 > self.len {
            self.resize(self.capacity() / 2);
        }
    }

    /// Moves the queued elements into a ring of `capacity` slots.
    ///
    /// Leaves the queue untouched if `capacity` would not hold every element.
    fn resize(&mut self, capacity: usize) {
        if capacity < self.len || capacity == self.capacity() {
            return;
        }
        log::debug!(
            "queue resizing from {} to {} slots (len {})",
            self.capacity(),
            capacity,
            self.len
        );
        let old_capacity = self.capacity();
        let mut slots = empty_slots(capacity);
        for (i, slot) in slots.iter_mut().take(self.len).enumerate() {
            *slot = self.slots[(self.front + i) % old_capacity].take();
        }
        self.slots = slots;
        self.front = 0;
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order_across_wraparound() {
        let mut q = Queue::new();
        for i in 0..6 {
            q.enqueue(i);
        }
        for i in 0..4 {
            assert_eq!(q.dequeue(), Some(i));
        }
        for i in 6..12 {
            q.enqueue(i);
        }
        let drained: Vec<_> = std::iter::from_fn(|| q.dequeue()).collect();
        assert_eq!(drained, (4..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_grows_before_last_free_slot() {
        let mut q = Queue::new();
        for i in 0..9 {
            q.enqueue(i);
        }
        assert_eq!(q.capacity(), INIT_SIZE);
        q.enqueue(9);
        assert_eq!(q.capacity(), 20);
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_shrinks_when_sparse() {
        let mut q = Queue::new();
        q.extend(0..40);
        assert_eq!(q.capacity(), 80);
        while q.len() > 19 {
            q.dequeue();
        }
        assert_eq!(q.capacity(), 40);
        assert_eq!(q.peek_front(), Some(&21));
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.capacity(), INIT_SIZE);
    }

    #[test]
    fn test_clear_then_reuse_small_queue() {
        let mut q = Queue::new();
        q.extend(0..3);
        q.clear();
        assert_eq!(q.capacity(), INIT_SIZE);
        q.extend(5..8);
        assert_eq!(q.dequeue(), Some(5));
        assert_eq!(q.capacity(), INIT_SIZE);
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![6, 7]);
    }

    #[test]
    fn test_empty_queue() {
        let mut q: Queue<String> = Queue::new();
        assert_eq!(q.peek_front(), None);
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.iter().count(), 0);
    }
}
