use common::types::VertexId;

/// A single in-flight message: a destination vertex and a payload for its
/// [`crate::program::VertexProgram::process_message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message<T> {
    pub dest_id: VertexId,
    pub payload: T,
}

/// Marks an outbox/inbox slot past the live prefix as unused. Analogous to
/// the reference design's `dest_id = -1` null entry; `VertexId` is unsigned
/// here, so the sentinel is the id space's maximum instead of `-1`.
pub const NULL_DEST: VertexId = VertexId::MAX;

/// Double-buffered message queues sized once, at engine construction, to the
/// graph's edge count — the maximum number of messages a single superstep
/// can produce. No reallocation happens after that; WRITE and PROCESS only
/// ever write within `0..num_messages`, and slots beyond that are logically
/// unused garbage (pre-filled with a null entry at construction, never read).
#[derive(Debug, Clone)]
pub struct MessageQueues<T> {
    outbox: Vec<Message<T>>,
    inbox: Vec<Message<T>>,
    num_messages: usize,
}

impl<T: Copy + Default> MessageQueues<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        let null = Message {
            dest_id: NULL_DEST,
            payload: T::default(),
        };
        Self {
            outbox: vec![null; capacity],
            inbox: vec![null; capacity],
            num_messages: 0,
        }
    }
}

impl<T: Copy> MessageQueues<T> {
    pub fn capacity(&self) -> usize {
        self.outbox.len()
    }

    pub fn len(&self) -> usize {
        self.num_messages
    }

    pub fn is_empty(&self) -> bool {
        self.num_messages == 0
    }

    /// Appends to the outbox at the current cursor and advances it.
    ///
    /// # Panics
    /// Panics if called more times in a superstep than the queue's capacity
    /// allows, which would mean a vertex program sent more messages than
    /// there are edges in the graph — a bug in the program, not a condition
    /// callers are expected to recover from.
    pub fn push(&mut self, msg: Message<T>) {
        self.outbox[self.num_messages] = msg;
        self.num_messages += 1;
    }

    /// Copies the live prefix of the outbox into the inbox. The outbox
    /// cursor (`num_messages`) is left unchanged by this step; PROCESS reads
    /// the same count from the inbox, and WRITE resets it once done.
    pub fn deliver(&mut self) {
        self.inbox[..self.num_messages].copy_from_slice(&self.outbox[..self.num_messages]);
    }

    pub fn inbox(&self) -> &[Message<T>] {
        &self.inbox[..self.num_messages]
    }

    /// Resets the cursor to 0, ready for the next WRITE phase to refill the
    /// outbox from scratch.
    pub fn reset(&mut self) {
        self.num_messages = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let q: MessageQueues<i32> = MessageQueues::with_capacity(4);
        assert_eq!(q.len(), 0);
        assert!(q.is_empty());
        assert_eq!(q.capacity(), 4);
    }

    #[test]
    fn push_then_deliver_round_trips() {
        let mut q: MessageQueues<i32> = MessageQueues::with_capacity(4);
        q.push(Message {
            dest_id: 2,
            payload: 9,
        });
        q.push(Message {
            dest_id: 0,
            payload: 1,
        });
        assert_eq!(q.len(), 2);
        q.deliver();
        let inbox: Vec<_> = q.inbox().to_vec();
        assert_eq!(inbox[0].dest_id, 2);
        assert_eq!(inbox[0].payload, 9);
        assert_eq!(inbox[1].dest_id, 0);
        assert_eq!(inbox[1].payload, 1);
    }

    #[test]
    fn reset_clears_count_but_not_capacity() {
        let mut q: MessageQueues<i32> = MessageQueues::with_capacity(4);
        q.push(Message {
            dest_id: 0,
            payload: 1,
        });
        q.reset();
        assert_eq!(q.len(), 0);
        assert_eq!(q.capacity(), 4);
    }

    #[test]
    #[should_panic]
    fn push_past_capacity_panics() {
        let mut q: MessageQueues<i32> = MessageQueues::with_capacity(1);
        q.push(Message {
            dest_id: 0,
            payload: 1,
        });
        q.push(Message {
            dest_id: 0,
            payload: 1,
        });
    }
}
