//! A chain of queues that can be merged into its first queue.

use crate::list::{Iter, IterMut, List};
use crate::queue::{ElementAllocator, Global, Queue};
use tracing::debug;

/// A queue registered in a [`QueueChain`], with its cached size and id.
#[derive(Debug)]
pub struct QueueContext<A: ElementAllocator = Global> {
    queue: Queue<A>,
    size: usize,
    id: usize,
}

impl<A: ElementAllocator> QueueContext<A> {
    pub fn id(&self) -> usize {
        self.id
    }

    /// The size recorded by the last push, merge or refresh.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn queue(&self) -> &Queue<A> {
        &self.queue
    }

    /// Mutable access to the queue. The cached size is not updated; call
    /// [`QueueChain::refresh_sizes`] afterwards if it matters.
    pub fn queue_mut(&mut self) -> &mut Queue<A> {
        &mut self.queue
    }
}

/// An ordered chain of queues.
///
/// # Examples
///
/// ```
/// use cyclic_queue::{Queue, QueueChain};
///
/// let groups: [&[&str]; 3] = [&["1", "4"], &["2"], &["3", "5"]];
/// let mut chain = QueueChain::new();
/// for values in groups.iter() {
///     let mut queue = Queue::new();
///     for value in values.iter() {
///         queue.insert_tail(value).unwrap();
///     }
///     chain.push(queue);
/// }
///
/// assert_eq!(chain.merge_all(), 5);
/// let sizes: Vec<usize> = chain.iter().map(|ctx| ctx.size()).collect();
/// assert_eq!(sizes, [5, 0, 0]);
/// ```
#[derive(Debug)]
pub struct QueueChain<A: ElementAllocator = Global> {
    chain: List<QueueContext<A>>,
    next_id: usize,
}

impl<A: ElementAllocator> Default for QueueChain<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ElementAllocator> QueueChain<A> {
    pub fn new() -> Self {
        Self {
            chain: List::new(),
            next_id: 0,
        }
    }

    /// Append `queue` to the chain and return the id given to it.
    pub fn push(&mut self, queue: Queue<A>) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        let size = queue.size();
        self.chain.push_back(QueueContext { queue, size, id });
        id
    }

    /// Number of queues in the chain.
    pub fn len(&self) -> usize {
        self.chain.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, QueueContext<A>> {
        self.chain.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, QueueContext<A>> {
        self.chain.iter_mut()
    }

    /// Recount every queue and update the cached sizes.
    pub fn refresh_sizes(&mut self) {
        for ctx in self.chain.iter_mut() {
            ctx.size = ctx.queue.size();
        }
    }

    /// Merge every queue into the first one, in chain order, and return the
    /// size of the result. Each queue must be sorted in ascending order.
    ///
    /// The other queues stay in the chain, empty and with a cached size of 0.
    /// An empty chain gives 0.
    pub fn merge_all(&mut self) -> usize {
        let mut contexts = self.chain.iter_mut();
        let leader = match contexts.next() {
            Some(leader) => leader,
            None => return 0,
        };
        let mut merged = 1;
        for ctx in contexts {
            leader.queue.merge(&mut ctx.queue);
            ctx.size = 0;
            merged += 1;
        }
        leader.size = leader.queue.size();
        debug!(
            leader = leader.id,
            queues = merged,
            size = leader.size,
            "merged queue chain"
        );
        leader.size
    }
}
