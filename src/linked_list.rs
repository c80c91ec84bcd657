//! A doubly linked list that flattens all its nodes onto a Vec for storage,
//! gaining data locality and O(1) access by handle. The ordered map keeps its
//! entries in one of these, which makes the list both the insertion order and
//! the single owner of every entry.

/// Alias for the index of a node in the linked list's storage vec.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NodeHandle(usize);

/// A node that lives in a linked list.
struct Node<T> {
    /// The value being stored.
    value: T,

    /// The node before this one, None at the head.
    prev: Option<NodeHandle>,

    /// The node after this one, None at the tail.
    next: Option<NodeHandle>,
}

#[cold]
#[inline(never)]
fn freed_slot() -> ! {
    panic!("linked list handle points at a freed slot");
}

/// Nodes are addressed by their position in a single contiguous Vec. Slots
/// of removed nodes are emptied and freelisted, to be reused by later pushes.
/// There is no compaction.
///
/// Handing NodeHandles out of the list is what lets the map keep a second
/// structure (its bucket chains) pointing at the very same nodes.
pub(crate) struct LinkedList<T> {
    /// The nodes in the list. None marks a slot on the freelist.
    store: Vec<Option<Node<T>>>,

    /// Slots in the store which aren't in use anymore. These will be reused.
    free: Vec<NodeHandle>,

    /// The first node in the list.
    head: Option<NodeHandle>,

    /// The last node in the list.
    tail: Option<NodeHandle>,
}

impl<T> LinkedList<T> {
    /// Creates a new linked list with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            store: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// The length of this linked list.
    pub(crate) fn len(&self) -> usize {
        self.store.len() - self.free.len()
    }

    pub(crate) fn head(&self) -> Option<NodeHandle> {
        self.head
    }

    pub(crate) fn tail(&self) -> Option<NodeHandle> {
        self.tail
    }

    fn node(&self, handle: NodeHandle) -> &Node<T> {
        match self.store.get(handle.0) {
            Some(Some(node)) => node,
            _ => freed_slot(),
        }
    }

    fn node_mut(&mut self, handle: NodeHandle) -> &mut Node<T> {
        match self.store.get_mut(handle.0) {
            Some(Some(node)) => node,
            _ => freed_slot(),
        }
    }

    /// Gets the value stored at a handle.
    pub(crate) fn get(&self, handle: NodeHandle) -> &T {
        &self.node(handle).value
    }

    /// Gets the value stored at a handle, mutably.
    pub(crate) fn get_mut(&mut self, handle: NodeHandle) -> &mut T {
        &mut self.node_mut(handle).value
    }

    /// The handle following this one in list order.
    pub(crate) fn next(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.node(handle).next
    }

    /// The handle preceding this one in list order.
    pub(crate) fn prev(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.node(handle).prev
    }

    /// Pushes t onto the back of the list and returns a handle to the node.
    pub(crate) fn push_back(&mut self, t: T) -> NodeHandle {
        let node = Node {
            value: t,
            prev: self.tail,
            next: None,
        };

        // use the first available location in the storage vec, or infer what
        // the next location will be on push.
        let idx = match self.free.pop() {
            Some(idx) => {
                self.store[idx.0] = Some(node);
                idx
            }
            None => {
                self.store.push(Some(node));
                NodeHandle(self.store.len() - 1)
            }
        };

        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);

        idx
    }

    /// Remove an arbitrary node from the list, handing back its value. The
    /// node's neighbours are linked to each other, or become the new head or
    /// tail if the node was at either end.
    pub(crate) fn remove_node(&mut self, handle: NodeHandle) -> T {
        let node = match self.store.get_mut(handle.0).and_then(Option::take) {
            Some(node) => node,
            None => freed_slot(),
        };

        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }

        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }

        self.free.push(handle);

        node.value
    }

    /// Pops the front node off the list if it exists.
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.remove_node(head))
    }

    /// Clears this linked list. Does not free the underlying buffers.
    pub(crate) fn clear(&mut self) {
        self.store.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
    }
}
