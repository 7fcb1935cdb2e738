/// Marker for a node that does not terminate a key.
pub(crate) const NO_VALUE: u32 = u32::MAX;

/// Index of the root in both the build arena and the frozen table.
pub(crate) const ROOT: u32 = 0;

/// Largest node count the `u32` index space can address.
pub(crate) const MAX_NODES: usize = u32::MAX as usize;

/// Upper bound on the arena pre-allocation taken from a capacity hint.
pub(crate) const MAX_PREALLOC: usize = 1 << 20;

/// A node of the build-time arena.
///
/// Children are kept sorted by edge byte so the frozen table comes out in
/// lexicographic order without a separate sort.
#[derive(Debug, Clone)]
pub(crate) struct BuildNode<V> {
    /// The value stored at this node, if the path to it is a key.
    pub value: Option<V>,
    /// Maps `edge_byte` -> `arena_index`, sorted by byte.
    pub children: Vec<(u8, u32)>,
}

impl<V> BuildNode<V> {
    pub fn new() -> Self {
        Self {
            value: None,
            children: Vec::new(),
        }
    }

    /// Adds a child, keeping the children sorted.
    pub fn add_child(&mut self, byte: u8, child_idx: u32) {
        match self.children.binary_search_by_key(&byte, |&(b, _)| b) {
            Ok(pos) => self.children[pos] = (byte, child_idx),
            Err(pos) => self.children.insert(pos, (byte, child_idx)),
        }
    }

    /// Finds the child index for a given byte.
    pub fn get_child(&self, byte: u8) -> Option<u32> {
        self.children
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|pos| self.children[pos].1)
    }
}

/// A node of the frozen table.
///
/// Nodes are laid out breadth-first, so the children of a node occupy the
/// contiguous id range `first_child..first_child + child_count` and the edge
/// byte of node `n` is `labels[n]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Node {
    /// Id of the first child. Meaningless when `child_count == 0`.
    pub first_child: u32,
    /// Index into the value table, or [`NO_VALUE`].
    pub value: u32,
    /// Number of children, at most 256.
    pub child_count: u16,
}

impl Node {
    /// Id range of the children.
    #[inline]
    pub fn children(&self) -> core::ops::Range<usize> {
        let start = self.first_child as usize;
        start..start + self.child_count as usize
    }

    /// Index into the value table if this node terminates a key.
    #[inline]
    pub fn value_index(&self) -> Option<usize> {
        (self.value != NO_VALUE).then_some(self.value as usize)
    }

    /// Whether the children cover every byte value, in which case the
    /// child for `b` sits at offset `b`.
    #[inline]
    pub fn is_dense(&self) -> bool {
        self.child_count == 256
    }
}
