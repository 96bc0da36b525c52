//! The hierarchical logger registry.
//!
//! [`LogManager`] maps dotted logger names (`"a.b.c"`) to logger instances.
//! Lookups resolve by longest matching prefix: a name falls back to its
//! nearest registered ancestor, down to the root logger registered under the
//! empty name `""`. Segment comparison is case-insensitive.
//!
//! Internally the manager owns a tree of name segments kept in an arena;
//! parent links are arena indexes, never owning references. The tree lives
//! behind an `RwLock`: `set` and `unset` take the write lock, `find` the
//! read lock, so readers always observe a fully consistent tree.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, RwLock};

use crate::{Logger, ManagerEvent};

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a [`ManagerEvent`] every time the
/// manager is interacted with. It must be thread-safe because the manager
/// itself is shared across threads.
pub type TraceCallback = dyn Fn(&ManagerEvent) + Send + Sync + 'static;

/// One path segment in the dotted name hierarchy.
///
/// A node may exist purely as a routing waypoint with no logger of its own.
struct Node {
    /// The lower-cased path component owned by this node. Set at creation,
    /// never mutated. The root's segment is the empty string.
    segment: String,
    logger: Option<Arc<dyn Logger>>,
    /// Arena index of the parent; `None` only for the root. Used solely for
    /// upward pruning, never during lookup.
    parent: Option<usize>,
    children: HashMap<String, usize>,
}

impl Node {
    fn new(segment: String, parent: Option<usize>) -> Node {
        Node {
            segment,
            logger: None,
            parent,
            children: HashMap::new(),
        }
    }
}

/// Arena slot: either a live node or a link in the free list.
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<usize> },
}

/// The segment tree. Only ever touched through the manager's lock.
struct Tree {
    slots: Vec<Slot>,
    free_head: Option<usize>,
    /// Created lazily on the first write; never detached afterwards.
    root: Option<usize>,
    /// Live node count, maintained in the same critical section as every
    /// child-map mutation so pruning decisions never drift.
    live: usize,
}

impl Tree {
    fn new() -> Tree {
        Tree {
            slots: Vec::new(),
            free_head: None,
            root: None,
            live: 0,
        }
    }

    fn node(&self, index: usize) -> &Node {
        match &self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling node handle"),
        }
    }

    fn node_mut(&mut self, index: usize) -> &mut Node {
        match &mut self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling node handle"),
        }
    }

    fn alloc(&mut self, node: Node) -> usize {
        self.live += 1;
        match self.free_head {
            Some(index) => {
                self.free_head = match self.slots[index] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at a live node"),
                };
                self.slots[index] = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    fn free(&mut self, index: usize) {
        self.live -= 1;
        self.slots[index] = Slot::Vacant {
            next_free: self.free_head,
        };
        self.free_head = Some(index);
    }

    fn ensure_root(&mut self) -> usize {
        match self.root {
            Some(root) => root,
            None => {
                let root = self.alloc(Node::new(String::new(), None));
                self.root = Some(root);
                root
            }
        }
    }

    /// Clears the logger at the exact `name` and prunes upward. Returns the
    /// number of nodes detached.
    fn unset(&mut self, name: &str) -> usize {
        let Some(root) = self.root else {
            return 0;
        };

        if name.is_empty() {
            // The root only loses its logger; it is pruning-exempt.
            self.node_mut(root).logger = None;
            return 0;
        }

        // Exact walk; stop at the first missing segment.
        let mut current = root;
        for segment in segments(name) {
            match self.node(current).children.get(&segment) {
                Some(&child) => current = child,
                None => return 0,
            }
        }
        self.node_mut(current).logger = None;

        // Upward pruning: detach nodes that became garbage.
        let mut pruned = 0;
        while let Some(parent) = self.node(current).parent {
            let node = self.node(current);
            if node.logger.is_some() || !node.children.is_empty() {
                break;
            }
            let segment = node.segment.clone();
            self.node_mut(parent).children.remove(&segment);
            self.free(current);
            pruned += 1;
            current = parent;
        }
        pruned
    }
}

/// Splits a non-empty name into lower-cased segments.
///
/// Empty segments are legal and meaningful; a single leading empty segment
/// (the name starts with a dot) is dropped, making `".a.b"` resolve exactly
/// like `"a.b"`. The empty name denotes the root and never reaches here.
fn segments(name: &str) -> Vec<String> {
    debug_assert!(!name.is_empty());
    let mut segments: Vec<String> = name
        .to_lowercase()
        .split('.')
        .map(str::to_owned)
        .collect();
    if segments.first().is_some_and(String::is_empty) {
        segments.remove(0);
    }
    segments
}

/// A hierarchical, thread-safe registry of named loggers.
///
/// Loggers register under dotted names. [`find`](LogManager::find) walks the
/// name's segments and returns the logger of the longest registered prefix,
/// so `"a.b.c"` falls back to `"a.b"`, then `"a"`, then the root `""`.
/// Matching is case-insensitive and a leading dot is equivalent to none.
///
/// All operations are safe under arbitrary concurrent invocation.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logtree::{LogManager, NopLogger};
///
/// let manager = LogManager::new();
/// manager.set("a", Arc::new(NopLogger));
///
/// // No logger at "a.b.c"; resolution falls back to the ancestor "a".
/// assert!(manager.find("a.b.c").is_some());
/// assert!(manager.find("x").is_none());
/// ```
pub struct LogManager {
    tree: RwLock<Tree>,
    trace: Mutex<Option<Arc<TraceCallback>>>,
}

impl LogManager {
    /// Creates an empty manager.
    pub fn new() -> LogManager {
        LogManager {
            tree: RwLock::new(Tree::new()),
            trace: Mutex::new(None),
        }
    }

    /// Registers `logger` under `name`, replacing any logger previously
    /// registered under the exact same name.
    ///
    /// The empty name registers the root logger, the fallback for every
    /// name with no closer registered ancestor.
    pub fn set(&self, name: &str, logger: Arc<dyn Logger>) {
        self.emit_event(&ManagerEvent::Set {
            name: name.to_owned(),
        });

        let mut tree = self.tree.write().unwrap_or_else(|p| p.into_inner());
        let mut current = tree.ensure_root();
        if !name.is_empty() {
            for segment in segments(name) {
                current = match tree.node(current).children.get(&segment) {
                    Some(&child) => child,
                    None => {
                        let child = tree.alloc(Node::new(segment.clone(), Some(current)));
                        tree.node_mut(current).children.insert(segment, child);
                        child
                    }
                };
            }
        }
        tree.node_mut(current).logger = Some(logger);
    }

    /// Returns the logger for `name`, resolved by longest matching prefix.
    ///
    /// For a name `s1.s2...sn` this tries, in order, the full path, then the
    /// path with the last segment dropped, and so on down to the root. The
    /// first prefix carrying a logger wins. Returns `None` when no prefix
    /// (the root included) carries one.
    pub fn find(&self, name: &str) -> Option<Arc<dyn Logger>> {
        let result = {
            let tree = self.tree.read().unwrap_or_else(|p| p.into_inner());
            tree.root.and_then(|root| {
                let mut best = tree.node(root).logger.clone();
                if !name.is_empty() {
                    let mut current = root;
                    for segment in segments(name) {
                        match tree.node(current).children.get(&segment) {
                            Some(&child) => {
                                current = child;
                                if let Some(logger) = &tree.node(child).logger {
                                    best = Some(Arc::clone(logger));
                                }
                            }
                            // No deeper match; the deepest logger seen wins.
                            None => break,
                        }
                    }
                }
                best
            })
        };

        self.emit_event(&ManagerEvent::Find {
            name: name.to_owned(),
            found: result.is_some(),
        });
        result
    }

    /// Removes the logger registered under the exact `name`.
    ///
    /// Only an exact match is removed; ancestor fallback does not apply.
    /// Nodes left with no logger and no children are pruned from the tree,
    /// recursively toward the root. The root node itself is never pruned.
    /// Removing a name that was never registered is a no-op.
    pub fn unset(&self, name: &str) {
        let pruned = {
            let mut tree = self.tree.write().unwrap_or_else(|p| p.into_inner());
            tree.unset(name)
        };

        self.emit_event(&ManagerEvent::Unset {
            name: name.to_owned(),
            pruned,
        });
    }

    /// Number of live nodes in the segment tree, the root included.
    ///
    /// Diagnostic only; useful for asserting that pruning leaks no routing
    /// nodes.
    pub fn node_count(&self) -> usize {
        self.tree.read().unwrap_or_else(|p| p.into_inner()).live
    }

    /// Sets a tracing callback invoked on every manager interaction.
    ///
    /// # Example
    /// ```rust
    /// use logtree::LogManager;
    ///
    /// let manager = LogManager::new();
    /// manager.set_trace_callback(|event| println!("[manager-trace] {}", event));
    /// ```
    pub fn set_trace_callback(
        &self,
        callback: impl Fn(&ManagerEvent) + Send + Sync + 'static,
    ) {
        let mut guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clears the tracing callback (disables manager tracing).
    pub fn clear_trace_callback(&self) {
        let mut guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    /// Emits a manager event using the current callback, if any.
    ///
    /// The tree lock is never held here, so callbacks may call back into the
    /// manager without deadlocking.
    fn emit_event(&self, event: &ManagerEvent) {
        let callback = {
            let guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
            guard.clone()
        };
        if let Some(callback) = callback {
            callback(event);
        }
    }
}

impl Default for LogManager {
    fn default() -> LogManager {
        LogManager::new()
    }
}

/// The process-wide shared manager.
static DEFAULT_MANAGER: LazyLock<LogManager> = LazyLock::new(LogManager::new);

/// Returns the process-wide shared [`LogManager`].
///
/// Sharing is an explicit choice: prefer constructing managers with
/// [`LogManager::new`] and passing them through your own wiring; reach for
/// this only when a single shared instance is genuinely what you want.
pub fn default_manager() -> &'static LogManager {
    &DEFAULT_MANAGER
}
