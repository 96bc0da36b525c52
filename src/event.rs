/// Events emitted by a [`LogManager`](crate::LogManager) during operations.
///
/// These events are passed to the tracing callback set via
/// [`LogManager::set_trace_callback`](crate::LogManager::set_trace_callback).
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use logtree::ManagerEvent;
///
/// let event = ManagerEvent::Set { name: "a.b".to_string() };
/// println!("{:?}", event);
/// ```
#[derive(Debug, Clone)]
pub enum ManagerEvent {
    /// A logger was registered under a name.
    Set {
        /// The name as given by the caller.
        name: String,
    },

    /// A logger was looked up.
    Find {
        /// The name as given by the caller.
        name: String,
        /// Whether the lookup resolved to a logger (exact or ancestor).
        found: bool,
    },

    /// A logger was removed.
    Unset {
        /// The name as given by the caller.
        name: String,
        /// How many tree nodes were pruned by the removal.
        pruned: usize,
    },
}

impl std::fmt::Display for ManagerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManagerEvent::Set { name } => {
                write!(f, "set {{ name: {} }}", name)
            }
            ManagerEvent::Find { name, found } => {
                write!(f, "find {{ name: {}, found: {} }}", name, found)
            }
            ManagerEvent::Unset { name, pruned } => {
                write!(f, "unset {{ name: {}, pruned: {} }}", name, pruned)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_event_display() {
        let event = ManagerEvent::Set {
            name: "a.b.c".to_string(),
        };
        assert_eq!(event.to_string(), "set { name: a.b.c }");

        let event = ManagerEvent::Find {
            name: "a.b".to_string(),
            found: true,
        };
        assert_eq!(event.to_string(), "find { name: a.b, found: true }");

        let event = ManagerEvent::Unset {
            name: "a".to_string(),
            pruned: 2,
        };
        assert_eq!(event.to_string(), "unset { name: a, pruned: 2 }");
    }

    #[test]
    fn test_manager_event_clone() {
        let event = ManagerEvent::Find {
            name: "x".to_string(),
            found: false,
        };
        let cloned = event.clone();
        assert_eq!(format!("{:?}", event), format!("{:?}", cloned));
    }
}
