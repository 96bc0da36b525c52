//! Log levels as a bitmask.
//!
//! Each named level occupies one bit, so levels can be combined into masks
//! with `|` and tested with [`Level::contains`]. Masks are what the
//! [`LevelFilter`](crate::LevelFilter) decorator filters on.

use std::fmt;
use std::ops::{BitAnd, BitOr};

/// A log level, or a combination of levels.
///
/// Single levels are single-bit values; combining them with `|` produces a
/// mask. A level `A` is "enabled" by mask `M` when `M.contains(A)`.
///
/// # Examples
///
/// ```
/// use logtree::Level;
///
/// let mask = Level::WARN | Level::ERROR | Level::FATAL;
/// assert!(mask.contains(Level::ERROR));
/// assert!(!mask.contains(Level::DEBUG));
/// assert_eq!(mask, Level::BEYOND_WARN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Level(u8);

impl Level {
    /// The debug level.
    pub const DEBUG: Level = Level(1 << 0);
    /// The info level.
    pub const INFO: Level = Level(1 << 1);
    /// The warn level.
    pub const WARN: Level = Level(1 << 2);
    /// The error level.
    pub const ERROR: Level = Level(1 << 3);
    /// The fatal level.
    pub const FATAL: Level = Level(1 << 4);

    /// Combines `FATAL` and `ERROR`.
    pub const BEYOND_ERROR: Level = Level(Self::ERROR.0 | Self::FATAL.0);
    /// Combines `FATAL`, `ERROR` and `WARN`.
    pub const BEYOND_WARN: Level = Level(Self::WARN.0 | Self::BEYOND_ERROR.0);
    /// Combines `FATAL`, `ERROR`, `WARN` and `INFO`.
    pub const BEYOND_INFO: Level = Level(Self::INFO.0 | Self::BEYOND_WARN.0);
    /// Combines all named levels.
    pub const BEYOND_DEBUG: Level = Level(Self::DEBUG.0 | Self::BEYOND_INFO.0);

    /// Returns `true` when every bit of `other` is set in `self`.
    pub const fn contains(self, other: Level) -> bool {
        self.0 & other.0 == other.0
    }

    /// The raw bit representation.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Parses a single level name, case-insensitively.
    ///
    /// Returns `None` for anything that is not one of `DEBUG`, `INFO`,
    /// `WARN`, `ERROR` or `FATAL`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logtree::Level;
    ///
    /// assert_eq!(Level::parse("warn"), Some(Level::WARN));
    /// assert_eq!(Level::parse("VERBOSE"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Level> {
        match value.to_uppercase().as_str() {
            "DEBUG" => Some(Level::DEBUG),
            "INFO" => Some(Level::INFO),
            "WARN" => Some(Level::WARN),
            "ERROR" => Some(Level::ERROR),
            "FATAL" => Some(Level::FATAL),
            _ => None,
        }
    }
}

impl BitOr for Level {
    type Output = Level;

    fn bitor(self, rhs: Level) -> Level {
        Level(self.0 | rhs.0)
    }
}

impl BitAnd for Level {
    type Output = Level;

    fn bitand(self, rhs: Level) -> Level {
        Level(self.0 & rhs.0)
    }
}

impl fmt::Display for Level {
    /// Renders the level in uppercase; combined masks are joined with `|`,
    /// e.g. `DEBUG|INFO|ERROR`. A level with no named bit renders as
    /// `UNKNOWN`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMED: [(Level, &str); 5] = [
            (Level::DEBUG, "DEBUG"),
            (Level::INFO, "INFO"),
            (Level::WARN, "WARN"),
            (Level::ERROR, "ERROR"),
            (Level::FATAL, "FATAL"),
        ];

        let mut first = true;
        for (level, name) in NAMED {
            if self.contains(level) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }

        if first {
            f.write_str("UNKNOWN")?;
        }
        Ok(())
    }
}
