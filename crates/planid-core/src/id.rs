//! Strongly-typed identifiers used across the planner.
//!
//! Downstream crates should *not* pass raw integers around for ids. Every id
//! belongs to a family, and each family is its own marker type, so ids from
//! different families never compare or substitute for one another:
//!
//! ```compile_fail
//! use planid_core::{id_family, IdGenerator};
//!
//! id_family!(pub Left => LeftId);
//! id_family!(pub Right => RightId);
//!
//! let left: LeftId = IdGenerator::<Left>::new().next_id().unwrap();
//! let right: RightId = IdGenerator::<Right>::new().next_id().unwrap();
//! assert!(left != right);
//! ```
//!
//! There is no public way to wrap an arbitrary integer either; values come
//! from an [`IdGenerator`](crate::IdGenerator) or from [`Id::INVALID`]:
//!
//! ```compile_fail
//! use planid_core::{id_family, Id};
//!
//! id_family!(pub Left => LeftId);
//!
//! let forged: LeftId = Id::new(7);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Serialize, Serializer};

/// Raw value reserved for each family's "no id assigned" sentinel.
pub const INVALID_ID: i32 = -1;

/// A category of entity that gets its own id space.
///
/// Implement this on an uninhabited marker type, usually via [`id_family!`].
pub trait IdFamily: 'static {
    /// Family name used in `Debug` output, logs, and errors.
    const NAME: &'static str;

    /// Zero-pad width for `Display`. Wider values are never truncated.
    const WIDTH: usize = 2;
}

/// Declares a family marker plus a `Id<Marker>` alias.
///
/// ```
/// use planid_core::{id_family, IdGenerator};
///
/// id_family!(
///     /// Scan nodes of a logical plan.
///     pub ScanNode => ScanNodeId, width = 3
/// );
///
/// let mut scans = IdGenerator::<ScanNode>::new();
/// let first: ScanNodeId = scans.next_id().unwrap();
/// assert_eq!(first.to_string(), "000");
/// assert_eq!(format!("{first:?}"), "ScanNode(000)");
/// ```
#[macro_export]
macro_rules! id_family {
    ($(#[$meta:meta])* $vis:vis $family:ident => $alias:ident) => {
        $crate::id_family!($(#[$meta])* $vis $family => $alias, width = 2);
    };
    ($(#[$meta:meta])* $vis:vis $family:ident => $alias:ident, width = $width:expr) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $family {}

        impl $crate::id::IdFamily for $family {
            const NAME: &'static str = stringify!($family);
            const WIDTH: usize = $width;
        }

        $vis type $alias = $crate::id::Id<$family>;
    };
}

/// An immutable id tagged with its family `F`.
pub struct Id<F: IdFamily> {
    value: i32,
    family: PhantomData<fn() -> F>,
}

impl<F: IdFamily> Id<F> {
    /// The family's "no id assigned" sentinel. Never issued by a generator.
    pub const INVALID: Self = Self::new(INVALID_ID);

    // Construction only allowed via `IdGenerator` or `INVALID`.
    pub(crate) const fn new(value: i32) -> Self {
        Self {
            value,
            family: PhantomData,
        }
    }

    /// Underlying integer, for serialization and debugging only.
    pub const fn as_int(self) -> i32 {
        self.value
    }

    pub const fn is_valid(self) -> bool {
        self.value != INVALID_ID
    }
}

impl<F: IdFamily> Clone for Id<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: IdFamily> Copy for Id<F> {}

impl<F: IdFamily> PartialEq for Id<F> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<F: IdFamily> Eq for Id<F> {}

impl<F: IdFamily> PartialOrd for Id<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: IdFamily> Ord for Id<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<F: IdFamily> Hash for Id<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<F: IdFamily> fmt::Display for Id<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.value, width = F::WIDTH)
    }
}

impl<F: IdFamily> fmt::Debug for Id<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}({})", F::NAME, self)
        } else {
            write!(f, "{}(INVALID)", F::NAME)
        }
    }
}

// No `Deserialize`: ids are never rebuilt from raw integers.
impl<F: IdFamily> Serialize for Id<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.value)
    }
}

/// Renders ids as `(00 01 02)` for plan dumps and log lines.
pub fn format_ids<F: IdFamily>(ids: impl IntoIterator<Item = Id<F>>) -> String {
    let parts: Vec<String> = ids.into_iter().map(|id| id.to_string()).collect();
    format!("({})", parts.join(" "))
}
