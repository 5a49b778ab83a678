//! Monotonic, gap-free id issuance for one family.
//!
//! A generator is owned by a single scope (one planning pass, say) and
//! mutated through `&mut self`; there is no shared or global counter. Wrap it
//! in a lock if several threads ever need to issue from the same space.

use std::fmt;
use std::marker::PhantomData;

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::id::{Id, IdFamily};

/// The only source of non-sentinel ids for family `F`.
///
/// Issues 0, 1, 2, ... in order. Stops with [`Error::Exhausted`] once its
/// capacity is used up instead of wrapping.
pub struct IdGenerator<F: IdFamily> {
    /// Next raw value to hand out; equal to the number issued so far.
    next: u32,
    capacity: u32,
    family: PhantomData<fn() -> F>,
}

impl<F: IdFamily> IdGenerator<F> {
    pub fn new() -> Self {
        Self::from_capacity(GeneratorConfig::default().effective_capacity())
    }

    pub fn with_config(cfg: &GeneratorConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self::from_capacity(cfg.effective_capacity()))
    }

    fn from_capacity(capacity: u32) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(family = F::NAME, capacity, "new id generator");
        Self {
            next: 0,
            capacity,
            family: PhantomData,
        }
    }

    /// Issue a fresh id and advance the counter.
    pub fn next_id(&mut self) -> Result<Id<F>> {
        let exhausted = Error::Exhausted {
            family: F::NAME,
            capacity: u64::from(self.capacity),
        };
        if self.next >= self.capacity {
            #[cfg(feature = "tracing")]
            tracing::debug!(family = F::NAME, capacity = self.capacity, "id space exhausted");
            return Err(exhausted);
        }
        let value = i32::try_from(self.next).map_err(|_| exhausted)?;
        self.next += 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(family = F::NAME, id = value, "issued id");
        Ok(Id::new(value))
    }

    /// The most recently issued id.
    ///
    /// Fails with [`Error::NothingIssued`] before the first [`next_id`](Self::next_id).
    pub fn max_issued(&self) -> Result<Id<F>> {
        match self.next.checked_sub(1) {
            Some(last) => i32::try_from(last)
                .map(Id::new)
                .map_err(|_| Error::NothingIssued { family: F::NAME }),
            None => Err(Error::NothingIssued { family: F::NAME }),
        }
    }

    pub fn issued_count(&self) -> u32 {
        self.next
    }

    pub fn is_empty(&self) -> bool {
        self.next == 0
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Every id issued so far, in issuance order.
    pub fn issued(&self) -> impl DoubleEndedIterator<Item = Id<F>> {
        (0..self.next)
            .filter_map(|v| i32::try_from(v).ok())
            .map(Id::new)
    }
}

impl<F: IdFamily> Default for IdGenerator<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: IdFamily> fmt::Debug for IdGenerator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator")
            .field("family", &F::NAME)
            .field("next", &self.next)
            .field("capacity", &self.capacity)
            .finish()
    }
}
