//! Leaf behavior nodes.
//!
//! Actions are ordinary [`Behavior`] implementations. Conditions get a
//! dedicated wrapper so the type system enforces that they only read the
//! context: a [`Predicate`] receives `&C`, never `&mut C`.

use crate::{Behavior, Status};

/// A read-only test over the context.
pub trait Predicate<C>: Send + Sync {
    fn check(&self, ctx: &C) -> bool;
}

impl<C, F> Predicate<C> for F
where
    F: Fn(&C) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, ctx: &C) -> bool {
        self(ctx)
    }
}

/// Adapts a [`Predicate`] into a node returning only `Success` or `Failure`.
pub struct Condition<P> {
    predicate: P,
}

impl<P> Condition<P> {
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<C, P> Behavior<C> for Condition<P>
where
    P: Predicate<C>,
{
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from(self.predicate.check(ctx))
    }
}
