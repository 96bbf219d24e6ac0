//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.

use crate::{Behavior, Condition, Predicate, Selector, Sequence};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// Creates a condition node from a predicate.
///
/// Shorthand for `Box::new(Condition::new(predicate))`.
#[inline]
pub fn condition<C: 'static, P>(predicate: P) -> Box<dyn Behavior<C>>
where
    P: Predicate<C> + 'static,
{
    Box::new(Condition::new(predicate))
}

/// Boxes an action node.
#[inline]
pub fn action<C: 'static, B>(node: B) -> Box<dyn Behavior<C>>
where
    B: Behavior<C> + 'static,
{
    Box::new(node)
}
