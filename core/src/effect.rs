//! Side-effect descriptions returned by reducers.
//!
//! Effects are values, not execution: a reducer describes what should
//! happen and the store runtime executes it after the state transition
//! has been applied. For this system the only real effect is the
//! persistence write that follows a collection mutation.

use std::future::Future;
use std::pin::Pin;

/// A side effect to be executed by the store runtime
///
/// # Type Parameters
///
/// - `Action`: the action type an effect can produce (feedback loop)
pub enum Effect<Action> {
    /// No-op effect
    None,

    /// Arbitrary async computation
    ///
    /// Returns `Option<Action>`; `Some` is fed back into the reducer.
    Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
}

impl<Action> Effect<Action> {
    /// Wraps a future as an effect
    pub fn future<F>(fut: F) -> Self
    where
        F: Future<Output = Option<Action>> + Send + 'static,
    {
        Self::Future(Box::pin(fut))
    }

    /// Whether this effect is the no-op
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

// Manual Debug implementation since Future doesn't implement Debug
impl<Action> std::fmt::Debug for Effect<Action>
where
    Action: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "Effect::None"),
            Self::Future(_) => write!(f, "Effect::Future(<future>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn future_effect_resolves_to_action() {
        let effect: Effect<u32> = Effect::future(async { Some(7) });
        let Effect::Future(fut) = effect else {
            unreachable!("constructed as a future");
        };
        assert_eq!(tokio_test::block_on(fut), Some(7));
    }

    #[test]
    fn none_is_none() {
        assert!(Effect::<u32>::None.is_none());
        assert!(!Effect::<u32>::future(async { None }).is_none());
    }
}
