/// Marker returned once a producer has nothing left to give.
///
/// Reading past the end of a sequence is not an error: producers report
/// `Step::Complete(Exhausted)` and keep reporting it on every later call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Exhausted;

/// Result of asking a producer for its next element.
///
/// `Step` plays the role `Option` plays for iterators, but keeps the end of
/// the sequence as a named variant so that callers can carry a completion
/// value when they need one. Producers always use the default `D = Exhausted`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::{Exhausted, Step};
///
/// let next: Step<char> = Step::Yielded('d');
/// let end: Step<char> = Step::Complete(Exhausted);
///
/// assert_eq!(next.map_yielded(|c| c.to_ascii_uppercase()), Step::Yielded('D'));
/// assert!(end.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D = Exhausted> {
    /// The producer advanced and handed out an element.
    Yielded(Y),
    /// The producer has finished.
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    /// Returns `true` if the step carries an element.
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step marks the end of the sequence.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Converts into `Option<Y>`, discarding the completion value.
    ///
    /// ```rust
    /// use lazyseq::{Exhausted, Step};
    ///
    /// assert_eq!(Step::<_, Exhausted>::Yielded(7).yielded_value(), Some(7));
    /// assert_eq!(Step::<i32>::Complete(Exhausted).yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }

    /// Applies `f` to the yielded element, leaving a completion untouched.
    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, D>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    /// Applies `f` to the completion value, leaving an element untouched.
    #[inline]
    pub fn map_complete<D2, F>(self, f: F) -> Step<Y, D2>
    where
        F: FnOnce(D) -> D2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(f(d)),
        }
    }

    /// Converts from `&Step<Y, D>` to `Step<&Y, &D>`.
    #[inline]
    pub const fn as_ref(&self) -> Step<&Y, &D> {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    /// Returns the yielded element.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the step is `Complete`.
    #[inline]
    pub fn expect_yielded(self, msg: &str) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("{}", msg),
        }
    }

    /// Returns the yielded element.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Complete`.
    ///
    /// ```should_panic
    /// use lazyseq::{Exhausted, Step};
    ///
    /// Step::<u8>::Complete(Exhausted).unwrap_yielded();
    /// ```
    #[inline]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("called `Step::unwrap_yielded()` on a `Complete` value"),
        }
    }

    /// Returns the completion value.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Yielded`.
    #[inline]
    pub fn unwrap_complete(self) -> D {
        match self {
            Step::Yielded(_) => panic!("called `Step::unwrap_complete()` on a `Yielded` value"),
            Step::Complete(d) => d,
        }
    }
}

impl<Y> From<Option<Y>> for Step<Y> {
    fn from(value: Option<Y>) -> Self {
        match value {
            Some(y) => Step::Yielded(y),
            None => Step::Complete(Exhausted),
        }
    }
}

impl<Y> From<Step<Y>> for Option<Y> {
    fn from(step: Step<Y>) -> Self {
        step.yielded_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yielded_and_is_complete() {
        let y: Step<char> = Step::Yielded('a');
        let d: Step<char> = Step::Complete(Exhausted);

        assert!(y.is_yielded());
        assert!(!y.is_complete());
        assert!(d.is_complete());
        assert!(!d.is_yielded());
    }

    #[test]
    fn test_map_yielded_skips_complete() {
        let d: Step<u32> = Step::Complete(Exhausted);
        assert_eq!(d.map_yielded(|x| x + 1), Step::Complete(Exhausted));
        assert_eq!(Step::<u32>::Yielded(1).map_yielded(|x| x + 1), Step::Yielded(2));
    }

    #[test]
    fn test_map_complete_carries_value() {
        let d: Step<u32, usize> = Step::Complete(3);
        assert_eq!(d.map_complete(|n| n * 2), Step::Complete(6));
    }

    #[test]
    fn test_option_round_trip() {
        assert_eq!(Step::<char>::from(Some('x')), Step::Yielded('x'));
        assert_eq!(Step::<char>::from(None), Step::Complete(Exhausted));
        let some: Option<i32> = Step::<i32>::Yielded(4).into();
        let none: Option<i32> = Step::<i32>::Complete(Exhausted).into();
        assert_eq!(some, Some(4));
        assert_eq!(none, None);
    }

    #[test]
    fn test_as_ref() {
        let y: Step<String> = Step::Yielded("dog".to_string());
        assert_eq!(y.as_ref(), Step::Yielded(&"dog".to_string()));
    }

    #[test]
    #[should_panic(expected = "wanted an element")]
    fn test_expect_yielded_panics() {
        Step::<u8>::Complete(Exhausted).expect_yielded("wanted an element");
    }

    #[test]
    #[should_panic(expected = "called `Step::unwrap_complete()` on a `Yielded` value")]
    fn test_unwrap_complete_panics() {
        Step::<u8>::Yielded(1).unwrap_complete();
    }
}
