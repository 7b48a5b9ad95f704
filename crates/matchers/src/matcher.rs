//! Matcher contract
//!
//! A matcher is an immutable predicate that can explain itself:
//! what it expects (`describe_to`) and why a value fell short
//! (`describe_mismatch`). Matchers nest by ownership, never by cycles,
//! and hold no reference to anything they evaluate.

use std::any::Any;

use crate::description::Description;

/// Anything that can write a description of itself
pub trait SelfDescribing {
    /// Self-contained statement of what is required
    fn describe_to(&self, description: &mut Description);
}

/// Predicate with diagnostics over values of type `T`
pub trait Matcher<T: ?Sized>: SelfDescribing + Send + Sync {
    /// Pure predicate, never panics on well-formed input
    fn matches(&self, actual: &T) -> bool;

    /// Why `actual` failed. Only meaningful after `matches` returned false.
    fn describe_mismatch(&self, actual: &T, description: &mut Description);

    /// Type-checked entry point for untyped values
    ///
    /// `None` stands for null. A value of any other type is a clean
    /// non-match, checked before any feature extraction.
    fn matches_any(&self, actual: Option<&dyn Any>) -> bool
    where
        T: Sized + Any,
    {
        actual
            .and_then(|value| value.downcast_ref::<T>())
            .is_some_and(|value| self.matches(value))
    }

    fn describe_mismatch_any(&self, actual: Option<&dyn Any>, description: &mut Description)
    where
        T: Sized + Any,
    {
        match actual {
            None => {
                description.append_text("was null");
            }
            Some(value) => match value.downcast_ref::<T>() {
                Some(value) => self.describe_mismatch(value, description),
                None => {
                    description.append_text("was a value of an unexpected type");
                }
            },
        }
    }
}

/// Owned, type-erased matcher
pub type BoxedMatcher<T> = Box<dyn Matcher<T>>;

impl<D: SelfDescribing + ?Sized> SelfDescribing for Box<D> {
    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description);
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for Box<M> {
    fn matches(&self, actual: &T) -> bool {
        (**self).matches(actual)
    }

    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        (**self).describe_mismatch(actual, description);
    }
}

impl<D: SelfDescribing + ?Sized> SelfDescribing for &D {
    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description);
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    fn matches(&self, actual: &T) -> bool {
        (**self).matches(actual)
    }

    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        (**self).describe_mismatch(actual, description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::equal_to;

    struct IsEven;

    impl SelfDescribing for IsEven {
        fn describe_to(&self, description: &mut Description) {
            description.append_text("an even number");
        }
    }

    impl Matcher<u32> for IsEven {
        fn matches(&self, actual: &u32) -> bool {
            actual % 2 == 0
        }

        fn describe_mismatch(&self, actual: &u32, description: &mut Description) {
            description.append_text("was ").append_value(actual);
        }
    }

    #[test]
    fn test_type_checked_entry_point() {
        assert!(IsEven.matches_any(Some(&4u32)));
        assert!(!IsEven.matches_any(Some(&3u32)));
        assert!(!IsEven.matches_any(None));
        assert!(!IsEven.matches_any(Some(&"four")));
        assert!(!IsEven.matches_any(Some(&4i64)));
    }

    #[test]
    fn test_mismatch_of_untyped_values() {
        let mut null = Description::new();
        IsEven.describe_mismatch_any(None, &mut null);
        assert_eq!(null.as_str(), "was null");

        let mut other = Description::new();
        IsEven.describe_mismatch_any(Some(&"four"), &mut other);
        assert_eq!(other.as_str(), "was a value of an unexpected type");

        let mut odd = Description::new();
        IsEven.describe_mismatch_any(Some(&3u32), &mut odd);
        assert_eq!(odd.as_str(), "was 3");
    }

    #[test]
    fn test_boxes_and_references_forward() {
        let boxed: BoxedMatcher<u32> = Box::new(IsEven);
        assert!(boxed.matches(&2));
        assert_eq!(Description::of(&boxed), "an even number");

        let borrowed = &equal_to("x");
        assert!(Matcher::<str>::matches(&borrowed, "x"));
        assert_eq!(Description::of(&borrowed), "\"x\"");
    }

    #[test]
    fn test_matchers_are_thread_safe() {
        fn assert_send_sync<M: Send + Sync>(_: &M) {}

        let boxed: BoxedMatcher<u32> = Box::new(IsEven);
        assert_send_sync(&boxed);
    }
}
