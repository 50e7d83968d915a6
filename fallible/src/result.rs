use core::{any::Any, fmt};
use std::{
    error::Error as StdError,
    panic::{self, AssertUnwindSafe},
};

use crate::errors::Error;

mod collections;
mod transform;
#[cfg(feature = "nightly")]
mod try_trait;
mod with;

/// Either a present value or a captured failure.
///
/// Branching on the variant is done with ordinary pattern matching, which
/// statically narrows each arm:
///
/// ```
/// use fallible::Result::{self, Failure, Success};
///
/// match Result::of(Some(4)) {
///     Success(value) => assert_eq!(value, 4),
///     Failure(error) => unreachable!("{error}"),
/// }
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Result<Success, Failure = Error> {
    Success(Success),
    Failure(Failure),
}

use self::Result::{Failure, Success};

impl<T, E> Result<T, E> {
    /// Returns `true` if the result holds a value.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Returns `true` if the result holds a captured failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// The success payload, if any.
    #[must_use]
    pub const fn success(&self) -> Option<&T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// The captured failure, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    /// Converts into the success payload, discarding any failure.
    #[must_use]
    pub fn into_success(self) -> Option<T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Converts into the captured failure, discarding any value.
    #[must_use]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    /// Borrows the payload of either variant.
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Calls `consumer` with the value if this is a success, then returns `self`.
    pub fn if_success<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Success(value) = &self {
            consumer(value);
        }
        self
    }

    /// Calls `consumer` with the error if this is a failure, then returns `self`.
    pub fn if_failure<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Failure(error) = &self {
            consumer(error);
        }
        self
    }

    /// Calls exactly one of the two consumers, then returns `self`.
    pub fn handle<S, F>(self, on_success: S, on_failure: F) -> Self
    where
        S: FnOnce(&T),
        F: FnOnce(&E),
    {
        match &self {
            Success(value) => on_success(value),
            Failure(error) => on_failure(error),
        }
        self
    }

    /// Raises the error built by `factory` if this is a success.
    ///
    /// Returns the captured error otherwise, so a call that returns normally
    /// always came from a failure.
    ///
    /// # Panics
    ///
    /// Panics with the rendered `factory(value)` as the message when `self`
    /// is a success.
    #[must_use]
    pub fn if_success_throw<X, F>(self, factory: F) -> E
    where
        F: FnOnce(T) -> X,
        X: Any + fmt::Display,
    {
        match self {
            Success(value) => raise(factory(value)),
            Failure(error) => error,
        }
    }

    /// Raises the error built by `factory` if this is a failure, otherwise
    /// returns the value.
    ///
    /// # Panics
    ///
    /// Panics with the rendered `factory(error)` as the message when `self`
    /// is a failure.
    pub fn if_failure_throw_with<X, F>(self, factory: F) -> T
    where
        F: FnOnce(E) -> X,
        X: Any + fmt::Display,
    {
        match self {
            Success(value) => value,
            Failure(error) => raise(factory(error)),
        }
    }

    /// Unwraps the value or raises the captured error itself.
    ///
    /// A raised [`Error`] that is caught again by [`Result::of_fn`] comes back
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics with the captured error's category and message when `self` is
    /// a failure.
    pub fn if_failure_throw(self) -> T
    where
        E: Any + fmt::Display,
    {
        self.if_failure_throw_with(core::convert::identity)
    }

    /// Returns the value, or `default` on failure.
    pub fn or_else(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// Returns the value, or calls `producer` on failure.
    pub fn or_else_get<F>(self, producer: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Success(value) => value,
            Failure(_) => producer(),
        }
    }
}

impl<T> Result<T> {
    /// Builds a result from a possibly absent value.
    ///
    /// ```
    /// use fallible::{ErrorKind, Result};
    ///
    /// assert!(Result::of(Some("x")).is_success());
    /// let absent = Result::<&str>::of(None);
    /// assert_eq!(absent.failure().map(|e| e.kind()), Some(ErrorKind::Absent));
    /// ```
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(value) => Success(value),
            None => captured(Error::absent()),
        }
    }

    /// Runs `producer` exactly once and captures its outcome.
    ///
    /// `Some` becomes a success and `None` an absent-value failure. A panic
    /// raised by the producer is caught and stored as the failure; it never
    /// unwinds past this call.
    ///
    /// The caught panic still passes through the process panic hook, which
    /// by default prints it to stderr. Producers with expected failures
    /// should return `Err` through [`Result::try_of`] instead.
    pub fn of_fn<F>(producer: F) -> Self
    where
        F: FnOnce() -> Option<T>,
    {
        match panic::catch_unwind(AssertUnwindSafe(producer)) {
            Ok(value) => Self::of(value),
            Err(payload) => captured(Error::from_panic(payload)),
        }
    }

    /// [`Result::of_fn`] for producers that always return a value.
    ///
    /// ```
    /// use fallible::{ErrorKind, Result};
    ///
    /// let zero = std::hint::black_box(0);
    /// let divided = Result::from_fn(|| 1 / zero);
    /// assert_eq!(divided.failure().map(|e| e.kind()), Some(ErrorKind::Panic));
    /// ```
    pub fn from_fn<F>(producer: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::of_fn(|| Some(producer()))
    }

    /// Runs a fallible producer, storing an `Err` as a captured error.
    ///
    /// ```
    /// use fallible::{ErrorKind, Result};
    ///
    /// let parsed = Result::try_of(|| "12".parse::<u8>());
    /// assert_eq!(parsed, Result::Success(12));
    ///
    /// let rejected = Result::try_of(|| "-1".parse::<u8>());
    /// assert_eq!(rejected.failure().map(|e| e.kind()), Some(ErrorKind::Captured));
    /// ```
    pub fn try_of<F, X>(producer: F) -> Self
    where
        F: FnOnce() -> core::result::Result<T, X>,
        X: StdError + Send + Sync + 'static,
    {
        match Result::from_fn(producer) {
            Success(Ok(value)) => Success(value),
            Success(Err(error)) => captured(Error::capture(error)),
            Failure(error) => Failure(error),
        }
    }
}

/// Logs a failure entering the result channel.
pub(crate) fn captured<T>(error: Error) -> Result<T> {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        kind = %error.kind(),
        category = error.category(),
        "captured failure"
    );
    Failure(error)
}

fn raise<X>(payload: X) -> !
where
    X: Any + fmt::Display,
{
    #[cfg(feature = "tracing")]
    tracing::debug!(payload = core::any::type_name::<X>(), "raising failure");
    Error::raise(payload)
}

impl<T, E> fmt::Display for Result<T, E>
where
    T: fmt::Display,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Success(value) => write!(f, "Success({value})"),
            Failure(error) => write!(f, "Failure({error})"),
        }
    }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}
