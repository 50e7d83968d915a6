use core::any::Any;
use std::error::Error as StdError;

use crate::errors::Error;

use super::{
    captured,
    Result::{self, Failure, Success},
};

impl<T, E> Result<Result<T, E>, E> {
    /// Collapses one level of nesting; an inner failure becomes the outer one.
    pub fn flatten(self) -> Result<T, E> {
        match self {
            Success(inner) => inner,
            Failure(error) => Failure(error),
        }
    }
}

impl<T> Result<T> {
    /// Discards the value and continues with `next`.
    ///
    /// A failure is propagated unchanged and `next` is ignored.
    pub fn and<O>(self, next: Option<O>) -> Result<O> {
        match self {
            Success(_) => Result::of(next),
            Failure(error) => Failure(error),
        }
    }

    /// Discards the value and continues with the outcome of `producer`.
    pub fn and_fn<O, F>(self, producer: F) -> Result<O>
    where
        F: FnOnce() -> Option<O>,
    {
        match self {
            Success(_) => Result::of_fn(producer),
            Failure(error) => Failure(error),
        }
    }

    /// Applies `transform` to the value.
    ///
    /// Failures are never transformed. A panic inside `transform` becomes
    /// the resulting failure.
    ///
    /// ```
    /// use fallible::Result;
    ///
    /// let doubled = Result::of_fn(|| Some(4)).map(|x| x * 2);
    /// assert_eq!(doubled.or_else(0), 8);
    /// ```
    pub fn map<O, F>(self, transform: F) -> Result<O>
    where
        F: FnOnce(T) -> O,
    {
        match self {
            Success(value) => Result::from_fn(|| transform(value)),
            Failure(error) => Failure(error),
        }
    }

    /// [`Result::map`] for transforms that may produce no value.
    pub fn map_opt<O, F>(self, transform: F) -> Result<O>
    where
        F: FnOnce(T) -> Option<O>,
    {
        match self {
            Success(value) => Result::of_fn(|| transform(value)),
            Failure(error) => Failure(error),
        }
    }

    /// [`Result::map`] for transforms that report errors through `Err`.
    pub fn try_map<O, X, F>(self, transform: F) -> Result<O>
    where
        F: FnOnce(T) -> core::result::Result<O, X>,
        X: StdError + Send + Sync + 'static,
    {
        match self {
            Success(value) => Result::try_of(|| transform(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Applies a transform that itself returns a result.
    ///
    /// A failure returned by `transform` is carried out as the outer failure.
    ///
    /// ```
    /// use fallible::{Error, Result};
    ///
    /// let halve = |x: i32| Result::of(Some(x / 2)).req(|_| x % 2 == 0, "odd");
    /// assert_eq!(Result::of(Some(10)).chain(halve), Result::Success(5));
    /// assert_eq!(
    ///     Result::of(Some(7)).chain(halve),
    ///     Result::Failure(Error::validation("odd")),
    /// );
    /// ```
    pub fn chain<O, F>(self, transform: F) -> Result<O>
    where
        F: FnOnce(T) -> Result<O>,
    {
        self.map(transform).flatten()
    }

    /// Like [`Result::map`], but `transform` receives the whole result.
    ///
    /// `transform` only ever sees a success.
    pub fn map_using_whole<O, F>(self, transform: F) -> Result<O>
    where
        F: FnOnce(Self) -> O,
    {
        match self {
            Failure(error) => Failure(error),
            whole => Result::from_fn(|| transform(whole)),
        }
    }

    /// Like [`Result::chain`], but `transform` receives the whole result.
    pub fn chain_using_whole<O, F>(self, transform: F) -> Result<O>
    where
        F: FnOnce(Self) -> Result<O>,
    {
        self.map_using_whole(transform).flatten()
    }

    /// Keeps the value only if `predicate` accepts it.
    ///
    /// A rejected value becomes a validation failure carrying `message`.
    pub fn req<P, M>(self, predicate: P, message: M) -> Self
    where
        P: FnOnce(&T) -> bool,
        M: Into<String>,
    {
        let value = match self {
            Success(value) => value,
            Failure(error) => return Failure(error),
        };
        match Result::from_fn(|| predicate(&value)) {
            Success(true) => Success(value),
            Success(false) => captured(Error::validation(message)),
            Failure(error) => Failure(error),
        }
    }

    /// Downcasts the value to `O`.
    ///
    /// ```
    /// use core::any::Any;
    ///
    /// use fallible::{ErrorKind, Result};
    ///
    /// let boxed: Box<dyn Any> = Box::new(3_u16);
    /// assert_eq!(Result::of(Some(boxed)).cast_to::<u16>(), Result::Success(3));
    ///
    /// let mismatch = Result::of(Some(3_u16)).cast_to::<String>();
    /// assert_eq!(mismatch.failure().map(|e| e.kind()), Some(ErrorKind::Cast));
    /// ```
    pub fn cast_to<O>(self) -> Result<O>
    where
        T: Any,
        O: Any,
    {
        self.chain(|value| {
            let any: Box<dyn Any> = into_any(value);
            match any.downcast::<O>() {
                Ok(cast) => Success(*cast),
                Err(_) => captured(Error::cast::<T, O>()),
            }
        })
    }
}

/// Boxes `value`, reusing it directly when it is already a boxed `dyn Any`.
fn into_any<T: Any>(value: T) -> Box<dyn Any> {
    let boxed: Box<dyn Any> = Box::new(value);
    let boxed = match boxed.downcast::<Box<dyn Any>>() {
        Ok(inner) => return *inner,
        Err(boxed) => boxed,
    };
    let boxed = match boxed.downcast::<Box<dyn Any + Send>>() {
        Ok(inner) => return *inner,
        Err(boxed) => boxed,
    };
    match boxed.downcast::<Box<dyn Any + Send + Sync>>() {
        Ok(inner) => *inner,
        Err(boxed) => boxed,
    }
}
