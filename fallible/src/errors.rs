use core::{
    any::{type_name, Any},
    cell::RefCell,
    fmt,
    hash::{Hash, Hasher},
};
use std::{error::Error as StdError, sync::Arc};

use thiserror::Error;

thread_local! {
    /// The last crate error raised on this thread, paired with its panic message.
    static RAISED: RefCell<Option<(String, Error)>> = const { RefCell::new(None) };
}

/// The category of a captured failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A success payload was expected but none was present.
    Absent,
    /// A `req` predicate rejected the value.
    Validation,
    /// A checked downcast did not match the payload's type.
    Cast,
    /// A panic was caught at the construction boundary.
    Panic,
    /// A foreign `std::error::Error` stored verbatim.
    Captured,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Validation => "validation",
            Self::Cast => "cast",
            Self::Panic => "panic",
            Self::Captured => "captured",
        };
        f.write_str(name)
    }
}

/// A failure captured inside [`Result::Failure`](crate::Result::Failure).
///
/// Every error carries a category (a stable name such as `ValidationError`,
/// or the Rust type name of a captured foreign error) and a human-readable
/// message. Both are part of the rendered form, `"{category}: {message}"`.
#[derive(Debug, Clone, Error)]
#[error("{category}: {message}")]
pub struct Error {
    kind: ErrorKind,
    category: &'static str,
    message: String,
    #[source]
    source: Option<Arc<dyn StdError + Send + Sync>>,
}

impl Error {
    const fn new(kind: ErrorKind, category: &'static str, message: String) -> Self {
        Self {
            kind,
            category,
            message,
            source: None,
        }
    }

    /// The error produced wherever a success payload would have been absent.
    #[must_use]
    pub fn absent() -> Self {
        Self::new(ErrorKind::Absent, "AbsentValueError", "value is absent".into())
    }

    /// A validation error carrying the caller's message verbatim.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, "ValidationError", message.into())
    }

    /// A failed downcast from `Source` to `Target`.
    #[must_use]
    pub fn cast<Source: ?Sized, Target: ?Sized>() -> Self {
        Self::new(
            ErrorKind::Cast,
            "CastError",
            format!(
                "`{}` cannot be cast to `{}`",
                type_name::<Source>(),
                type_name::<Target>()
            ),
        )
    }

    /// A panic whose payload was not a crate error.
    #[must_use]
    pub fn panic(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Panic, "Panic", message.into())
    }

    /// Stores a foreign error verbatim, keeping it reachable through
    /// [`source`](StdError::source) and [`downcast_ref`](Self::downcast_ref).
    ///
    /// A crate [`Error`] passed here is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallible::errors::{Error, ErrorKind};
    ///
    /// let parse = "x".parse::<i32>().unwrap_err();
    /// let error = Error::capture(parse.clone());
    /// assert_eq!(error.kind(), ErrorKind::Captured);
    /// assert_eq!(error.downcast_ref::<core::num::ParseIntError>(), Some(&parse));
    /// ```
    pub fn capture<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        if let Some(error) = (&error as &dyn Any).downcast_ref::<Self>() {
            return error.clone();
        }
        Self {
            kind: ErrorKind::Captured,
            category: type_name::<E>(),
            message: error.to_string(),
            source: Some(Arc::new(error)),
        }
    }

    /// Converts a panic payload back into an error.
    ///
    /// An [`Error`] raised by one of the throw operators on this thread, or
    /// passed to `panic_any` directly, is restored unchanged. Other string
    /// payloads become [`ErrorKind::Panic`] errors with the panic message.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Self>() {
            Ok(error) => return *error,
            Err(payload) => payload,
        };
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast_ref::<&'static str>() {
                Some(message) => (*message).to_owned(),
                None => return Self::panic("opaque panic payload"),
            },
        };
        let raised = RAISED.with(|slot| {
            let mut slot = slot.borrow_mut();
            match slot.take() {
                Some((raised_message, error)) if raised_message == message => Some(error),
                other => {
                    *slot = other;
                    None
                }
            }
        });
        raised.unwrap_or_else(|| Self::panic(message))
    }

    /// Panics with `payload`'s rendered text as the message.
    ///
    /// The default panic hook then prints the category and message of a
    /// raised [`Error`], and [`Error::from_panic`] on the same thread still
    /// recovers it whole.
    pub(crate) fn raise<X>(payload: X) -> !
    where
        X: Any + fmt::Display,
    {
        let message = payload.to_string();
        let error = (&payload as &dyn Any).downcast_ref::<Self>().cloned();
        let raised = error.map(|error| (message.clone(), error));
        RAISED.with(|slot| *slot.borrow_mut() = raised);
        panic!("{message}")
    }

    /// The category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The category or type name of the failure.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        self.category
    }

    /// The human-readable message, without the category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the captured foreign error if it is of type `E`.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.source.as_deref()?.downcast_ref::<E>()
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.category == other.category && self.message == other.message
    }
}

impl Eq for Error {}

impl Hash for Error {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.category.hash(state);
        self.message.hash(state);
    }
}
