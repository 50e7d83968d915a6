use super::Result;

impl<T> Result<T> {
    /// [`Result::map`] with one extra argument passed to `transform`.
    pub fn map_with<A, O, F>(self, a: A, transform: F) -> Result<O>
    where
        F: FnOnce(T, A) -> O,
    {
        self.map(|value| transform(value, a))
    }

    /// [`Result::map`] with two extra arguments.
    pub fn map_with2<A, B, O, F>(self, a: A, b: B, transform: F) -> Result<O>
    where
        F: FnOnce(T, A, B) -> O,
    {
        self.map(|value| transform(value, a, b))
    }

    /// [`Result::map`] with three extra arguments.
    pub fn map_with3<A, B, C, O, F>(self, a: A, b: B, c: C, transform: F) -> Result<O>
    where
        F: FnOnce(T, A, B, C) -> O,
    {
        self.map(|value| transform(value, a, b, c))
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use crate::errors::Error;

    use super::Result::{self, Failure, Success};

    #[test]
    fn test_map_with() {
        let scaled = Result::of(Some(3)).map_with(10, |x, factor| x * factor);
        assert_eq!(scaled, Success(30));
    }

    #[test]
    fn test_map_with2() {
        let clamped = Result::of(Some(42)).map_with2(0, 10, |x: i32, lo, hi| {
            x.clamp(lo, hi)
        });
        assert_eq!(clamped, Success(10));
    }

    #[test]
    fn test_map_with3() {
        let line = Result::of(Some("x")).map_with3("=", 1, ';', |name, op, value, end| {
            format!("{name} {op} {value}{end}")
        });
        assert_eq!(line, Success(String::from("x = 1;")));
    }

    #[test]
    fn test_map_with_calls_transform_once() {
        let calls = Cell::new(0);
        let count = |x: i32| {
            calls.set(calls.get() + 1);
            x
        };
        let one = Result::of(Some(1)).map_with(2, |x, a| count(x) + a);
        let two = Result::of(Some(1)).map_with2(2, 3, |x, a, b| count(x) + a + b);
        let three = Result::of(Some(1)).map_with3(2, 3, 4, |x, a, b, c| {
            count(x) + a + b + c
        });
        assert_eq!(one, Success(3));
        assert_eq!(two, Success(6));
        assert_eq!(three, Success(10));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_map_with_skips_failure() {
        let calls = Cell::new(0);
        let failure: Result<i32> = Failure(Error::absent());
        let mapped = failure.map_with2(1, 2, |x, a, b| {
            calls.set(calls.get() + 1);
            x + a + b
        });
        assert_eq!(mapped, Failure(Error::absent()));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_map_with_captures_panic() {
        let divisor = Vec::<i32>::new();
        let divided = Result::of(Some(6)).map_with(&divisor, |x, d| x / d[0]);
        assert!(divided.is_failure());
    }
}
