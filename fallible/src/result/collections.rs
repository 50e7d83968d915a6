use super::Result::{self, Failure, Success};

impl<C> Result<C>
where
    C: IntoIterator,
{
    /// Applies `transform` to every item, capturing each outcome on its own.
    ///
    /// One item failing does not stop the rest; the caller decides how to
    /// combine the per-item results (collecting them into a
    /// `Result<Vec<_>>` stops at the first failure).
    ///
    /// ```
    /// use fallible::Result;
    ///
    /// let items = Result::of(Some([4, 0, 2])).map_each(|x| 8 / x).or_else(Vec::new());
    /// assert_eq!(items[0], Result::Success(2));
    /// assert!(items[1].is_failure());
    /// assert_eq!(items[2], Result::Success(4));
    /// ```
    pub fn map_each<O, F>(self, mut transform: F) -> Result<Vec<Result<O>>>
    where
        F: FnMut(C::Item) -> O,
    {
        match self {
            Success(items) => Success(
                items
                    .into_iter()
                    .map(|item| Result::from_fn(|| transform(item)))
                    .collect(),
            ),
            Failure(error) => Failure(error),
        }
    }

    /// Folds the items from the left, starting at `initial`.
    ///
    /// A panic in the accumulator turns the whole fold into a failure.
    pub fn map_fold<A, F>(self, initial: A, accumulator: F) -> Result<A>
    where
        F: FnMut(A, C::Item) -> A,
    {
        self.map(|items| items.into_iter().fold(initial, accumulator))
    }
}

impl<T, E, V> FromIterator<Result<T, E>> for Result<V, E>
where
    V: FromIterator<T>,
{
    /// Collects the values, stopping at the first failure.
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Result<T, E>>,
    {
        let mut failure = None;
        let values = iter
            .into_iter()
            .map_while(|result| match result {
                Success(value) => Some(value),
                Failure(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect();
        match failure {
            Some(error) => Failure(error),
            None => Success(values),
        }
    }
}
