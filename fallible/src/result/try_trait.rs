use core::{
    convert::Infallible,
    ops::{ControlFlow, FromResidual, Try},
};

use super::Result::{self, Failure, Success};

impl<T, E> Try for Result<T, E> {
    type Output = T;
    type Residual = Result<Infallible, E>;

    fn from_output(output: Self::Output) -> Self {
        Success(output)
    }

    fn branch(self) -> ControlFlow<Self::Residual, Self::Output> {
        match self {
            Success(value) => ControlFlow::Continue(value),
            Failure(error) => ControlFlow::Break(Failure(error)),
        }
    }
}

impl<T, E, F> FromResidual<Result<Infallible, E>> for Result<T, F>
where
    F: From<E>,
{
    fn from_residual(residual: Result<Infallible, E>) -> Self {
        match residual {
            Failure(error) => Failure(From::from(error)),
            Success(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::Error;

    use super::Result::{self, Failure, Success};

    fn parse_sum(a: &str, b: &str) -> Result<i32> {
        let a = Result::try_of(|| a.parse::<i32>())?;
        let b = Result::try_of(|| b.parse::<i32>())?;
        Success(a + b)
    }

    #[test]
    fn test_question_mark_short_circuits() {
        assert_eq!(parse_sum("2", "3"), Success(5));
        assert!(parse_sum("2", "x").is_failure());
    }

    #[test]
    fn test_question_mark_propagates_same_error() {
        fn relay(input: Result<u8>) -> Result<u16> {
            let value = input?;
            Success(u16::from(value))
        }
        assert_eq!(relay(Failure(Error::absent())), Failure(Error::absent()));
        assert_eq!(relay(Success(7)), Success(7));
    }
}
