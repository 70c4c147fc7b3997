use std::iter::FromIterator;

use crate::{Either, Exceptional};

/// Collect into `Right` of all values, or the first `Left` encountered.
impl<L, R, V: FromIterator<R>> FromIterator<Either<L, R>> for Either<L, V> {
  fn from_iter<I: IntoIterator<Item = Either<L, R>>>(iter: I) -> Self {
    iter.into_iter()
        .map(Either::into_result)
        .collect::<Result<V, L>>()
        .into()
  }
}

/// Collect into `Success` of all values, or the first `Failure` encountered.
impl<T, V: FromIterator<T>> FromIterator<Exceptional<T>> for Exceptional<V> {
  fn from_iter<I: IntoIterator<Item = Exceptional<T>>>(iter: I) -> Self {
    match iter.into_iter()
              .map(Exceptional::into_result)
              .collect::<Result<V, _>>()
    {
      | Ok(v) => Exceptional::Success(v),
      | Err(e) => Exceptional::Failure(e),
    }
  }
}
