use serde::{Deserialize as De, Serialize as Ser};

/// One of two alternative outcomes.
///
/// `Left` is conventionally the rejected / alternate outcome and `Right` the
/// successful one. Every combinator is right-biased: it only ever touches a
/// `Right`, and hands a `Left` back unchanged.
///
/// ```
/// use elevated::Either::{self, *};
///
/// let mult = |x: i32, y: i32| x * y;
/// let twelve = Either::<String, _>::Right(mult).apply2(Right(3))
///                                              .apply(Right(4));
///
/// assert_eq!(twelve, Right(12));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Ser, De)]
pub enum Either<L, R> {
  Left(L),
  Right(R),
}

use self::Either::{Left, Right};

impl<L, R> Either<L, R> {
  /// Lift a value into the `Right` branch.
  pub fn pure(r: R) -> Self {
    Right(r)
  }

  /// Exit the container, handling both branches.
  #[doc(alias = "match")]
  pub fn fold<X>(self,
                 on_left: impl FnOnce(L) -> X,
                 on_right: impl FnOnce(R) -> X)
                 -> X {
    match self {
      | Left(l) => on_left(l),
      | Right(r) => on_right(r),
    }
  }

  pub fn is_left(&self) -> bool {
    matches!(self, Left(_))
  }

  pub fn is_right(&self) -> bool {
    matches!(self, Right(_))
  }

  pub fn as_ref(&self) -> Either<&L, &R> {
    match self {
      | Left(l) => Left(l),
      | Right(r) => Right(r),
    }
  }

  /// Functor map over the `Right` branch.
  #[doc(alias = "select")]
  pub fn map<RR>(self, f: impl FnOnce(R) -> RR) -> Either<L, RR> {
    match self {
      | Left(l) => Left(l),
      | Right(r) => Right(f(r)),
    }
  }

  pub fn map_left<LL>(self, f: impl FnOnce(L) -> LL) -> Either<LL, R> {
    match self {
      | Left(l) => Left(f(l)),
      | Right(r) => Right(r),
    }
  }

  /// Monadic bind; the first `Left` ends the chain.
  pub fn bind<RR>(self, f: impl FnOnce(R) -> Either<L, RR>) -> Either<L, RR> {
    match self {
      | Left(l) => Left(l),
      | Right(r) => f(r),
    }
  }

  /// Bind, then combine the original and the bound value with `project`.
  ///
  /// This is what a two-source comprehension
  /// (`for x in a, for y in bind(x), yield project(x, y)`) boils down to.
  pub fn select_many<T, RR>(self,
                            bind: impl FnOnce(&R) -> Either<L, T>,
                            project: impl FnOnce(R, T) -> RR)
                            -> Either<L, RR> {
    match self {
      | Left(l) => Left(l),
      | Right(r) => match bind(&r) {
        | Left(l) => Left(l),
        | Right(t) => Right(project(r, t)),
      },
    }
  }

  pub fn into_result(self) -> Result<R, L> {
    self.fold(Err, Ok)
  }
}

impl<L, F> Either<L, F> {
  /// Apply a lifted unary function to a lifted argument.
  ///
  /// A `Left` function wins over a `Left` argument.
  pub fn apply<T, R>(self, arg: Either<L, T>) -> Either<L, R>
    where F: FnOnce(T) -> R
  {
    match (self, arg) {
      | (Left(l), _) => Left(l),
      | (Right(_), Left(l)) => Left(l),
      | (Right(f), Right(t)) => Right(f(t)),
    }
  }

  /// Partially apply a lifted binary function to its first argument.
  pub fn apply2<T1, T2, R>(self,
                           arg: Either<L, T1>)
                           -> Either<L, impl FnOnce(T2) -> R>
    where F: FnOnce(T1, T2) -> R
  {
    match (self, arg) {
      | (Left(l), _) => Left(l),
      | (Right(_), Left(l)) => Left(l),
      | (Right(f), Right(t1)) => Right(move |t2| f(t1, t2)),
    }
  }

  /// Partially apply a lifted ternary function to its first argument.
  pub fn apply3<T1, T2, T3, R>(self,
                               arg: Either<L, T1>)
                               -> Either<L, impl FnOnce(T2, T3) -> R>
    where F: FnOnce(T1, T2, T3) -> R
  {
    match (self, arg) {
      | (Left(l), _) => Left(l),
      | (Right(_), Left(l)) => Left(l),
      | (Right(f), Right(t1)) => Right(move |t2, t3| f(t1, t2, t3)),
    }
  }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
  fn from(r: Result<R, L>) -> Self {
    match r {
      | Ok(r) => Right(r),
      | Err(l) => Left(l),
    }
  }
}
