use std::{any::{type_name, Any},
          error::Error as StdError,
          panic::{self, UnwindSafe}};

use serde::{Deserialize as De, Serialize as Ser};
use thiserror::Error as DeriveError;

use crate::Either;

/// A failure captured into data instead of being propagated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Ser, De, DeriveError)]
#[error("{kind}: {message}")]
pub struct Failure {
  /// Type name of the captured error, `"panic"` for a caught panic.
  pub kind: String,
  pub message: String,
  #[source]
  pub cause: Option<Box<Failure>>,
}

impl Failure {
  pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
    Self { kind:    kind.into(),
           message: message.into(),
           cause:   None, }
  }

  pub fn caused_by(mut self, cause: Failure) -> Self {
    self.cause = Some(Box::new(cause));
    self
  }

  /// Describe `e`, following its `source()` chain.
  ///
  /// A `Failure` is already a description and comes back unchanged.
  pub fn capture<E: StdError + 'static>(e: &E) -> Self {
    if let Some(failure) = (e as &dyn Any).downcast_ref::<Failure>() {
      return failure.clone();
    }

    Self { kind:    type_name::<E>().to_string(),
           message: e.to_string(),
           cause:   e.source().map(Self::capture_source), }
  }

  /// [`Failure::capture`] for a type-erased error, e.g. a boxed [`AnyError`].
  ///
  /// [`AnyError`]: crate::AnyError
  pub fn capture_dyn(e: &(dyn StdError + 'static)) -> Self {
    Self::describe_dyn(e, "dyn Error")
  }

  // `dyn Error` sources carry no type name
  fn capture_source(e: &(dyn StdError + 'static)) -> Box<Self> {
    Box::new(Self::describe_dyn(e, "source"))
  }

  fn describe_dyn(e: &(dyn StdError + 'static), kind: &str) -> Self {
    match e.downcast_ref::<Failure>() {
      | Some(failure) => failure.clone(),
      | None => Self { kind:    kind.to_string(),
                       message: e.to_string(),
                       cause:   e.source().map(Self::capture_source), },
    }
  }

  fn from_panic(payload: Box<dyn Any + Send>) -> Self {
    let message = match payload.downcast::<String>() {
      | Ok(s) => *s,
      | Err(payload) => payload.downcast_ref::<&str>()
                               .map(|s| s.to_string())
                               .unwrap_or_else(|| "Box<dyn Any>".to_string()),
    };

    Self::new("panic", message)
  }

  /// This failure followed by each of its causes, outermost first.
  pub fn chain(&self) -> impl Iterator<Item = &Failure> {
    std::iter::successors(Some(self), |f| f.cause.as_deref())
  }
}

/// Either a captured [`Failure`] or a successfully computed `T`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Ser, De)]
pub enum Exceptional<T> {
  Failure(Failure),
  Success(T),
}

impl<T> Exceptional<T> {
  pub fn success(value: T) -> Self {
    Self::Success(value)
  }

  pub fn failure(failure: Failure) -> Self {
    Self::Failure(failure)
  }

  /// Run a fallible computation, capturing an `Err` as a [`Failure`].
  ///
  /// ```
  /// use elevated::Exceptional;
  ///
  /// let n = Exceptional::attempt(|| "12".parse::<i32>());
  /// assert_eq!(n, Exceptional::success(12));
  ///
  /// let n = Exceptional::attempt(|| "twelve".parse::<i32>());
  /// assert!(n.is_failure());
  /// ```
  pub fn attempt<E: StdError + 'static>(f: impl FnOnce() -> Result<T, E>) -> Self {
    f().into()
  }

  /// [`Exceptional::attempt`] for computations failing with a boxed error.
  pub fn attempt_boxed(f: impl FnOnce() -> Result<T, crate::AnyError>) -> Self {
    match f() {
      | Ok(v) => Self::Success(v),
      | Err(e) => {
        let failure = Failure::capture_dyn(&*e);
        log::debug!("captured failure: {}", failure);
        Self::Failure(failure)
      },
    }
  }

  /// Run a computation that may panic, capturing the panic as a [`Failure`].
  pub fn catch<F>(f: F) -> Self
    where F: FnOnce() -> T + UnwindSafe
  {
    match panic::catch_unwind(f) {
      | Ok(v) => Self::Success(v),
      | Err(payload) => {
        let failure = Failure::from_panic(payload);
        log::debug!("captured panic: {}", failure);
        Self::Failure(failure)
      },
    }
  }

  /// Exit the container, handling both branches.
  #[doc(alias = "match")]
  pub fn fold<X>(self,
                 on_failure: impl FnOnce(Failure) -> X,
                 on_success: impl FnOnce(T) -> X)
                 -> X {
    match self {
      | Self::Failure(e) => on_failure(e),
      | Self::Success(v) => on_success(v),
    }
  }

  pub fn is_success(&self) -> bool {
    matches!(self, Self::Success(_))
  }

  pub fn is_failure(&self) -> bool {
    matches!(self, Self::Failure(_))
  }

  pub fn as_ref(&self) -> Exceptional<&T> {
    match self {
      | Self::Failure(e) => Exceptional::Failure(e.clone()),
      | Self::Success(v) => Exceptional::Success(v),
    }
  }

  #[doc(alias = "select")]
  pub fn map<R>(self, f: impl FnOnce(T) -> R) -> Exceptional<R> {
    match self {
      | Self::Failure(e) => Exceptional::Failure(e),
      | Self::Success(v) => Exceptional::Success(f(v)),
    }
  }

  pub fn bind<R>(self, f: impl FnOnce(T) -> Exceptional<R>) -> Exceptional<R> {
    match self {
      | Self::Failure(e) => Exceptional::Failure(e),
      | Self::Success(v) => f(v),
    }
  }

  /// Bind, then combine the original and the bound value with `project`.
  pub fn select_many<U, R>(self,
                           bind: impl FnOnce(&T) -> Exceptional<U>,
                           project: impl FnOnce(T, U) -> R)
                           -> Exceptional<R> {
    match self {
      | Self::Failure(e) => Exceptional::Failure(e),
      | Self::Success(v) => match bind(&v) {
        | Exceptional::Failure(e) => Exceptional::Failure(e),
        | Exceptional::Success(u) => Exceptional::Success(project(v, u)),
      },
    }
  }

  pub fn into_result(self) -> Result<T, Failure> {
    self.fold(Err, Ok)
  }

  pub fn into_either(self) -> Either<Failure, T> {
    self.fold(Either::Left, Either::Right)
  }
}

impl<F> Exceptional<F> {
  /// Apply a lifted unary function; a failed function wins over a failed
  /// argument.
  pub fn apply<T, R>(self, arg: Exceptional<T>) -> Exceptional<R>
    where F: FnOnce(T) -> R
  {
    match (self, arg) {
      | (Self::Failure(e), _) => Exceptional::Failure(e),
      | (Self::Success(_), Exceptional::Failure(e)) => Exceptional::Failure(e),
      | (Self::Success(f), Exceptional::Success(t)) => Exceptional::Success(f(t)),
    }
  }

  pub fn apply2<T1, T2, R>(self,
                           arg: Exceptional<T1>)
                           -> Exceptional<impl FnOnce(T2) -> R>
    where F: FnOnce(T1, T2) -> R
  {
    match (self, arg) {
      | (Self::Failure(e), _) => Exceptional::Failure(e),
      | (Self::Success(_), Exceptional::Failure(e)) => Exceptional::Failure(e),
      | (Self::Success(f), Exceptional::Success(t1)) => {
        Exceptional::Success(move |t2| f(t1, t2))
      },
    }
  }

  pub fn apply3<T1, T2, T3, R>(self,
                               arg: Exceptional<T1>)
                               -> Exceptional<impl FnOnce(T2, T3) -> R>
    where F: FnOnce(T1, T2, T3) -> R
  {
    match (self, arg) {
      | (Self::Failure(e), _) => Exceptional::Failure(e),
      | (Self::Success(_), Exceptional::Failure(e)) => Exceptional::Failure(e),
      | (Self::Success(f), Exceptional::Success(t1)) => {
        Exceptional::Success(move |t2, t3| f(t1, t2, t3))
      },
    }
  }
}

impl<T, E: StdError + 'static> From<Result<T, E>> for Exceptional<T> {
  fn from(r: Result<T, E>) -> Self {
    match r {
      | Ok(v) => Self::Success(v),
      | Err(e) => {
        let failure = Failure::capture(&e);
        log::debug!("captured failure: {}", failure);
        Self::Failure(failure)
      },
    }
  }
}

impl<T> From<Failure> for Exceptional<T> {
  fn from(e: Failure) -> Self {
    Self::Failure(e)
  }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;
  use crate::prelude::*;

  #[derive(Debug, DeriveError)]
  #[error("could not read config")]
  struct ReadConfig(#[source] std::num::ParseIntError);

  fn boom<T>() -> Exceptional<T> {
    Exceptional::failure(Failure::new("Boom", "went boom"))
  }

  #[test]
  fn multiply_applies_both_arguments() {
    let multiply = |x: i32, y: i32| y * x;
    let res = Exceptional::success(multiply).apply2(Exceptional::success(2))
                                            .apply(Exceptional::success(5));

    assert_eq!(res, Exceptional::success(10));
  }

  #[test]
  fn apply_prefers_function_side_failure() {
    let f: Exceptional<fn(i32) -> i32> =
      Exceptional::failure(Failure::new("Fn", "function side"));

    assert_eq!(f.apply(boom::<i32>()),
               Exceptional::<i32>::failure(Failure::new("Fn", "function side")));
  }

  #[test]
  fn apply_does_not_mask_argument_failure() {
    let add = |a: i32, b: i32| a + b;
    let res = Exceptional::success(add).apply2(Exceptional::success(1))
                                       .apply(boom());

    assert_eq!(res, boom());
  }

  #[test]
  fn apply3_curries_down_to_apply() {
    let join = |a: &str, b: &str, c: &str| format!("{}-{}-{}", a, b, c);
    let res = Exceptional::success(join).apply3(Exceptional::success("a"))
                                        .apply2(Exceptional::success("b"))
                                        .apply(Exceptional::success("c"));

    assert_eq!(res, Exceptional::success("a-b-c".to_string()));
  }

  #[test]
  fn full_name_three_ways() {
    let first = Exceptional::success("Polly".to_string());
    let last = Exceptional::success("Andersson".to_string());
    let expected = Exceptional::success("Polly Andersson".to_string());

    let bound = first.clone()
                     .bind(|f| last.clone().map(|l| format!("{} {}", f, l)));
    let projected = first.clone()
                         .select_many(|_| last.clone(), |f, l| format!("{} {}", f, l));
    let applied = Exceptional::success(|f: String, l: String| format!("{} {}", f, l))
                    .apply2(first)
                    .apply(last);

    assert_eq!(bound, expected);
    assert_eq!(projected, expected);
    assert_eq!(applied, expected);
  }

  #[test]
  fn map_uppercases_success() {
    let upper = Exceptional::success("Polly").map(str::to_uppercase);

    upper.fold(|e| panic!("unexpected failure {}", e),
               |v| assert_eq!(v, "POLLY"));
  }

  #[test]
  fn failure_is_never_mapped_or_bound() {
    let calls = Cell::new(0);
    let bump = |x: i32| {
      calls.set(calls.get() + 1);
      x
    };

    assert_eq!(boom::<i32>().map(bump), boom());
    assert_eq!(boom::<i32>().bind(|x| Exceptional::success(bump(x))), boom());
    assert_eq!(boom::<i32>().select_many(|x| Exceptional::success(bump(*x)),
                                         |a, b| a + b),
               boom());
    assert_eq!(Exceptional::success(bump).apply(boom::<i32>()), boom());
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn attempt_captures_error_kind_and_message() {
    let n = Exceptional::attempt(|| "x".parse::<i32>());

    n.fold(|e| {
             assert!(e.kind.ends_with("ParseIntError"), "kind was {}", e.kind);
             assert_eq!(e.message, "invalid digit found in string");
             assert_eq!(e.cause, None);
           },
           |v| panic!("parsed {}", v));
  }

  #[test]
  fn attempt_captures_cause_chain() {
    let res: Exceptional<i32> =
      Exceptional::attempt(|| "x".parse::<i32>().map_err(ReadConfig));
    let failure = res.into_result().unwrap_err();

    let messages = failure.chain()
                          .map(|f| f.message.as_str())
                          .collect::<Vec<_>>();
    assert_eq!(messages,
               vec!["could not read config", "invalid digit found in string"]);
    assert_eq!(failure.chain().nth(1).map(|f| f.kind.as_str()), Some("source"));
    assert!(StdError::source(&failure).is_some());
  }

  #[test]
  fn catch_captures_panics() {
    let res: Exceptional<i32> = Exceptional::catch(|| panic!("no dice"));
    assert_eq!(res, Exceptional::failure(Failure::new("panic", "no dice")));

    let res = Exceptional::catch(|| 7);
    assert_eq!(res, Exceptional::success(7));
  }

  #[test]
  fn catch_captures_formatted_panics() {
    let res: Exceptional<i32> = Exceptional::catch(|| panic!("n = {}", 1));

    assert_eq!(res, Exceptional::failure(Failure::new("panic", "n = 1")));
  }

  #[test]
  fn captured_failure_round_trips() {
    assert_eq!(Exceptional::from(boom::<i32>().into_result()), boom());
  }

  #[test]
  fn boxed_failure_round_trips() {
    let x = boom::<i32>();

    assert_eq!(Exceptional::attempt_boxed(|| x.clone().into_result().norm()), x);
  }

  #[test]
  fn attempt_boxed_describes_foreign_errors() {
    let res = Exceptional::attempt_boxed(|| "x".parse::<i32>().norm());

    assert_eq!(res,
               Exceptional::failure(Failure::new("dyn Error",
                                                 "invalid digit found in string")));
    assert_eq!(Exceptional::attempt_boxed(|| "4".parse::<i32>().norm()),
               Exceptional::success(4));
  }

  #[test]
  fn wrapped_failure_keeps_its_kind() {
    #[derive(Debug, DeriveError)]
    #[error("while loading")]
    struct Loading(#[source] Failure);

    let res: Exceptional<()> =
      Exceptional::attempt(|| Err(Loading(Failure::new("Boom", "went boom"))));
    let failure = res.into_result().unwrap_err();

    assert_eq!(failure.cause.as_deref(), Some(&Failure::new("Boom", "went boom")));
  }

  #[test]
  fn equality_compares_descriptions() {
    assert_eq!(boom::<i32>(), boom::<i32>());
    assert_ne!(boom::<i32>(),
               Exceptional::failure(Failure::new("Boom", "other message")));
    assert_ne!(boom::<i32>(),
               Exceptional::failure(Failure::new("Bang", "went boom")));
    assert_ne!(boom(), Exceptional::success(1));
  }

  #[test]
  fn converts_to_either() {
    assert_eq!(Exceptional::success(1).into_either(),
               Either::<Failure, _>::Right(1));
    assert_eq!(boom::<i32>().into_either(),
               Either::Left(Failure::new("Boom", "went boom")));
  }

  #[test]
  fn failure_serializes_with_cause() {
    let f = Failure::new("Outer", "outer").caused_by(Failure::new("Inner", "inner"));
    let json = serde_json::to_value(&Exceptional::<i32>::failure(f.clone())).unwrap();

    assert_eq!(json["Failure"]["cause"]["kind"], "Inner");

    let back: Exceptional<i32> = serde_json::from_value(json).unwrap();
    assert_eq!(back, Exceptional::failure(f));
  }
}
