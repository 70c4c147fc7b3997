use crate::{Either, Exceptional, Failure};

/// Run a side effect on the success value, passing the container through.
pub trait Tap<T> {
  fn tap(self, action: impl FnOnce(&T)) -> Self;
}

/// [`Tap`] for the failure / alternative branch.
pub trait TapErr<E> {
  fn tap_err(self, action: impl FnOnce(&E)) -> Self;
}

impl<L, R> Tap<R> for Either<L, R> {
  fn tap(self, action: impl FnOnce(&R)) -> Self {
    if let Either::Right(r) = &self {
      action(r);
    }
    self
  }
}

impl<L, R> TapErr<L> for Either<L, R> {
  fn tap_err(self, action: impl FnOnce(&L)) -> Self {
    if let Either::Left(l) = &self {
      action(l);
    }
    self
  }
}

impl<T> Tap<T> for Exceptional<T> {
  fn tap(self, action: impl FnOnce(&T)) -> Self {
    if let Exceptional::Success(v) = &self {
      action(v);
    }
    self
  }
}

impl<T> TapErr<Failure> for Exceptional<T> {
  fn tap_err(self, action: impl FnOnce(&Failure)) -> Self {
    if let Exceptional::Failure(e) = &self {
      action(e);
    }
    self
  }
}

impl<T, E> Tap<T> for Result<T, E> {
  fn tap(self, action: impl FnOnce(&T)) -> Self {
    if let Ok(v) = &self {
      action(v);
    }
    self
  }
}

impl<T, E> TapErr<E> for Result<T, E> {
  fn tap_err(self, action: impl FnOnce(&E)) -> Self {
    if let Err(e) = &self {
      action(e);
    }
    self
  }
}
