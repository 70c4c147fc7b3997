use crate::{Either, Exceptional};

pub trait Functor<A, B> {
  type Out;
  fn fmap(self, f: impl FnOnce(A) -> B) -> Self::Out;
}

pub trait BiFunctor<A1, A2, B1, B2> {
  type Out;
  fn bi_map(self,
            f1: impl FnOnce(A1) -> B1,
            f2: impl FnOnce(A2) -> B2)
            -> Self::Out;
}

impl<L, A, B> Functor<A, B> for Either<L, A> {
  type Out = Either<L, B>;
  fn fmap(self, f: impl FnOnce(A) -> B) -> Self::Out {
    self.map(f)
  }
}

impl<A, B> Functor<A, B> for Exceptional<A> {
  type Out = Exceptional<B>;
  fn fmap(self, f: impl FnOnce(A) -> B) -> Self::Out {
    self.map(f)
  }
}

impl<A1, A2, B1, B2> BiFunctor<A1, A2, B1, B2> for Either<A1, A2> {
  type Out = Either<B1, B2>;
  fn bi_map(self,
            f1: impl FnOnce(A1) -> B1,
            f2: impl FnOnce(A2) -> B2)
            -> Self::Out {
    self.map_left(f1).map(f2)
  }
}
