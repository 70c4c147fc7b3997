use crate::{Either, Exceptional};

pub trait Monad<A, B>
  where Self: Sized
{
  type Out;
  fn bind(self, f: impl FnOnce(A) -> Self::Out) -> Self::Out;
}

impl<L, A, B> Monad<A, B> for Either<L, A> {
  type Out = Either<L, B>;
  fn bind(self, f: impl FnOnce(A) -> Self::Out) -> Self::Out {
    Either::bind(self, f)
  }
}

impl<A, B> Monad<A, B> for Exceptional<A> {
  type Out = Exceptional<B>;
  fn bind(self, f: impl FnOnce(A) -> Self::Out) -> Self::Out {
    Exceptional::bind(self, f)
  }
}
