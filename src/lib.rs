//! `Either` and `Exceptional`: two error-carrying containers with functor,
//! applicative and monadic combinators, plus the small BMI exercise built on
//! top of them.

pub mod bmi;
pub mod config;
pub mod either;
pub mod exceptional;
pub mod logger;
pub mod prelude;

pub use either::Either;
pub use exceptional::{Exceptional, Failure};

pub type AnyError = Box<dyn std::error::Error + Send + Sync>;
