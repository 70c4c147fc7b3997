pub mod monad;
pub use monad::*;

pub mod tap;
pub use tap::*;

pub mod functor;
pub use functor::*;

pub mod iter;

pub mod result;
pub use result::*;
