//! Hyexpr: arithmetic expression trees with pluggable tree-to-tree transformers.
//!
//! The crate models expressions built from numbers, variables, the four binary
//! operators `+ - * /` and calls to `sqrt` or `abs`. Every tree can be
//! evaluated, printed, and handed to a [`Transformer`](transform::Transformer)
//! that builds a brand-new tree from it.
//!
//! Shape
//!  - [`Expr`](expr::Expr) is a closed sum type; evaluation and printing are exhaustive matches.
//!  - Composite nodes own their children; trees are immutable once built.
//!  - Transformers are the open extension point: the crate ships
//!    [`CopyTransformer`](transform::copy::CopyTransformer) and
//!    [`ConstantFolder`](transform::fold::ConstantFolder).
//!
//! Validation
//!  - Invalid nodes cannot be built: unknown operator symbols, unsupported
//!    function names, missing operands and empty variable names are rejected
//!    with an [`ExprError`](error::ExprError).
//!
//! Example
//! ```
//! use hyexpr::prelude::*;
//!
//! let e = abs(var("var")? * sqrt(num(32.0) - num(16.0)));
//! assert_eq!(e.print(), "abs(var*sqrt(32.000000-16.000000))");
//!
//! let copy = e.transform(&mut CopyTransformer);
//! assert_eq!(copy.print(), e.print());
//!
//! let folded = e.transform(&mut ConstantFolder::new());
//! assert_eq!(folded.print(), "abs(var*4.000000)");
//! # Ok::<(), ExprError>(())
//! ```

/// Construction errors.
pub mod error;
/// Expression nodes: definitions, builders, evaluation and printing.
pub mod expr;
/// Arithmetic operator sugar on expression nodes.
pub mod ops;
/// Transformer protocol and the built-in passes.
pub mod transform;

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - `Expr` and the concrete node types
    //! - Free-function builders from `func::*`
    //! - The `Transformer` trait and built-in passes
    //! - Pretty-printing via `PrettyExpr` (feature `pretty`)
    pub use crate::error::{ExprError, ExprResult};
    pub use crate::expr::{
        Expr,
        defs::*,
        func::*,
        variant::{ExprType, Function, Operator},
    };
    pub use crate::transform::{
        Transformer,
        copy::CopyTransformer,
        fold::{ConstantFolder, FoldStatistics},
    };

    #[cfg(feature = "pretty")]
    pub use crate::expr::pretty::PrettyExpr;
}
