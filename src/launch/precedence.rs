//! Precedence between `fast`, `prepare`, `precompile` and `compiled_modules`.
//!
//! | fast | prepare | compiled_modules | precompile | → prepare | → precompile | → compile=min |
//! |------|---------|------------------|------------|-----------|--------------|---------------|
//! | F    | unset   | inherit/yes      | unset      | T         | T            | F             |
//! | T    | unset   | any              | unset      | F         | F            | T             |
//! | T    | true    | inherit/yes      | unset      | T         | T            | T             |
//! | any  | any     | no               | true       | (rows above) | F         | (rows above)  |
//! | any  | false   | any              | true       | F         | F            | (rows above)  |
//!
//! Precompilation only happens inside the preparation step.

use crate::config::Toggle;

/// Resolved startup behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupPlan {
    /// Run the preparation step before launching.
    pub prepare: bool,
    /// Precompile during preparation.
    pub precompile: bool,
    /// Pass `--compile=min` to the child.
    pub compile_min: bool,
}

/// Apply the precedence table.
///
/// `compiled_modules` is the value after session inheritance.
pub fn plan_startup(
    fast: Option<bool>,
    prepare: Option<bool>,
    precompile: Option<bool>,
    compiled_modules: Toggle,
) -> StartupPlan {
    let fast = fast.unwrap_or(false);
    let prepare = prepare.unwrap_or(!fast);
    let precompile = compiled_modules != Toggle::No
        && prepare
        && precompile.unwrap_or(true);

    StartupPlan {
        prepare,
        precompile,
        compile_min: fast,
    }
}
