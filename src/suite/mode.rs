//! Whether a suite's cases may leave the thread that declared them.

use super::Case;

/// Trait of suite modes, fixing the boxed form that a suite stores its
/// cases in.
pub trait Mode<'a> {
    /// The unsized case type stored by suites in this mode.
    type Dyn: ?Sized + Case + 'a;
}

/// Mode of suites whose cases stay on the running thread.
///
/// Cases may capture non-`Send` fixtures such as `Rc<RefCell<_>>`, but the
/// suite can only run sequentially.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Local;

impl<'a> Mode<'a> for Local {
    type Dyn = dyn Case + 'a;
}

/// Mode of suites whose cases are all `Send`, so the whole suite can run on
/// another thread alongside other suites.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shared;

impl<'a> Mode<'a> for Shared {
    type Dyn = dyn Case + Send + 'a;
}
