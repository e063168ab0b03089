/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing
issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    pub const DILEMMA: &str = "dilemma";
    pub const ENCODE: &str = "encode";
    pub const SATURATION: &str = "saturation";
    pub const SOLVE: &str = "solve";
    pub const VALUATION: &str = "valuation";
    pub const VERIFY: &str = "verify";
}
