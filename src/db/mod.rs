/*!
Databases for things revised during a solve.

For Stålmarck's method the only structure revised during a solve is the partial valuation,
held in the [assignment database](crate::db::assignment) together with a trail of the
assignments made.
The formula and the triplet store, in contrast, are fixed once built, and live with the
[structures](crate::structures) and the [encoder](crate::encoder).
*/

pub mod assignment;
