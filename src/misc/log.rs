/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to the [valuation](crate::structures::valuation)
    pub const VALUATION: &str = "valuation";

    /// Logs related to [watch lists](crate::db::watches)
    pub const WATCHES: &str = "watches";

    /// Logs related to [rebase](crate::procedures::rebase)
    pub const REBASE: &str = "rebase";

    /// Logs related to [configuration](crate::config)
    pub const CONFIG: &str = "config";

    /// Logs related to building a [context](crate::context)
    pub const CONTEXT: &str = "context";
}
