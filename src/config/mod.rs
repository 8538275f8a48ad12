/*!
Configuration of a context.

All configuration for a context is contained within [Config], and the configuration is fixed once a context is built.

The default configuration does nothing more than is required for propagation.
Other options exist to tune allocation, or to relax the snapshot returned by [rebase](crate::context::Context::rebase).

```rust
# use bcp_engine::config::Config;
# use bcp_engine::context::Context;
let mut config = Config::default();
assert!(config.clause_db.capacity.set(1024).is_ok());
assert!(config.watch_capacity.set(usize::MAX).is_err());

let ctx = Context::from_config(config, 16);
assert!(ctx.is_ok());
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Configuration of the clause database.
    pub clause_db: ClauseDBConfig,

    /// The initial capacity of each watch list.
    pub watch_capacity: ConfigOption<usize>,

    /// Omit any reduced clause from a rebase which has the same literals as some earlier reduced clause.
    pub deduplicate_rebase: ConfigOption<bool>,
}

/// Configuration of the clause database.
#[derive(Clone, Debug)]
pub struct ClauseDBConfig {
    /// The initial capacity of the clause database.
    pub capacity: ConfigOption<usize>,
}

impl Default for ClauseDBConfig {
    fn default() -> Self {
        ClauseDBConfig {
            capacity: ConfigOption {
                name: "clause_capacity",
                min: 0,
                max: 1 << 24,
                value: 0,
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            clause_db: ClauseDBConfig::default(),

            watch_capacity: ConfigOption {
                name: "watch_capacity",
                min: 0,
                max: 1 << 10,
                value: 0,
            },

            deduplicate_rebase: ConfigOption {
                name: "deduplicate_rebase",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}
