pub mod load;
pub mod types;

pub use types::{ComparisonMode, Config, DefaultTargets, ExtensionSet, SETTINGS_FILE_NAME, ScanDefaults, UserSettings};
