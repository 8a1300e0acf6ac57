use clap::Args;

use crate::processor::text::DEFAULT_WRAP_WIDTH;

pub const DEFAULT_CODES_PACKAGE: &str = "org.sbml.jsbml.validator.offline.factory";
pub const DEFAULT_BUNDLE_PACKAGE: &str = "org.sbml.jsbml.validator.offline.i18n";

/// Name of the generated constants interface.
pub const CODES_INTERFACE: &str = "SBMLErrorCodes";

/// Knobs shared by every Java generator.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Java package of the constants interface
    #[arg(long, default_value = DEFAULT_CODES_PACKAGE)]
    pub codes_package: String,

    /// Java package of the message bundles
    #[arg(long, default_value = DEFAULT_BUNDLE_PACKAGE)]
    pub bundle_package: String,

    /// Column budget for wrapped comment text
    #[arg(long, default_value_t = DEFAULT_WRAP_WIDTH)]
    pub wrap_width: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            codes_package: DEFAULT_CODES_PACKAGE.to_string(),
            bundle_package: DEFAULT_BUNDLE_PACKAGE.to_string(),
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}
