//! Wordlist Forge - targeted password wordlist generation
//!
//! Builds candidate password lists from a name, a date, and a pet name, and
//! reports password strength through an external scoring oracle.

pub mod analysis;
pub mod error;
pub mod types;
pub mod wordlist;

// Re-export commonly used types
pub use error::{ForgeError, Result};
pub use types::{GenerationConfig, GenerationRequest, Summary};

// Re-export main functionality
pub use analysis::{analyze, AnalysisReport, StrengthLevel, StrengthOracle, ZxcvbnOracle};
pub use wordlist::{generate, WordlistGenerator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
