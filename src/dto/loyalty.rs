//! DTOs for the loyalty program page.

use crate::domain::loyalty::LoyaltyProgram;

/// Data required to render the loyalty template.
pub struct LoyaltyPageData {
    /// `None` until the hub configures a program.
    pub program: Option<LoyaltyProgram>,
}
