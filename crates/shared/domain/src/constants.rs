//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Stored code of the default role
pub const ROLE_REGULAR_CODE: i32 = 1;

/// Stored code of the administrator role
pub const ROLE_ADMIN_CODE: i32 = 2;

// =============================================================================
// Gender
// =============================================================================

pub const GENDER_MALE: &str = "male";

pub const GENDER_FEMALE: &str = "female";

// =============================================================================
// Pagination
// =============================================================================

/// First page (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Page size used when the caller asks for zero or fewer items
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Upper bound on items per page
pub const MAX_PAGE_SIZE: u64 = 100;

// =============================================================================
// Validation
// =============================================================================

/// Maximum mobile number length (column width)
pub const MAX_MOBILE_LENGTH: usize = 11;

/// Maximum nickname length in characters (column width)
pub const MAX_NICKNAME_LENGTH: usize = 25;
