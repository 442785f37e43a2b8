// ── Authorization ──
pub const ERR_NOT_MANAGER: &str = "Only the manager can perform this action";
pub const ERR_NOT_APPROVER: &str = "Only contributors can approve requests";
pub const ERR_ZERO_MANAGER: &str = "Manager cannot be the zero address";

// ── Threshold ──
pub const ERR_BELOW_MINIMUM: &str = "Contribution must exceed the minimum contribution";
pub const ERR_ZERO_MINIMUM: &str = "Minimum contribution must be positive";
pub const ERR_ZERO_VALUE: &str = "Request value must be positive";

// ── State ──
pub const ERR_ALREADY_APPROVED: &str = "Request already approved by this contributor";
pub const ERR_ALREADY_COMPLETE: &str = "Request already finalized";

// ── Quorum ──
pub const ERR_NO_QUORUM: &str = "Request is not approved by a majority of contributors";

// ── Resource ──
pub const ERR_INSUFFICIENT_BALANCE: &str = "Insufficient campaign balance";

// ── Not found ──
pub const ERR_REQUEST_NOT_FOUND: &str = "Request does not exist";
