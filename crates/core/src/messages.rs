//! Client-facing error messages.
//!
//! Messages are localized for the Korean-speaking user base and are part of
//! the observable API contract, so tests compare against these constants.

/// A required request field was missing or `null`.
pub const MISSING_ARGUMENT: &str = "인자 중 null 값이 존재합니다.";

/// Anything not anticipated by the error mapping. Never includes details.
pub const UNEXPECTED_ERROR: &str = "예상치 못한 예외가 발생했습니다. 관리자에게 문의하세요.";

pub const NOT_LOGGED_IN: &str = "로그인이 필요합니다.";
pub const INVALID_CREDENTIALS: &str = "이메일 또는 비밀번호가 올바르지 않습니다.";
pub const ADMIN_REQUIRED: &str = "관리자 권한이 필요합니다.";
pub const NOT_WAITING_OWNER: &str = "본인의 예약 대기만 취소할 수 있습니다.";

pub const PAST_SLOT: &str = "지나간 날짜와 시간에 대한 예약은 불가능합니다.";
pub const UNKNOWN_TIME: &str = "존재하지 않는 예약 시간입니다.";
pub const UNKNOWN_THEME: &str = "존재하지 않는 테마입니다.";
pub const ALREADY_RESERVED: &str = "이미 해당 시간에 예약이 존재합니다.";
pub const ALREADY_WAITING: &str = "이미 해당 시간에 예약 대기가 존재합니다.";
pub const DUPLICATE_VALUE: &str = "이미 존재하는 값입니다.";
pub const RESOURCE_NOT_FOUND: &str = "요청한 리소스가 존재하지 않습니다.";
