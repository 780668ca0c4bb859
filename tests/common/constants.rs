//! Shared constants for end-to-end tests

/// Bearer token the fake server accepts
pub const TEST_TOKEN: &str = "test-token-123";

/// Timeout for client requests in tests
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// Scroll start used by tests (2024-05-01T11:00:00Z)
pub const NOW_MS: i64 = 1_714_561_200_000;

/// 2024-05-01T10:03:00Z, the end date of the first v2 and v3 fixture pages
pub const PAGE_0_END_MS: i64 = 1_714_557_780_000;

/// 2024-05-01T10:02:00Z, the end date of the second v2 fixture page
pub const V2_PAGE_1_END_MS: i64 = 1_714_557_720_000;

/// 2024-05-01T10:01:00Z, the oldest notification of the second v3 page
pub const V3_PAGE_1_END_MS: i64 = 1_714_557_660_000;
