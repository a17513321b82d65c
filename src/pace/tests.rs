//! Tests for pace module

use super::*;
use crate::error::Error;
use serde_json::json;
use std::time::Instant;

struct FailingHook;

#[async_trait]
impl PauseHook for FailingHook {
    async fn pause(&self, _context: &ValueMap) -> Result<()> {
        Err(Error::Other("boom".to_string()))
    }
}

/// Requires a `wait_ms` context key, checked only when invoked.
struct ContextHook;

#[async_trait]
impl PauseHook for ContextHook {
    async fn pause(&self, context: &ValueMap) -> Result<()> {
        let wait_ms = context
            .get("wait_ms")
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| Error::Other("missing wait_ms".to_string()))?;
        tokio::time::sleep(Duration::from_millis(wait_ms)).await;
        Ok(())
    }
}

// ============================================================================
// No-op Mode
// ============================================================================

#[tokio::test]
async fn test_no_op_returns_immediately() {
    let pacer = Pacer::no_op();
    assert!(pacer.is_no_op());

    let start = Instant::now();
    pacer.pause().await.unwrap();
    assert!(start.elapsed() < Duration::from_millis(50));
}

#[test]
fn test_default_is_no_op() {
    assert!(Pacer::default().is_no_op());
}

// ============================================================================
// Fixed Mode
// ============================================================================

#[tokio::test]
async fn test_fixed_pause_blocks_for_duration() {
    let pacer = Pacer::fixed(0.5);

    let start = Instant::now();
    pacer.pause().await.unwrap();
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(500));
    assert!(elapsed < Duration::from_secs(5));
}

#[tokio::test]
async fn test_fractional_seconds() {
    let pacer = Pacer::fixed(0.05);
    assert_eq!(pacer.delay(), Some(Duration::from_millis(50)));

    let start = Instant::now();
    pacer.pause().await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(50));
}

#[test]
fn test_unusable_seconds_clamp_to_zero() {
    assert_eq!(Pacer::fixed(-1.0).delay(), Some(Duration::ZERO));
    assert_eq!(Pacer::fixed(f64::NAN).delay(), Some(Duration::ZERO));
}

// ============================================================================
// Hook Mode
// ============================================================================

#[tokio::test]
async fn test_hook_receives_context() {
    let mut context = ValueMap::new();
    context.insert("wait_ms".to_string(), json!(1));

    let pacer = Pacer::with_hook(ContextHook, context);
    pacer.pause().await.unwrap();
}

#[tokio::test]
async fn test_hook_context_validated_at_call_time() {
    // Construction succeeds with an empty context; the hook only complains
    // when it is actually invoked.
    let pacer = Pacer::with_hook(ContextHook, ValueMap::new());

    let err = pacer.pause().await.unwrap_err();
    assert_eq!(err.to_string(), "missing wait_ms");
}

#[tokio::test]
async fn test_hook_error_propagates_unmodified() {
    let pacer = Pacer::with_hook(FailingHook, ValueMap::new());

    let err = pacer.pause().await.unwrap_err();
    assert!(matches!(err, Error::Other(_)));
    assert_eq!(err.to_string(), "boom");
}

// ============================================================================
// Rate Limit Hook
// ============================================================================

#[tokio::test]
async fn test_rate_limit_hook_allows_burst() {
    let pacer = Pacer::with_hook(RateLimitHook::new(10, 3), ValueMap::new());

    let start = Instant::now();
    for _ in 0..3 {
        pacer.pause().await.unwrap();
    }
    assert!(start.elapsed() < Duration::from_millis(200));
}

#[tokio::test]
async fn test_rate_limit_hook_spaces_requests() {
    // 50 rps, burst 1: the second and third token arrive ~20ms apart.
    let pacer = Pacer::with_hook(RateLimitHook::new(50, 1), ValueMap::new());

    let start = Instant::now();
    for _ in 0..3 {
        pacer.pause().await.unwrap();
    }
    assert!(start.elapsed() >= Duration::from_millis(30));
}

#[test]
fn test_rate_limit_hook_clamps_zero() {
    let hook = RateLimitHook::new(0, 0);
    assert_eq!(hook.requests_per_second(), 1);
    assert_eq!(hook.burst_size(), 1);
}
