use super::*;

#[test]
fn test_deep_recursion_does_not_overflow() {
    fn depth(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    assert_eq!(depth(100_000), 100_000);
}

#[test]
fn test_passes_result_through() {
    let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("nope"));
    assert_eq!(result, Err("nope"));
}

#[test]
fn test_depth_tracker_limit() {
    let mut depth = DepthTracker::new(2);
    assert_eq!(depth.enter(), Ok(()));
    assert_eq!(depth.enter(), Ok(()));
    assert_eq!(depth.enter(), Err(DepthExceeded { limit: 2 }));
    assert_eq!(depth.current(), 2);

    depth.exit();
    assert_eq!(depth.current(), 1);
    assert_eq!(depth.enter(), Ok(()));
}

#[test]
fn test_depth_exceeded_message() {
    let err = DepthExceeded { limit: 512 };
    assert_eq!(err.to_string(), "nesting depth exceeded limit of 512");
}
