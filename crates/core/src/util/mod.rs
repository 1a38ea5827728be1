/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took to evaluate, and returns the value of
/// the expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Round to the nearest integer, with halves always going up (towards
/// positive infinity). [f64::round] rounds halves away from zero, which would
/// make snapping asymmetric around the grid origin. Values past the `i32`
/// limits clamp to them.
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Narrow a widened intermediate result back down to an `i32`, clamping at
/// the limits instead of overflowing
pub fn saturate(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Is this integer odd? Works for negatives too, i.e. `-1` is odd.
pub fn is_odd(value: i32) -> bool {
    value.rem_euclid(2) == 1
}
