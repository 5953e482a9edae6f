//! Re-invoke a fallible operation a fixed number of times.

use std::time::Duration;

/// Call `op` up to `attempts` times, sleeping `delay` between failures,
/// returning the first success or the last failure. The 1-based attempt
/// number is passed to `op`; zero attempts is treated as one.
pub fn retry<T, E, F>(attempts: u32, delay: Option<Duration>, mut op: F) -> Result<T, E>
where
    F: FnMut(u32) -> Result<T, E>,
{
    let attempts = attempts.max(1);

    let mut attempt = 1;
    loop {
        match op(attempt) {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt >= attempts {
                    return Err(err);
                }
                crate::log_status!("retry", "Attempt {}/{} failed", attempt, attempts);
                if let Some(delay) = delay {
                    std::thread::sleep(delay);
                }
                attempt += 1;
            }
        }
    }
}
