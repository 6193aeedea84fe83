/// Prints a progress line prefixed with the local time.
/// Pass a starting time as the first argument to also print how long it took from then to now.
/// ```ignore
/// info_time!("Starting partition {}", 'a');
/// let time = chrono::Local::now();
/// info_time!(time, "{} words", 42);
/// ```
#[macro_export]
macro_rules! info_time {
    ($strfm:literal $(, $arg:expr)*) => {{
        let local_now = ::chrono::Local::now();
        println!("{:<30} : {}", local_now, format!($strfm $(, $arg)*));
    }};
    ($time:expr, $strfm:literal $(, $arg:expr)*) => {{
        let local_now = ::chrono::Local::now();
        let run_time = (local_now - $time)
            .num_microseconds()
            .map(|n| n as f64 / 1_000_000.0)
            .unwrap_or(0.0);
        println!(
            "{:<30} : {}\nRUNTIME: {} sec",
            local_now,
            format!($strfm $(, $arg)*),
            run_time
        );
    }};
}
