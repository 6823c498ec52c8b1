/// Logs the error of a fallible host-side step without aborting the run.
/// The format arguments may refer to the error as `{err}`.
#[macro_export]
macro_rules! log_err {
    ($expr:expr, $($arg:tt)+) => {
        if let Err(err) = $expr {
            log::error!($($arg)+, err = err);
        }
    };
}
