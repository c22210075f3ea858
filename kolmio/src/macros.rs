#[macro_export]
macro_rules! expect {
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(t) => t,
            Err(why) => {
                panic!("{}: {:?}", $msg, why);
            }
        }
    };
}

// Thin wrappers so call sites read uniformly and the facade can be swapped in one place

#[macro_export]
macro_rules! kolmio_error {
    ($($args:tt)*) => {
        log::error!($($args)*)
    };
}

#[macro_export]
macro_rules! kolmio_warn {
    ($($args:tt)*) => {
        log::warn!($($args)*)
    };
}

#[macro_export]
macro_rules! kolmio_info {
    ($($args:tt)*) => {
        log::info!($($args)*)
    };
}

#[macro_export]
macro_rules! kolmio_debug {
    ($($args:tt)*) => {
        log::debug!($($args)*)
    };
}

#[macro_export]
macro_rules! kolmio_trace {
    ($($args:tt)*) => {
        log::trace!($($args)*)
    };
}
