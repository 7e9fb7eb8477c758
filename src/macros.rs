// Logging front-end. `defmt` wins when both backends are enabled; with
// neither, arguments are still type-checked but nothing is emitted.

macro_rules! log_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        {
            ::defmt::trace!($($arg)*)
        }
        #[cfg(all(feature = "log", not(feature = "defmt")))]
        {
            ::log::trace!($($arg)*)
        }
        #[cfg(not(any(feature = "log", feature = "defmt")))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    };
}

macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        {
            ::defmt::debug!($($arg)*)
        }
        #[cfg(all(feature = "log", not(feature = "defmt")))]
        {
            ::log::debug!($($arg)*)
        }
        #[cfg(not(any(feature = "log", feature = "defmt")))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    };
}

macro_rules! log_info {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        {
            ::defmt::info!($($arg)*)
        }
        #[cfg(all(feature = "log", not(feature = "defmt")))]
        {
            ::log::info!($($arg)*)
        }
        #[cfg(not(any(feature = "log", feature = "defmt")))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    };
}

macro_rules! log_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        {
            ::defmt::warn!($($arg)*)
        }
        #[cfg(all(feature = "log", not(feature = "defmt")))]
        {
            ::log::warn!($($arg)*)
        }
        #[cfg(not(any(feature = "log", feature = "defmt")))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    };
}

macro_rules! log_error {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        {
            ::defmt::error!($($arg)*)
        }
        #[cfg(all(feature = "log", not(feature = "defmt")))]
        {
            ::log::error!($($arg)*)
        }
        #[cfg(not(any(feature = "log", feature = "defmt")))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    };
}
