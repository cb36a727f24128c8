use std::{any::Any, fmt};

use colored::Colorize;

use crate::constants::CLI_ERROR_BACKTRACE;

pub trait CliErrorTrait: std::fmt::Debug + Send + Sync + 'static {
    /// Name of the concrete error type, as given to `define_cli_error!`.
    fn kind(&self) -> &'static str;
    fn details(&self) -> CliErrorDetails<'_>;
    fn as_any(&self) -> &dyn Any;
}

pub type CliError = Box<dyn CliErrorTrait>;

#[derive(Debug)]
pub struct CliErrorDetails<'a> {
    pub context: &'a String,
    pub message: &'a String,
    pub debug: Option<&'a String>,
}

impl dyn CliErrorTrait {
    pub fn is<K: CliErrorTrait>(&self) -> bool {
        self.as_any().downcast_ref::<K>().is_some()
    }

    pub fn message(&self) -> &str {
        self.details().message
    }
}

impl fmt::Display for dyn CliErrorTrait {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let details = self.details();
        write!(f, "{}", details.message.bold())?;
        if let Some(debug) = details.debug {
            write!(f, "\n{}", debug.dimmed())?;
        }
        if std::env::var_os(CLI_ERROR_BACKTRACE).is_some() {
            write!(f, "\n{}", details.context)?;
        }
        Ok(())
    }
}

impl std::error::Error for dyn CliErrorTrait {}

pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or_default()
}

// Definining custom CLI errors.
// --------------------------------------------------

#[macro_export]
macro_rules! define_cli_error {
    ($name:ident, $msg:expr) => {
        define_cli_error!($name, $msg, {});
    };
    ($name:ident, $msg:expr, { $($arg:ident : $argtype:ty),* $(,)? }) => {
        #[derive(Debug)]
        pub struct $name {
            context: String,
            message: String,
            debug: Option<String>,
        }

        impl $name {
            #[allow(dead_code)]
            #[track_caller]
            pub fn new($($arg: $argtype),*) -> $crate::CliError {
                Box::new($name {
                    context: std::backtrace::Backtrace::force_capture().to_string(),
                    message: format!($msg, $($arg = $arg),*),
                    debug: None,
                })
            }

            #[allow(dead_code)]
            #[track_caller]
            pub fn with_debug<D>(
                $($arg: $argtype,)*
                debug: &D,
            ) -> $crate::CliError where D: std::fmt::Debug {
                Box::new($name {
                    context: std::backtrace::Backtrace::force_capture().to_string(),
                    message: format!($msg, $($arg = $arg),*),
                    debug: Some(format!("{:?}", debug)),
                })
            }
        }

        impl $crate::CliErrorTrait for $name {
            fn kind(&self) -> &'static str {
                stringify!($name)
            }

            fn details(&self) -> $crate::CliErrorDetails<'_> {
                $crate::CliErrorDetails {
                    context: &self.context,
                    message: &self.message,
                    debug: self.debug.as_ref(),
                }
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    };
}
