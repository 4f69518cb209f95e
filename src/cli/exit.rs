use crate::config::ConfigError;
use crate::input::InputError;
use crate::translation::TranslateError;

/// Maps a command failure to a sysexits-style exit code.
pub fn exit_code_for(err: &anyhow::Error) -> exitcode::ExitCode {
    if err.downcast_ref::<ConfigError>().is_some() {
        return exitcode::CONFIG;
    }

    if let Some(err) = err.downcast_ref::<TranslateError>() {
        return match err {
            TranslateError::BackendUnavailable(_) => exitcode::UNAVAILABLE,
            TranslateError::AuthenticationFailed { .. } => exitcode::NOPERM,
            TranslateError::Backend { .. } | TranslateError::MalformedResponse(_) => {
                exitcode::PROTOCOL
            }
            TranslateError::InvalidRequest(_) => exitcode::CONFIG,
            TranslateError::EmptyResponse => exitcode::SOFTWARE,
        };
    }

    if let Some(err) = err.downcast_ref::<InputError>() {
        return match err {
            InputError::EndOfInput => exitcode::NOINPUT,
            InputError::Empty => exitcode::USAGE,
            InputError::TooLarge | InputError::InvalidUtf8 => exitcode::DATAERR,
            InputError::Io(_) => exitcode::IOERR,
        };
    }

    exitcode::SOFTWARE
}
