use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive prompt flow, turning Ctrl+C/Escape into `Ok(None)`.
///
/// Any other error is propagated unchanged.
pub fn run_cancellable<T, F>(f: F) -> Result<Option<T>>
where
    F: FnOnce() -> Result<T>,
{
    match f() {
        Ok(value) => Ok(Some(value)),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            eprintln!();
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_cancellable_ok() {
        let result = run_cancellable(|| Ok(42));
        assert!(matches!(result, Ok(Some(42))));
    }

    #[test]
    fn test_run_cancellable_canceled() {
        let result: Result<Option<()>> =
            run_cancellable(|| Err(InquireError::OperationCanceled.into()));
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_run_cancellable_interrupted() {
        let result: Result<Option<()>> =
            run_cancellable(|| Err(InquireError::OperationInterrupted.into()));
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_run_cancellable_other_error() {
        let result: Result<Option<()>> = run_cancellable(|| Err(anyhow::anyhow!("disk full")));
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_is_prompt_cancelled_other_error() {
        let err = InquireError::Custom("test".into());
        assert!(!is_prompt_cancelled(&err));
    }
}
