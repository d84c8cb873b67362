/// Captures the current source location.
///
/// # Examples
///
/// ```
/// use callsite::{SourceLocation, call_site};
///
/// let location: SourceLocation = call_site!();
/// assert!(location.path().ends_with(".rs"));
/// assert!(location.line() > 0);
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::SourceLocation::new(file!(), line!())
    };
}

/// Evaluates an expression with its call site recorded as a frame.
///
/// Code running inside `expr` sees the invocation site as frame 1 when it
/// resolves call sites or counts frames.
///
/// # Examples
///
/// ```
/// use callsite::{depth, traced};
///
/// fn inner() -> usize {
///     depth()
/// }
///
/// assert_eq!(inner(), 0);
/// assert_eq!(traced!(inner()), 1);
/// assert_eq!(depth(), 0);
/// ```
#[macro_export]
macro_rules! traced {
    ($call:expr) => {{
        let _frame = $crate::FrameGuard::enter($crate::call_site!());
        $call
    }};
}

/// Records the current source location as a frame for the rest of the scope.
///
/// # Examples
///
/// ```
/// use callsite::{depth, frame};
///
/// {
///     let _frame = frame!();
///     assert_eq!(depth(), 1);
/// }
/// assert_eq!(depth(), 0);
/// ```
#[macro_export]
macro_rules! frame {
    () => {
        $crate::FrameGuard::enter($crate::call_site!())
    };
}
