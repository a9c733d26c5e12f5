pub mod classify;
pub mod join;
pub mod merge;
pub mod partition;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use classify::{classify, is_blank, is_exclusion_sentinel, is_text};
pub use join::join_classes;
pub use merge::{
    merge_class_names, merge_class_names_quiet, merge_class_names_with,
    merge_class_names_with_break, merge_with_options,
};
pub use partition::{partition, Partition};
pub use report::{
    create_reporter, default_reporter, BreakReporter, Breakpoint, CollectSink, DebuggerTrap,
    DiagnosticSink, QuietReporter, Reporter, TracingSink, WarnReporter,
};
pub use types::{
    ClassArg, Classification, DiagnosticMode, InvalidArg, InvalidReason, MergeOptions, TypeTag,
};

/// 可变参数版本的 [`merge_class_names`]，参数可以是任意能转换为 [`ClassArg`] 的类型
///
/// ```
/// use classjoin_core::class_names;
///
/// let active = false;
/// let class_name = class_names!("btn", active.then_some("btn-active"), " px-4 ", false);
/// assert_eq!(class_name, "btn px-4");
/// ```
#[macro_export]
macro_rules! class_names {
    ($($arg:expr),* $(,)?) => {
        $crate::merge_class_names($crate::__class_args!($($arg),*))
    };
}

/// 可变参数版本的 [`merge_class_names_with_break`]
#[macro_export]
macro_rules! class_names_with_break {
    ($($arg:expr),* $(,)?) => {
        $crate::merge_class_names_with_break($crate::__class_args!($($arg),*))
    };
}

/// 可变参数版本的 [`merge_class_names_quiet`]
#[macro_export]
macro_rules! class_names_quiet {
    ($($arg:expr),* $(,)?) => {
        $crate::merge_class_names_quiet($crate::__class_args!($($arg),*))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __class_args {
    ($($arg:expr),*) => {{
        let args: ::std::vec::Vec<$crate::ClassArg> =
            ::std::vec![$($crate::ClassArg::from($arg)),*];
        args
    }};
}
