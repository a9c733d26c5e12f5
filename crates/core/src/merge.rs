use crate::partition::partition;
use crate::report::{
    default_reporter, BreakReporter, DebuggerTrap, QuietReporter, Reporter, TracingSink,
    WarnReporter,
};
use crate::types::{ClassArg, MergeOptions};

pub const MERGE_CALLER: &str = "merge_class_names";
pub const MERGE_WITH_BREAK_CALLER: &str = "merge_class_names_with_break";
pub const MERGE_QUIET_CALLER: &str = "merge_class_names_quiet";

/// 合并类名
///
/// 功能：
/// - `false` 静默排除
/// - 字符串去除首尾空白，空字符串被忽略
/// - 其他类型被忽略
/// - 被忽略的参数通过 `tracing` 输出警告，不影响返回值
/// - 合法类名保持原有顺序，用单个空格连接
///
/// # 示例
///
/// ```
/// use classjoin_core::{merge_class_names, ClassArg};
///
/// let class_name = merge_class_names([
///     ClassArg::from("  app "),
///     ClassArg::from(false),
///     ClassArg::from("min-h-dvh"),
///     ClassArg::from(""),
/// ]);
/// assert_eq!(class_name, "app min-h-dvh");
/// ```
pub fn merge_class_names<I, A>(args: I) -> String
where
    I: IntoIterator<Item = A>,
    A: Into<ClassArg>,
{
    merge_class_names_with(MERGE_CALLER, args, &WarnReporter::new(TracingSink))
}

/// 与 [`merge_class_names`] 返回值相同，额外对每个被忽略的参数触发调试断点
///
/// 仅用于开发期排查
pub fn merge_class_names_with_break<I, A>(args: I) -> String
where
    I: IntoIterator<Item = A>,
    A: Into<ClassArg>,
{
    let reporter = BreakReporter::new(TracingSink, DebuggerTrap);
    merge_class_names_with(MERGE_WITH_BREAK_CALLER, args, &reporter)
}

/// 与 [`merge_class_names`] 返回值相同，不输出任何诊断
pub fn merge_class_names_quiet<I, A>(args: I) -> String
where
    I: IntoIterator<Item = A>,
    A: Into<ClassArg>,
{
    merge_class_names_with(MERGE_QUIET_CALLER, args, &QuietReporter)
}

/// 使用指定诊断策略合并类名
///
/// # 参数
///
/// * `caller` - 诊断信息中的调用方标签
/// * `args` - 候选类名参数
/// * `reporter` - 诊断策略
pub fn merge_class_names_with<I, A, R>(caller: &str, args: I, reporter: &R) -> String
where
    I: IntoIterator<Item = A>,
    A: Into<ClassArg>,
    R: Reporter + ?Sized,
{
    let partition = partition(args);
    reporter.report(caller, &partition.invalid);
    partition.join()
}

/// 按选项合并类名
pub fn merge_with_options<I, A>(args: I, options: &MergeOptions) -> String
where
    I: IntoIterator<Item = A>,
    A: Into<ClassArg>,
{
    let reporter = default_reporter(options.diagnostics);
    merge_class_names_with(options.caller_tag(), args, reporter.as_ref())
}
