use crate::types::{DiagnosticMode, InvalidArg};
use std::sync::{Mutex, PoisonError};

/// 诊断信息的输出通道
pub trait DiagnosticSink {
    fn warn(&self, message: &str);
}

/// 默认输出：`tracing` 的 warn 事件（target = "classjoin"）
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "classjoin", "{}", message);
    }
}

/// 收集到内存，便于测试断言
#[derive(Debug, Default)]
pub struct CollectSink {
    messages: Mutex<Vec<String>>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DiagnosticSink for CollectSink {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str),
{
    fn warn(&self, message: &str) {
        self(message)
    }
}

/// 调试断点
pub trait Breakpoint {
    fn trigger(&self, caller: &str, entry: &InvalidArg);
}

/// 原生调试断点：调用 [`debugger_trap`]，release 构建下不做任何事
#[derive(Debug, Clone, Copy, Default)]
pub struct DebuggerTrap;

impl Breakpoint for DebuggerTrap {
    fn trigger(&self, caller: &str, entry: &InvalidArg) {
        if cfg!(debug_assertions) {
            debugger_trap(caller, entry);
        }
    }
}

/// 断点挂载点
///
/// 在调试器里对该函数下断点即可逐个检查被忽略的参数：
///
/// ```text
/// (gdb) break classjoin_core::report::debugger_trap
/// (lldb) breakpoint set --name classjoin_core::report::debugger_trap
/// ```
#[inline(never)]
pub fn debugger_trap(caller: &str, entry: &InvalidArg) {
    tracing::debug!(target: "classjoin", caller, value = %entry.value, "debugger trap");
    std::hint::black_box(entry);
}

/// 诊断策略 trait
pub trait Reporter {
    fn report(&self, caller: &str, invalid: &[InvalidArg]);
}

/// 生成诊断文本：`[caller]` 之后每个非法参数一行
///
/// 没有非法参数时返回 `None`
pub fn format_report(caller: &str, invalid: &[InvalidArg]) -> Option<String> {
    if invalid.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(invalid.len() + 1);
    lines.push(format!("[{}]", caller));
    lines.extend(invalid.iter().map(|entry| entry.to_string()));

    Some(lines.join("\n"))
}

/// Warn 策略：只输出文本
#[derive(Debug, Default)]
pub struct WarnReporter<S = TracingSink> {
    sink: S,
}

impl<S: DiagnosticSink> WarnReporter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: DiagnosticSink> Reporter for WarnReporter<S> {
    fn report(&self, caller: &str, invalid: &[InvalidArg]) {
        if let Some(message) = format_report(caller, invalid) {
            self.sink.warn(&message);
        }
    }
}

/// Break 策略：输出文本，并对每个非法参数触发一次断点
///
/// 仅用于开发期排查，不应出现在生产路径上
#[derive(Debug, Default)]
pub struct BreakReporter<S = TracingSink, B = DebuggerTrap> {
    sink: S,
    trap: B,
}

impl<S: DiagnosticSink, B: Breakpoint> BreakReporter<S, B> {
    pub fn new(sink: S, trap: B) -> Self {
        Self { sink, trap }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn trap(&self) -> &B {
        &self.trap
    }
}

impl<S: DiagnosticSink, B: Breakpoint> Reporter for BreakReporter<S, B> {
    fn report(&self, caller: &str, invalid: &[InvalidArg]) {
        let Some(message) = format_report(caller, invalid) else {
            return;
        };
        self.sink.warn(&message);

        for entry in invalid {
            self.trap.trigger(caller, entry);
        }
    }
}

/// Quiet 策略：什么都不做
#[derive(Debug, Clone, Copy, Default)]
pub struct QuietReporter;

impl Reporter for QuietReporter {
    fn report(&self, _caller: &str, _invalid: &[InvalidArg]) {}
}

/// 根据 DiagnosticMode 创建对应的策略
pub fn create_reporter<S, B>(mode: DiagnosticMode, sink: S, trap: B) -> Box<dyn Reporter>
where
    S: DiagnosticSink + 'static,
    B: Breakpoint + 'static,
{
    match mode {
        DiagnosticMode::Warn => Box::new(WarnReporter::new(sink)),
        DiagnosticMode::Break => Box::new(BreakReporter::new(sink, trap)),
        DiagnosticMode::Quiet => Box::new(QuietReporter),
    }
}

/// 使用 tracing 输出与原生断点的默认策略
pub fn default_reporter(mode: DiagnosticMode) -> Box<dyn Reporter> {
    create_reporter(mode, TracingSink, DebuggerTrap)
}
