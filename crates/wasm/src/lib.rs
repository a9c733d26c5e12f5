use serde::Deserialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use classjoin_core::{
    create_reporter, merge_class_names_with, Breakpoint, ClassArg, DiagnosticMode,
    DiagnosticSink, InvalidArg, MergeOptions, TypeTag,
};

// ── JS 侧导入 ─────────────────────────────────────────────────

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(message: &str);
}

#[wasm_bindgen(inline_js = "export function js_debugger() { debugger; }")]
extern "C" {
    fn js_debugger();
}

/// 输出到 `console.warn`
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn warn(&self, message: &str) {
        console_warn(message);
    }
}

/// 执行 JS `debugger` 语句，没有挂载调试器时等同于空操作
#[derive(Debug, Clone, Copy, Default)]
pub struct JsDebugger;

impl Breakpoint for JsDebugger {
    fn trigger(&self, _caller: &str, _entry: &InvalidArg) {
        js_debugger();
    }
}

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct JsMergeOptions {
    #[serde(default)]
    diagnostics: JsDiagnosticMode,
    #[serde(default)]
    caller: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
enum JsDiagnosticMode {
    #[default]
    Warn,
    Break,
    Quiet,
}

// ── 类型转换 ──────────────────────────────────────────────────

impl From<JsDiagnosticMode> for DiagnosticMode {
    fn from(m: JsDiagnosticMode) -> Self {
        match m {
            JsDiagnosticMode::Warn => DiagnosticMode::Warn,
            JsDiagnosticMode::Break => DiagnosticMode::Break,
            JsDiagnosticMode::Quiet => DiagnosticMode::Quiet,
        }
    }
}

impl From<JsMergeOptions> for MergeOptions {
    fn from(opts: JsMergeOptions) -> Self {
        MergeOptions {
            diagnostics: opts.diagnostics.into(),
            caller: opts.caller,
        }
    }
}

fn parse_options(options: JsValue) -> Result<JsMergeOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        Ok(JsMergeOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }
}

/// JS 值 → ClassArg
///
/// 字符串、`false`、`undefined` 直接判断；函数、symbol、bigint 只保留 `typeof`；
/// 其余值经 serde 转为 JSON 再走核心库的转换
fn to_class_arg(value: JsValue) -> ClassArg {
    if let Some(text) = value.as_string() {
        return ClassArg::Text(text);
    }
    if value.as_bool() == Some(false) {
        return ClassArg::Exclude;
    }
    if value.is_undefined() {
        return ClassArg::undefined();
    }
    if value.is_function() || value.is_symbol() || value.is_bigint() {
        let type_tag = value
            .js_typeof()
            .as_string()
            .map(|name| TypeTag::from_typeof(&name))
            .unwrap_or(TypeTag::Object);
        return ClassArg::other(format!("{:?}", value), type_tag);
    }

    match serde_wasm_bindgen::from_value::<Value>(value.clone()) {
        Ok(json) => ClassArg::from(json),
        Err(_) => ClassArg::other(format!("{:?}", value), TypeTag::Object),
    }
}

fn merge(caller: &str, mode: DiagnosticMode, args: Vec<JsValue>) -> String {
    let reporter = create_reporter(mode, ConsoleSink, JsDebugger);
    merge_class_names_with(caller, args.into_iter().map(to_class_arg), reporter.as_ref())
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 合并类名，被忽略的参数输出到 `console.warn`
///
/// @param args - 候选类名数组
/// @returns 用空格连接的类名
#[wasm_bindgen(js_name = "mergeClassNames")]
pub fn merge_class_names(args: Vec<JsValue>) -> String {
    merge("mergeClassNames", DiagnosticMode::Warn, args)
}

/// 同 `mergeClassNames`，并对每个被忽略的参数执行 `debugger`
///
/// 仅用于开发期排查
#[wasm_bindgen(js_name = "mergeClassNamesWithBreak")]
pub fn merge_class_names_with_break(args: Vec<JsValue>) -> String {
    merge("mergeClassNamesWithBreak", DiagnosticMode::Break, args)
}

/// 同 `mergeClassNames`，不输出任何诊断
#[wasm_bindgen(js_name = "mergeClassNamesQuiet")]
pub fn merge_class_names_quiet(args: Vec<JsValue>) -> String {
    merge("mergeClassNamesQuiet", DiagnosticMode::Quiet, args)
}

/// 按选项合并类名
///
/// @param args    - 候选类名数组
/// @param options - `{ diagnostics?: "warn" | "break" | "quiet", caller?: string }`，可选
/// @returns 用空格连接的类名
#[wasm_bindgen(js_name = "mergeClassNamesWith")]
pub fn merge_class_names_with_options(
    args: Vec<JsValue>,
    options: JsValue,
) -> Result<String, JsError> {
    let opts: MergeOptions = parse_options(options)?.into();
    let caller = opts.caller.as_deref().unwrap_or(match opts.diagnostics {
        DiagnosticMode::Warn => "mergeClassNames",
        DiagnosticMode::Break => "mergeClassNamesWithBreak",
        DiagnosticMode::Quiet => "mergeClassNamesQuiet",
    });
    Ok(merge(caller, opts.diagnostics, args))
}
