use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// 输入：单个候选类名参数
///
/// 可变参数在边界处统一收敛为三类：
/// - `Exclude`：布尔 `false`，条件排除，不算错误
/// - `Text`：候选类名（尚未 trim）
/// - `Other`：其他任意值，保留渲染后的值和类型标签用于诊断
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassArg {
    Exclude,
    Text(String),
    Other { value: String, type_tag: TypeTag },
}

impl ClassArg {
    pub fn text(value: impl Into<String>) -> Self {
        ClassArg::Text(value.into())
    }

    pub fn other(value: impl Into<String>, type_tag: TypeTag) -> Self {
        ClassArg::Other {
            value: value.into(),
            type_tag,
        }
    }

    /// JS 的 `null`
    pub fn null() -> Self {
        Self::other("null", TypeTag::Null)
    }

    /// JS 的 `undefined`
    pub fn undefined() -> Self {
        Self::other("undefined", TypeTag::Undefined)
    }
}

impl From<&str> for ClassArg {
    fn from(value: &str) -> Self {
        ClassArg::Text(value.to_string())
    }
}

impl From<String> for ClassArg {
    fn from(value: String) -> Self {
        ClassArg::Text(value)
    }
}

impl From<&String> for ClassArg {
    fn from(value: &String) -> Self {
        ClassArg::Text(value.clone())
    }
}

impl From<bool> for ClassArg {
    fn from(value: bool) -> Self {
        if value {
            Self::other("true", TypeTag::Boolean)
        } else {
            ClassArg::Exclude
        }
    }
}

/// `None` 等价于 `false`：`cond.then_some("class")` 是 Rust 里的条件类名写法
impl<T: Into<ClassArg>> From<Option<T>> for ClassArg {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => ClassArg::Exclude,
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ClassArg {
                fn from(value: $ty) -> Self {
                    Self::other(value.to_string(), TypeTag::Number)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f32> for ClassArg {
    fn from(value: f32) -> Self {
        Self::other(render_f64(f64::from(value)), TypeTag::Number)
    }
}

impl From<f64> for ClassArg {
    fn from(value: f64) -> Self {
        Self::other(render_f64(value), TypeTag::Number)
    }
}

/// 动态输入（例如来自 JSON 或 JS 的值）
impl From<Value> for ClassArg {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => ClassArg::Text(text),
            Value::Bool(flag) => flag.into(),
            Value::Null => Self::null(),
            other => {
                let type_tag = TypeTag::of_json(&other);
                Self::other(render_js(&other), type_tag)
            }
        }
    }
}

/// 非字符串参数的运行时类型标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Undefined,
    Null,
    Boolean,
    Number,
    BigInt,
    Array,
    Object,
    Function,
    Symbol,
}

impl TypeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Undefined => "undefined",
            TypeTag::Null => "null",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::BigInt => "bigint",
            TypeTag::Array => "array",
            TypeTag::Object => "object",
            TypeTag::Function => "function",
            TypeTag::Symbol => "symbol",
        }
    }

    /// 由 JS `typeof` 的结果得到类型标签，无法识别的一律视为 object
    pub fn from_typeof(name: &str) -> Self {
        match name {
            "undefined" => TypeTag::Undefined,
            "boolean" => TypeTag::Boolean,
            "number" => TypeTag::Number,
            "bigint" => TypeTag::BigInt,
            "function" => TypeTag::Function,
            "symbol" => TypeTag::Symbol,
            _ => TypeTag::Object,
        }
    }

    fn of_json(value: &Value) -> Self {
        match value {
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::Array(_) => TypeTag::Array,
            // 字符串不会走到这里
            Value::String(_) | Value::Object(_) => TypeTag::Object,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 按 JS `String(value)` 的方式渲染，诊断信息里展示给用户
fn render_js(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => match number.as_f64() {
            Some(float) if number.is_f64() => render_f64(float),
            _ => number.to_string(),
        },
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => render_js(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn render_f64(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else {
        // f64 的 Display 对整数值不带小数点（1.0 → "1"），与 JS 一致
        format!("{}", value)
    }
}

/// 单个参数的分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// `false`，静默排除
    Excluded,
    /// 合法类名（已 trim）
    Valid(String),
    /// 非法参数
    Invalid(InvalidArg),
}

impl Classification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Classification::Valid(_))
    }

    pub fn is_excluded(&self) -> bool {
        matches!(self, Classification::Excluded)
    }

    /// 参数本身是否为字符串（不论 trim 后是否为空）
    pub fn is_text(&self) -> bool {
        match self {
            Classification::Valid(_) => true,
            Classification::Invalid(invalid) => invalid.reason == InvalidReason::EmptyString,
            Classification::Excluded => false,
        }
    }

    /// 字符串参数 trim 后是否非空
    pub fn is_non_empty_text(&self) -> bool {
        self.is_valid()
    }

    /// 非字符串参数的类型标签
    pub fn type_tag(&self) -> Option<TypeTag> {
        match self {
            Classification::Invalid(InvalidArg {
                reason: InvalidReason::NonString { type_tag },
                ..
            }) => Some(*type_tag),
            _ => None,
        }
    }
}

/// 被忽略的参数：原始值 + 原因
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidArg {
    /// 原始值（字符串保持未 trim 的样子）
    pub value: String,
    pub reason: InvalidReason,
}

impl InvalidArg {
    pub fn non_string(value: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            value: value.into(),
            reason: InvalidReason::NonString { type_tag },
        }
    }

    pub fn empty_string(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            reason: InvalidReason::EmptyString,
        }
    }
}

impl fmt::Display for InvalidArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            InvalidReason::NonString { type_tag } => {
                write!(f, "Ignored non-string `{}` (`{}`)", self.value, type_tag)
            }
            InvalidReason::EmptyString => write!(f, "Ignored empty string `\"{}\"`", self.value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum InvalidReason {
    #[serde(rename_all = "camelCase")]
    NonString { type_tag: TypeTag },
    EmptyString,
}

/// 诊断策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticMode {
    /// 只输出警告
    #[default]
    Warn,
    /// 输出警告，并对每个非法参数触发调试断点（仅限开发期）
    Break,
    /// 不输出任何诊断
    Quiet,
}

/// 合并选项
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOptions {
    #[serde(default)]
    pub diagnostics: DiagnosticMode,
    /// 诊断信息中的调用方标签，默认取入口函数名
    #[serde(default)]
    pub caller: Option<String>,
}

impl MergeOptions {
    pub fn new(diagnostics: DiagnosticMode) -> Self {
        Self {
            diagnostics,
            caller: None,
        }
    }

    pub fn with_caller(mut self, caller: impl Into<String>) -> Self {
        self.caller = Some(caller.into());
        self
    }

    pub fn caller_tag(&self) -> &str {
        self.caller.as_deref().unwrap_or(match self.diagnostics {
            DiagnosticMode::Warn => crate::merge::MERGE_CALLER,
            DiagnosticMode::Break => crate::merge::MERGE_WITH_BREAK_CALLER,
            DiagnosticMode::Quiet => crate::merge::MERGE_QUIET_CALLER,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bool_conversion() {
        assert_eq!(ClassArg::from(false), ClassArg::Exclude);
        assert_eq!(
            ClassArg::from(true),
            ClassArg::other("true", TypeTag::Boolean)
        );
    }

    #[test]
    fn test_option_none_is_exclude() {
        assert_eq!(ClassArg::from(None::<&str>), ClassArg::Exclude);
        assert_eq!(ClassArg::from(Some("p-4")), ClassArg::text("p-4"));
    }

    #[test]
    fn test_json_conversion() {
        assert_eq!(ClassArg::from(json!("p-4")), ClassArg::text("p-4"));
        assert_eq!(ClassArg::from(json!(null)), ClassArg::null());
        assert_eq!(ClassArg::from(json!(false)), ClassArg::Exclude);
        assert_eq!(
            ClassArg::from(json!([" test ", null, 2])),
            ClassArg::other(" test ,,2", TypeTag::Array)
        );
        assert_eq!(
            ClassArg::from(json!({ "key": "value" })),
            ClassArg::other("[object Object]", TypeTag::Object)
        );
    }

    #[test]
    fn test_number_rendering() {
        assert_eq!(ClassArg::from(42_i32), ClassArg::other("42", TypeTag::Number));
        assert_eq!(ClassArg::from(1.0_f64), ClassArg::other("1", TypeTag::Number));
        assert_eq!(ClassArg::from(1.5_f64), ClassArg::other("1.5", TypeTag::Number));
        assert_eq!(
            ClassArg::from(f64::NEG_INFINITY),
            ClassArg::other("-Infinity", TypeTag::Number)
        );
        assert_eq!(ClassArg::from(json!(2.0)), ClassArg::other("2", TypeTag::Number));
    }

    #[test]
    fn test_type_tag_from_typeof() {
        assert_eq!(TypeTag::from_typeof("symbol"), TypeTag::Symbol);
        assert_eq!(TypeTag::from_typeof("bigint"), TypeTag::BigInt);
        assert_eq!(TypeTag::from_typeof("object"), TypeTag::Object);
        assert_eq!(TypeTag::BigInt.to_string(), "bigint");
    }

    #[test]
    fn test_invalid_arg_display() {
        let non_string = InvalidArg::non_string("undefined", TypeTag::Undefined);
        assert_eq!(
            non_string.to_string(),
            "Ignored non-string `undefined` (`undefined`)"
        );

        let empty = InvalidArg::empty_string("   ");
        assert_eq!(empty.to_string(), "Ignored empty string `\"   \"`");
    }

    #[test]
    fn test_merge_options_deserialize() {
        let options: MergeOptions =
            serde_json::from_value(json!({ "diagnostics": "break" })).unwrap();
        assert_eq!(options.diagnostics, DiagnosticMode::Break);
        assert_eq!(options.caller_tag(), "merge_class_names_with_break");

        let options: MergeOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(options, MergeOptions::default());
        assert_eq!(options.caller_tag(), "merge_class_names");
    }

    #[test]
    fn test_invalid_reason_serialize() {
        let value = serde_json::to_value(InvalidArg::non_string("null", TypeTag::Null)).unwrap();
        assert_eq!(
            value,
            json!({ "value": "null", "reason": { "kind": "nonString", "typeTag": "null" } })
        );
    }
}
