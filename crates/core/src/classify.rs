use crate::types::{ClassArg, Classification, InvalidArg};

/// 是否为条件排除标记（`false`）
pub fn is_exclusion_sentinel(arg: &ClassArg) -> bool {
    matches!(arg, ClassArg::Exclude)
}

pub fn is_text(arg: &ClassArg) -> bool {
    matches!(arg, ClassArg::Text(_))
}

/// trim 后是否为空
pub fn is_blank(text: &str) -> bool {
    trim_class(text).is_empty()
}

/// 去除首尾空白
///
/// 除 Unicode 空白外也去掉 BOM（U+FEFF），与 JS `String.prototype.trim` 保持一致
pub fn trim_class(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// 对单个参数分类
///
/// 规则顺序：
/// 1. `false` → 静默排除
/// 2. 非字符串 → 非法（记录类型标签）
/// 3. 字符串 trim 后为空 → 非法（空字符串）
/// 4. 其他 → 合法，携带 trim 后的类名
pub fn classify(arg: ClassArg) -> Classification {
    match arg {
        ClassArg::Exclude => Classification::Excluded,
        ClassArg::Other { value, type_tag } => {
            Classification::Invalid(InvalidArg::non_string(value, type_tag))
        }
        ClassArg::Text(text) => {
            let trimmed = trim_class(&text);
            if trimmed.is_empty() {
                Classification::Invalid(InvalidArg::empty_string(text))
            } else if trimmed.len() == text.len() {
                Classification::Valid(text)
            } else {
                Classification::Valid(trimmed.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InvalidReason, TypeTag};

    #[test]
    fn test_classify_false_is_excluded() {
        let result = classify(ClassArg::from(false));
        assert!(result.is_excluded());
        assert!(!result.is_text());
        assert_eq!(result.type_tag(), None);
    }

    #[test]
    fn test_classify_trims_text() {
        assert_eq!(
            classify(ClassArg::from("  app  ")),
            Classification::Valid("app".to_string())
        );
        assert_eq!(
            classify(ClassArg::from("\u{feff}grid\n")),
            Classification::Valid("grid".to_string())
        );
    }

    #[test]
    fn test_classify_keeps_inner_whitespace() {
        assert_eq!(
            classify(ClassArg::from(" p-4  m-2 ")),
            Classification::Valid("p-4  m-2".to_string())
        );
    }

    #[test]
    fn test_classify_empty_string() {
        let result = classify(ClassArg::from("   "));
        assert!(result.is_text());
        assert!(!result.is_non_empty_text());
        match result {
            Classification::Invalid(invalid) => {
                assert_eq!(invalid.value, "   ");
                assert_eq!(invalid.reason, InvalidReason::EmptyString);
            }
            other => panic!("expected invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_non_string() {
        let result = classify(ClassArg::null());
        assert!(!result.is_valid());
        assert!(!result.is_text());
        assert_eq!(result.type_tag(), Some(TypeTag::Null));

        let result = classify(ClassArg::from(true));
        assert_eq!(result.type_tag(), Some(TypeTag::Boolean));
    }

    #[test]
    fn test_predicates() {
        assert!(is_exclusion_sentinel(&ClassArg::Exclude));
        assert!(!is_exclusion_sentinel(&ClassArg::from(true)));
        assert!(is_text(&ClassArg::from("")));
        assert!(!is_text(&ClassArg::undefined()));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" a "));
    }
}
