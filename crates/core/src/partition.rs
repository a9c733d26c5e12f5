use crate::classify::classify;
use crate::join::join_classes;
use crate::types::{ClassArg, Classification, InvalidArg};
use serde::Serialize;

/// 分区结果
///
/// `valid` 与 `invalid` 都保持参数原本的相对顺序
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Partition {
    /// 合法类名（已 trim）
    pub valid: Vec<String>,
    /// 被忽略的参数
    pub invalid: Vec<InvalidArg>,
    /// 被 `false` 静默排除的参数个数
    pub excluded: usize,
}

impl Partition {
    /// 用单个空格连接合法类名
    pub fn join(&self) -> String {
        join_classes(&self.valid)
    }

    /// 没有需要报告的非法参数
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// 对全部参数分类并分区
pub fn partition<I, A>(args: I) -> Partition
where
    I: IntoIterator<Item = A>,
    A: Into<ClassArg>,
{
    let mut result = Partition::default();

    for arg in args {
        match classify(arg.into()) {
            Classification::Valid(class) => result.valid.push(class),
            Classification::Invalid(invalid) => result.invalid.push(invalid),
            Classification::Excluded => result.excluded += 1,
        }
    }

    result
}
