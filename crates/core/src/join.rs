/// 用单个 ASCII 空格连接类名
///
/// 空列表得到空字符串，首尾不带空格
pub fn join_classes<S: AsRef<str>>(classes: &[S]) -> String {
    let capacity = classes
        .iter()
        .map(|class| class.as_ref().len() + 1)
        .sum::<usize>()
        .saturating_sub(1);
    let mut joined = String::with_capacity(capacity);

    for (i, class) in classes.iter().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        joined.push_str(class.as_ref());
    }

    joined
}
