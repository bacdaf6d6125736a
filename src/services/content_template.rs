//! 文件内容模板服务 - 业务能力层
//!
//! 根据文件扩展名给新建文件生成初始内容

/// C 源文件模板
const C_TEMPLATE: &str = "\nint main() {\n\treturn 0;\n}\n";
/// C 头文件模板
const H_TEMPLATE: &str = "\n// Write your interface here.\n";
/// Racket 文件模板
const RKT_TEMPLATE: &str = "#lang racket\n\n";

/// 根据文件名返回新文件的默认内容
///
/// 扩展名取最后一个 `.` 之后的部分；没有 `.` 时整个文件名被当作扩展名，
/// 因此名为 `c` 的文件同样得到 C 模板。
pub fn default_contents(filename: &str) -> String {
    let ext = filename.rsplit('.').next().unwrap_or(filename);
    match ext {
        "c" => C_TEMPLATE,
        "h" => H_TEMPLATE,
        "rkt" => RKT_TEMPLATE,
        _ => "",
    }
    .to_string()
}
