/// Swap the ASCII `*` and `/` of a rendered solution for `×` and `÷`
pub fn to_display_symbols(solution: &str) -> String {
    solution.replace('*', "×").replace('/', "÷")
}
