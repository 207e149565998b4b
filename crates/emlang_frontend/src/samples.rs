pub const FUNCTION: &str = "fn main() int {\n\treturn 1;\n}\n";

pub const MAIN_AND_HELPER: &str = "\
fn helper() int {
    return 123;
}

fn main() {
    foo = helper();
}
";
