pub mod peek;

/// Assert a YAML snapshot, attaching the source text it was produced from
/// as snapshot info.
#[macro_export]
macro_rules! assert_yaml_snapshot_with_source {
    ($source:expr => $output:expr, @$snapshot:literal) => {{
        insta::with_settings!({
            info => &$source,
            omit_expression => true,
        }, {
            insta::assert_yaml_snapshot!($output, @$snapshot);
        })
    }};
}
